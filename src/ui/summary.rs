use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{PointerTarget, QuizView};
use crate::models::{AnswerRecord, GradeTier, Question};

use super::{render_button, render_controls, render_mascot, HitMap};

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView<'_>, hits: &mut HitMap) {
    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_score_summary(frame, chunks[0], view);
    render_review(frame, chunks[1], view);

    let button = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(24),
        Constraint::Fill(1),
    ])
    .split(chunks[2]);
    render_button(frame, button[1], "もう一度 Restart", PointerTarget::Restart, hits);

    render_mascot(frame, chunks[3], view);
    render_controls(frame, chunks[4], "wheel scroll  ·  click restart  ·  q quit");
}

fn grade_color(grade: GradeTier) -> Color {
    match grade {
        GradeTier::Outstanding => Color::Green,
        GradeTier::Great => Color::Cyan,
        GradeTier::Good => Color::Yellow,
        GradeTier::KeepPracticing => Color::Magenta,
    }
}

fn render_score_summary(frame: &mut Frame, area: Rect, view: &QuizView<'_>) {
    let color = grade_color(view.grade);

    let mut stats = vec![
        Span::styled(
            format!("{}%", view.percentage),
            Style::default().fg(color).bold(),
        ),
        Span::styled("  Score  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{} / {}", view.score, view.total),
            Style::default().fg(Color::White).bold(),
        ),
    ];
    if view.max_streak > 0 {
        stats.push(Span::styled("  Best Streak  ", Style::default().fg(Color::DarkGray)));
        stats.push(Span::styled(
            format!("{} 🔥", view.max_streak),
            Style::default().fg(Color::LightRed).bold(),
        ));
    }

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{}  {}", view.grade.text(), view.grade.japanese()),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(stats),
        Line::from(""),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_review(frame: &mut Frame, area: Rect, view: &QuizView<'_>) {
    let mut lines: Vec<Line> = Vec::with_capacity(view.answers.len() * 5);

    for (number, answer) in view.answers.iter().enumerate() {
        let Some(question) = find_question(view.questions, answer.question_id) else {
            continue;
        };

        let (symbol, color) = if answer.is_correct {
            ("✓", Color::Green)
        } else {
            ("✗", Color::Red)
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color).bold()),
            Span::styled(
                format!("{:2}. ", number + 1),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(question.prompt.as_str(), Style::default().fg(Color::White)),
        ]));

        let chosen = question
            .options
            .get(answer.selected_option_index)
            .map(String::as_str)
            .unwrap_or("?");
        lines.push(Line::from(vec![
            Span::styled("     Your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(chosen, Style::default().fg(color)),
        ]));
        if !answer.is_correct {
            lines.push(Line::from(vec![
                Span::styled("     Correct: ", Style::default().fg(Color::DarkGray)),
                Span::styled(question.correct_option(), Style::default().fg(Color::Green)),
            ]));
        }
        lines.push(Line::from(Span::styled(
            format!("     {}", question.explanation),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((view.summary_scroll.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(widget, area);
}

/// Unwrapped line count of one review entry as laid out by `render_review`.
fn entry_height(answer: &AnswerRecord) -> usize {
    if answer.is_correct { 4 } else { 5 }
}

/// Furthest scroll that still keeps the last entry on screen.
pub fn max_review_scroll(answers: &[AnswerRecord]) -> usize {
    answers
        .split_last()
        .map(|(_, earlier)| earlier.iter().map(entry_height).sum())
        .unwrap_or(0)
}

fn find_question(questions: &[Question], id: u32) -> Option<&Question> {
    questions.iter().find(|question| question.id == id)
}
