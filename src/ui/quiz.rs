use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::{PointerTarget, QuizView};
use crate::models::Phase;

use super::{render_button, render_controls, render_mascot, HitMap};

const STREAK_FLAME_MIN: usize = 2;

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView<'_>, hits: &mut HitMap) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(9),
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_title(frame, chunks[0], view.title);
    render_progress(frame, chunks[1], view);
    render_status(frame, chunks[2], view);
    render_prompt(frame, chunks[3], &view.question.prompt);
    render_options(frame, chunks[4], view, hits);

    if view.phase == Phase::Feedback {
        render_feedback(frame, chunks[5], view);
        let label = if view.is_last_question() {
            "Finish"
        } else {
            "Next"
        };
        let button = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(20),
            Constraint::Fill(1),
        ])
        .split(chunks[6]);
        render_button(frame, button[1], label, PointerTarget::Next, hits);
    }

    render_mascot(frame, chunks[7], view);

    let hint = match view.phase {
        Phase::Feedback => "enter continue  ·  q quit",
        _ => "1-4 highlight  ·  ↑/↓ move  ·  enter confirm  ·  q quit",
    };
    render_controls(frame, chunks[8], hint);
}

fn render_title(frame: &mut Frame, area: Rect, title: &str) {
    let widget = Paragraph::new(title)
        .alignment(Alignment::Center)
        .fg(Color::LightMagenta)
        .bold();
    frame.render_widget(widget, area);
}

fn render_progress(frame: &mut Frame, area: Rect, view: &QuizView<'_>) {
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::Black))
        .ratio(view.progress.clamp(0.0, 1.0))
        .label(format!("{}/{} answered", view.answers.len(), view.total));
    frame.render_widget(widget, area);
}

fn render_status(frame: &mut Frame, area: Rect, view: &QuizView<'_>) {
    let mut spans = vec![
        Span::styled(
            format!("Question {} of {}", view.question_number(), view.total),
            Style::default().fg(Color::Gray),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Score {}", view.score),
            Style::default().fg(Color::Green),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Streak {}", view.current_streak),
            Style::default().fg(Color::Yellow),
        ),
    ];
    if view.current_streak >= STREAK_FLAME_MIN {
        spans.push(Span::raw(" 🔥"));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, view: &QuizView<'_>, hits: &mut HitMap) {
    let options = &view.question.options;
    let rows = Layout::vertical(vec![Constraint::Length(2); options.len()]).split(area);

    for (index, (option, row)) in options.iter().zip(rows.iter()).enumerate() {
        let (marker, style) = option_style(view, index);
        let line = Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.as_str(), style),
        ]);
        frame.render_widget(Paragraph::new(line), *row);

        if view.phase == Phase::Answering {
            hits.push(*row, PointerTarget::Option(index));
        }
    }
}

fn option_style(view: &QuizView<'_>, index: usize) -> (&'static str, Style) {
    match view.phase {
        Phase::Feedback => {
            if index == view.question.correct_option_index {
                ("✓", Style::default().fg(Color::Green).bold())
            } else if view.selected == Some(index) {
                ("✗", Style::default().fg(Color::Red).bold())
            } else {
                (" ", Style::default().fg(Color::DarkGray))
            }
        }
        _ => {
            if view.highlighted == Some(index) {
                (">", Style::default().fg(Color::Cyan).bold())
            } else {
                (" ", Style::default().fg(Color::Gray))
            }
        }
    }
}

fn render_feedback(frame: &mut Frame, area: Rect, view: &QuizView<'_>) {
    let correct = view.answer.is_some_and(|answer| answer.is_correct);
    let (banner, color) = if correct {
        ("正解！ Correct!", Color::Green)
    } else {
        ("不正解 Incorrect", Color::Red)
    };

    let mut lines = vec![Line::from(Span::styled(
        banner,
        Style::default().fg(color).bold(),
    ))];
    if !correct {
        lines.push(Line::from(vec![
            Span::styled("Answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(view.question.correct_option(), Style::default().fg(Color::Green)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        view.question.explanation.as_str(),
        Style::default().fg(Color::Gray),
    )));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::LEFT)
            .border_style(color)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use crate::app::{App, PointerTarget};
    use crate::data::Catalog;
    use crate::models::BadgePolicy;
    use crate::ui::test_support::draw;

    #[test]
    fn test_answering_screen_lists_options() {
        let app = App::new(Catalog::sample(), BadgePolicy::default());
        let (text, hits) = draw(&app.view());
        assert!(text.contains("Question 1 of 5"));
        assert!(text.contains("1. Good morning"));
        assert!(text.contains("4. Goodbye"));
        assert!(!text.contains("Next"));

        let option_targets = (0..40)
            .filter_map(|row| hits.target_at(5, row))
            .filter(|target| matches!(target, PointerTarget::Option(_)))
            .count();
        assert!(option_targets >= 4);
    }

    #[test]
    fn test_feedback_screen_shows_explanation_and_next() {
        let mut app = App::new(Catalog::sample(), BadgePolicy::default());
        app.click(PointerTarget::Option(0));
        let (text, hits) = draw(&app.view());
        assert!(text.contains("Incorrect"));
        assert!(text.contains("Answer: Hello/Good afternoon"));
        assert!(text.contains("Next"));

        let next = (0..40)
            .flat_map(|row| (0..90).map(move |column| (column, row)))
            .find_map(|(column, row)| hits.target_at(column, row));
        assert_eq!(next, Some(PointerTarget::Next));
    }
}
