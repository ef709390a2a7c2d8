use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{PointerTarget, QuizView};
use crate::models::BadgeTier;

use super::{render_button, render_controls, render_mascot, HitMap};

pub fn render(frame: &mut Frame, area: Rect, view: &QuizView<'_>, hits: &mut HitMap) {
    let rows = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(60),
        Constraint::Fill(1),
    ]);
    let card = columns.split(rows[1])[1];
    let button = columns.split(rows[2])[1];

    render_card(frame, card, view);
    render_button(
        frame,
        button,
        "詳細を見る View Detailed Results",
        PointerTarget::ViewResults,
        hits,
    );
    render_mascot(frame, rows[4], view);
    render_controls(frame, rows[5], "enter view results  ·  q quit");
}

fn badge_color(tier: BadgeTier) -> Color {
    match tier {
        BadgeTier::Gold => Color::Yellow,
        BadgeTier::Silver => Color::Gray,
        BadgeTier::Bronze => Color::Rgb(205, 127, 50),
    }
}

fn badge_medal(tier: BadgeTier) -> &'static str {
    match tier {
        BadgeTier::Gold => "🥇",
        BadgeTier::Silver => "🥈",
        BadgeTier::Bronze => "🥉",
    }
}

fn render_card(frame: &mut Frame, area: Rect, view: &QuizView<'_>) {
    let color = badge_color(view.badge);
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "おめでとうございます！ Congratulations!",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(badge_medal(view.badge)),
        Line::from(Span::styled(
            view.badge.title(),
            Style::default().fg(color).bold(),
        )),
        Line::from(view.badge.message().fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} / {}", view.score, view.total),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from("正解数 Questions Correct".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(color),
    );
    frame.render_widget(widget, area);
}
