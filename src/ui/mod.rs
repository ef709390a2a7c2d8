mod badge;
mod mascot;
mod quiz;
mod summary;

use ratatui::{
    layout::Position,
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::app::{PointerTarget, QuizView};
use crate::models::Phase;

use mascot::cue;

pub(crate) use summary::max_review_scroll;

/// Screen regions that react to a mouse click, collected while drawing.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    regions: Vec<(Rect, PointerTarget)>,
}

impl HitMap {
    pub fn push(&mut self, area: Rect, target: PointerTarget) {
        self.regions.push((area, target));
    }

    pub fn target_at(&self, column: u16, row: u16) -> Option<PointerTarget> {
        let position = Position::new(column, row);
        self.regions
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, target)| *target)
    }
}

pub fn render(frame: &mut Frame, view: &QuizView<'_>) -> HitMap {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let mut hits = HitMap::default();
    match view.phase {
        Phase::Answering | Phase::Feedback => quiz::render(frame, area, view, &mut hits),
        Phase::BadgeAward => badge::render(frame, area, view, &mut hits),
        Phase::Summary => summary::render(frame, area, view, &mut hits),
    }
    hits
}

fn render_button(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    target: PointerTarget,
    hits: &mut HitMap,
) {
    let widget = Paragraph::new(Line::from(label.bold()))
        .alignment(Alignment::Center)
        .fg(Color::Magenta)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Color::Magenta),
        );
    frame.render_widget(widget, area);
    hits.push(area, target);
}

fn render_mascot(frame: &mut Frame, area: Rect, view: &QuizView<'_>) {
    let cue = cue(view);
    let lines = vec![
        Line::from(Span::styled(cue.japanese, Style::default().fg(Color::LightRed))),
        Line::from(Span::styled(cue.english, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Right), area);
}

fn render_controls(frame: &mut Frame, area: Rect, hint: &str) {
    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
