//! Keyboard decoding and routing.
//!
//! Raw crossterm key events are decoded into a closed set of
//! [`InputAction`]s. [`route`] then maps an action to a session
//! [`Command`] based only on the current phase and state. A `None` route
//! means the key is not bound in this phase and is left alone.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::data::Catalog;
use crate::models::{Direction, Phase};
use crate::session::SessionState;

/// Logical input produced by the decoding layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// A number key, 1-based as printed on the keyboard.
    Digit(u8),
    Up,
    Down,
    Confirm,
}

/// A session operation selected by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetHighlighted(usize),
    MoveHighlight(Direction),
    ConfirmAnswer(usize),
    Advance,
    AcknowledgeBadge,
}

pub fn decode(key: KeyEvent) -> Option<InputAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| InputAction::Digit(d as u8)),
        KeyCode::Up | KeyCode::Char('k') => Some(InputAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(InputAction::Down),
        KeyCode::Enter => Some(InputAction::Confirm),
        _ => None,
    }
}

pub fn route(state: &SessionState, catalog: &Catalog, action: InputAction) -> Option<Command> {
    match state.phase() {
        Phase::Answering => route_answering(state, catalog, action),
        Phase::Feedback => match action {
            InputAction::Confirm => Some(Command::Advance),
            _ => None,
        },
        Phase::BadgeAward => match action {
            InputAction::Confirm => Some(Command::AcknowledgeBadge),
            _ => None,
        },
        Phase::Summary => None,
    }
}

fn route_answering(
    state: &SessionState,
    catalog: &Catalog,
    action: InputAction,
) -> Option<Command> {
    let option_count = state.current_question(catalog).option_count();

    match action {
        InputAction::Digit(digit) => {
            let digit = usize::from(digit);
            (1..=option_count)
                .contains(&digit)
                .then(|| Command::SetHighlighted(digit - 1))
        }
        InputAction::Up => Some(Command::MoveHighlight(Direction::Up)),
        InputAction::Down => Some(Command::MoveHighlight(Direction::Down)),
        InputAction::Confirm => state.highlighted_option().map(Command::ConfirmAnswer),
    }
}

/// Key bindings installed for a single phase.
///
/// The controller replaces the scope on every phase change; a scope whose
/// phase no longer matches the session must not dispatch.
#[derive(Debug, PartialEq, Eq)]
pub struct KeyScope {
    phase: Phase,
}

impl KeyScope {
    pub fn install(phase: Phase) -> Self {
        tracing::debug!(phase = phase.name(), "key scope installed");
        Self { phase }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_current(&self, state: &SessionState) -> bool {
        self.phase == state.phase()
    }

    pub fn dispatch(
        &self,
        state: &SessionState,
        catalog: &Catalog,
        action: InputAction,
    ) -> Option<Command> {
        if !self.is_current(state) {
            tracing::trace!(
                scope = self.phase.name(),
                phase = state.phase().name(),
                "stale key scope"
            );
            return None;
        }
        route(state, catalog, action)
    }
}

impl Drop for KeyScope {
    fn drop(&mut self) {
        tracing::trace!(phase = self.phase.name(), "key scope removed");
    }
}
