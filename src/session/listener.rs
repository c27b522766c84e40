//! Listener hooks for the presentation shell.
//!
//! A shell registers listeners on the session to react to possession
//! changes and drive resets (e.g. to show the opponent's "thinking" delay)
//! without polling snapshots.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::event::GameEvent;
use crate::core::field::FieldState;
use crate::core::side::Side;

/// Callbacks fired after each resolved snap, in event order.
///
/// Every method has an empty default so listeners implement only what
/// they need.
pub trait GameListener {
    /// Any event.
    fn on_event(&mut self, _event: &GameEvent) {}

    /// The ball changed hands.
    fn on_possession_change(&mut self, _to: Side) {}

    /// A new drive started at `field`.
    fn on_drive_reset(&mut self, _field: &FieldState) {}

    /// A play-by-play line was appended to the log.
    fn on_narrative(&mut self, _line: &str) {}
}

/// Shared listener: the session holds one handle, the shell keeps another.
impl<L: GameListener> GameListener for Rc<RefCell<L>> {
    fn on_event(&mut self, event: &GameEvent) {
        self.borrow_mut().on_event(event);
    }

    fn on_possession_change(&mut self, to: Side) {
        self.borrow_mut().on_possession_change(to);
    }

    fn on_drive_reset(&mut self, field: &FieldState) {
        self.borrow_mut().on_drive_reset(field);
    }

    fn on_narrative(&mut self, line: &str) {
        self.borrow_mut().on_narrative(line);
    }
}

/// Listener that records everything it hears.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    pub events: Vec<GameEvent>,
    pub possession_changes: Vec<Side>,
    pub drive_resets: usize,
    pub lines: Vec<String>,
}

impl EventRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder the caller can inspect after handing it to a
    /// session.
    #[must_use]
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new()))
    }
}

impl GameListener for EventRecorder {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }

    fn on_possession_change(&mut self, to: Side) {
        self.possession_changes.push(to);
    }

    fn on_drive_reset(&mut self, _field: &FieldState) {
        self.drive_resets += 1;
    }

    fn on_narrative(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_recorder_sees_calls() {
        let recorder = EventRecorder::shared();
        let mut handle: Box<dyn GameListener> = Box::new(Rc::clone(&recorder));

        handle.on_possession_change(Side::Opponent);
        handle.on_drive_reset(&FieldState::centerfield());
        handle.on_narrative("Player punts.");

        let seen = recorder.borrow();
        assert_eq!(seen.possession_changes, vec![Side::Opponent]);
        assert_eq!(seen.drive_resets, 1);
        assert_eq!(seen.lines, vec!["Player punts."]);
    }
}
