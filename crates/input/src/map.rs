//! Mapping from terminal events to exit reasons.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::exit::ExitReason;

/// Classify a terminal event. Any key press (or paste) ends the run.
pub fn exit_reason(event: &Event) -> Option<ExitReason> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(if is_interrupt_key(key) {
            ExitReason::Interrupt
        } else {
            ExitReason::KeyPress
        }),
        Event::Paste(_) => Some(ExitReason::KeyPress),
        _ => None,
    }
}

/// Ctrl+C arrives as a key in raw mode rather than as SIGINT.
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
