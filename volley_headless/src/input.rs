//! Keyboard state to per-frame input

use std::collections::HashSet;

use volley_core::InputFrame;

/// Held keys, turned into one `InputFrame` per tick
#[derive(Debug, Default)]
pub struct Keyboard {
    held: HashSet<&'static str>,
    jump_was_held: bool,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event
    pub fn key_down(&mut self, key: &str) {
        if let Some(key) = canonical(key) {
            self.held.insert(key);
        }
    }

    /// Handle key up event
    pub fn key_up(&mut self, key: &str) {
        if let Some(key) = canonical(key) {
            self.held.remove(key);
        }
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, key: &str) -> bool {
        canonical(key).is_some_and(|key| self.held.contains(key))
    }

    /// Sample the keyboard for this tick. Jump is reported only on the tick it goes down.
    pub fn frame(&mut self) -> InputFrame {
        let mut frame = InputFrame::from_keys(
            self.is_held("a"),
            self.is_held("ArrowLeft"),
            self.is_held("d"),
            self.is_held("ArrowRight"),
            self.is_held("w"),
            self.is_held("ArrowUp"),
        );
        let jump_held = frame.jump_pressed;
        frame.jump_pressed = jump_held && !self.jump_was_held;
        self.jump_was_held = jump_held;
        frame
    }
}

fn canonical(key: &str) -> Option<&'static str> {
    match key {
        "a" | "A" => Some("a"),
        "d" | "D" => Some("d"),
        "w" | "W" => Some("w"),
        "ArrowLeft" => Some("ArrowLeft"),
        "ArrowRight" => Some("ArrowRight"),
        "ArrowUp" => Some("ArrowUp"),
        _ => None,
    }
}
