//! Pointer and keyboard input
//!
//! DOM handlers only record intent here; the frame loop drains it once per
//! frame so all state changes happen inside the tick.

use crate::sim::TickInput;

/// Keyboard commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    TogglePause,
    Restart,
}

impl KeyCommand {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "p" | "P" | "Escape" => Some(KeyCommand::TogglePause),
            "r" | "R" => Some(KeyCommand::Restart),
            _ => None,
        }
    }
}

/// Convert a pointer's client x into canvas coordinates
#[inline]
pub fn pointer_to_canvas_x(client_x: f64, canvas_left: f64) -> f32 {
    (client_x - canvas_left) as f32
}

/// Input collected between frames
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: TickInput,
    restart: bool,
}

impl InputQueue {
    /// Queue a drop at the clicked position
    pub fn click(&mut self, client_x: f64, canvas_left: f64) {
        self.pending.drops.push(pointer_to_canvas_x(client_x, canvas_left));
    }

    /// Apply a key press; returns the command it mapped to
    pub fn key(&mut self, key: &str) -> Option<KeyCommand> {
        let command = KeyCommand::from_key(key)?;
        match command {
            KeyCommand::TogglePause => self.toggle_pause(),
            KeyCommand::Restart => self.restart = true,
        }
        Some(command)
    }

    pub fn toggle_pause(&mut self) {
        // Two presses in one frame cancel out
        self.pending.pause = !self.pending.pause;
    }

    /// Pause on the next tick regardless of other queued toggles
    pub fn request_pause(&mut self) {
        self.pending.pause = true;
    }

    /// Input for the next tick, leaving the queue empty
    pub fn take_tick(&mut self) -> TickInput {
        std::mem::take(&mut self.pending)
    }

    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_subtracts_canvas_offset() {
        let mut queue = InputQueue::default();
        queue.click(250.0, 40.0);
        queue.click(10.0, 40.0);
        let input = queue.take_tick();
        assert_eq!(input.drops, vec![210.0, -30.0]);
        assert!(queue.take_tick().drops.is_empty());
    }

    #[test]
    fn test_request_pause_survives_pending_toggle() {
        let mut queue = InputQueue::default();
        queue.key("p");
        queue.request_pause();
        assert!(queue.take_tick().pause);

        queue.request_pause();
        queue.request_pause();
        assert!(queue.take_tick().pause);
    }

    #[test]
    fn test_key_commands() {
        let mut queue = InputQueue::default();
        assert_eq!(queue.key("x"), None);
        assert_eq!(queue.key("p"), Some(KeyCommand::TogglePause));
        assert!(queue.take_tick().pause);

        assert_eq!(queue.key("Escape"), Some(KeyCommand::TogglePause));
        assert_eq!(queue.key("P"), Some(KeyCommand::TogglePause));
        assert!(!queue.take_tick().pause);

        assert_eq!(queue.key("r"), Some(KeyCommand::Restart));
        assert!(queue.take_restart());
        assert!(!queue.take_restart());
    }
}
