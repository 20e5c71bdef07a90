//! Pointer and touch input state with an edge-triggered release flag.
//!
//! One [`InputState`] lives inside each sketch; the DOM glue forwards browser
//! events into it through the facade's event methods, and sketch callbacks
//! read it back through the facade's queries. Touches map onto the same state
//! as the primary mouse button.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Lifecycle of the primary button (or touch contact).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStatus {
    /// No press in progress and no unobserved release.
    #[default]
    Idle,
    /// The button is currently held.
    Down,
    /// The button was released and the release has not been observed yet.
    Up,
}

/// Pointer position and button state for one sketch.
///
/// `Up` is edge-triggered: [`is_up`](Self::is_up) reports it exactly once,
/// then the status falls back to `Idle`. [`is_down`](Self::is_down) is
/// level-triggered and never mutates.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Pointer x in surface-local pixels, origin top-left.
    pub pointer_x: f64,
    /// Pointer y in surface-local pixels, origin top-left.
    pub pointer_y: f64,
    button: ButtonStatus,
}

impl InputState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Event mutators ---

    /// Record a pointer move to surface-local `(x, y)`.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer_x = x;
        self.pointer_y = y;
    }

    /// Record a press of the primary button.
    pub fn on_button_down(&mut self) {
        self.button = ButtonStatus::Down;
    }

    /// Record a release of the primary button.
    pub fn on_button_up(&mut self) {
        self.button = ButtonStatus::Up;
    }

    // --- Queries ---

    /// Whether the button is currently held.
    #[must_use]
    pub fn is_down(&self) -> bool {
        self.button == ButtonStatus::Down
    }

    /// Whether the button was released since the last call.
    ///
    /// One-shot: a `true` observation resets the status to
    /// [`ButtonStatus::Idle`], so the next call returns `false` until another
    /// release arrives.
    pub fn is_up(&mut self) -> bool {
        if self.button == ButtonStatus::Up {
            self.button = ButtonStatus::Idle;
            true
        } else {
            false
        }
    }

    /// The raw button status, without consuming a pending release.
    #[must_use]
    pub fn status(&self) -> ButtonStatus {
        self.button
    }
}
