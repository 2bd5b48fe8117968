//! Mouse event vocabulary for controller entry points.
//!
//! The host UI layer translates its toolkit's mouse events into this
//! vocabulary before forwarding clicks to the controllers.

/// A mouse button, as reported by the host UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    /// The primary button.
    #[default]
    Left,
    /// The secondary button.
    Right,
    /// The middle button (wheel press).
    Middle,
}

impl MouseButton {
    /// Check if this is the primary button.
    ///
    /// The controllers act only on primary-button clicks.
    pub fn is_primary(&self) -> bool {
        matches!(self, MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button() {
        assert!(MouseButton::Left.is_primary());
        assert!(!MouseButton::Right.is_primary());
        assert!(!MouseButton::Middle.is_primary());
    }
}
