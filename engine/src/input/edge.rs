//! Button edge detection.

/// Transition of a button between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Went from released to held.
    Pressed,
    /// Went from held to released.
    Released,
    /// No change.
    None,
}

/// Turns a held/released level into key-down and key-up edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonEdge {
    was_down: bool,
}

impl ButtonEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current level and get the edge since the previous sample.
    pub fn update(&mut self, down: bool) -> Edge {
        let edge = match (self.was_down, down) {
            (false, true) => Edge::Pressed,
            (true, false) => Edge::Released,
            _ => Edge::None,
        };
        self.was_down = down;
        edge
    }

    /// Level seen on the last sample.
    #[inline]
    pub fn is_down(&self) -> bool {
        self.was_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_hold_release() {
        let mut button = ButtonEdge::new();
        assert_eq!(button.update(false), Edge::None);
        assert_eq!(button.update(true), Edge::Pressed);
        // Holding doesn't re-trigger
        assert_eq!(button.update(true), Edge::None);
        assert!(button.is_down());
        assert_eq!(button.update(false), Edge::Released);
        assert_eq!(button.update(false), Edge::None);
    }
}
