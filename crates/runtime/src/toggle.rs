//! The single debug flag flipped by the toggle hotkey.

/// Boolean flag owned by the hotkey router.
///
/// The composition root constructs it and hands it to the router; it is
/// never global state and is only mutated through [`ToggleFlag::flip`].
/// It currently gates nothing beyond its own notification — the
/// configuration switches in `RuntimeConfig` are the paths it was meant
/// to guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleFlag {
    enabled: bool,
}

impl ToggleFlag {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Inverts the flag and returns the new state.
    pub fn flip(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_false_true_false() {
        let mut flag = ToggleFlag::default();
        assert!(!flag.is_enabled());
        assert!(flag.flip());
        assert!(flag.is_enabled());
        assert!(!flag.flip());
        assert!(!flag.is_enabled());
    }
}
