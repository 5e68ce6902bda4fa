//! Mobile navigation panel state

/// Whether the mobile navigation panel is shown. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavToggle {
    open: bool,
}

impl NavToggle {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Following a link from the panel closes it
    pub fn close(&mut self) {
        self.open = false;
    }

    pub const fn is_open(self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!NavToggle::default().is_open());
    }

    #[test]
    fn test_toggle_parity() {
        let mut nav = NavToggle::default();
        for n in 1..=6 {
            nav.toggle();
            assert_eq!(nav.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn test_close() {
        let mut nav = NavToggle::default();
        nav.toggle();
        nav.close();
        assert!(!nav.is_open());

        nav.close();
        assert!(!nav.is_open());
    }
}
