use iced::Size;

/// Widest window that still counts as a mobile viewport.
pub(crate) const MOBILE_MAX_WIDTH: f32 = 600.0;

/// Viewport class derived from the window size and host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Viewport {
    pub(crate) is_mobile: bool,
    pub(crate) is_ios_like: bool,
}

impl Viewport {
    /// Classify a window size on the current host platform.
    pub(crate) fn classify(window_size: Size) -> Self {
        Self::classify_on(window_size, cfg!(target_os = "ios"))
    }

    fn classify_on(window_size: Size, is_ios_like: bool) -> Self {
        Self {
            is_mobile: window_size.width <= MOBILE_MAX_WIDTH,
            is_ios_like,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::{MOBILE_MAX_WIDTH, Viewport};

    #[test]
    fn given_width_at_mobile_limit_when_classified_then_viewport_is_mobile() {
        let viewport =
            Viewport::classify_on(Size::new(MOBILE_MAX_WIDTH, 800.0), false);
        assert!(viewport.is_mobile);
    }

    #[test]
    fn given_desktop_width_when_classified_then_viewport_is_not_mobile() {
        let viewport = Viewport::classify_on(Size::new(1024.0, 768.0), true);
        assert!(!viewport.is_mobile);
        assert!(viewport.is_ios_like);
    }
}
