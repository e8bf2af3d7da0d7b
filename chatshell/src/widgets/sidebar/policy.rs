use super::model::{
    EffectiveWidth, MAX_SIDEBAR_WIDTH, MIN_SIDEBAR_WIDTH, NARROW_SIDEBAR_WIDTH,
    SidebarLayout,
};
use crate::layout::Viewport;

/// Return whether the sidebar renders in narrow mode.
pub(crate) fn should_narrow(stored_width: u32, viewport: Viewport) -> bool {
    !viewport.is_mobile && stored_width < MIN_SIDEBAR_WIDTH
}

/// Derive the rendered sidebar layout from the stored width and viewport.
pub(crate) fn derive(stored_width: u32, viewport: Viewport) -> SidebarLayout {
    let narrow = should_narrow(stored_width, viewport);

    let width = if viewport.is_mobile {
        EffectiveWidth::FullViewport
    } else if narrow {
        EffectiveWidth::Pixels(NARROW_SIDEBAR_WIDTH)
    } else {
        EffectiveWidth::Pixels(stored_width.min(MAX_SIDEBAR_WIDTH))
    };

    SidebarLayout {
        width,
        narrow,
        transitions_enabled: !(viewport.is_mobile && viewport.is_ios_like),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::sidebar::model::DEFAULT_SIDEBAR_WIDTH;

    const DESKTOP: Viewport = Viewport {
        is_mobile: false,
        is_ios_like: false,
    };
    const MOBILE: Viewport = Viewport {
        is_mobile: true,
        is_ios_like: false,
    };

    #[test]
    fn given_mobile_viewport_when_derived_then_sidebar_covers_viewport() {
        let layout = derive(NARROW_SIDEBAR_WIDTH, MOBILE);

        assert_eq!(layout.width, EffectiveWidth::FullViewport);
        assert!(!layout.narrow);
    }

    #[test]
    fn given_width_below_minimum_when_derived_then_sidebar_is_narrow() {
        let layout = derive(MIN_SIDEBAR_WIDTH - 1, DESKTOP);

        assert!(layout.narrow);
        assert_eq!(
            layout.width,
            EffectiveWidth::Pixels(NARROW_SIDEBAR_WIDTH)
        );
    }

    #[test]
    fn given_width_above_maximum_when_derived_then_width_is_clamped() {
        let layout = derive(MAX_SIDEBAR_WIDTH + 200, DESKTOP);

        assert!(!layout.narrow);
        assert_eq!(layout.width, EffectiveWidth::Pixels(MAX_SIDEBAR_WIDTH));
    }

    #[test]
    fn given_identical_inputs_when_derived_twice_then_outputs_match() {
        let first = derive(DEFAULT_SIDEBAR_WIDTH, DESKTOP);
        let second = derive(DEFAULT_SIDEBAR_WIDTH, DESKTOP);

        assert_eq!(first, second);
    }

    #[test]
    fn given_ios_mobile_viewport_when_derived_then_transitions_are_disabled() {
        let ios = Viewport {
            is_mobile: true,
            is_ios_like: true,
        };

        assert!(!derive(DEFAULT_SIDEBAR_WIDTH, ios).transitions_enabled);
        assert!(derive(DEFAULT_SIDEBAR_WIDTH, MOBILE).transitions_enabled);
    }
}
