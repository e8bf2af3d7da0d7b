use iced::keyboard::{self, Key, Modifiers, key};

/// Map a key press to a relative session step.
///
/// Alt or Control together with ArrowUp/ArrowDown moves one session back or
/// forward. Everything else is left alone.
pub(crate) fn session_step(event: &keyboard::Event) -> Option<i32> {
    match event {
        keyboard::Event::KeyPressed { key, modifiers, .. } => {
            step_for(key, *modifiers)
        },
        _ => None,
    }
}

fn step_for(key: &Key, modifiers: Modifiers) -> Option<i32> {
    if !(modifiers.alt() || modifiers.control()) {
        return None;
    }

    match key {
        Key::Named(key::Named::ArrowUp) => Some(-1),
        Key::Named(key::Named::ArrowDown) => Some(1),
        _ => None,
    }
}
