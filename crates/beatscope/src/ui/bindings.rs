//! Keyboard bindings.
//!
//! Pointer input drives panning and style changes; the keyboard covers the
//! playback controls.

use nannou::prelude::*;

/// Volume change per key press
pub const VOLUME_STEP: f32 = 0.1;

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    ShowHelp,
    TogglePlayback,
    VolumeUp,
    VolumeDown,
    ReloadLastFile,
}

/// Parse a key into an action
pub fn parse_key(key: Key) -> Option<Action> {
    match key {
        Key::Q => Some(Action::Quit),
        Key::H => Some(Action::ShowHelp),
        Key::Space => Some(Action::TogglePlayback),
        Key::Up => Some(Action::VolumeUp),
        Key::Down => Some(Action::VolumeDown),
        Key::O => Some(Action::ReloadLastFile),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playback_keys() {
        assert_eq!(parse_key(Key::Space), Some(Action::TogglePlayback));
        assert_eq!(parse_key(Key::Up), Some(Action::VolumeUp));
        assert_eq!(parse_key(Key::Down), Some(Action::VolumeDown));
        assert_eq!(parse_key(Key::Z), None);
    }
}
