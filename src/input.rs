use crate::constants::EXIT_HOTKEY;
use crate::hotkey::{parse_hotkey, ComboTracker, Hotkey, KeyCode};
use crate::messages::InputEvent;
use crate::selection::Point;

/// Turns raw hook callbacks into [`InputEvent`]s.
///
/// Keys without a printable alphanumeric character produce nothing beyond
/// feeding the exit-combination tracker.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    exit: ComboTracker,
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new(default_exit_hotkey())
    }
}

pub fn default_exit_hotkey() -> Hotkey {
    parse_hotkey(EXIT_HOTKEY).unwrap_or(Hotkey {
        key: KeyCode::Char('x'),
        ctrl: true,
        shift: false,
        alt: true,
    })
}

impl InputTranslator {
    pub fn new(exit_hotkey: Hotkey) -> Self {
        Self {
            exit: ComboTracker::new(exit_hotkey),
        }
    }

    pub fn key_press(&mut self, key: KeyCode) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.exit.press(key) {
            events.push(InputEvent::ExitRequested);
        }
        if let Some(c) = key.printable() {
            events.push(InputEvent::KeyPressed(c));
        }
        events
    }

    pub fn key_release(&mut self, key: KeyCode) -> Option<InputEvent> {
        self.exit.release(key);
        key.printable().map(InputEvent::KeyReleased)
    }

    pub fn pointer_moved(&self, x: f64, y: f64) -> InputEvent {
        InputEvent::PointerMoved(Point::new(x, y))
    }

    pub fn button_pressed(&self) -> InputEvent {
        InputEvent::MouseClicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_keys_become_char_events() {
        let mut translator = InputTranslator::default();
        assert_eq!(
            translator.key_press(KeyCode::Char('f')),
            vec![InputEvent::KeyPressed('f')]
        );
        assert_eq!(
            translator.key_release(KeyCode::Char('f')),
            Some(InputEvent::KeyReleased('f'))
        );
    }

    #[test]
    fn modifier_only_keys_are_ignored() {
        let mut translator = InputTranslator::default();
        assert!(translator.key_press(KeyCode::Shift).is_empty());
        assert!(translator.key_press(KeyCode::Other).is_empty());
        assert_eq!(translator.key_release(KeyCode::Shift), None);
    }

    #[test]
    fn exit_combo_is_reported_before_the_char() {
        let mut translator = InputTranslator::default();
        translator.key_press(KeyCode::Control);
        translator.key_press(KeyCode::Alt);
        assert_eq!(
            translator.key_press(KeyCode::Char('x')),
            vec![InputEvent::ExitRequested, InputEvent::KeyPressed('x')]
        );
    }

    #[test]
    fn default_exit_hotkey_is_ctrl_alt_x() {
        let hotkey = default_exit_hotkey();
        assert_eq!(hotkey.key, KeyCode::Char('x'));
        assert!(hotkey.ctrl && hotkey.alt && !hotkey.shift);
    }
}
