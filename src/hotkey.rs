/// Backend-neutral key identity. The OS hook maps its own key type onto this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable alphanumeric key, always lowercase.
    Char(char),
    Control,
    Shift,
    Alt,
    Escape,
    Other,
}

impl KeyCode {
    /// The printable character carried by this key, if any.
    pub fn printable(self) -> Option<char> {
        match self {
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    pub key: KeyCode,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Parse a hotkey string like "Ctrl+Alt+X" into a [`Hotkey`].
pub fn parse_hotkey(s: &str) -> Option<Hotkey> {
    let mut ctrl = false;
    let mut shift = false;
    let mut alt = false;
    let mut key: Option<KeyCode> = None;

    for part in s.split('+') {
        let upper = part.trim().to_ascii_uppercase();
        match upper.as_str() {
            "CTRL" | "CONTROL" => ctrl = true,
            "SHIFT" => shift = true,
            "ALT" => alt = true,
            "" => {}
            _ => {
                if let Some(k) = parse_key(&upper) {
                    key = Some(k);
                } else {
                    return None;
                }
            }
        }
    }

    key.map(|k| Hotkey {
        key: k,
        ctrl,
        shift,
        alt,
    })
}

fn parse_key(upper: &str) -> Option<KeyCode> {
    match upper {
        "ESC" | "ESCAPE" => Some(KeyCode::Escape),
        _ => {
            let mut chars = upper.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphanumeric() => {
                    Some(KeyCode::Char(c.to_ascii_lowercase()))
                }
                _ => None,
            }
        }
    }
}

/// Tracks modifier and key state for one fixed combination and reports a
/// single trigger per press of the full combination.
#[derive(Debug, Clone)]
pub struct ComboTracker {
    hotkey: Hotkey,
    ctrl_pressed: bool,
    shift_pressed: bool,
    alt_pressed: bool,
    watch_pressed: bool,
    triggered: bool,
}

impl ComboTracker {
    pub fn new(hotkey: Hotkey) -> Self {
        Self {
            hotkey,
            ctrl_pressed: false,
            shift_pressed: false,
            alt_pressed: false,
            watch_pressed: false,
            triggered: false,
        }
    }

    /// Returns `true` exactly once when the combination becomes fully held.
    pub fn press(&mut self, key: KeyCode) -> bool {
        self.set(key, true);
        self.evaluate()
    }

    pub fn release(&mut self, key: KeyCode) {
        self.set(key, false);
        let _ = self.evaluate();
    }

    fn set(&mut self, key: KeyCode, down: bool) {
        match key {
            KeyCode::Control => self.ctrl_pressed = down,
            KeyCode::Shift => self.shift_pressed = down,
            KeyCode::Alt => self.alt_pressed = down,
            _ => {}
        }
        if key == self.hotkey.key {
            self.watch_pressed = down;
        }
    }

    fn evaluate(&mut self) -> bool {
        let combo = self.watch_pressed
            && (!self.hotkey.ctrl || self.ctrl_pressed)
            && (!self.hotkey.shift || self.shift_pressed)
            && (!self.hotkey.alt || self.alt_pressed);
        if combo {
            if !self.triggered {
                self.triggered = true;
                tracing::debug!(hotkey = ?self.hotkey, "combo matched");
                return true;
            }
        } else {
            if self.triggered {
                tracing::debug!("combo released");
            }
            self.triggered = false;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctrl_alt_x() -> ComboTracker {
        ComboTracker::new(parse_hotkey("Ctrl+Alt+X").expect("parse"))
    }

    #[test]
    fn combo_fires_once_until_released() {
        let mut tracker = ctrl_alt_x();
        assert!(!tracker.press(KeyCode::Control));
        assert!(!tracker.press(KeyCode::Alt));
        assert!(tracker.press(KeyCode::Char('x')));
        assert!(!tracker.press(KeyCode::Char('x')));

        tracker.release(KeyCode::Char('x'));
        assert!(tracker.press(KeyCode::Char('x')));
    }

    #[test]
    fn key_without_modifiers_does_not_fire() {
        let mut tracker = ctrl_alt_x();
        assert!(!tracker.press(KeyCode::Char('x')));
        assert!(!tracker.press(KeyCode::Control));
        assert!(tracker.press(KeyCode::Alt));
    }

    #[test]
    fn releasing_a_modifier_rearms() {
        let mut tracker = ctrl_alt_x();
        tracker.press(KeyCode::Control);
        tracker.press(KeyCode::Alt);
        assert!(tracker.press(KeyCode::Char('x')));
        tracker.release(KeyCode::Alt);
        assert!(tracker.press(KeyCode::Alt));
    }
}
