use crate::hotkey::KeyCode;
use crate::input::InputTranslator;
use crate::messages::InputEvent;
use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub type Waker = Arc<dyn Fn() + Send + Sync>;

/// Backend-neutral form of what the OS listener reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    KeyPress(KeyCode),
    KeyRelease(KeyCode),
    MouseMove { x: f64, y: f64 },
    ButtonPress,
}

/// Delivery end of the hook: forwards events to the GUI thread and wakes it.
#[derive(Clone)]
pub struct EventSink {
    sender: Sender<InputEvent>,
    waker: Waker,
    armed: Arc<AtomicBool>,
}

impl EventSink {
    pub fn new(sender: Sender<InputEvent>, waker: Waker) -> Self {
        Self {
            sender,
            waker,
            armed: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn send(&self, event: InputEvent) -> bool {
        if !self.is_armed() {
            return false;
        }
        if self.sender.send(event).is_err() {
            tracing::debug!("input receiver dropped, disarming hook");
            self.disarm();
            return false;
        }
        (self.waker)();
        true
    }

    pub fn disarm(&self) {
        self.armed.store(false, Ordering::SeqCst);
    }

    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}

/// Translate one raw callback and push the resulting events into `sink`.
pub fn forward(translator: &mut InputTranslator, raw: RawInput, sink: &EventSink) {
    match raw {
        RawInput::KeyPress(key) => {
            for event in translator.key_press(key) {
                sink.send(event);
            }
        }
        RawInput::KeyRelease(key) => {
            if let Some(event) = translator.key_release(key) {
                sink.send(event);
            }
        }
        RawInput::MouseMove { x, y } => {
            sink.send(translator.pointer_moved(x, y));
        }
        RawInput::ButtonPress => {
            sink.send(translator.button_pressed());
        }
    }
}

/// Global mouse and keyboard listener.
///
/// The OS listener cannot be torn down from outside its thread, so `stop`
/// disarms the sink and the thread ends with the process.
#[derive(Default)]
pub struct InputHook {
    sink: Option<EventSink>,
}

impl InputHook {
    pub fn start(&mut self, sender: Sender<InputEvent>, waker: Waker) -> Result<()> {
        if self.sink.is_some() {
            return Ok(());
        }
        let sink = EventSink::new(sender, waker);
        platform::spawn(sink.clone())?;
        self.sink = Some(sink);
        tracing::info!("input hook started");
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.disarm();
            tracing::info!("input hook stopped");
        }
    }

    pub fn is_active(&self) -> bool {
        self.sink.as_ref().is_some_and(EventSink::is_armed)
    }
}

impl Drop for InputHook {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(any(target_os = "windows", target_os = "macos"))]
mod platform {
    use super::{forward, EventSink, RawInput};
    use crate::hotkey::KeyCode;
    use crate::input::InputTranslator;
    use anyhow::{Context, Result};
    use rdev::{listen, EventType, Key};

    pub fn spawn(sink: EventSink) -> Result<()> {
        std::thread::Builder::new()
            .name("input-hook".into())
            .spawn(move || {
                let mut translator = InputTranslator::default();
                let result = listen(move |event| {
                    if !sink.is_armed() {
                        return;
                    }
                    let Some(raw) = map_event(&event.event_type) else {
                        return;
                    };
                    #[cfg(target_os = "windows")]
                    if matches!(raw, RawInput::KeyPress(_)) {
                        if let Some((x, y)) = cursor_position() {
                            forward(
                                &mut translator,
                                RawInput::MouseMove { x, y },
                                &sink,
                            );
                        }
                    }
                    forward(&mut translator, raw, &sink);
                });
                if let Err(err) = result {
                    tracing::error!(?err, "input hook listener failed");
                }
            })
            .context("spawn input hook thread")?;
        Ok(())
    }

    fn map_event(event: &EventType) -> Option<RawInput> {
        match *event {
            EventType::KeyPress(key) => Some(RawInput::KeyPress(map_key(key))),
            EventType::KeyRelease(key) => Some(RawInput::KeyRelease(map_key(key))),
            EventType::MouseMove { x, y } => Some(RawInput::MouseMove { x, y }),
            EventType::ButtonPress(_) => Some(RawInput::ButtonPress),
            _ => None,
        }
    }

    fn map_key(key: Key) -> KeyCode {
        let c = match key {
            Key::ControlLeft | Key::ControlRight => return KeyCode::Control,
            Key::ShiftLeft | Key::ShiftRight => return KeyCode::Shift,
            Key::Alt | Key::AltGr => return KeyCode::Alt,
            Key::Escape => return KeyCode::Escape,
            Key::KeyA => 'a',
            Key::KeyB => 'b',
            Key::KeyC => 'c',
            Key::KeyD => 'd',
            Key::KeyE => 'e',
            Key::KeyF => 'f',
            Key::KeyG => 'g',
            Key::KeyH => 'h',
            Key::KeyI => 'i',
            Key::KeyJ => 'j',
            Key::KeyK => 'k',
            Key::KeyL => 'l',
            Key::KeyM => 'm',
            Key::KeyN => 'n',
            Key::KeyO => 'o',
            Key::KeyP => 'p',
            Key::KeyQ => 'q',
            Key::KeyR => 'r',
            Key::KeyS => 's',
            Key::KeyT => 't',
            Key::KeyU => 'u',
            Key::KeyV => 'v',
            Key::KeyW => 'w',
            Key::KeyX => 'x',
            Key::KeyY => 'y',
            Key::KeyZ => 'z',
            Key::Num0 | Key::Kp0 => '0',
            Key::Num1 | Key::Kp1 => '1',
            Key::Num2 | Key::Kp2 => '2',
            Key::Num3 | Key::Kp3 => '3',
            Key::Num4 | Key::Kp4 => '4',
            Key::Num5 | Key::Kp5 => '5',
            Key::Num6 | Key::Kp6 => '6',
            Key::Num7 | Key::Kp7 => '7',
            Key::Num8 | Key::Kp8 => '8',
            Key::Num9 | Key::Kp9 => '9',
            _ => return KeyCode::Other,
        };
        KeyCode::Char(c)
    }

    #[cfg(target_os = "windows")]
    fn cursor_position() -> Option<(f64, f64)> {
        use windows::Win32::Foundation::POINT;
        use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

        let mut pt = POINT::default();
        unsafe { GetCursorPos(&mut pt) }.ok()?;
        Some((f64::from(pt.x), f64::from(pt.y)))
    }
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
mod platform {
    use super::EventSink;
    use anyhow::Result;

    pub fn spawn(_sink: EventSink) -> Result<()> {
        tracing::warn!("global input hook is not available on this platform");
        Ok(())
    }
}
