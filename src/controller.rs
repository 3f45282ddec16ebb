use crate::levels::DrawKey;
use crate::messages::{InputEvent, PumpOutcome};
use crate::selection::Selection;
use std::sync::mpsc::{Receiver, TryRecvError};

/// Single consumer of hook events. Owns the selection; settings are passed in
/// read-only on every pump.
pub struct OverlayController {
    input_rx: Receiver<InputEvent>,
    selection: Selection,
    hook_lost: bool,
}

impl OverlayController {
    pub fn new(input_rx: Receiver<InputEvent>) -> Self {
        Self {
            input_rx,
            selection: Selection::default(),
            hook_lost: false,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn pump(&mut self, draw_key: DrawKey) -> PumpOutcome {
        let mut outcome = PumpOutcome::default();
        loop {
            match self.input_rx.try_recv() {
                Ok(event) => {
                    let step = self.handle(event, draw_key);
                    outcome.repaint |= step.repaint;
                    outcome.exit |= step.exit;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.hook_lost {
                        tracing::warn!("input hook disconnected");
                    }
                    self.hook_lost = true;
                    break;
                }
            }
        }
        outcome
    }

    pub fn handle(&mut self, event: InputEvent, draw_key: DrawKey) -> PumpOutcome {
        let repaint = match event {
            InputEvent::KeyPressed(c) if draw_key.matches(c) => self.selection.press_draw_key(),
            InputEvent::KeyReleased(c) if draw_key.matches(c) => {
                self.selection.release_draw_key()
            }
            InputEvent::KeyPressed(_) | InputEvent::KeyReleased(_) => false,
            InputEvent::PointerMoved(point) => self.selection.move_pointer(point),
            InputEvent::MouseClicked => self.selection.click(),
            InputEvent::ExitRequested => {
                tracing::info!("exit hotkey pressed");
                return PumpOutcome {
                    repaint: false,
                    exit: true,
                };
            }
        };
        PumpOutcome {
            repaint,
            exit: false,
        }
    }
}
