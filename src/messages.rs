use crate::selection::Point;

/// Events delivered from the input hook thread to the GUI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    KeyPressed(char),
    KeyReleased(char),
    PointerMoved(Point),
    MouseClicked,
    ExitRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    OpenSettings,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PumpOutcome {
    pub repaint: bool,
    pub exit: bool,
}
