/// A position in screen pixels as reported by the input hook.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    #[default]
    Idle,
    Dragging,
    Committed,
}

impl SelectionPhase {
    pub fn has_line(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

pub fn can_transition(from: SelectionPhase, to: SelectionPhase) -> bool {
    matches!(
        (from, to),
        (SelectionPhase::Idle, SelectionPhase::Dragging)
            | (SelectionPhase::Committed, SelectionPhase::Dragging)
            | (SelectionPhase::Dragging, SelectionPhase::Committed)
            | (SelectionPhase::Committed, SelectionPhase::Idle)
    ) || from == to
}

/// Drag vector between the point where the draw key went down and the live
/// pointer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Selection {
    phase: SelectionPhase,
    start: Option<Point>,
    end: Option<Point>,
    pointer: Point,
}

impl Selection {
    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Draw key went down. Ignored while already dragging so key repeat does
    /// not move the anchor.
    pub fn press_draw_key(&mut self) -> bool {
        if self.phase == SelectionPhase::Dragging {
            return false;
        }
        self.start = Some(self.pointer);
        self.end = Some(self.pointer);
        self.enter(SelectionPhase::Dragging);
        true
    }

    /// Track the pointer. Returns `true` when the visible line moved.
    pub fn move_pointer(&mut self, point: Point) -> bool {
        self.pointer = point;
        if self.phase != SelectionPhase::Dragging {
            return false;
        }
        self.end = Some(point);
        true
    }

    pub fn release_draw_key(&mut self) -> bool {
        if self.phase != SelectionPhase::Dragging {
            return false;
        }
        self.enter(SelectionPhase::Committed);
        true
    }

    /// A click clears a committed line. Clicks in any other phase pass through.
    pub fn click(&mut self) -> bool {
        if self.phase != SelectionPhase::Committed {
            return false;
        }
        self.start = None;
        self.end = None;
        self.enter(SelectionPhase::Idle);
        true
    }

    fn enter(&mut self, next: SelectionPhase) {
        debug_assert!(can_transition(self.phase, next));
        tracing::debug!(from = ?self.phase, to = ?next, "selection transition");
        self.phase = next;
    }
}
