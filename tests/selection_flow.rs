use fib_overlay::controller::OverlayController;
use fib_overlay::levels::{default_levels, DrawKey};
use fib_overlay::messages::InputEvent;
use fib_overlay::render::retracement_lines;
use fib_overlay::selection::{Point, SelectionPhase};
use std::sync::mpsc::channel;

fn drag_and_click(moves: usize) -> OverlayController {
    let (tx, rx) = channel();
    let mut controller = OverlayController::new(rx);
    let key = DrawKey::default();

    tx.send(InputEvent::PointerMoved(Point::new(100.0, 100.0))).unwrap();
    tx.send(InputEvent::KeyPressed('f')).unwrap();
    for i in 0..moves {
        tx.send(InputEvent::PointerMoved(Point::new(100.0 + i as f64, 300.0)))
            .unwrap();
        // key repeat while held
        tx.send(InputEvent::KeyPressed('f')).unwrap();
    }
    tx.send(InputEvent::KeyReleased('f')).unwrap();
    controller.pump(key);
    assert_eq!(controller.selection().phase(), SelectionPhase::Committed);
    assert_eq!(controller.selection().start(), Some(Point::new(100.0, 100.0)));

    tx.send(InputEvent::MouseClicked).unwrap();
    controller.pump(key);
    controller
}

#[test]
fn click_after_commit_resets_for_any_number_of_moves() {
    for moves in [0, 1, 5, 250] {
        let controller = drag_and_click(moves);
        assert_eq!(controller.selection().phase(), SelectionPhase::Idle);
        assert_eq!(controller.selection().start(), None);
        assert_eq!(controller.selection().end(), None);
    }
}

#[test]
fn committed_line_is_frozen_until_click() {
    let (tx, rx) = channel();
    let mut controller = OverlayController::new(rx);
    let key = DrawKey::default();

    tx.send(InputEvent::PointerMoved(Point::new(0.0, 0.0))).unwrap();
    tx.send(InputEvent::KeyPressed('F')).unwrap();
    tx.send(InputEvent::PointerMoved(Point::new(200.0, 100.0))).unwrap();
    tx.send(InputEvent::KeyReleased('f')).unwrap();
    tx.send(InputEvent::PointerMoved(Point::new(900.0, 900.0))).unwrap();
    controller.pump(key);

    let selection = controller.selection();
    let lines = retracement_lines(selection.start(), selection.end(), &default_levels());
    let half = lines.iter().find(|l| l.label == "0.500").unwrap();
    assert_eq!(half.from, Point::new(0.0, 50.0));
    assert_eq!(half.to, Point::new(200.0, 50.0));
}

#[test]
fn release_without_press_changes_nothing() {
    let (tx, rx) = channel();
    let mut controller = OverlayController::new(rx);
    tx.send(InputEvent::KeyReleased('f')).unwrap();
    tx.send(InputEvent::MouseClicked).unwrap();
    let outcome = controller.pump(DrawKey::default());
    assert!(!outcome.repaint);
    assert_eq!(controller.selection().phase(), SelectionPhase::Idle);
}
