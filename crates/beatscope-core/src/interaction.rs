//! Drag-to-pan and click-to-cycle pointer handling.
//!
//! Two states. A press starts a drag; any movement while pressed pans the scene
//! by the exact pointer delta. Releasing without having moved counts as a click
//! and advances the style. Leaving the surface ends a drag the same way a
//! release does, so the controller can never get stuck dragging.

use crate::draw::Point;
use crate::scene::{SceneState, Style};

/// Pointer input in surface-local coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
    Leave,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging { anchor: Point, moved_since_down: bool },
}

/// What an event did to the scene
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InteractionOutcome {
    None,
    Panned(Point),
    StyleCycled(Style),
}

#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    state: DragState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn handle(&mut self, event: PointerEvent, scene: &mut SceneState) -> InteractionOutcome {
        match (self.state, event) {
            (DragState::Idle, PointerEvent::Down(pos)) => {
                self.state = DragState::Dragging {
                    anchor: pos,
                    moved_since_down: false,
                };
                InteractionOutcome::None
            }
            (DragState::Dragging { anchor, .. }, PointerEvent::Move(pos)) => {
                let delta = pos - anchor;
                scene.pan_offset += delta;
                self.state = DragState::Dragging {
                    anchor: pos,
                    moved_since_down: true,
                };
                InteractionOutcome::Panned(delta)
            }
            (
                DragState::Dragging {
                    moved_since_down, ..
                },
                PointerEvent::Up(_) | PointerEvent::Leave,
            ) => {
                self.state = DragState::Idle;
                if moved_since_down {
                    InteractionOutcome::None
                } else {
                    scene.cycle_style();
                    InteractionOutcome::StyleCycled(scene.active_style)
                }
            }
            // A press we never saw released (button lifted off-window) starts over
            (DragState::Dragging { .. }, PointerEvent::Down(pos)) => {
                self.state = DragState::Dragging {
                    anchor: pos,
                    moved_since_down: false,
                };
                InteractionOutcome::None
            }
            (DragState::Idle, _) => InteractionOutcome::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn click(ctrl: &mut InteractionController, scene: &mut SceneState, at: Point) {
        ctrl.handle(PointerEvent::Down(at), scene);
        ctrl.handle(PointerEvent::Up(at), scene);
    }

    #[test]
    fn test_click_cycles_style() {
        let mut ctrl = InteractionController::new();
        let mut scene = SceneState::new(Style::Circles);
        ctrl.handle(PointerEvent::Down(Point::new(5.0, 5.0)), &mut scene);
        let outcome = ctrl.handle(PointerEvent::Up(Point::new(5.0, 5.0)), &mut scene);
        assert_eq!(outcome, InteractionOutcome::StyleCycled(Style::Bars));
        assert_eq!(scene.pan_offset, Point::ZERO);
        assert!(!ctrl.is_dragging());
    }

    #[test]
    fn test_three_clicks_return_to_start() {
        let mut ctrl = InteractionController::new();
        let mut scene = SceneState::new(Style::Waveform);
        for _ in 0..3 {
            click(&mut ctrl, &mut scene, Point::new(100.0, 50.0));
        }
        assert_eq!(scene.active_style, Style::Waveform);
    }

    #[test]
    fn test_drag_accumulates_offset() {
        let mut ctrl = InteractionController::new();
        let mut scene = SceneState::default();
        ctrl.handle(PointerEvent::Down(Point::new(0.0, 0.0)), &mut scene);
        ctrl.handle(PointerEvent::Move(Point::new(10.0, 0.0)), &mut scene);
        ctrl.handle(PointerEvent::Move(Point::new(10.0, 5.0)), &mut scene);
        assert_eq!(scene.pan_offset, Point::new(10.0, 5.0));
        assert!(ctrl.is_dragging());
    }

    #[test]
    fn test_drag_release_keeps_style() {
        let mut ctrl = InteractionController::new();
        let mut scene = SceneState::new(Style::Bars);
        ctrl.handle(PointerEvent::Down(Point::new(0.0, 0.0)), &mut scene);
        ctrl.handle(PointerEvent::Move(Point::new(3.0, 4.0)), &mut scene);
        let outcome = ctrl.handle(PointerEvent::Up(Point::new(3.0, 4.0)), &mut scene);
        assert_eq!(outcome, InteractionOutcome::None);
        assert_eq!(scene.active_style, Style::Bars);
    }

    #[test]
    fn test_leave_ends_drag() {
        let mut ctrl = InteractionController::new();
        let mut scene = SceneState::new(Style::Circles);
        ctrl.handle(PointerEvent::Down(Point::new(1.0, 1.0)), &mut scene);
        ctrl.handle(PointerEvent::Leave, &mut scene);
        assert!(!ctrl.is_dragging());
        // Leave without movement acts as a click
        assert_eq!(scene.active_style, Style::Bars);

        // Moves after leaving no longer pan
        ctrl.handle(PointerEvent::Move(Point::new(50.0, 50.0)), &mut scene);
        assert_eq!(scene.pan_offset, Point::ZERO);
    }

    #[test]
    fn test_idle_release_is_noop() {
        let mut ctrl = InteractionController::new();
        let mut scene = SceneState::new(Style::Circles);
        assert_eq!(
            ctrl.handle(PointerEvent::Up(Point::ZERO), &mut scene),
            InteractionOutcome::None
        );
        assert_eq!(ctrl.handle(PointerEvent::Leave, &mut scene), InteractionOutcome::None);
        assert_eq!(scene, SceneState::new(Style::Circles));
    }

    proptest! {
        #[test]
        fn drag_granularity_does_not_matter(steps in 1usize..50) {
            let mut ctrl = InteractionController::new();
            let mut scene = SceneState::default();
            ctrl.handle(PointerEvent::Down(Point::new(0.0, 0.0)), &mut scene);
            for i in 1..=steps {
                let x = 10.0 * i as f32 / steps as f32;
                ctrl.handle(PointerEvent::Move(Point::new(x, 0.0)), &mut scene);
            }
            for i in 1..=steps {
                let y = 5.0 * i as f32 / steps as f32;
                ctrl.handle(PointerEvent::Move(Point::new(10.0, y)), &mut scene);
            }
            prop_assert!((scene.pan_offset.x - 10.0).abs() < 1e-3);
            prop_assert!((scene.pan_offset.y - 5.0).abs() < 1e-3);
        }
    }
}
