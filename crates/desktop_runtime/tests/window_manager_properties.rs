use std::collections::HashSet;

use desktop_runtime::{
    clamp_to_viewport, reduce_desktop, stack_index, DesktopAction, DesktopConfig, DesktopState,
    PlacementSeed, Point, Size, Viewport, WindowKey,
};
use proptest::prelude::*;

const IDS: [&str; 7] = [
    "about",
    "experience",
    "contact",
    "resume",
    "credits",
    "projects",
    "guestbook",
];

#[derive(Debug, Clone)]
enum Op {
    Open(usize, f64, f64),
    Close(usize),
    Focus(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..IDS.len(), 0.0..1.0f64, 0.0..1.0f64).prop_map(|(i, x, y)| Op::Open(i, x, y)),
        (0..IDS.len()).prop_map(Op::Close),
        (0..IDS.len()).prop_map(Op::Focus),
    ]
}

fn apply(state: &mut DesktopState, config: &DesktopConfig, op: &Op) {
    let action = match *op {
        Op::Open(i, x, y) => DesktopAction::Open {
            id: IDS[i].into(),
            placement: PlacementSeed::new(x, y),
        },
        Op::Close(i) => DesktopAction::Close { id: IDS[i].into() },
        Op::Focus(i) => DesktopAction::Focus { id: IDS[i].into() },
    };
    reduce_desktop(state, config, action);
}

proptest! {
    #[test]
    fn desktop_invariants_hold_for_any_sequence(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let config = DesktopConfig::default();
        let mut state = DesktopState::default();
        for op in &ops {
            let before = state.clone();
            apply(&mut state, &config, op);

            let unique: HashSet<&WindowKey> = state.open_order.iter().collect();
            prop_assert_eq!(unique.len(), state.open_order.len());
            prop_assert_eq!(state.windows.len(), state.open_order.len());
            for id in &state.open_order {
                prop_assert!(state.windows.contains_key(id));
            }
            if let Some(focused) = &state.focused_id {
                prop_assert!(state.open_order.contains(focused));
            }
            if state.open_order.is_empty() {
                prop_assert_eq!(state.focused_id.clone(), None);
            }

            match *op {
                Op::Open(i, _, _) => {
                    prop_assert_eq!(state.focused_id.clone(), Some(WindowKey::from(IDS[i])));
                }
                Op::Focus(i) if !before.is_open(&IDS[i].into()) => {
                    prop_assert_eq!(&state, &before);
                }
                _ => {}
            }

            if let Some(focused) = &state.focused_id {
                let top = stack_index(&state, &config, focused).unwrap();
                for other in state.open_order.iter().filter(|id| *id != focused) {
                    prop_assert!(top > stack_index(&state, &config, other).unwrap());
                }
            }
        }
    }

    #[test]
    fn spawned_windows_start_inside_the_band(x in 0.0..1.0f64, y in 0.0..1.0f64) {
        let config = DesktopConfig::default();
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            &config,
            DesktopAction::Open { id: "about".into(), placement: PlacementSeed::new(x, y) },
        );
        let position = state.window(&"about".into()).unwrap().position;
        prop_assert!(position.x >= config.spawn_x_min && position.x < config.spawn_x_max);
        prop_assert!(position.y >= config.spawn_y_min && position.y < config.spawn_y_max);
    }

    #[test]
    fn clamped_position_respects_viewport_bounds(
        px in -5000.0..5000.0f64,
        py in -5000.0..5000.0f64,
        width in 100.0..800.0f64,
        height in 100.0..600.0f64,
        viewport_width in 800.0..2400.0f64,
        viewport_height in 700.0..1600.0f64,
        taskbar in 0.0..80.0f64,
    ) {
        let viewport = Viewport::new(viewport_width, viewport_height, taskbar);
        let clamped = clamp_to_viewport(Point::new(px, py), Size::new(width, height), viewport);
        prop_assert!(clamped.x >= 0.0);
        prop_assert!(clamped.y >= 0.0);
        prop_assert!(clamped.x <= viewport_width - width);
        prop_assert!(clamped.y <= viewport_height - height - taskbar);
    }

    #[test]
    fn every_drag_step_stays_inside_viewport(
        anchor_x in 0.0..600.0f64,
        anchor_y in 0.0..40.0f64,
        moves in prop::collection::vec((-3000.0..3000.0f64, -3000.0..3000.0f64), 1..32),
    ) {
        let config = DesktopConfig::default();
        let viewport = Viewport::new(1000.0, 800.0, config.taskbar_height);
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            &config,
            DesktopAction::Open { id: "about".into(), placement: PlacementSeed::new(0.3, 0.6) },
        );
        let origin = state.window(&"about".into()).unwrap().position;
        reduce_desktop(
            &mut state,
            &config,
            DesktopAction::BeginDrag {
                id: "about".into(),
                pointer: Point::new(origin.x + anchor_x, origin.y + anchor_y),
            },
        );
        for (x, y) in moves {
            reduce_desktop(
                &mut state,
                &config,
                DesktopAction::DragTo { id: "about".into(), pointer: Point::new(x, y), viewport },
            );
            let window = state.window(&"about".into()).unwrap();
            prop_assert!(window.position.x >= 0.0);
            prop_assert!(window.position.y >= 0.0);
            prop_assert!(window.position.x <= viewport.width - window.size.width);
            prop_assert!(window.position.y <= viewport.height - window.size.height - viewport.taskbar_height);
        }
    }
}
