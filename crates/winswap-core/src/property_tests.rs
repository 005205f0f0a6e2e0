use std::collections::HashSet;

use proptest::prelude::*;

use crate::{
    detector::{WindowDetector, associate},
    display::Display,
    fake::FakeWindowService,
    geom::Rect,
    swapper::WindowSwapper,
    window::WindowInfo,
};

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (
        -3000.0f64..3000.0,
        -2000.0f64..2000.0,
        0.0f64..2500.0,
        0.0f64..1600.0,
    )
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

fn displays_strategy() -> impl Strategy<Value = Vec<Display>> {
    prop::collection::vec(rect_strategy(), 0..5).prop_map(|frames| {
        frames
            .into_iter()
            .enumerate()
            .map(|(i, f)| Display::new(i as u32 + 1, f, format!("Display {}", i + 1)))
            .collect()
    })
}

fn windows_strategy() -> impl Strategy<Value = Vec<WindowInfo>> {
    prop::collection::vec(rect_strategy(), 0..12).prop_map(|frames| {
        frames
            .into_iter()
            .enumerate()
            .map(|(i, f)| WindowInfo::new(i as u32 + 100, 1000 + i as i32, f))
            .collect()
    })
}

proptest! {
    #[test]
    fn association_is_bounded_and_one_per_display(
        displays in displays_strategy(),
        windows in windows_strategy(),
    ) {
        let top = associate(&windows, &displays);
        let intersecting = windows
            .iter()
            .filter(|w| displays.iter().any(|d| d.frame.intersects(&w.frame)))
            .count();
        prop_assert!(top.len() <= displays.len().min(intersecting));

        let mut seen_displays = HashSet::new();
        let mut seen_windows = HashSet::new();
        for (d, w) in top.iter() {
            prop_assert!(seen_displays.insert(d.id));
            prop_assert!(seen_windows.insert(w.id));
            prop_assert!(d.frame.intersects(&w.frame));
        }
    }

    #[test]
    fn assigned_window_is_frontmost_intersecting_unclaimed(
        displays in displays_strategy(),
        windows in windows_strategy(),
    ) {
        let top = associate(&windows, &displays);
        for (d, w) in top.iter() {
            let pos = windows.iter().position(|x| x.id == w.id).unwrap_or(usize::MAX);
            // No window in front of it intersects this display without being
            // claimed by an earlier-enumerated display.
            for earlier in &windows[..pos] {
                if d.frame.intersects(&earlier.frame) {
                    prop_assert!(top.windows().any(|t| t.id == earlier.id));
                }
            }
        }
    }

    #[test]
    fn association_is_deterministic(
        displays in displays_strategy(),
        windows in windows_strategy(),
    ) {
        prop_assert_eq!(associate(&windows, &displays), associate(&windows, &displays));
    }

    #[test]
    fn double_swap_restores_positions(
        left in (0.0f64..1500.0, 0.0f64..900.0),
        right in (1920.0f64..3400.0, 0.0f64..900.0),
    ) {
        let svc = FakeWindowService::new();
        svc.set_displays(vec![
            Display::new(1, Rect::new(0.0, 0.0, 1920.0, 1080.0), "Left"),
            Display::new(2, Rect::new(1920.0, 0.0, 1920.0, 1080.0), "Right"),
        ]);
        let a = Rect::new(left.0, left.1, 400.0, 300.0);
        let b = Rect::new(right.0, right.1, 400.0, 300.0);
        svc.set_windows(vec![WindowInfo::new(1, 10, a), WindowInfo::new(2, 20, b)]);

        let swapper = WindowSwapper::new(&svc);
        prop_assert!(swapper.swap_top_windows().is_ok());
        prop_assert!(swapper.swap_top_windows().is_ok());
        prop_assert_eq!(svc.frame_of(1), Some(a));
        prop_assert_eq!(svc.frame_of(2), Some(b));
        prop_assert_eq!(
            WindowDetector::new(&svc).top_window_per_display().len(),
            2
        );
    }
}
