//! Position exchange between two windows.

use std::fmt::{self, Display, Formatter};

use tracing::{debug, trace};

use crate::{
    detector::WindowDetector,
    error::{Result, SwapError},
    gate,
    geom::Point,
    service::WindowService,
    window::{WindowId, WindowInfo},
};

/// Progress of a single swap operation.
///
/// Any transition may end the operation with an error instead. A failure in
/// [`SwapPhase::WritingSecond`] passes through [`SwapPhase::Restoring`]
/// before the error is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapPhase {
    /// Nothing done yet.
    Idle,
    /// Resolving accessibility handles for both windows.
    Resolving,
    /// Both original positions are known.
    PositionsRead,
    /// Moving the first window to the second's position.
    WritingFirst,
    /// Moving the second window to the first's original position.
    WritingSecond,
    /// Best-effort move of the first window back to where it was.
    Restoring,
    /// Both windows moved.
    Done,
}

impl Display for SwapPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Resolving => "resolving",
            Self::PositionsRead => "positions-read",
            Self::WritingFirst => "writing-first",
            Self::WritingSecond => "writing-second",
            Self::Restoring => "restoring",
            Self::Done => "done",
        };
        f.write_str(s)
    }
}

/// Confirmation of a completed swap.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapOutcome {
    /// Window moved first.
    pub first: WindowInfo,
    /// Window moved second.
    pub second: WindowInfo,
    /// Origin of `first` before the swap (now the origin of `second`).
    pub first_origin: Point,
    /// Origin of `second` before the swap (now the origin of `first`).
    pub second_origin: Point,
    /// Human-readable confirmation.
    pub message: String,
}

impl Display for SwapOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Swaps window positions through a [`WindowService`].
///
/// Single-threaded and blocking. Callers that share a service across threads
/// must serialize swaps themselves.
pub struct WindowSwapper<'a, S: ?Sized> {
    /// Backing service.
    service: &'a S,
}

impl<'a, S> WindowSwapper<'a, S>
where
    S: WindowService + ?Sized,
{
    /// Wrap a window service.
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Swap the front windows of exactly two displays.
    ///
    /// The first association entry (the frontmost of the two) moves first.
    pub fn swap_top_windows(&self) -> Result<SwapOutcome> {
        gate::ensure_access(self.service)?;
        let top = WindowDetector::new(self.service).top_window_per_display();
        let [(_, first), (_, second)] = <[_; 2]>::try_from(top.into_entries())
            .map_err(|entries: Vec<_>| SwapError::IncorrectWindowCount(entries.len()))?;
        self.exchange(first, second, "Successfully swapped windows".to_string())
    }

    /// Swap two specific windows found in a fresh enumeration.
    pub fn swap_windows_by_id(&self, first_id: WindowId, second_id: WindowId) -> Result<SwapOutcome> {
        gate::ensure_access(self.service)?;
        let all = WindowDetector::new(self.service).list_top_level_windows();
        let find = |id: WindowId| {
            all.iter()
                .find(|w| w.id == id)
                .cloned()
                .ok_or(SwapError::WindowNotFound(id))
        };
        let first = find(first_id)?;
        let second = find(second_id)?;
        self.exchange(
            first,
            second,
            format!("Successfully swapped windows {first_id} and {second_id}"),
        )
    }

    /// Resolve, read, and cross-write both positions.
    ///
    /// If the second write fails after the first succeeded, the first window
    /// is written back to its original position. That restore is
    /// fire-and-forget: its own failure is not reported, so the caller only
    /// learns that the second write failed.
    fn exchange(&self, first: WindowInfo, second: WindowInfo, message: String) -> Result<SwapOutcome> {
        let svc = self.service;
        let mut phase = SwapPhase::Idle;
        let mut advance = |next: SwapPhase| {
            trace!(from = %phase, to = %next, "swap phase");
            phase = next;
        };

        advance(SwapPhase::Resolving);
        let first_handle = svc
            .resolve_handle(&first)
            .ok_or_else(|| SwapError::HandleNotFound(first.clone()))?;
        let second_handle = svc
            .resolve_handle(&second)
            .ok_or_else(|| SwapError::HandleNotFound(second.clone()))?;

        let first_origin = svc
            .read_position(&first_handle)
            .ok_or_else(|| SwapError::PositionReadFailed(first.clone()))?;
        let second_origin = svc
            .read_position(&second_handle)
            .ok_or_else(|| SwapError::PositionReadFailed(second.clone()))?;
        advance(SwapPhase::PositionsRead);
        debug!(
            first = first.id,
            second = second.id,
            ?first_origin,
            ?second_origin,
            "swapping window positions"
        );

        advance(SwapPhase::WritingFirst);
        if !svc.write_position(&first_handle, second_origin) {
            return Err(SwapError::PositionSetFailed(first));
        }

        advance(SwapPhase::WritingSecond);
        if !svc.write_position(&second_handle, first_origin) {
            advance(SwapPhase::Restoring);
            let restored = svc.write_position(&first_handle, first_origin);
            debug!(window = first.id, restored, "restore after failed second write");
            return Err(SwapError::PositionSetFailed(second));
        }

        advance(SwapPhase::Done);
        Ok(SwapOutcome {
            first,
            second,
            first_origin,
            second_origin,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{display::Display, fake::FakeWindowService, geom::Rect};

    fn two_screen_service() -> FakeWindowService {
        let svc = FakeWindowService::new();
        svc.set_displays(vec![
            Display::new(1, Rect::new(0.0, 0.0, 1920.0, 1080.0), "Left"),
            Display::new(2, Rect::new(1920.0, 0.0, 1920.0, 1080.0), "Right"),
        ]);
        svc.set_windows(vec![
            WindowInfo::new(10, 500, Rect::new(100.0, 50.0, 800.0, 600.0)).with_app("Editor"),
            WindowInfo::new(20, 600, Rect::new(2000.0, 80.0, 900.0, 700.0)).with_app("Browser"),
        ]);
        svc
    }

    #[test]
    fn swap_exchanges_origins_and_keeps_sizes() {
        let svc = two_screen_service();
        let out = WindowSwapper::new(&svc).swap_top_windows().expect("swap");
        assert_eq!(out.first.id, 10);
        assert_eq!(out.second.id, 20);
        assert_eq!(out.to_string(), "Successfully swapped windows");
        assert_eq!(svc.frame_of(10), Some(Rect::new(2000.0, 80.0, 800.0, 600.0)));
        assert_eq!(svc.frame_of(20), Some(Rect::new(100.0, 50.0, 900.0, 700.0)));
    }

    #[test]
    fn permission_denied_short_circuits_before_enumeration() {
        let svc = two_screen_service();
        svc.set_access(false);
        let err = WindowSwapper::new(&svc).swap_top_windows().unwrap_err();
        assert_eq!(err, SwapError::PermissionDenied);
        assert_eq!(svc.enumeration_calls(), 0);
        assert!(svc.writes().is_empty());
    }

    #[test]
    fn missing_handle_for_second_window_fails_without_writes() {
        let svc = two_screen_service();
        svc.hide_handle(20);
        let err = WindowSwapper::new(&svc).swap_top_windows().unwrap_err();
        assert!(matches!(err, SwapError::HandleNotFound(ref w) if w.id == 20));
        assert!(svc.writes().is_empty());
    }

    #[test]
    fn unreadable_position_fails_without_writes() {
        let svc = two_screen_service();
        svc.fail_reads_for(10);
        let err = WindowSwapper::new(&svc).swap_top_windows().unwrap_err();
        assert!(matches!(err, SwapError::PositionReadFailed(ref w) if w.id == 10));
        assert!(svc.writes().is_empty());
    }

    #[test]
    fn first_write_failure_leaves_second_untouched() {
        let svc = two_screen_service();
        svc.push_write_outcomes(10, [false]);
        let err = WindowSwapper::new(&svc).swap_top_windows().unwrap_err();
        assert!(matches!(err, SwapError::PositionSetFailed(ref w) if w.id == 10));
        assert_eq!(svc.writes().len(), 1);
        assert_eq!(svc.frame_of(20).map(|r| r.origin()), Some(Point::new(2000.0, 80.0)));
    }

    #[test]
    fn failed_restore_is_swallowed() {
        let svc = two_screen_service();
        // First write succeeds, restore write fails; second window refuses.
        svc.push_write_outcomes(10, [true, false]);
        svc.push_write_outcomes(20, [false]);
        let err = WindowSwapper::new(&svc).swap_top_windows().unwrap_err();
        assert!(matches!(err, SwapError::PositionSetFailed(ref w) if w.id == 20));
        assert_eq!(svc.writes().len(), 3);
        // Restore was refused, so the first window stays where it was moved.
        assert_eq!(svc.frame_of(10).map(|r| r.origin()), Some(Point::new(2000.0, 80.0)));
    }

    #[test]
    fn swap_by_id_reports_both_ids() {
        let svc = two_screen_service();
        let out = WindowSwapper::new(&svc).swap_windows_by_id(20, 10).expect("swap");
        assert_eq!(out.message, "Successfully swapped windows 20 and 10");
        assert_eq!(out.first.id, 20);
        assert_eq!(svc.writes()[0].window, 20);
    }

    #[test]
    fn swap_by_id_ignores_non_top_level_windows() {
        let svc = two_screen_service();
        svc.push_window(WindowInfo::new(30, 700, Rect::new(0.0, 0.0, 1920.0, 24.0)).with_layer(24));
        let err = WindowSwapper::new(&svc).swap_windows_by_id(10, 30).unwrap_err();
        assert_eq!(err, SwapError::WindowNotFound(30));
    }

    #[test]
    fn window_count_error_reports_actual_count() {
        let svc = two_screen_service();
        svc.set_windows(vec![WindowInfo::new(10, 500, Rect::new(100.0, 50.0, 800.0, 600.0))]);
        let swapper = WindowSwapper::new(&svc);
        assert_eq!(
            swapper.swap_top_windows().unwrap_err(),
            SwapError::IncorrectWindowCount(1)
        );
        svc.set_windows(Vec::new());
        assert_eq!(
            swapper.swap_top_windows().unwrap_err(),
            SwapError::IncorrectWindowCount(0)
        );
        assert!(svc.writes().is_empty());
    }

    #[test]
    fn phase_names_are_stable() {
        assert_eq!(SwapPhase::WritingSecond.to_string(), "writing-second");
        assert_eq!(SwapPhase::Restoring.to_string(), "restoring");
    }
}
