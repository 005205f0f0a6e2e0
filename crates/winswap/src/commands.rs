//! Subcommand implementations, generic over the window service so they can
//! run against the in-memory fake.

use std::{io::Write, thread};

use tracing::info;
use winswap_core::{SwapError, WindowDetector, WindowInfo, WindowService, WindowSwapper, gate};

use crate::{
    cli::{DetectArgs, DiagnoseArgs, PermissionsArgs, SwapArgs, SwapIdsArgs},
    error::{Error, Result},
    report,
};

/// List displays with their front window, optionally followed by all windows.
pub fn detect<S, W>(svc: &S, args: &DetectArgs, out: &mut W) -> Result<()>
where
    S: WindowService + ?Sized,
    W: Write,
{
    gate::ensure_access(svc)?;
    let detector = WindowDetector::new(svc);
    let displays = detector.list_displays();
    if displays.is_empty() {
        return Err(Error::NoDisplays);
    }
    let top = detector.top_window_per_display();
    info!(displays = displays.len(), assigned = top.len(), "detected top windows");

    writeln!(out, "Found {} screen(s):", displays.len())?;
    for (i, d) in displays.iter().enumerate() {
        writeln!(out)?;
        writeln!(out, "{}", report::display_summary(i, d, top.get(d.id)))?;
    }
    if let Some(note) = report::coverage_note(displays.len(), &top) {
        writeln!(out)?;
        writeln!(out, "{note}")?;
    }
    if args.all {
        writeln!(out)?;
        for line in report::window_list(&detector.list_top_level_windows(), args.limit) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Swap the front windows of two displays and show the result.
pub fn swap<S, W>(svc: &S, args: &SwapArgs, out: &mut W) -> Result<()>
where
    S: WindowService + ?Sized,
    W: Write,
{
    gate::ensure_access(svc)?;
    let detector = WindowDetector::new(svc);
    let displays = detector.list_displays();
    if displays.len() < 2 {
        return Err(Error::NotEnoughDisplays {
            found: displays.len(),
        });
    }
    let before = detector.top_window_per_display();
    writeln!(out, "Current window configuration:")?;
    writeln!(
        out,
        "{}",
        report::configuration(&displays, &before, "Current top window")
    )?;
    writeln!(out)?;
    writeln!(out, "Swapping windows...")?;

    let outcome = match WindowSwapper::new(svc).swap_top_windows() {
        Ok(outcome) => outcome,
        Err(err) => {
            if matches!(err, SwapError::PositionSetFailed(_)) {
                writeln!(out, "{}", report::REPOSITION_TIP)?;
            }
            return Err(err.into());
        }
    };
    info!(
        first = outcome.first.id,
        second = outcome.second.id,
        "swapped top windows"
    );
    writeln!(out, "{outcome}")?;

    if !args.settle.is_zero() {
        thread::sleep(args.settle);
    }
    let after = detector.top_window_per_display();
    writeln!(out)?;
    writeln!(out, "New window configuration:")?;
    writeln!(
        out,
        "{}",
        report::configuration(&displays, &after, "New top window")
    )?;
    Ok(())
}

/// Swap two windows by id.
pub fn swap_ids<S, W>(svc: &S, args: &SwapIdsArgs, out: &mut W) -> Result<()>
where
    S: WindowService + ?Sized,
    W: Write,
{
    let outcome = WindowSwapper::new(svc).swap_windows_by_id(args.first, args.second)?;
    info!(first = args.first, second = args.second, "swapped windows by id");
    writeln!(out, "{outcome}")?;
    Ok(())
}

/// Probe handle resolution and position reads for one window.
fn probe<S>(svc: &S, window: &WindowInfo) -> Vec<String>
where
    S: WindowService + ?Sized,
{
    let mut lines = vec![
        format!("Window: {} - {}", window.app_label(), window.title_label()),
        format!("  ID: {}, PID: {}", window.id, window.owner_pid),
    ];
    let Some(handle) = svc.resolve_handle(window) else {
        lines.push(format!(
            "  Window ID {} not found in accessibility windows",
            window.id
        ));
        return lines;
    };
    lines.push("  Accessibility handle resolved".to_string());
    match svc.read_position(&handle) {
        Some(p) => lines.push(format!(
            "  Can read position: ({}, {})",
            p.x as i64, p.y as i64
        )),
        None => lines.push("  Cannot read position".to_string()),
    }
    lines
}

/// Report, per window, whether it can be addressed for moving.
pub fn diagnose<S, W>(svc: &S, args: &DiagnoseArgs, out: &mut W) -> Result<()>
where
    S: WindowService + ?Sized,
    W: Write,
{
    gate::ensure_access(svc)?;
    let windows = WindowDetector::new(svc).list_top_level_windows();
    writeln!(out, "Found {} windows", windows.len())?;
    for window in windows.iter().take(args.limit) {
        writeln!(out)?;
        for line in probe(svc, window) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Print permission status, prompting first when asked.
pub fn show_permissions<W: Write>(args: &PermissionsArgs, out: &mut W) -> Result<()> {
    let mut status = permissions::check_permissions();
    if args.prompt && !status.accessibility_ok {
        status.accessibility_ok = permissions::request_accessibility();
    }
    writeln!(out, "{}", report::permission_status(&status))?;
    Ok(())
}
