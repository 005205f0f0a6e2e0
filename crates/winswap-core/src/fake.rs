//! In-memory [`WindowService`] for deterministic tests (enabled with the
//! `test-utils` feature).
//!
//! Windows keep their frames in the fake; successful writes move them, so a
//! later enumeration observes the new positions.

use std::collections::{HashMap, HashSet, VecDeque};

use parking_lot::Mutex;
use tracing::debug;

use crate::{
    display::Display,
    geom::{Point, Rect},
    service::WindowService,
    window::{WindowId, WindowInfo, WindowListOptions},
};

/// Handle issued by [`FakeWindowService::resolve_handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FakeHandle(pub WindowId);

/// One recorded `write_position` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FakeWrite {
    /// Target window.
    pub window: WindowId,
    /// Requested origin.
    pub to: Point,
    /// Whether the fake accepted the write.
    pub accepted: bool,
}

/// Mutable state behind the fake.
#[derive(Debug, Default)]
struct State {
    /// Whether privileged access is granted.
    access: bool,
    /// Number of `request_privileged_access` calls.
    access_requests: usize,
    /// Number of window or display enumerations.
    enumerations: usize,
    /// Displays in enumeration order.
    displays: Vec<Display>,
    /// Windows in front-to-back order.
    windows: Vec<WindowInfo>,
    /// Windows whose owning process exposes no handle.
    hidden_handles: HashSet<WindowId>,
    /// Windows whose position cannot be read.
    failing_reads: HashSet<WindowId>,
    /// Scripted write outcomes per window; writes succeed once a script is drained.
    write_scripts: HashMap<WindowId, VecDeque<bool>>,
    /// Every write attempt, in order.
    writes: Vec<FakeWrite>,
}

/// Scriptable window service.
#[derive(Debug)]
pub struct FakeWindowService {
    /// Shared state; `&self` methods mutate through the lock.
    state: Mutex<State>,
}

impl Default for FakeWindowService {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeWindowService {
    /// Empty service with access granted.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                access: true,
                ..State::default()
            }),
        }
    }

    /// Grant or revoke privileged access.
    pub fn set_access(&self, granted: bool) {
        self.state.lock().access = granted;
    }

    /// Number of access prompts requested so far.
    pub fn access_requests(&self) -> usize {
        self.state.lock().access_requests
    }

    /// Number of window and display enumerations performed so far.
    pub fn enumeration_calls(&self) -> usize {
        self.state.lock().enumerations
    }

    /// Replace the display list.
    pub fn set_displays(&self, displays: Vec<Display>) {
        self.state.lock().displays = displays;
    }

    /// Replace the window list (front to back).
    pub fn set_windows(&self, windows: Vec<WindowInfo>) {
        self.state.lock().windows = windows;
    }

    /// Append a window behind the existing ones.
    pub fn push_window(&self, window: WindowInfo) {
        self.state.lock().windows.push(window);
    }

    /// Make `resolve_handle` fail for `id`.
    pub fn hide_handle(&self, id: WindowId) {
        self.state.lock().hidden_handles.insert(id);
    }

    /// Make `read_position` fail for `id`.
    pub fn fail_reads_for(&self, id: WindowId) {
        self.state.lock().failing_reads.insert(id);
    }

    /// Queue write outcomes for `id`, consumed one per write.
    pub fn push_write_outcomes<I>(&self, id: WindowId, outcomes: I)
    where
        I: IntoIterator<Item = bool>,
    {
        self.state
            .lock()
            .write_scripts
            .entry(id)
            .or_default()
            .extend(outcomes);
    }

    /// Current frame of `id`, if the window exists.
    pub fn frame_of(&self, id: WindowId) -> Option<Rect> {
        self.state
            .lock()
            .windows
            .iter()
            .find(|w| w.id == id)
            .map(|w| w.frame)
    }

    /// Recorded write attempts.
    pub fn writes(&self) -> Vec<FakeWrite> {
        self.state.lock().writes.clone()
    }
}

impl WindowService for FakeWindowService {
    type Handle = FakeHandle;

    fn has_privileged_access(&self) -> bool {
        self.state.lock().access
    }

    fn request_privileged_access(&self) {
        self.state.lock().access_requests += 1;
    }

    fn enumerate_windows(&self, _options: WindowListOptions) -> Vec<WindowInfo> {
        let mut st = self.state.lock();
        st.enumerations += 1;
        st.windows.clone()
    }

    fn enumerate_displays(&self) -> Vec<Display> {
        let mut st = self.state.lock();
        st.enumerations += 1;
        st.displays.clone()
    }

    fn resolve_handle(&self, window: &WindowInfo) -> Option<FakeHandle> {
        let st = self.state.lock();
        let live = st.windows.iter().any(|w| w.id == window.id);
        (live && !st.hidden_handles.contains(&window.id)).then_some(FakeHandle(window.id))
    }

    fn read_position(&self, handle: &FakeHandle) -> Option<Point> {
        let st = self.state.lock();
        if st.failing_reads.contains(&handle.0) {
            return None;
        }
        st.windows
            .iter()
            .find(|w| w.id == handle.0)
            .map(|w| w.frame.origin())
    }

    fn write_position(&self, handle: &FakeHandle, to: Point) -> bool {
        let mut st = self.state.lock();
        let accepted = st
            .write_scripts
            .get_mut(&handle.0)
            .and_then(VecDeque::pop_front)
            .unwrap_or(true);
        if accepted {
            if let Some(w) = st.windows.iter_mut().find(|w| w.id == handle.0) {
                w.frame = w.frame.with_origin(to);
            }
        }
        debug!(window = handle.0, ?to, accepted, "fake write_position");
        st.writes.push(FakeWrite {
            window: handle.0,
            to,
            accepted,
        });
        accepted
    }
}
