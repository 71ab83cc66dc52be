//=========================================================================
// Test Doubles
//=========================================================================
//
// Recording stubs for the rendering and screen collaborators. Both write
// into one shared `CallLog`, so tests can assert cross-object ordering
// (e.g. screen drawn before the transition overlay).
//
//=========================================================================

use std::sync::{Arc, Mutex};

use super::{Color, Rect, Renderer, Screen, ScreenManagerHandle};

//=== CallLog =============================================================

/// Shared, ordered record of collaborator calls.
#[derive(Debug, Clone, Default)]
pub(crate) struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub(crate) fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Returns all entries and empties the log.
    pub(crate) fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }

    /// Number of entries equal to `entry`.
    pub(crate) fn count(&self, entry: &str) -> usize {
        self.0.lock().unwrap().iter().filter(|e| *e == entry).count()
    }
}

//=== RecordingRenderer ===================================================

pub(crate) struct RecordingRenderer {
    log: CallLog,
    fills: Vec<(Rect, Color)>,
    viewport: Rect,
}

impl RecordingRenderer {
    pub(crate) fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            fills: Vec::new(),
            viewport: Rect::from_size(800.0, 600.0),
        }
    }

    pub(crate) fn fills(&self) -> Vec<(Rect, Color)> {
        self.fills.clone()
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) {
        self.log.push("begin_frame");
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.log.push("fill_rect");
        self.fills.push((rect, color));
    }

    fn end_frame(&mut self) {
        self.log.push("end_frame");
    }

    fn viewport(&self) -> Rect {
        self.viewport
    }
}

//=== RecordingScreen =====================================================

type UpdateHook = Box<dyn FnMut(&ScreenManagerHandle) + Send>;

/// Screen that logs every lifecycle call as `"<name>.<hook>"`.
pub(crate) struct RecordingScreen {
    name: &'static str,
    log: CallLog,
    handle: Option<ScreenManagerHandle>,
    on_update: Option<UpdateHook>,
}

impl RecordingScreen {
    pub(crate) fn new(name: &'static str, log: &CallLog) -> Self {
        Self {
            name,
            log: log.clone(),
            handle: None,
            on_update: None,
        }
    }

    pub(crate) fn boxed(name: &'static str, log: &CallLog) -> Box<dyn Screen> {
        Box::new(Self::new(name, log))
    }

    /// Runs `hook` with the attached manager handle on every update.
    pub(crate) fn on_update<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&ScreenManagerHandle) + Send + 'static,
    {
        self.on_update = Some(Box::new(hook));
        self
    }

    fn record(&self, hook: &str) {
        self.log.push(format!("{}.{}", self.name, hook));
    }
}

impl Screen for RecordingScreen {
    fn attach(&mut self, manager: ScreenManagerHandle) {
        self.record("attach");
        self.handle = Some(manager);
    }

    fn initialize(&mut self) {
        self.record("initialize");
    }

    fn load_content(&mut self) {
        self.record("load_content");
    }

    fn unload_content(&mut self) {
        self.record("unload_content");
    }

    fn update(&mut self, _elapsed_seconds: f32) {
        self.record("update");
        if let (Some(hook), Some(handle)) = (self.on_update.as_mut(), self.handle.as_ref()) {
            hook(handle);
        }
    }

    fn render(&mut self, _renderer: &mut dyn Renderer) {
        self.record("render");
    }

    fn dispose(&mut self) {
        self.record("dispose");
    }
}
