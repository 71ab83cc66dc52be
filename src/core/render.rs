//=========================================================================
// Rendering Bridge
//=========================================================================
//
// Contract between screen management and the rendering backend.
//
// The backend (wgpu, a software framebuffer, a terminal, ...) lives
// outside this crate. Screens and transitions only ever talk to it
// through the `Renderer` trait, so backends can be swapped without
// touching screen logic.
//
// Frame shape:
//   begin_frame() → fill_rect()* → end_frame()
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Color;

//=== Rect ================================================================

/// Axis-aligned rectangle in backend pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Rectangle anchored at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

//=== Renderer ============================================================

/// Minimal drawing surface consumed by screens and transitions.
///
/// Each drawing client brackets its own commands in a
/// `begin_frame`/`end_frame` pair, the same way a sprite batch is begun
/// and ended per client. Implementations decide whether that maps to a
/// real frame boundary or to a batch flush.
pub trait Renderer {
    /// Starts a batch of drawing commands.
    fn begin_frame(&mut self);

    /// Fills `rect` with `color`. Opacity is already applied to `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Ends the current batch.
    fn end_frame(&mut self);

    /// The currently visible area.
    fn viewport(&self) -> Rect;
}

//=========================================================================
// Unit Tests
//=========================================================================
