//=========================================================================
// Screen
//=========================================================================
//
// Lifecycle contract for full-application views (menu, gameplay, pause).
//
// Lifecycle, as driven by ScreenManager:
//   attach → initialize → load_content → (update, render)* →
//   unload_content → dispose
//
// `initialize` and `load_content` may arrive at attach time or later,
// depending on how far the manager itself has progressed.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Renderer, ScreenManagerHandle};

//=== Screen Trait ========================================================

/// Defines screen behavior with lifecycle hooks, update and render.
///
/// The manager owns at most one screen at a time and never inspects which
/// concrete type it holds.
///
/// # Minimal Implementation
///
/// Only `update()` and `render()` are required. Lifecycle hooks default to
/// doing nothing:
///
/// ```rust
/// # use aetheric_screens::prelude::*;
/// struct TitleScreen;
///
/// impl Screen for TitleScreen {
///     fn update(&mut self, _elapsed_seconds: f32) {}
///
///     fn render(&mut self, renderer: &mut dyn Renderer) {
///         let viewport = renderer.viewport();
///         renderer.begin_frame();
///         renderer.fill_rect(viewport, Color::rgb(0.1, 0.1, 0.3));
///         renderer.end_frame();
///     }
/// }
/// ```
pub trait Screen: Send {
    /// Hands the screen its owning manager. Called exactly once, when the
    /// screen becomes active, before any other lifecycle hook.
    ///
    /// Keep the handle to request screen changes from `update`.
    fn attach(&mut self, _manager: ScreenManagerHandle) {}

    /// One-time setup that does not depend on loaded content.
    fn initialize(&mut self) {}

    /// Acquires the screen's content (textures, sounds, ...).
    fn load_content(&mut self) {}

    /// Releases what `load_content` acquired.
    fn unload_content(&mut self) {}

    /// Advances screen logic by `elapsed_seconds`.
    fn update(&mut self, elapsed_seconds: f32);

    /// Draws the screen.
    fn render(&mut self, renderer: &mut dyn Renderer);

    /// Final teardown. The screen is dropped right after.
    fn dispose(&mut self) {}
}
