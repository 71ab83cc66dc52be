//=========================================================================
// Screen Systems
//=========================================================================
//
// Single-slot screen management with fade transitions.
//
// Architecture:
//   ScreenManager (root)
//     ├─ Box<dyn Screen>  active screen
//     └─ Transition       in-flight fade (leaf, no manager dependency)
//
// Collaborators consumed through traits:
//   Renderer   → fill the visible area with a color
//   FrameClock → elapsed seconds per tick
//
//=========================================================================

//=== Module Declarations =================================================

mod clock;
mod color;
mod manager;
mod render;
mod screen;
mod signal;
mod transition;

#[cfg(test)]
mod testing;

//=== Public API ==========================================================

pub use clock::FrameClock;
pub use color::Color;
pub use manager::{ScreenManager, ScreenManagerBuilder, ScreenManagerHandle, ScreenRequest};
pub use render::{Rect, Renderer};
pub use screen::Screen;
pub use signal::{Signal, SubscriptionId};
pub use transition::{Transition, TransitionError, TransitionEvent, TransitionPhase};
