//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_screens::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Screen system
pub use crate::core::{Screen, ScreenManager, ScreenManagerBuilder, ScreenManagerHandle};

// Transitions
pub use crate::core::{Transition, TransitionError, TransitionEvent, TransitionPhase};

// Collaborators
pub use crate::core::{Color, FrameClock, Rect, Renderer};
