//=========================================================================
// Aetheric Screens — Library Root
//
// Screen management for fixed-tick render loops.
//
// Responsibilities:
// - Own a single active screen and keep its lifecycle in step with the
//   host (initialize, load/unload content, dispose)
// - Swap screens behind a timed color fade, at the fade's midpoint
// - Route per-tick update and render calls to the right owner
//
// Typical usage:
// ```no_run
// use aetheric_screens::prelude::*;
//
// let mut renderer = MyBackend::new();
// let mut clock = FrameClock::new();
// let mut screens = ScreenManager::new();
//
// screens.initialize();
// screens.load_content();
// screens.load_screen(Box::new(Menu));
//
// loop {
//     screens.update(clock.tick());
//     screens.render(&mut renderer);
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the screen manager, the transition state machine and the
// collaborator traits they are driven through.
//
pub mod core;

pub mod prelude;
