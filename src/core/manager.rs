//=========================================================================
// Screen Manager
//=========================================================================
//
// Owns the single active screen and the single in-flight transition.
//
// Architecture:
//   ScreenManager
//     ├─ active_screen: Option<Box<dyn Screen>>
//     ├─ active_transition: Option<ActiveTransition>
//     │     ├─ transition: Transition
//     │     └─ pending: Option<Box<dyn Screen>>   (swapped in at midpoint)
//     └─ requests: Receiver<ScreenRequest>        (fed by ScreenManagerHandle)
//
// Flow per tick:
//   update() → Transition::advance() or Screen::update()
//            → PhaseChanged: swap pending screen in
//            → Completed:    dispose transition, clear slot
//            → process_requests() at tick boundary
//   render() → Screen::render() → Transition::render() (overlay on top)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{Renderer, Screen, Transition, TransitionEvent};

//=== Screen Request ======================================================

/// Screen change queued through a [`ScreenManagerHandle`].
pub enum ScreenRequest {
    /// Swap immediately, as [`ScreenManager::load_screen`].
    Load(Box<dyn Screen>),

    /// Swap at the transition midpoint, as [`ScreenManager::load_screen_with`].
    LoadWith(Box<dyn Screen>, Transition),
}

impl fmt::Debug for ScreenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(_) => f.write_str("Load(..)"),
            Self::LoadWith(_, transition) => {
                f.debug_tuple("LoadWith").field(&"..").field(transition).finish()
            }
        }
    }
}

//=== Screen Manager Handle ===============================================

/// Back-reference from a screen to its owning manager.
///
/// Handed to every screen through [`Screen::attach`]. Requests are queued
/// and applied at the end of the current [`ScreenManager::update`] call,
/// so a screen can ask to be replaced from inside its own `update`.
#[derive(Debug, Clone)]
pub struct ScreenManagerHandle {
    sender: Sender<ScreenRequest>,
}

impl ScreenManagerHandle {
    /// Queues an immediate screen swap.
    pub fn load_screen(&self, screen: Box<dyn Screen>) {
        self.send(ScreenRequest::Load(screen));
    }

    /// Queues a transition-guarded screen swap.
    pub fn load_screen_with(&self, screen: Box<dyn Screen>, transition: Transition) {
        self.send(ScreenRequest::LoadWith(screen, transition));
    }

    fn send(&self, request: ScreenRequest) {
        // The manager only goes away together with its screens, so a
        // disconnected channel means the request is moot.
        if self.sender.send(request).is_err() {
            warn!(target: "screens", "Screen manager dropped, discarding screen request");
        }
    }
}

//=== Screen Manager Builder ==============================================

/// Builder for configuring a [`ScreenManager`].
///
/// # Default Values
///
/// - **update_during_transitions**: `false`
///
/// # Examples
///
/// ```rust
/// use aetheric_screens::prelude::*;
///
/// let manager = ScreenManagerBuilder::new()
///     .with_update_during_transitions(true)
///     .build();
///
/// assert!(manager.update_during_transitions());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScreenManagerBuilder {
    update_during_transitions: bool,
}

impl ScreenManagerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the active screen keeps receiving update ticks while a
    /// transition is running.
    ///
    /// Default: false
    pub fn with_update_during_transitions(mut self, enabled: bool) -> Self {
        self.update_during_transitions = enabled;
        self
    }

    /// Builds the manager. No screen is active yet.
    pub fn build(self) -> ScreenManager {
        info!(
            target: "screens",
            "Building screen manager (update during transitions: {})",
            self.update_during_transitions
        );

        let (sender, requests) = unbounded();

        ScreenManager {
            active_screen: None,
            active_transition: None,
            is_initialized: false,
            is_loaded: false,
            update_during_transitions: self.update_during_transitions,
            handle: ScreenManagerHandle { sender },
            requests,
        }
    }
}

//=== Screen Manager ======================================================

/// In-flight transition and the screen it will swap in at its midpoint.
struct ActiveTransition {
    transition: Transition,
    pending: Option<Box<dyn Screen>>,
}

/// Single-slot screen lifecycle coordinator.
///
/// Keeps the active screen's lifecycle in step with the manager's own:
/// a screen loaded after [`initialize`](Self::initialize) is initialized
/// on the spot, and one loaded after [`load_content`](Self::load_content)
/// gets its content loaded on the spot.
///
/// # Examples
///
/// ```rust
/// use aetheric_screens::prelude::*;
///
/// struct Menu;
/// impl Screen for Menu {
///     fn update(&mut self, _elapsed_seconds: f32) {}
///     fn render(&mut self, _renderer: &mut dyn Renderer) {}
/// }
///
/// struct Gameplay;
/// impl Screen for Gameplay {
///     fn update(&mut self, _elapsed_seconds: f32) {}
///     fn render(&mut self, _renderer: &mut dyn Renderer) {}
/// }
///
/// let mut manager = ScreenManager::new();
/// manager.initialize();
/// manager.load_content();
/// manager.load_screen(Box::new(Menu));
///
/// let fade = Transition::new(Color::BLACK, 0.5).unwrap();
/// manager.load_screen_with(Box::new(Gameplay), fade);
/// assert!(manager.is_transitioning());
///
/// manager.update(0.25); // midpoint: Gameplay swapped in
/// manager.update(0.25); // fade cleared
/// assert!(!manager.is_transitioning());
/// ```
pub struct ScreenManager {
    active_screen: Option<Box<dyn Screen>>,
    active_transition: Option<ActiveTransition>,
    is_initialized: bool,
    is_loaded: bool,
    update_during_transitions: bool,
    handle: ScreenManagerHandle,
    requests: Receiver<ScreenRequest>,
}

impl ScreenManager {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with default settings.
    pub fn new() -> Self {
        ScreenManagerBuilder::new().build()
    }

    pub fn builder() -> ScreenManagerBuilder {
        ScreenManagerBuilder::new()
    }

    /// Returns a handle for queueing screen changes from outside the
    /// manager. Screens receive one automatically on attach.
    pub fn handle(&self) -> ScreenManagerHandle {
        self.handle.clone()
    }

    //--- Screen Loading ---------------------------------------------------

    /// Replaces the active screen immediately.
    ///
    /// The previous screen (if any) is unloaded and disposed before the new
    /// one is attached. A transition-guarded swap still pending at this
    /// point is cancelled; its fade keeps running but swaps nothing.
    pub fn load_screen(&mut self, screen: Box<dyn Screen>) {
        if let Some(active) = self.active_transition.as_mut() {
            if active.pending.take().is_some() {
                warn!(
                    target: "screens",
                    "Screen loaded during transition, discarding pending screen"
                );
            }
        }

        self.swap_screen(screen);
    }

    /// Replaces the active screen at the midpoint of `transition`.
    ///
    /// The manager takes exclusive ownership of `transition`, drives it from
    /// [`update`](Self::update) and disposes it once it completes. A
    /// transition already in flight is disposed and its pending screen
    /// discarded.
    pub fn load_screen_with(&mut self, screen: Box<dyn Screen>, transition: Transition) {
        debug_assert!(
            !transition.is_completed() && !transition.is_disposed(),
            "transition must be fresh when handed to the screen manager"
        );

        if let Some(mut previous) = self.active_transition.take() {
            warn!(
                target: "screens",
                "Transition replaced before completion (pending screen discarded: {})",
                previous.pending.is_some()
            );
            previous.transition.dispose();
        }

        debug!(
            target: "screens",
            "Beginning transition ({:.3}s)",
            transition.duration()
        );

        self.active_transition = Some(ActiveTransition {
            transition,
            pending: Some(screen),
        });
    }

    //--- Lifecycle --------------------------------------------------------

    /// Marks the manager initialized and initializes the active screen.
    ///
    /// Intended to be called once; repeated calls are ignored.
    pub fn initialize(&mut self) {
        if self.is_initialized {
            debug!(target: "screens", "Screen manager already initialized");
            return;
        }

        info!(target: "screens", "Initializing screen manager");

        if let Some(screen) = self.active_screen.as_mut() {
            screen.initialize();
        }
        self.is_initialized = true;
    }

    /// Loads content for the active screen and for every screen loaded
    /// afterwards, until [`unload_content`](Self::unload_content).
    pub fn load_content(&mut self) {
        if self.is_loaded {
            debug!(target: "screens", "Content already loaded");
            return;
        }

        info!(target: "screens", "Loading screen content");

        if let Some(screen) = self.active_screen.as_mut() {
            screen.load_content();
        }
        self.is_loaded = true;
    }

    /// Unloads content of the active screen.
    pub fn unload_content(&mut self) {
        if !self.is_loaded {
            debug!(target: "screens", "Content not loaded, nothing to unload");
            return;
        }

        info!(target: "screens", "Unloading screen content");

        if let Some(screen) = self.active_screen.as_mut() {
            screen.unload_content();
        }
        self.is_loaded = false;
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances the active transition, or the active screen when no
    /// transition is running.
    ///
    /// With `update_during_transitions` enabled the active screen is
    /// updated first, then the transition advances. Requests queued
    /// through a [`ScreenManagerHandle`] are applied last.
    pub fn update(&mut self, elapsed_seconds: f32) {
        let event = match self.active_transition.as_mut() {
            Some(active) => {
                if self.update_during_transitions {
                    if let Some(screen) = self.active_screen.as_mut() {
                        screen.update(elapsed_seconds);
                    }
                }
                active.transition.advance(elapsed_seconds)
            }
            None => {
                if let Some(screen) = self.active_screen.as_mut() {
                    screen.update(elapsed_seconds);
                }
                None
            }
        };

        match event {
            Some(TransitionEvent::PhaseChanged) => self.on_transition_midpoint(),
            Some(TransitionEvent::Completed) => self.on_transition_completed(),
            None => {}
        }

        self.process_requests();
    }

    /// Draws the active screen, then the transition overlay on top.
    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        if let Some(screen) = self.active_screen.as_mut() {
            screen.render(renderer);
        }

        if let Some(active) = self.active_transition.as_ref() {
            active.transition.render(renderer);
        }
    }

    //--- Configuration ----------------------------------------------------

    pub fn update_during_transitions(&self) -> bool {
        self.update_during_transitions
    }

    pub fn set_update_during_transitions(&mut self, enabled: bool) {
        self.update_during_transitions = enabled;
    }

    //--- Queries ----------------------------------------------------------

    pub fn has_active_screen(&self) -> bool {
        self.active_screen.is_some()
    }

    pub fn active_screen(&self) -> Option<&dyn Screen> {
        self.active_screen.as_deref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.active_transition.is_some()
    }

    pub fn active_transition(&self) -> Option<&Transition> {
        self.active_transition.as_ref().map(|active| &active.transition)
    }

    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    pub fn is_content_loaded(&self) -> bool {
        self.is_loaded
    }

    //--- Internal Helpers -------------------------------------------------

    fn swap_screen(&mut self, mut screen: Box<dyn Screen>) {
        if let Some(mut previous) = self.active_screen.take() {
            debug!(target: "screens", "Unloading and disposing previous screen");
            previous.unload_content();
            previous.dispose();
        }

        screen.attach(self.handle.clone());

        if self.is_initialized {
            screen.initialize();
        }

        if self.is_loaded {
            screen.load_content();
        }

        debug!(target: "screens", "Screen activated");
        self.active_screen = Some(screen);
    }

    fn on_transition_midpoint(&mut self) {
        let pending = self
            .active_transition
            .as_mut()
            .and_then(|active| active.pending.take());

        match pending {
            Some(screen) => self.swap_screen(screen),
            None => debug!(target: "screens", "Transition midpoint with no pending screen"),
        }
    }

    fn on_transition_completed(&mut self) {
        if let Some(mut active) = self.active_transition.take() {
            active.transition.dispose();
            debug!(target: "screens", "Transition released");
        }
    }

    fn process_requests(&mut self) {
        // Requests queued while these are applied (e.g. from a new screen's
        // initialize) wait for the next tick.
        let requests: Vec<ScreenRequest> = self.requests.try_iter().collect();

        for request in requests {
            match request {
                ScreenRequest::Load(screen) => self.load_screen(screen),
                ScreenRequest::LoadWith(screen, transition) => {
                    self.load_screen_with(screen, transition)
                }
            }
        }
    }
}

impl Default for ScreenManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScreenManager {
    fn drop(&mut self) {
        if let Some(mut active) = self.active_transition.take() {
            active.transition.dispose();
        }

        if let Some(mut screen) = self.active_screen.take() {
            if self.is_loaded {
                screen.unload_content();
            }
            screen.dispose();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
