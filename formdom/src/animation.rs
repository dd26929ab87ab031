use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::transitions::{Easing, TransitionConfig};

/// Direction of a visibility transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fade {
    In,
    Out,
}

/// A single active transition.
#[derive(Debug, Clone)]
struct ActiveTransition {
    fade: Fade,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

/// Manages open/close transitions across events.
///
/// Transitions are presentational only: the element's visibility flag is
/// switched by the caller before the transition starts, and nothing here
/// feeds back into document state.
#[derive(Debug, Default)]
pub struct AnimationState {
    /// Currently active transitions keyed by element id.
    active: HashMap<String, ActiveTransition>,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_animating(&self, id: &str) -> bool {
        self.active.contains_key(id)
    }

    /// Start a transition on an element, replacing any in-flight one.
    /// Zero-duration transitions never become active.
    pub fn start(&mut self, id: &str, fade: Fade, config: TransitionConfig, now: Instant) {
        if config.is_instant() {
            self.active.remove(id);
            log::trace!("[animation] {id} {fade:?} completed instantly");
            return;
        }

        log::trace!(
            "[animation] {id} {fade:?} started duration={:?} easing={:?}",
            config.duration,
            config.easing
        );
        self.active.insert(
            id.to_string(),
            ActiveTransition {
                fade,
                start: now,
                duration: config.duration,
                easing: config.easing,
            },
        );
    }

    /// Prune completed transitions.
    pub fn update(&mut self, now: Instant) {
        self.active
            .retain(|_, transition| now.duration_since(transition.start) < transition.duration);
    }

    /// Current opacity of an animating element, `None` when it has settled.
    pub fn opacity(&self, id: &str, now: Instant) -> Option<f32> {
        let transition = self.active.get(id)?;
        let elapsed = now.duration_since(transition.start);
        if elapsed >= transition.duration {
            return None;
        }

        let t = elapsed.as_secs_f32() / transition.duration.as_secs_f32();
        let eased = transition.easing.apply(t);
        Some(match transition.fade {
            Fade::In => eased,
            Fade::Out => 1.0 - eased,
        })
    }
}
