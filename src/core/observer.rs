//! Transition observers
//!
//! Enhancers that react to navigation register here instead of wrapping the
//! navigator. The chain is ordered and fixed at setup; every observer runs
//! once per accepted transition, after the navigator has moved.

use crate::core::{cmd::Cmd, state::navigator::Transition, state::AppState};

pub type Observer = Box<dyn FnMut(&Transition, &mut AppState) -> Vec<Cmd> + Send>;

/// Ordered list of named observers.
#[derive(Default)]
pub struct Observers {
    chain: Vec<(&'static str, Observer)>,
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Usage counter first, then the CTA rebind scheduler.
    pub fn with_defaults() -> Self {
        let mut observers = Self::new();
        observers
            .register("usage", count_slide_view)
            .register("cta-rebind", schedule_cta_rebind);
        observers
    }

    pub fn register<F>(&mut self, name: &'static str, observer: F) -> &mut Self
    where
        F: FnMut(&Transition, &mut AppState) -> Vec<Cmd> + Send + 'static,
    {
        self.chain.push((name, Box::new(observer)));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.chain.iter().map(|(name, _)| *name).collect()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Runs every observer in registration order and collects their commands.
    pub fn notify(&mut self, transition: &Transition, state: &mut AppState) -> Vec<Cmd> {
        self.chain
            .iter_mut()
            .flat_map(|(_, observer)| observer(transition, state))
            .collect()
    }
}

/// Counts a view of the slide that was navigated to.
pub fn count_slide_view(transition: &Transition, state: &mut AppState) -> Vec<Cmd> {
    state.usage.record_view(transition.to + 1);
    vec![]
}

/// Arriving at the final slide schedules a deferred rebind of its CTA controls.
pub fn schedule_cta_rebind(transition: &Transition, state: &mut AppState) -> Vec<Cmd> {
    if transition.to == state.navigator.last_index() {
        vec![Cmd::ScheduleCtaRebind {
            after: state.config.config.notice.cta_rebind_delay(),
        }]
    } else {
        vec![]
    }
}
