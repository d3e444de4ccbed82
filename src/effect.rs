//! Declarative effect system for describing deferred event production.

use core::future::Future;

use futures::future::{self, BoxFuture, FutureExt};

use crate::Emitter;

type EffectFn<Event> = Box<dyn FnOnce(Emitter<Event>) -> BoxFuture<'static, ()> + Send>;

/// Declarative description of work that produces events.
///
/// Effects are returned from [`Controller::init`](crate::Controller::init) and
/// [`Controller::update`](crate::Controller::update) alongside the new model.
/// The runtime hands the resulting future to its [`Spawner`](crate::Spawner),
/// so an effect never touches the model directly: whatever it learns comes back
/// as an event.
///
/// # Example
///
/// ```rust
/// use forkify_core::Effect;
///
/// enum Event {
///     Refresh,
///     Loaded(String),
/// }
///
/// // Trigger a follow-up event
/// let effect = Effect::just(Event::Refresh);
///
/// // Asynchronous work that reports back once it resolves
/// let effect = Effect::future(|| async { Event::Loaded("cached".to_string()) });
///
/// // Combine multiple effects
/// let effect = Effect::batch(vec![
///     Effect::just(Event::Refresh),
///     Effect::future(|| async { Event::Loaded("fresh".to_string()) }),
/// ]);
///
/// // No side effects
/// let effect: Effect<Event> = Effect::none();
/// assert!(effect.is_none());
/// ```
pub struct Effect<Event: Send>(Option<EffectFn<Event>>);

impl<Event: Send + 'static> Effect<Event> {
    /// Create an empty effect.
    pub fn none() -> Self {
        Self(None)
    }

    /// Create an effect that emits a single event as soon as it is executed.
    pub fn just(event: Event) -> Self {
        Self(Some(Box::new(move |emitter: Emitter<Event>| {
            emitter.emit(event);
            future::ready(()).boxed()
        })))
    }

    /// Create an effect from asynchronous work.
    ///
    /// `work` is invoked when the effect is executed and the event its future
    /// resolves to is emitted on completion.
    pub fn future<F, Fut>(work: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Event> + Send + 'static,
    {
        Self(Some(Box::new(move |emitter: Emitter<Event>| {
            async move {
                let event = work().await;
                emitter.emit(event);
            }
            .boxed()
        })))
    }

    /// Combine multiple effects into a single effect.
    ///
    /// Immediate events are emitted in the order the effects were given;
    /// asynchronous work is driven concurrently.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        let effects: Vec<_> = effects.into_iter().filter(|e| !e.is_none()).collect();
        if effects.is_empty() {
            return Self::none();
        }

        Self(Some(Box::new(move |emitter: Emitter<Event>| {
            let pending: Vec<_> = effects
                .into_iter()
                .filter_map(|effect| effect.execute(&emitter))
                .collect();
            future::join_all(pending).map(|_| ()).boxed()
        })))
    }

    /// Whether this effect carries no work at all.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Start the effect, returning the future that completes its work.
    ///
    /// Returns `None` for [`Effect::none`] so the runtime can skip spawning.
    pub fn execute(self, emitter: &Emitter<Event>) -> Option<BoxFuture<'static, ()>> {
        self.0.map(|run| run(emitter.clone()))
    }
}

impl<Event: Send + 'static> Default for Effect<Event> {
    fn default() -> Self {
        Self::none()
    }
}

impl<Event: Send> core::fmt::Debug for Effect<Event> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Effect")
            .field(&if self.0.is_some() { "pending" } else { "none" })
            .finish()
    }
}
