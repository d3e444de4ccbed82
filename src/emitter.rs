//! Event emitter shared between effects, props callbacks and front ends.

use flume::Sender;

/// Handle for queueing events onto the runtime.
///
/// Clone it into effects or UI callbacks; every clone feeds the same queue.
/// The underlying channel is lock-free, so emitting from another thread (a
/// stdin reader, an HTTP task) is safe.
///
/// # Example
///
/// ```rust
/// use forkify_core::{Controller, Effect, Emitter};
///
/// enum Event { Click }
///
/// #[derive(Clone)]
/// struct Model { clicks: u32 }
///
/// struct Props {
///     clicks: u32,
///     on_click: Box<dyn Fn()>,
/// }
///
/// struct Clicker;
///
/// impl Controller for Clicker {
///     type Event = Event;
///     type Model = Model;
///     type Props = Props;
///
///     fn init(&self, model: Model) -> (Model, Effect<Event>) {
///         (model, Effect::none())
///     }
///
///     fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
///         match event {
///             Event::Click => (Model { clicks: model.clicks + 1 }, Effect::none()),
///         }
///     }
///
///     fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
///         let emitter = emitter.clone();
///         Props {
///             clicks: model.clicks,
///             on_click: Box::new(move || emitter.emit(Event::Click)),
///         }
///     }
/// }
/// ```
pub struct Emitter<Event: Send>(Sender<Event>);

impl<Event: Send> Clone for Emitter<Event> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Event: Send> Emitter<Event> {
    pub(crate) fn new(sender: Sender<Event>) -> Self {
        Self(sender)
    }

    /// Queue an event for processing.
    ///
    /// Events emitted after the runtime has been dropped are discarded.
    pub fn emit(&self, event: Event) {
        if self.0.send(event).is_err() {
            tracing::trace!("runtime stopped, dropping event");
        }
    }
}

impl<Event: Send> core::fmt::Debug for Emitter<Event> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Emitter")
            .field("queued", &self.0.len())
            .finish()
    }
}
