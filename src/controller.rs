//! Controller trait defining the Model-View-Update contract.

use crate::{Effect, Emitter};

/// Application logic driven by the [`Runtime`](crate::Runtime).
///
/// Implementations provide three functions:
/// - [`init`](Self::init): prepare the starting model and bootstrap effects
/// - [`update`](Self::update): reduce `(Event, Model)` to `(Model, Effect)`
/// - [`view`](Self::view): derive renderable props from the model
///
/// The runtime owns the model and threads it through these calls; a controller
/// keeps no mutable application state of its own besides its collaborators.
pub trait Controller {
    /// Events the controller reacts to.
    type Event: Send + 'static;
    /// State threaded through [`update`](Self::update).
    type Model: Clone;
    /// Output of [`view`](Self::view), handed to the renderer.
    type Props;

    /// Initialize the runtime from the starting model.
    ///
    /// Called once before the first render. Use it to restore persisted state
    /// and to trigger bootstrap work such as loading the initial location.
    fn init(&self, model: Self::Model) -> (Self::Model, Effect<Self::Event>);

    /// Reduce an event to an updated model and side effects.
    ///
    /// All state changes happen here. Asynchronous work is returned as an
    /// [`Effect`] and reports back through further events.
    fn update(&self, event: Self::Event, model: &Self::Model) -> (Self::Model, Effect<Self::Event>);

    /// Derive props from the current model.
    ///
    /// The [`Emitter`] lets props carry callbacks that feed new events back
    /// into the runtime.
    fn view(&self, model: &Self::Model, emitter: &Emitter<Self::Event>) -> Self::Props;
}
