//! The runtime that owns the model and drives the event loop.

use futures::future::BoxFuture;

use flume::Receiver;

use crate::{Controller, Effect, Emitter, Renderer};

/// Executes effect futures on an async executor.
///
/// Closures and function pointers taking a boxed future implement this
/// through the blanket implementation, so `|fut| { tokio::spawn(fut); }` is a
/// valid spawner.
pub trait Spawner {
    /// Spawn a future on the executor.
    fn spawn(&self, future: BoxFuture<'static, ()>);
}

impl<F> Spawner for F
where
    F: Fn(BoxFuture<'static, ()>),
{
    fn spawn(&self, future: BoxFuture<'static, ()>) {
        self(future)
    }
}

/// The runtime that orchestrates the event loop.
///
/// It:
/// 1. Initializes the model and bootstrap effects via [`Controller::init`]
/// 2. Processes queued events through [`Controller::update`]
/// 3. Derives props with [`Controller::view`]
/// 4. Delivers props to the [`Renderer`]
/// 5. Hands every resulting effect to the [`Spawner`]
///
/// Events may be emitted from any thread but are always processed one at a
/// time on the task awaiting [`Runtime::run`]. The model is owned here and
/// nowhere else.
pub struct Runtime<C, R, S>
where
    C: Controller,
    R: Renderer<C::Props>,
    S: Spawner,
{
    controller: C,
    renderer: R,
    event_receiver: Receiver<C::Event>,
    model: C::Model,
    emitter: Emitter<C::Event>,
    spawner: S,
}

impl<C, R, S> Runtime<C, R, S>
where
    C: Controller,
    R: Renderer<C::Props>,
    S: Spawner,
{
    /// Create a new runtime. Nothing happens until [`Runtime::run`] is awaited.
    pub fn new(init_model: C::Model, controller: C, renderer: R, spawner: S) -> Self {
        let (event_sender, event_receiver) = flume::unbounded();

        Runtime {
            controller,
            renderer,
            event_receiver,
            model: init_model,
            emitter: Emitter::new(event_sender),
            spawner,
        }
    }

    /// A handle for feeding events from outside the props callbacks.
    pub fn emitter(&self) -> Emitter<C::Event> {
        self.emitter.clone()
    }

    /// The current model.
    pub fn model(&self) -> &C::Model {
        &self.model
    }

    /// Initialize and run the event loop.
    ///
    /// Returns once every [`Emitter`] has been dropped, which never happens
    /// while the runtime itself is alive; front ends stop the loop by dropping
    /// this future.
    pub async fn run(&mut self) {
        self.start();

        while let Ok(event) = self.event_receiver.recv_async().await {
            self.step(event);
        }
    }

    fn start(&mut self) {
        let (model, effect) = self.controller.init(self.model.clone());
        self.model = model;

        let props = self.controller.view(&self.model, &self.emitter);
        self.renderer.render(props);

        self.spawn_effect(effect);
    }

    fn step(&mut self, event: C::Event) {
        let (model, effect) = self.controller.update(event, &self.model);

        let props = self.controller.view(&model, &self.emitter);
        self.renderer.render(props);

        self.model = model;
        self.spawn_effect(effect);
    }

    fn spawn_effect(&self, effect: Effect<C::Event>) {
        if let Some(future) = effect.execute(&self.emitter) {
            self.spawner.spawn(future);
        }
    }
}

#[cfg(any(test, feature = "testing"))]
/// Spawner function that drives futures to completion on the calling thread.
pub fn test_spawner_fn(fut: BoxFuture<'static, ()>) {
    futures::executor::block_on(fut);
}

#[cfg(any(test, feature = "testing"))]
/// Creates a spawner that completes every effect synchronously.
///
/// Combined with [`TestRuntime`] this makes asynchronous fetches against
/// ready futures deterministic: the response event is queued before
/// `spawn` returns.
pub fn create_test_spawner() -> fn(BoxFuture<'static, ()>) {
    test_spawner_fn
}

#[cfg(any(test, feature = "testing"))]
/// Driver returned by [`TestRuntime::run`] for manual event processing.
pub struct TestDriver<C, R, S>
where
    C: Controller,
    R: Renderer<C::Props>,
    S: Spawner,
{
    runtime: Runtime<C, R, S>,
}

#[cfg(any(test, feature = "testing"))]
impl<C, R, S> TestDriver<C, R, S>
where
    C: Controller,
    R: Renderer<C::Props>,
    S: Spawner,
{
    /// Process queued events until the queue is empty.
    ///
    /// Events queued by effects while processing are handled in the same call.
    pub fn process_events(&mut self) {
        while let Ok(event) = self.runtime.event_receiver.try_recv() {
            self.runtime.step(event);
        }
    }

    /// Queue an event as if a front end had emitted it.
    pub fn emit(&self, event: C::Event) {
        self.runtime.emitter.emit(event);
    }

    /// Queue an event and process the queue.
    pub fn send(&mut self, event: C::Event) {
        self.emit(event);
        self.process_events();
    }

    /// The current model.
    pub fn model(&self) -> &C::Model {
        &self.runtime.model
    }

    /// A handle for emitting events.
    pub fn emitter(&self) -> Emitter<C::Event> {
        self.runtime.emitter()
    }
}

#[cfg(any(test, feature = "testing"))]
/// Runtime variant without a background loop.
///
/// Only available with the `testing` feature or during tests. Events are
/// processed only when [`TestDriver::process_events`] is called, giving tests
/// precise control over timing.
///
/// ```rust
/// use forkify_core::{create_test_spawner, Controller, Effect, Emitter, TestRenderer, TestRuntime};
/// # #[derive(Clone)]
/// # struct Model { count: i32 }
/// # struct Counter;
/// # impl Controller for Counter {
/// #     type Event = ();
/// #     type Model = Model;
/// #     type Props = i32;
/// #     fn init(&self, model: Model) -> (Model, Effect<()>) { (model, Effect::none()) }
/// #     fn update(&self, _event: (), model: &Model) -> (Model, Effect<()>) {
/// #         (Model { count: model.count + 1 }, Effect::none())
/// #     }
/// #     fn view(&self, model: &Model, _emitter: &Emitter<()>) -> i32 { model.count }
/// # }
/// let renderer = TestRenderer::new();
/// let runtime = TestRuntime::new(Model { count: 0 }, Counter, renderer.clone(), create_test_spawner());
///
/// let mut driver = runtime.run();
/// driver.send(());
///
/// renderer.with_renders(|renders| assert_eq!(renders, &vec![0, 1]));
/// ```
pub struct TestRuntime<C, R, S>
where
    C: Controller,
    R: Renderer<C::Props>,
    S: Spawner,
{
    runtime: Runtime<C, R, S>,
}

#[cfg(any(test, feature = "testing"))]
impl<C, R, S> TestRuntime<C, R, S>
where
    C: Controller,
    R: Renderer<C::Props>,
    S: Spawner,
{
    pub fn new(init_model: C::Model, controller: C, renderer: R, spawner: S) -> Self {
        TestRuntime {
            runtime: Runtime::new(init_model, controller, renderer, spawner),
        }
    }

    /// Initialize, render the initial props, spawn the bootstrap effect and
    /// hand back a driver. Queued events are left unprocessed.
    pub fn run(mut self) -> TestDriver<C, R, S> {
        self.runtime.start();
        TestDriver {
            runtime: self.runtime,
        }
    }
}
