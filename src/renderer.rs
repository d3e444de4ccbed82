//! Renderer abstraction for presenting props.

#[cfg(any(test, feature = "testing"))]
use std::sync::Arc;

#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Renderer abstraction for presenting props.
///
/// Implement this to plug a front end (terminal, web view, test capture) into
/// the runtime. [`render`](Self::render) is called once at start-up and then
/// after every processed event with props freshly derived from the model.
///
/// ```rust
/// use forkify_core::Renderer;
///
/// struct TitleLine(String);
///
/// #[derive(Default)]
/// struct Transcript(Vec<String>);
///
/// impl Renderer<TitleLine> for Transcript {
///     fn render(&mut self, props: TitleLine) {
///         self.0.push(props.0);
///     }
/// }
///
/// let mut transcript = Transcript::default();
/// transcript.render(TitleLine("Best Pizza Dough Ever".into()));
/// assert_eq!(transcript.0.len(), 1);
/// ```
pub trait Renderer<Props> {
    /// Present one frame.
    fn render(&mut self, props: Props);
}

impl<Props, R> Renderer<Props> for Box<R>
where
    R: Renderer<Props> + ?Sized,
{
    fn render(&mut self, props: Props) {
        (**self).render(props);
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures every rendered props value.
///
/// Only available with the `testing` feature. Clones share the same capture
/// buffer, so pass one clone to the runtime and keep another for assertions.
///
/// ```rust
/// use forkify_core::{Renderer, TestRenderer};
///
/// let renderer = TestRenderer::<u32>::new();
/// let mut handle = renderer.clone();
/// handle.render(7);
///
/// assert_eq!(renderer.count(), 1);
/// renderer.with_renders(|renders| assert_eq!(renders[0], 7));
/// ```
pub struct TestRenderer<Props> {
    frames: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            frames: Arc::clone(&self.frames),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.frames.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            frames: Arc::default(),
        }
    }

    /// Get a boxed renderer sharing this renderer's capture buffer.
    pub fn boxed(&self) -> Box<dyn Renderer<Props> + Send> {
        Box::new(self.clone())
    }

    /// Number of renders captured so far.
    pub fn count(&self) -> usize {
        self.frames.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// Useful both for assertions and for invoking callbacks embedded in
    /// previously rendered props.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        f(&self.frames.lock())
    }

    /// Access the most recent render, panicking if nothing was rendered yet.
    pub fn with_last<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Props) -> R,
    {
        self.with_renders(|renders| f(renders.last().expect("no props rendered yet")))
    }
}
