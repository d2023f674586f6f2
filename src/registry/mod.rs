//! Lazy View Registry and the loading boundary state machine.
//!
//! Eager views are ready from the start. Lazy views start `Idle`; the first
//! request hands back the loader future and moves the slot to `Loading`;
//! completion moves it to `Ready`. Later requests reuse the cached module and
//! never call the loader again.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use tracing::{debug, warn};

use crate::app::UiState;
use crate::error::LoadError;
use crate::model::ViewKind;
use crate::router::ViewProps;

/// A renderable view. Sees only its prop slice and the host's UI state.
pub trait ViewModule: fmt::Debug + Send + Sync {
    fn kind(&self) -> ViewKind;

    fn render(&self, frame: &mut Frame, area: Rect, props: &ViewProps, ui: &UiState);

    /// Keys the host did not consume. Returns true if the view acted on it.
    fn handle_key(&self, props: &ViewProps, ui: &UiState, key: KeyEvent) -> bool;
}

pub type LoadResult = Result<Arc<dyn ViewModule>, LoadError>;

pub type LoadFuture = Pin<Box<dyn Future<Output = LoadResult> + Send>>;

type Loader = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// Observable phase of one registry slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    Ready,
}

enum Slot {
    Ready(Arc<dyn ViewModule>),
    Idle(Loader),
    Loading,
}

/// Answer to [`ViewRegistry::request`].
pub enum Request {
    Ready(Arc<dyn ViewModule>),
    /// A load is already in flight
    Pending,
    /// First request: the caller must drive this future and report back
    /// through [`ViewRegistry::complete`]
    Load(LoadFuture),
    /// No registration for this view
    Missing,
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Ready(module) => f.debug_tuple("Ready").field(&module.kind()).finish(),
            Request::Pending => f.write_str("Pending"),
            Request::Load(_) => f.write_str("Load"),
            Request::Missing => f.write_str("Missing"),
        }
    }
}

#[derive(Default)]
pub struct ViewRegistry {
    slots: HashMap<ViewKind, Slot>,
    loads_started: usize,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_eager(&mut self, module: Arc<dyn ViewModule>) {
        self.slots.insert(module.kind(), Slot::Ready(module));
    }

    pub fn register_lazy<F, Fut>(&mut self, kind: ViewKind, loader: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = LoadResult> + Send + 'static,
    {
        let loader: Loader = Arc::new(move || Box::pin(loader()) as LoadFuture);
        self.slots.insert(kind, Slot::Idle(loader));
    }

    pub fn request(&mut self, kind: ViewKind) -> Request {
        let Some(slot) = self.slots.get_mut(&kind) else {
            return Request::Missing;
        };
        match slot {
            Slot::Ready(module) => Request::Ready(Arc::clone(module)),
            Slot::Loading => Request::Pending,
            Slot::Idle(loader) => {
                let future = loader();
                *slot = Slot::Loading;
                self.loads_started += 1;
                debug!(view = %kind, "view load started");
                Request::Load(future)
            }
        }
    }

    /// Record a finished load. A failure leaves the slot `Loading`, so the
    /// placeholder stays up and no second load is attempted.
    pub fn complete(&mut self, kind: ViewKind, result: LoadResult) {
        match result {
            Ok(module) => {
                debug!(view = %kind, "view ready");
                self.slots.insert(kind, Slot::Ready(module));
            }
            Err(error) => {
                warn!(view = %kind, %error, "view stays on loading placeholder");
            }
        }
    }

    pub fn phase(&self, kind: ViewKind) -> Option<LoadPhase> {
        self.slots.get(&kind).map(|slot| match slot {
            Slot::Ready(_) => LoadPhase::Ready,
            Slot::Idle(_) => LoadPhase::Idle,
            Slot::Loading => LoadPhase::Loading,
        })
    }

    /// Number of loader invocations so far
    pub fn loads_started(&self) -> usize {
        self.loads_started
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct Stub(ViewKind);

    impl ViewModule for Stub {
        fn kind(&self) -> ViewKind {
            self.0
        }

        fn render(&self, _: &mut Frame, _: Rect, _: &ViewProps, _: &UiState) {}

        fn handle_key(&self, _: &ViewProps, _: &UiState, _: KeyEvent) -> bool {
            false
        }
    }

    fn counted(registry: &mut ViewRegistry, kind: ViewKind) -> Arc<AtomicUsize> {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        registry.register_lazy(kind, move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok(Arc::new(Stub(kind)) as Arc<dyn ViewModule>) }
        });
        calls
    }

    #[test]
    fn eager_views_are_ready() {
        let mut registry = ViewRegistry::new();
        registry.register_eager(Arc::new(Stub(ViewKind::Home)));
        assert!(matches!(registry.request(ViewKind::Home), Request::Ready(_)));
        assert_eq!(registry.loads_started(), 0);
    }

    #[test]
    fn lazy_views_start_idle() {
        let mut registry = ViewRegistry::new();
        let calls = counted(&mut registry, ViewKind::Wallet);
        assert_eq!(registry.phase(ViewKind::Wallet), Some(LoadPhase::Idle));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn repeated_requests_load_once() {
        let mut registry = ViewRegistry::new();
        let calls = counted(&mut registry, ViewKind::Wallet);

        let Request::Load(future) = registry.request(ViewKind::Wallet) else {
            panic!("first request should start a load");
        };
        assert!(matches!(registry.request(ViewKind::Wallet), Request::Pending));
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        registry.complete(ViewKind::Wallet, future.await);
        assert!(matches!(registry.request(ViewKind::Wallet), Request::Ready(_)));
        assert!(matches!(registry.request(ViewKind::Wallet), Request::Ready(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(registry.loads_started(), 1);
    }

    #[test]
    fn unregistered_view_is_missing() {
        let mut registry = ViewRegistry::new();
        assert!(matches!(registry.request(ViewKind::Swipe), Request::Missing));
        assert_eq!(registry.phase(ViewKind::Swipe), None);
    }

    // Failure handling is intentionally unspecified beyond "do not crash":
    // the slot stays in Loading and nothing retries.
    #[test]
    fn failed_load_stays_loading_without_retry() {
        let mut registry = ViewRegistry::new();
        let calls = counted(&mut registry, ViewKind::Raffle);
        assert!(matches!(registry.request(ViewKind::Raffle), Request::Load(_)));
        registry.complete(
            ViewKind::Raffle,
            Err(LoadError::Failed {
                view: ViewKind::Raffle,
                reason: "boom".into(),
            }),
        );
        assert_eq!(registry.phase(ViewKind::Raffle), Some(LoadPhase::Loading));
        assert!(matches!(registry.request(ViewKind::Raffle), Request::Pending));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
