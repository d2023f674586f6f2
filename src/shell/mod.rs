//! Host runtime.
//!
//! Owns the state bag and is the only caller of `update`. After every event
//! the shell re-routes, asks the registry for the routed view, and drains
//! whatever the routing pass or the view queued, so a render never observes
//! a half-applied transition.

use std::sync::Arc;

use crossterm::event::KeyEvent;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

use crate::app::{self, AppState, KeyOutcome};
use crate::error::LoadError;
use crate::event::AppEvent;
use crate::model::{Directory, ViewKind};
use crate::registry::{Request, ViewModule, ViewRegistry};
use crate::router::{Dispatcher, RouteCtx, RouteOutcome, Routed, Router};

/// What currently owns the content area.
#[derive(Debug, Clone)]
pub enum Screen {
    /// Loading placeholder for a view whose module is not ready
    Loading(ViewKind),
    Ready(Arc<dyn ViewModule>),
}

impl Screen {
    pub fn view(&self) -> ViewKind {
        match self {
            Screen::Loading(kind) => *kind,
            Screen::Ready(module) => module.kind(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::Loading(_))
    }
}

pub struct Shell {
    state: AppState,
    directory: Directory,
    router: Router,
    registry: ViewRegistry,
    dispatcher: Dispatcher,
    events: UnboundedReceiver<AppEvent>,
    /// Route effects; applied before anything already in `events`
    effects: Dispatcher,
    effect_events: UnboundedReceiver<AppEvent>,
    runtime: Handle,
    routed: Routed,
    screen: Screen,
}

impl Shell {
    /// Build the shell and run the first routing pass. Loads are spawned on
    /// `runtime`.
    pub fn new(
        state: AppState,
        directory: Directory,
        registry: ViewRegistry,
        runtime: Handle,
    ) -> Self {
        let (dispatcher, events) = Dispatcher::channel();
        let (effects, effect_events) = Dispatcher::channel();
        let router = Router::new();
        let routed = router.route_with_effects(&state, &directory, &dispatcher, &effects);
        let mut shell = Self {
            state,
            directory,
            router,
            registry,
            dispatcher,
            events,
            effects,
            effect_events,
            runtime,
            screen: Screen::Loading(routed.view()),
            routed,
        };
        shell.commit_screen();
        shell.apply_effects();
        shell.drain();
        shell
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn routed(&self) -> &Routed {
        &self.routed
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn registry(&self) -> &ViewRegistry {
        &self.registry
    }

    /// Handle for sending events from outside (timers, tests)
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn should_quit(&self) -> bool {
        self.state.ui.should_quit
    }

    /// Apply one event, then everything it caused.
    pub fn apply(&mut self, event: AppEvent) {
        self.step(event);
        self.drain();
    }

    /// Apply whatever is already queued (view loads, handle calls).
    pub fn drain(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.step(event);
        }
    }

    /// Wait for the next queued event and apply it with its consequences.
    pub async fn process_next(&mut self) {
        if let Some(event) = self.events.recv().await {
            self.apply(event);
        }
    }

    fn step(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::ViewLoaded { view, module } => {
                self.registry.complete(view, module.clone());
                self.update(AppEvent::ViewLoaded { view, module });
            }
            event => self.update(event),
        }
        self.reroute();
    }

    fn update(&mut self, event: AppEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = app::update(state, event);
    }

    /// Host keys first; anything the host ignores goes to the ready view.
    fn handle_key(&mut self, key: KeyEvent) {
        let state = std::mem::take(&mut self.state);
        let (state, outcome) = app::handle_key(state, key);
        self.state = state;
        if outcome == KeyOutcome::Ignored {
            if let Screen::Ready(module) = &self.screen {
                let acted = module.handle_key(&self.routed.props, &self.state.ui, key);
                debug!(view = %module.kind(), acted, "key passed to view");
            }
        }
    }

    /// Route the current page. A load that completes for a view no longer
    /// routed only fills the cache: the screen always follows this pass.
    fn reroute(&mut self) {
        self.routed = self.router.route_with_effects(
            &self.state,
            &self.directory,
            &self.dispatcher,
            &self.effects,
        );
        self.commit_screen();
        self.apply_effects();
    }

    /// A redirect lands before any older queued event is stepped, so the
    /// redirecting page is never routed twice.
    fn apply_effects(&mut self) {
        while let Ok(event) = self.effect_events.try_recv() {
            self.step(event);
        }
    }

    fn commit_screen(&mut self) {
        let kind = self.routed.view();
        self.screen = match self.registry.request(kind) {
            Request::Ready(module) => Screen::Ready(module),
            Request::Pending => Screen::Loading(kind),
            Request::Load(future) => {
                self.spawn_load(kind, future);
                Screen::Loading(kind)
            }
            Request::Missing => {
                warn!(view = %kind, "view not registered, rendering home");
                let ctx = RouteCtx {
                    state: &self.state,
                    directory: &self.directory,
                    dispatcher: &self.dispatcher,
                };
                let page = self.routed.page;
                self.routed = Routed {
                    page,
                    props: self.router.home(&ctx),
                    outcome: RouteOutcome::NotFound,
                };
                match self.registry.request(ViewKind::Home) {
                    Request::Ready(module) => Screen::Ready(module),
                    _ => Screen::Loading(ViewKind::Home),
                }
            }
        };
    }

    fn spawn_load(&self, kind: ViewKind, future: crate::registry::LoadFuture) {
        let dispatcher = self.dispatcher.clone();
        let runtime = self.runtime.clone();
        self.runtime.spawn(async move {
            let module = match runtime.spawn(future).await {
                Ok(result) => result,
                Err(_) => Err(LoadError::Aborted(kind)),
            };
            dispatcher.send(AppEvent::ViewLoaded { view: kind, module });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PageId;
    use crate::registry::LoadPhase;
    use crate::view::PageView;

    fn registry() -> ViewRegistry {
        let mut registry = ViewRegistry::new();
        registry.register_eager(Arc::new(PageView::new(ViewKind::Home)));
        registry.register_eager(Arc::new(PageView::new(ViewKind::Catalog)));
        registry
    }

    #[tokio::test]
    async fn unregistered_view_falls_back_to_home() {
        let shell = Shell::new(
            AppState::with_page(PageId::Wallet),
            Directory::default(),
            registry(),
            Handle::current(),
        );
        assert_eq!(shell.screen().view(), ViewKind::Home);
        assert_eq!(shell.routed().outcome, RouteOutcome::NotFound);
        assert_eq!(shell.state().current_page(), PageId::Wallet);
    }

    #[tokio::test]
    async fn premium_redirect_applies_before_first_render() {
        let shell = Shell::new(
            AppState::with_page(PageId::Premium),
            Directory::default(),
            registry(),
            Handle::current(),
        );
        assert_eq!(shell.state().current_page(), PageId::Home);
        assert!(shell.state().ui.show_premium_modal);
        assert_eq!(shell.screen().view(), ViewKind::Home);
    }

    #[tokio::test]
    async fn lazy_view_shows_placeholder_until_loaded() {
        let mut registry = registry();
        registry.register_lazy(ViewKind::Wallet, || async {
            Ok(Arc::new(PageView::new(ViewKind::Wallet)) as Arc<dyn ViewModule>)
        });
        let mut shell =
            Shell::new(AppState::new(), Directory::default(), registry, Handle::current());

        shell.apply(AppEvent::Navigate(PageId::Wallet));
        assert!(shell.screen().is_loading());
        assert_eq!(shell.registry().phase(ViewKind::Wallet), Some(LoadPhase::Loading));

        shell.process_next().await;
        assert!(!shell.screen().is_loading());
        assert_eq!(shell.screen().view(), ViewKind::Wallet);
    }
}
