//! View Router.
//!
//! Given the current page and the state bag, picks exactly one view and
//! builds its prop slice. The router reads state and never mutates it; the
//! only thing it may do besides building props is run a route's single
//! effect, which goes out through the same handles a view would use.

pub mod callbacks;
pub mod props;
pub mod table;

use std::collections::HashMap;

use tracing::{debug, info};

use crate::app::AppState;
use crate::model::{Directory, PageId, ViewKind};
pub use callbacks::Dispatcher;
pub use props::{RouteCtx, ViewProps};
use table::{Build, Effect, Guard, Route};

/// How the routed view was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOutcome {
    /// The requested page rendered its own view
    Matched,
    /// A guard or a directory lookup failed and the fallback view rendered
    Fallback,
    /// The page has no table row
    NotFound,
    /// The route ran its effect and rendered home
    Redirected,
}

/// Result of one routing pass.
#[derive(Debug, Clone)]
pub struct Routed {
    /// Page that was asked for
    pub page: PageId,
    pub props: ViewProps,
    pub outcome: RouteOutcome,
}

impl Routed {
    pub fn view(&self) -> ViewKind {
        self.props.kind()
    }
}

/// Generic interpreter over the route table.
pub struct Router {
    table: HashMap<PageId, Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    pub fn new() -> Self {
        Self::with_routes(table::routes())
    }

    pub fn with_routes(routes: Vec<Route>) -> Self {
        Self {
            table: routes.into_iter().map(|r| (r.page, r)).collect(),
        }
    }

    /// Route the state bag's current page.
    pub fn route(
        &self,
        state: &AppState,
        directory: &Directory,
        dispatcher: &Dispatcher,
    ) -> Routed {
        self.route_with_effects(state, directory, dispatcher, dispatcher)
    }

    /// Route with route effects sent through `effects` rather than the
    /// queue the view handles use.
    pub fn route_with_effects(
        &self,
        state: &AppState,
        directory: &Directory,
        dispatcher: &Dispatcher,
        effects: &Dispatcher,
    ) -> Routed {
        let ctx = RouteCtx {
            state,
            directory,
            dispatcher,
        };
        self.route_page(state.current_page(), &ctx, effects)
    }

    /// The home view, built the same way every fallback builds it.
    pub fn home(&self, ctx: &RouteCtx<'_>) -> ViewProps {
        props::home(ctx)
    }

    fn route_page(&self, page: PageId, ctx: &RouteCtx<'_>, effects: &Dispatcher) -> Routed {
        let Some(route) = self.table.get(&page) else {
            info!(%page, "no route, rendering home");
            return Routed {
                page,
                props: props::home(ctx),
                outcome: RouteOutcome::NotFound,
            };
        };

        if route.effect == Effect::PremiumRedirect {
            debug!(%page, "premium redirect");
            callbacks::Redirect::new(effects).call(PageId::Home);
            callbacks::PremiumRequired::new(effects).call();
            return Routed {
                page,
                props: props::home(ctx),
                outcome: RouteOutcome::Redirected,
            };
        }

        let passed = match route.guard {
            Guard::Open => true,
            Guard::Authenticated { otherwise } => {
                if !ctx.state.is_authenticated() {
                    info!(%page, "not signed in, rendering fallback");
                    return Routed {
                        page,
                        props: otherwise(ctx),
                        outcome: RouteOutcome::Fallback,
                    };
                }
                true
            }
            Guard::Selected(pointer) => ctx.state.selection.is_set(pointer),
        };

        let built = if passed {
            match route.build {
                Build::Total(build) => Some(build(ctx)),
                Build::Partial(build) => build(ctx),
            }
        } else {
            None
        };

        match built {
            Some(props) => {
                debug!(%page, view = %props.kind(), "routed");
                Routed {
                    page,
                    props,
                    outcome: RouteOutcome::Matched,
                }
            }
            None => {
                info!(%page, "missing selection or directory entry, rendering home");
                Routed {
                    page,
                    props: props::home(ctx),
                    outcome: RouteOutcome::Fallback,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PartyId, SellerId};

    fn route(state: &AppState, directory: &Directory) -> Routed {
        let (dispatcher, _rx) = Dispatcher::channel();
        Router::new().route(state, directory, &dispatcher)
    }

    #[test]
    fn every_known_page_routes() {
        for page in PageId::ALL {
            let routed = route(&AppState::with_page(page), &Directory::default());
            assert_ne!(routed.outcome, RouteOutcome::NotFound, "{page}");
        }
    }

    #[test]
    fn profile_requires_sign_in() {
        let routed = route(&AppState::with_page(PageId::Profile), &Directory::default());
        assert_eq!(routed.view(), ViewKind::Register);
        assert_eq!(routed.outcome, RouteOutcome::Fallback);
    }

    #[test]
    fn party_detail_without_selection_renders_home() {
        let routed = route(&AppState::with_page(PageId::PartyDetail), &Directory::default());
        assert_eq!(routed.view(), ViewKind::Home);
    }

    #[test]
    fn party_detail_renders_with_pointer_even_if_directory_lacks_party() {
        let mut state = AppState::with_page(PageId::PartyDetail);
        state.selection.party = Some(PartyId::new(3));
        let routed = route(&state, &Directory::default());
        match routed.props {
            ViewProps::PartyDetail(props) => {
                assert_eq!(props.party_id, PartyId::new(3));
                assert!(props.party.is_none());
            }
            other => panic!("unexpected view {:?}", other.kind()),
        }
    }

    #[test]
    fn seller_profile_with_unknown_seller_renders_home() {
        let mut state = AppState::with_page(PageId::SellerProfile);
        state.selection.seller = Some(SellerId::new(404));
        let routed = route(&state, &Directory::default());
        assert_eq!(routed.view(), ViewKind::Home);
        assert_eq!(routed.outcome, RouteOutcome::Fallback);
    }

    #[test]
    fn empty_table_renders_home_for_everything() {
        let (dispatcher, _rx) = Dispatcher::channel();
        let router = Router::with_routes(Vec::new());
        let routed = router.route(
            &AppState::with_page(PageId::Wallet),
            &Directory::default(),
            &dispatcher,
        );
        assert_eq!(routed.view(), ViewKind::Home);
        assert_eq!(routed.outcome, RouteOutcome::NotFound);
    }
}
