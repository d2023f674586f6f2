use std::sync::Arc;
use std::time::Duration;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::ViewKind;
use crate::registry::{ViewModule, ViewRegistry};
use crate::shell::{Screen, Shell};

pub mod components;
pub mod pages;

pub use pages::PageView;

/// Main view dispatcher.
/// Header and footer around the routed view (or its loading placeholder),
/// then the prompt, modal and help overlays on top.
pub fn render(frame: &mut Frame, shell: &Shell) {
    let state = shell.state();
    let screen = shell.screen();
    let view = screen.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    components::header::render_header(frame, chunks[0], state, view);

    match screen {
        Screen::Ready(module) => module.render(frame, chunks[1], &shell.routed().props, &state.ui),
        Screen::Loading(kind) => {
            components::loading::render_loading(frame, chunks[1], *kind, state.ui.spinner_frame)
        }
    }

    components::footer::render_footer(frame, chunks[2], state, view);

    if state.ui.prompt.is_some() || state.ui.search.is_some() {
        components::prompt_bar::render_prompt_bar(frame, state);
    }

    if state.ui.has_modal() {
        components::modal::render_modal(frame, state);
    }

    if state.ui.show_help {
        components::help_overlay::render_help_overlay(frame);
    }
}

/// Registry with every bundled view. Home and catalog are ready at start;
/// the rest load on first use after `load_delay`.
pub fn builtin_registry(load_delay: Duration) -> ViewRegistry {
    let mut registry = ViewRegistry::new();
    for kind in ViewKind::ALL {
        if kind.is_eager() {
            registry.register_eager(Arc::new(PageView::new(kind)));
        } else {
            registry.register_lazy(kind, move || async move {
                if !load_delay.is_zero() {
                    tokio::time::sleep(load_delay).await;
                }
                Ok(Arc::new(PageView::new(kind)) as Arc<dyn ViewModule>)
            });
        }
    }
    registry
}
