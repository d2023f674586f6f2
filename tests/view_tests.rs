use std::sync::Arc;
use std::time::Duration;

use agora_tui::app::AppState;
use agora_tui::data::demo_dataset;
use agora_tui::event::AppEvent;
use agora_tui::model::{PageId, UserRole, ViewKind};
use agora_tui::registry::ViewRegistry;
use agora_tui::shell::Shell;
use agora_tui::view::{builtin_registry, render, PageView};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tokio::runtime::Handle;

fn screen_text(shell: &Shell) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| render(frame, shell)).unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer.cell((x, y)).unwrap().symbol())
                .collect::<String>()
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn demo_shell(page: PageId, registry: ViewRegistry) -> Shell {
    let mut state = AppState::with_page(page);
    state.user_role = Some(UserRole::Buyer);
    let directory = demo_dataset().unwrap().apply(&mut state);
    Shell::new(state, directory, registry, Handle::current())
}

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

#[tokio::test]
async fn home_renders_header_and_catalog() {
    let shell = demo_shell(PageId::Home, builtin_registry(Duration::ZERO));
    let text = screen_text(&shell);
    assert!(text.contains("agora"));
    assert!(text.contains("[Home]"));
    assert!(text.contains("Deep tissue massage"));
}

#[tokio::test]
async fn lazy_view_renders_placeholder_then_content() {
    let mut shell = demo_shell(PageId::Home, builtin_registry(Duration::ZERO));
    shell.apply(AppEvent::Navigate(PageId::Parties));
    assert!(screen_text(&shell).contains("Loading Parties"));

    shell.process_next().await;
    let text = screen_text(&shell);
    assert!(text.contains("Rooftop night"));
    assert!(!text.contains("Loading Parties"));
}

#[tokio::test]
async fn overlays_draw_on_top() {
    let mut registry = ViewRegistry::new();
    registry.register_eager(Arc::new(PageView::new(ViewKind::Home)));
    let mut shell = demo_shell(PageId::Home, registry);

    shell.apply(key(KeyCode::Char('?')));
    assert!(screen_text(&shell).contains("Help"));
    shell.apply(key(KeyCode::Char('x')));

    shell.apply(key(KeyCode::Char(':')));
    shell.apply(key(KeyCode::Char('w')));
    assert!(screen_text(&shell).contains("go to page"));
    shell.apply(key(KeyCode::Esc));

    shell.apply(AppEvent::PremiumRequired);
    assert!(screen_text(&shell).contains("Premium"));
}

#[tokio::test]
async fn every_page_renders_with_demo_data() {
    for page in PageId::ALL {
        let mut shell = demo_shell(page, builtin_registry(Duration::ZERO));
        while shell.screen().is_loading() {
            shell.process_next().await;
        }
        let text = screen_text(&shell);
        assert!(text.contains("agora"), "{page}");
    }
}

#[tokio::test]
async fn catalog_search_and_filter_keys_narrow_the_listing() {
    let mut shell = demo_shell(PageId::Catalog, builtin_registry(Duration::ZERO));

    shell.apply(key(KeyCode::Char('/')));
    for c in "thai".chars() {
        shell.apply(key(KeyCode::Char(c)));
    }
    let text = screen_text(&shell);
    assert!(text.contains("/ thai"));
    assert!(text.contains("Thai massage"));
    assert!(!text.contains("Deep tissue massage"));

    shell.apply(key(KeyCode::Enter));
    assert!(shell.state().ui.search.is_none());
    assert_eq!(shell.state().filters.query, "thai");
    assert_eq!(shell.state().current_page(), PageId::Catalog);

    shell.apply(key(KeyCode::Char('x')));
    assert_eq!(shell.state().filters.active_count(), 0);
    assert!(screen_text(&shell).contains("Deep tissue massage"));

    shell.apply(key(KeyCode::Char('p')));
    assert_eq!(shell.state().filters.price_range, "low");
    let text = screen_text(&shell);
    assert!(text.contains("Thai massage"));
    assert!(text.contains("Evening city walk"));
    assert!(!text.contains("Dinner companion"));

    shell.apply(key(KeyCode::Char('l')));
    assert_eq!(shell.state().filters.location, "Kazan");
    assert!(screen_text(&shell).contains("Nothing matches these filters"));
}
