use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

use super::{cursor, render_list, render_text};
use crate::app::UiState;
use crate::model::{CatalogItem, FilterField, PageId, SearchFilters, ServiceId, Theme};
use crate::router::callbacks::{OpenSearch, SetFilter};
use crate::router::props::{CatalogProps, FavoritesProps, HomeProps, ServiceDetailProps};
use crate::view::components::format::truncate;

/// Items matching every active filter, ordered by `sort_by`.
pub fn visible_items<'a>(
    items: &'a [CatalogItem],
    filters: &SearchFilters,
) -> Vec<&'a CatalogItem> {
    let query = filters.query.trim().to_lowercase();
    let mut visible: Vec<&CatalogItem> = items
        .iter()
        .filter(|item| {
            query.is_empty()
                || item.title.to_lowercase().contains(&query)
                || item.seller.to_lowercase().contains(&query)
        })
        .filter(|item| filters.category == "all" || item.category == filters.category)
        .filter(|item| {
            filters.location == "all" || item.location.as_deref() == Some(filters.location.as_str())
        })
        .filter(|item| in_price_range(price_value(&item.price), &filters.price_range))
        .collect();

    match filters.sort_by.as_str() {
        "rating" => visible.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        "price-asc" => visible.sort_by_key(|item| price_value(&item.price)),
        "price-desc" => visible.sort_by_key(|item| std::cmp::Reverse(price_value(&item.price))),
        _ => {}
    }
    visible
}

/// Digits of a display price ("4 500 ₽/h" -> 4500); 0 when there are none.
/// Saturates at `u64::MAX`.
fn price_value(price: &str) -> u64 {
    price
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |value, digit| {
            value.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Price bands: low < 15000, mid 15000..=25000, high > 25000
fn in_price_range(price: u64, range: &str) -> bool {
    match range {
        "low" => price < 15_000,
        "mid" => (15_000..=25_000).contains(&price),
        "high" => price > 25_000,
        _ => true,
    }
}

const PRICE_BANDS: [&str; 4] = ["all", "low", "mid", "high"];

/// Next distinct value after `current` in sorted order, cycling through "all"
fn next_value<'a>(values: impl Iterator<Item = &'a str>, current: &str) -> String {
    let mut values: Vec<&str> = values.collect();
    values.sort_unstable();
    values.dedup();
    match values.iter().position(|v| *v == current) {
        None if current == "all" => values.first().copied().unwrap_or("all").to_string(),
        Some(i) if i + 1 < values.len() => values[i + 1].to_string(),
        _ => "all".to_string(),
    }
}

fn next_category(items: &[CatalogItem], current: &str) -> String {
    next_value(items.iter().map(|i| i.category.as_str()), current)
}

fn next_location(items: &[CatalogItem], current: &str) -> String {
    next_value(items.iter().filter_map(|i| i.location.as_deref()), current)
}

fn next_price_band(current: &str) -> &'static str {
    let next = PRICE_BANDS
        .iter()
        .position(|band| *band == current)
        .map_or(0, |i| (i + 1) % PRICE_BANDS.len());
    PRICE_BANDS[next]
}

fn item_row(item: &CatalogItem, favorites: &[ServiceId]) -> ListItem<'static> {
    let heart = if favorites.contains(&item.id) { "♥ " } else { "  " };
    let verified = if item.verified { " ✓" } else { "" };
    ListItem::new(Line::from(vec![
        Span::styled(heart, Style::default().fg(Theme::FAVORITE)),
        Span::styled(
            truncate(&item.title, 32),
            Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(verified, Style::default().fg(Theme::SUCCESS)),
        Span::styled(format!("  {}", item.seller), Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(format!("  ★{:.1}", item.rating), Style::default().fg(Theme::ACCENT_GOLD)),
        Span::styled(format!("  {}", item.price), Style::default().fg(Theme::INFO)),
    ]))
}

fn filter_summary(filters: &SearchFilters) -> Line<'static> {
    let query = if filters.query.is_empty() {
        "-".to_string()
    } else {
        filters.query.clone()
    };
    Line::from(vec![
        Span::styled("category ", Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(filters.category.clone(), Style::default().fg(Theme::INFO)),
        Span::styled("  price ", Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(filters.price_range.clone(), Style::default().fg(Theme::INFO)),
        Span::styled("  location ", Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(filters.location.clone(), Style::default().fg(Theme::INFO)),
        Span::styled("  search ", Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(query, Style::default().fg(Theme::INFO)),
        Span::styled("  sort ", Style::default().fg(Theme::MUTED_TEXT)),
        Span::styled(filters.sort_by.clone(), Style::default().fg(Theme::INFO)),
        Span::styled(
            format!("  ({} active)", filters.active_count()),
            Style::default().fg(Theme::MUTED_TEXT),
        ),
    ])
}

fn render_listing(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    intro: Vec<Line<'static>>,
    items: &[CatalogItem],
    favorites: &[ServiceId],
    filters: &SearchFilters,
    ui: &UiState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(intro.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    render_text(frame, chunks[0], title, intro);

    let rows = visible_items(items, filters)
        .into_iter()
        .map(|item| item_row(item, favorites))
        .collect();
    render_list(frame, chunks[1], "Services", rows, "Nothing matches these filters", ui);
}

pub fn render_home(frame: &mut Frame, area: Rect, props: &HomeProps, ui: &UiState) {
    let greeting = match props.user_role {
        Some(_) => format!("Welcome back, {}", props.profile.display_name()),
        None => "Welcome to agora".to_string(),
    };
    let intro = vec![
        Line::styled(greeting, Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD)),
        filter_summary(&props.filters),
        Line::styled(
            "/: search  c: category  p: price  l: location  x: clear  v: VIP",
            Style::default().fg(Theme::MUTED_TEXT),
        ),
    ];
    render_listing(
        frame,
        area,
        "Home",
        intro,
        &props.catalog_items,
        &props.favorites,
        &props.filters,
        ui,
    );
}

pub fn render_catalog(frame: &mut Frame, area: Rect, props: &CatalogProps, ui: &UiState) {
    let intro = vec![
        filter_summary(&props.filters),
        Line::styled(
            "/: search  c: category  p: price  l: location  o: sort  x: clear",
            Style::default().fg(Theme::MUTED_TEXT),
        ),
    ];
    render_listing(
        frame,
        area,
        "Catalog",
        intro,
        &props.catalog_items,
        &props.favorites,
        &props.filters,
        ui,
    );
}

fn favorite_items<'a>(items: &'a [CatalogItem], favorites: &[ServiceId]) -> Vec<&'a CatalogItem> {
    favorites
        .iter()
        .filter_map(|id| items.iter().find(|item| item.id == *id))
        .collect()
}

pub fn render_favorites(frame: &mut Frame, area: Rect, props: &FavoritesProps, ui: &UiState) {
    let rows = favorite_items(&props.catalog_items, &props.favorites)
        .into_iter()
        .map(|item| item_row(item, &props.favorites))
        .collect();
    render_list(frame, area, "Favorites", rows, "No favorites yet. Press f in the catalog.", ui);
}

pub fn render_service_detail(frame: &mut Frame, area: Rect, props: &ServiceDetailProps) {
    let item = props
        .service_id
        .and_then(|id| props.catalog_items.iter().find(|item| item.id == id));

    let Some(item) = item else {
        render_text(
            frame,
            area,
            "Service",
            vec![Line::styled(
                "Service not found. Enter: back to catalog",
                Style::default().fg(Theme::MUTED_TEXT),
            )],
        );
        return;
    };

    let favorite = props.favorites.contains(&item.id);
    let mut lines = vec![
        Line::styled(
            item.title.clone(),
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::raw(item.seller.clone()),
            Span::styled(
                if item.verified { "  verified" } else { "" },
                Style::default().fg(Theme::SUCCESS),
            ),
            Span::styled(format!("  ★{:.1}", item.rating), Style::default().fg(Theme::ACCENT_GOLD)),
        ]),
        Line::from(format!("{} · {}", item.category, item.price)),
    ];
    if let Some(location) = &item.location {
        lines.push(Line::from(location.clone()));
    }
    if let Some(description) = &item.description {
        lines.push(Line::from(""));
        lines.push(Line::from(description.clone()));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        if favorite { "♥ in favorites" } else { "♡ not in favorites" },
        Style::default().fg(Theme::FAVORITE),
    ));

    let reviews: Vec<_> = props.reviews.iter().filter(|r| r.service_id == item.id).collect();
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("Reviews ({})", reviews.len()),
        Style::default().fg(Theme::INFO).add_modifier(Modifier::BOLD),
    ));
    for review in reviews {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", "★".repeat(review.rating as usize)),
                Style::default().fg(Theme::ACCENT_GOLD),
            ),
            Span::styled(format!("{}: ", review.author), Style::default().fg(Theme::MUTED_TEXT)),
            Span::raw(review.text.clone()),
        ]));
    }

    render_text(frame, area, "Service", lines);
}

fn highlighted(items: &[&CatalogItem], ui: &UiState) -> Option<ServiceId> {
    cursor(ui, items.len()).map(|i| items[i].id)
}

/// Search and filter keys shared by home and catalog.
fn filter_key(
    items: &[CatalogItem],
    filters: &SearchFilters,
    set_filter: &SetFilter,
    open_search: &OpenSearch,
    key: KeyEvent,
) -> bool {
    match key.code {
        KeyCode::Char('/') => open_search.call(),
        KeyCode::Char('c') => {
            set_filter.call(FilterField::Category, next_category(items, &filters.category))
        }
        KeyCode::Char('p') => {
            set_filter.call(FilterField::PriceRange, next_price_band(&filters.price_range))
        }
        KeyCode::Char('l') => {
            set_filter.call(FilterField::Location, next_location(items, &filters.location))
        }
        KeyCode::Char('x') => {
            let defaults = SearchFilters::default();
            for field in FilterField::ALL {
                if filters.get(field) != defaults.get(field) {
                    set_filter.call(field, defaults.get(field));
                }
            }
        }
        _ => return false,
    }
    true
}

pub fn home_key(props: &HomeProps, ui: &UiState, key: KeyEvent) -> bool {
    let visible = visible_items(&props.catalog_items, &props.filters);
    match key.code {
        KeyCode::Enter => highlighted(&visible, ui)
            .map(|id| props.open_service.call(id))
            .is_some(),
        KeyCode::Char('f') => highlighted(&visible, ui)
            .map(|id| props.toggle_favorite.call(id))
            .is_some(),
        KeyCode::Char('v') => {
            props.premium_required.call();
            true
        }
        KeyCode::Char('s') => {
            props.go_to.call(PageId::Search);
            true
        }
        _ => filter_key(
            &props.catalog_items,
            &props.filters,
            &props.set_filter,
            &props.open_search,
            key,
        ),
    }
}

pub fn catalog_key(props: &CatalogProps, ui: &UiState, key: KeyEvent) -> bool {
    let visible = visible_items(&props.catalog_items, &props.filters);
    match key.code {
        KeyCode::Enter => highlighted(&visible, ui)
            .map(|id| props.open_service.call(id))
            .is_some(),
        KeyCode::Char('f') => highlighted(&visible, ui)
            .map(|id| props.toggle_favorite.call(id))
            .is_some(),
        KeyCode::Char('o') => {
            let next = match props.filters.sort_by.as_str() {
                "rating" => "price-asc",
                "price-asc" => "price-desc",
                _ => "rating",
            };
            props.set_filter.call(FilterField::SortBy, next);
            true
        }
        _ => filter_key(
            &props.catalog_items,
            &props.filters,
            &props.set_filter,
            &props.open_search,
            key,
        ),
    }
}

pub fn favorites_key(props: &FavoritesProps, ui: &UiState, key: KeyEvent) -> bool {
    let items = favorite_items(&props.catalog_items, &props.favorites);
    match key.code {
        KeyCode::Enter => highlighted(&items, ui)
            .map(|id| props.open_service.call(id))
            .is_some(),
        KeyCode::Char('f') => highlighted(&items, ui)
            .map(|id| props.toggle_favorite.call(id))
            .is_some(),
        KeyCode::Char('c') => {
            props.go_to.call(PageId::Catalog);
            true
        }
        _ => false,
    }
}

pub fn service_key(props: &ServiceDetailProps, key: KeyEvent) -> bool {
    let item = props
        .service_id
        .and_then(|id| props.catalog_items.iter().find(|item| item.id == id));
    let Some(item) = item else {
        if key.code == KeyCode::Enter {
            props.go_to.call(PageId::Catalog);
            return true;
        }
        return false;
    };
    match key.code {
        KeyCode::Char('f') => {
            props.toggle_favorite.call(item.id);
            true
        }
        KeyCode::Char('b') => {
            props.show_booking_modal.call(true);
            true
        }
        KeyCode::Char('s') => item
            .seller_id
            .map(|seller| props.open_seller.call(seller))
            .is_some(),
        _ => false,
    }
}
