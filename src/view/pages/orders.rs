use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

use super::{cursor, render_list, render_text};
use crate::app::UiState;
use crate::model::{Booking, BookingStatus, OrderChat, PageId, Theme, UserRole};
use crate::router::props::{BookingsProps, CategoryProps, MyOrdersProps, OrderChatProps};
use crate::view::components::format::{format_amount, format_since};

fn booking_row(booking: &Booking, suffix: String) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::styled(
            booking.service_name.clone(),
            Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} {}  {}h", booking.date, booking.time, booking.duration),
            Style::default().fg(Theme::MUTED_TEXT),
        ),
        Span::raw(format!("  {}", format_amount(booking.total_price, booking.currency))),
        Span::styled(
            format!("  {:?}", booking.status),
            Style::default().fg(Theme::booking_status_color(booking.status)),
        ),
        Span::styled(suffix, Style::default().fg(Theme::ACCENT)),
    ]))
}

fn chat_for<'a>(chats: &'a [OrderChat], booking: &Booking) -> Option<&'a OrderChat> {
    chats.iter().find(|chat| chat.booking_id == booking.id)
}

pub fn render_bookings(frame: &mut Frame, area: Rect, props: &BookingsProps, ui: &UiState) {
    let title = match props.user_role {
        Some(UserRole::Seller) => "Incoming bookings  (x: cancel)",
        _ => "Bookings  (x: cancel)",
    };
    let rows = props
        .bookings
        .iter()
        .map(|b| booking_row(b, String::new()))
        .collect();
    render_list(frame, area, title, rows, "No bookings", ui);
}

pub fn render_my_orders(frame: &mut Frame, area: Rect, props: &MyOrdersProps, ui: &UiState) {
    let rows = props
        .bookings
        .iter()
        .map(|booking| {
            let unread = chat_for(&props.order_chats, booking)
                .map(|chat| chat.unread_for(props.current_user_id))
                .unwrap_or(0);
            let suffix = if unread > 0 {
                format!("  {} unread", unread)
            } else {
                String::new()
            };
            booking_row(booking, suffix)
        })
        .collect();
    render_list(frame, area, "My orders  (Enter: chat)", rows, "No orders yet", ui);
}

pub fn render_order_chat(frame: &mut Frame, area: Rect, props: &OrderChatProps) {
    let Some(chat) = props.order_chats.iter().find(|c| c.id == props.chat_id) else {
        render_text(
            frame,
            area,
            "Order chat",
            vec![Line::styled(
                format!("Chat #{} not found. Enter: my orders", props.chat_id),
                Style::default().fg(Theme::MUTED_TEXT),
            )],
        );
        return;
    };

    let booking = props.bookings.iter().find(|b| b.id == chat.booking_id);
    let mut lines = vec![Line::styled(
        booking.map_or_else(
            || format!("Booking #{}", chat.booking_id),
            |b| format!("{} · {:?}", b.service_name, b.status),
        ),
        Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
    )];
    lines.push(Line::from(""));

    let now = Utc::now();
    if chat.messages.is_empty() {
        lines.push(Line::styled("No messages yet.", Style::default().fg(Theme::MUTED_TEXT)));
    }
    for message in &chat.messages {
        let mine = message.sender_id == props.current_user_id;
        lines.push(Line::from(vec![
            Span::styled(
                if mine { "you  " } else { "them " },
                Style::default().fg(if mine { Theme::INFO } else { Theme::ACCENT }),
            ),
            Span::raw(message.text.clone()),
            Span::styled(
                format!("  {}", format_since(message.timestamp, now)),
                Style::default().fg(Theme::MUTED_TEXT),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled("r: mark read", Style::default().fg(Theme::MUTED_TEXT)));
    render_text(frame, area, "Order chat", lines);
}

pub fn render_category(frame: &mut Frame, area: Rect, props: &CategoryProps, ui: &UiState) {
    let rows = props
        .bookings
        .iter()
        .map(|b| booking_row(b, String::new()))
        .collect();
    render_list(
        frame,
        area,
        format!("Category: {}  (Enter: browse catalog)", props.category_id),
        rows,
        "No providers booked in this category yet",
        ui,
    );
}

/// Cancel the highlighted booking if it is still open
pub fn bookings_key(props: &BookingsProps, ui: &UiState, key: KeyEvent) -> bool {
    if key.code != KeyCode::Char('x') {
        return false;
    }
    let Some(index) = cursor(ui, props.bookings.len()) else {
        return false;
    };
    if !props.bookings[index].status.is_open() {
        return false;
    }
    let mut bookings = props.bookings.clone();
    bookings[index].status = BookingStatus::Cancelled;
    props.set_bookings.call(bookings);
    true
}

pub fn my_orders_key(props: &MyOrdersProps, ui: &UiState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => cursor(ui, props.bookings.len())
            .and_then(|i| chat_for(&props.order_chats, &props.bookings[i]))
            .map(|chat| props.open_order_chat.call(chat.id))
            .is_some(),
        KeyCode::Char('b') => {
            props.go_to.call(PageId::Bookings);
            true
        }
        _ => false,
    }
}

/// `r` marks every message from the other side as read
pub fn order_chat_key(props: &OrderChatProps, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('r') => {
            let mut chats = props.order_chats.clone();
            let Some(chat) = chats.iter_mut().find(|c| c.id == props.chat_id) else {
                return false;
            };
            for message in &mut chat.messages {
                if message.sender_id != props.current_user_id {
                    message.read = true;
                }
            }
            props.set_order_chats.call(chats);
            true
        }
        KeyCode::Enter => {
            props.go_to.call(PageId::MyOrders);
            true
        }
        _ => false,
    }
}

pub fn category_key(props: &CategoryProps, key: KeyEvent) -> bool {
    if key.code == KeyCode::Enter {
        props.go_to.call(PageId::Catalog);
        return true;
    }
    false
}
