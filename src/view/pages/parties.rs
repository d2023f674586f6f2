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
use crate::model::{ApplicationStatus, NotificationKind, Party, PartyApplication, Theme};
use crate::router::props::{
    OrganizerDashboardProps, PartiesProps, PartyChatProps, PartyDetailProps,
};

fn party_row(party: &Party, mine: bool) -> ListItem<'static> {
    let tickets_color = if party.tickets_left() == 0 {
        Theme::ERROR
    } else {
        Theme::SUCCESS
    };
    ListItem::new(Line::from(vec![
        Span::styled(
            party.title.clone(),
            Style::default().fg(Theme::TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} · {}", party.city, party.date),
            Style::default().fg(Theme::MUTED_TEXT),
        ),
        Span::styled(
            format!("  {} left", party.tickets_left()),
            Style::default().fg(tickets_color),
        ),
        Span::styled(
            if mine { "  (yours)" } else { "" },
            Style::default().fg(Theme::ACCENT_GOLD),
        ),
    ]))
}

fn status_color(status: ApplicationStatus) -> ratatui::style::Color {
    match status {
        ApplicationStatus::Pending | ApplicationStatus::Interview => Theme::WARNING,
        ApplicationStatus::Approved | ApplicationStatus::Paid => Theme::SUCCESS,
        ApplicationStatus::Rejected => Theme::ERROR,
    }
}

fn application_row(application: &PartyApplication) -> ListItem<'static> {
    ListItem::new(Line::from(vec![
        Span::raw(application.user_name.clone()),
        Span::styled(
            format!("  {:?}", application.status).to_lowercase(),
            Style::default().fg(status_color(application.status)),
        ),
    ]))
}

pub fn render_parties(frame: &mut Frame, area: Rect, props: &PartiesProps, ui: &UiState) {
    let rows = props
        .parties
        .iter()
        .map(|p| party_row(p, p.organizer_id == props.current_user_id))
        .collect();
    render_list(
        frame,
        area,
        "Parties  (Enter: open, o: organizer dashboard)",
        rows,
        "No parties announced",
        ui,
    );
}

pub fn render_party_detail(frame: &mut Frame, area: Rect, props: &PartyDetailProps, ui: &UiState) {
    let Some(party) = &props.party else {
        render_text(
            frame,
            area,
            "Party",
            vec![
                Line::from(format!("Party #{} is no longer listed.", props.party_id)),
                Line::styled("b: back to parties", Style::default().fg(Theme::MUTED_TEXT)),
            ],
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(3)])
        .split(area);

    let lines = vec![
        Line::styled(
            party.title.clone(),
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("{} · {}", party.city, party.date)),
        Line::from(format!("organized by {}", party.organizer_name)),
        Line::from(format!(
            "{} of {} tickets sold",
            party.sold_tickets, party.max_tickets
        )),
        Line::styled(
            "a: apply   c: chat with applicant   b: back",
            Style::default().fg(Theme::MUTED_TEXT),
        ),
    ];
    render_text(frame, chunks[0], "Party", lines);

    let rows = party.applications.iter().map(application_row).collect();
    render_list(frame, chunks[1], "Applications", rows, "No applications yet", ui);
}

pub fn render_party_chat(frame: &mut Frame, area: Rect, props: &PartyChatProps) {
    let role = if props.is_organizer {
        "organizer"
    } else {
        "guest"
    };
    let lines = vec![
        Line::from(format!("Application #{}", props.application_id)),
        Line::styled(
            format!("You are chatting as {} (user {})", role, props.current_user_id),
            Style::default().fg(Theme::MUTED_TEXT),
        ),
        Line::from(""),
        Line::styled("No messages yet.", Style::default().fg(Theme::MUTED_TEXT)),
        Line::styled("b: back to the party", Style::default().fg(Theme::MUTED_TEXT)),
    ];
    render_text(frame, area, "Party chat", lines);
}

pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    props: &OrganizerDashboardProps,
    ui: &UiState,
) {
    let total_applications: usize = props.parties.iter().map(|p| p.applications.len()).sum();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(3)])
        .split(area);

    render_text(
        frame,
        chunks[0],
        "Organizer dashboard",
        vec![
            Line::from(format!(
                "{} parties, {} applications",
                props.parties.len(),
                total_applications
            )),
            Line::styled(
                "Enter: view party   c: first applicant chat   b: back",
                Style::default().fg(Theme::MUTED_TEXT),
            ),
        ],
    );

    let rows = props.parties.iter().map(|p| party_row(p, true)).collect();
    render_list(frame, chunks[1], "Your parties", rows, "You have not organized any party", ui);
}

pub fn parties_key(props: &PartiesProps, ui: &UiState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => cursor(ui, props.parties.len())
            .map(|i| props.open_party.call(props.parties[i].id))
            .is_some(),
        KeyCode::Char('o') => {
            props.open_organizer_dashboard.call();
            true
        }
        _ => false,
    }
}

pub fn party_detail_key(props: &PartyDetailProps, ui: &UiState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('b') => {
            props.on_back.call();
            true
        }
        KeyCode::Char('a') => {
            let title = props
                .party
                .as_ref()
                .map_or_else(|| format!("party #{}", props.party_id), |p| p.title.clone());
            props.add_notification.call(
                NotificationKind::System,
                "Application sent",
                &format!("You applied to {title}"),
            );
            true
        }
        KeyCode::Char('c') => {
            let Some(party) = &props.party else {
                return false;
            };
            cursor(ui, party.applications.len())
                .map(|i| props.on_start_chat.call(party.applications[i].id))
                .is_some()
        }
        _ => false,
    }
}

pub fn party_chat_key(props: &PartyChatProps, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('b') {
        props.on_back.call();
        return true;
    }
    false
}

pub fn dashboard_key(props: &OrganizerDashboardProps, ui: &UiState, key: KeyEvent) -> bool {
    let highlighted = cursor(ui, props.parties.len()).map(|i| &props.parties[i]);
    match key.code {
        KeyCode::Enter => highlighted
            .map(|party| props.on_view_party.call(party.id))
            .is_some(),
        KeyCode::Char('c') => highlighted
            .and_then(|party| party.applications.first())
            .map(|application| props.on_open_chat.call(application.id))
            .is_some(),
        KeyCode::Char('b') => {
            props.on_back.call();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppState, Selected};
    use crate::event::AppEvent;
    use crate::model::{ApplicationId, Directory, PageId, PartyId, UserId};
    use crate::router::ViewProps;
    use crate::view::pages::test_support::{drain, draw, route};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn directory() -> Directory {
        Directory {
            sellers: Vec::new(),
            parties: vec![Party {
                id: PartyId::new(42),
                organizer_id: UserId::new(1),
                organizer_name: "Vera".into(),
                title: "Rooftop night".into(),
                city: "Moscow".into(),
                date: "2026-11-01".into(),
                max_tickets: 40,
                sold_tickets: 12,
                applications: vec![PartyApplication {
                    id: ApplicationId::new(99),
                    user_id: UserId::new(7),
                    user_name: "Lev".into(),
                    status: ApplicationStatus::Pending,
                }],
            }],
        }
    }

    #[test]
    fn party_detail_chat_starts_with_highlighted_application() {
        let mut state = AppState::with_page(PageId::PartyDetail);
        state.selection.party = Some(PartyId::new(42));
        let (props, mut rx) = route(&state, &directory());
        let ViewProps::PartyDetail(props) = props else {
            panic!("expected party detail");
        };
        assert!(party_detail_key(&props, &state.ui, key(KeyCode::Char('c'))));
        assert!(matches!(
            drain(&mut rx).as_slice(),
            [AppEvent::SelectAndGoTo {
                selection: Selected::Application(id),
                page: PageId::PartyChat,
            }] if *id == ApplicationId::new(99)
        ));
    }

    #[test]
    fn parties_enter_opens_party() {
        let state = AppState::with_page(PageId::Parties);
        let (props, mut rx) = route(&state, &directory());
        let ViewProps::Parties(props) = props else {
            panic!("expected parties");
        };
        assert!(parties_key(&props, &state.ui, key(KeyCode::Enter)));
        assert!(matches!(
            drain(&mut rx).as_slice(),
            [AppEvent::SelectAndGoTo {
                selection: Selected::Party(_),
                page: PageId::PartyDetail,
            }]
        ));
    }

    #[test]
    fn dashboard_lists_only_own_parties() {
        let mut state = AppState::with_page(PageId::OrganizerDashboard);
        state.current_user_id = UserId::new(2);
        let (props, _rx) = route(&state, &directory());
        assert!(draw(&props, &state.ui).contains("not organized any party"));

        state.current_user_id = UserId::new(1);
        let (props, _rx) = route(&state, &directory());
        assert!(draw(&props, &state.ui).contains("Rooftop night"));
    }

    #[test]
    fn party_detail_renders_missing_party() {
        let mut state = AppState::with_page(PageId::PartyDetail);
        state.selection.party = Some(PartyId::new(5));
        let (props, _rx) = route(&state, &Directory::default());
        assert!(draw(&props, &state.ui).contains("no longer listed"));
    }
}
