use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
    Frame,
};

use super::{render_list, render_text};
use crate::app::UiState;
use crate::model::{
    PageId, ProfilePatch, Theme, TransactionKind, UserRole, ViewKind, VipStatus, Wallet,
};
use crate::router::props::{AuthProps, MyAdsProps, ProfileProps, SellerProfileProps, WalletProps};
use crate::view::components::format::{format_amount, format_since};

fn balance_lines(wallet: &Wallet) -> Vec<Line<'static>> {
    wallet
        .balances
        .iter()
        .map(|b| {
            Line::from(vec![
                Span::styled(
                    format!("{:<5}", format!("{:?}", b.currency).to_uppercase()),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
                Span::styled(format_amount(b.amount, b.currency), Style::default().fg(Theme::TEXT)),
            ])
        })
        .collect()
}

pub fn render_profile(frame: &mut Frame, area: Rect, props: &ProfileProps, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let profile = &props.profile;
    let mut lines = vec![
        Line::styled(
            profile.display_name().to_string(),
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(format!("rating ★{:.1}", profile.rating)),
    ];
    if profile.verified {
        lines.push(Line::styled("verified", Style::default().fg(Theme::SUCCESS)));
    }
    if profile.vip_status == VipStatus::Vip {
        lines.push(Line::styled("VIP", Style::default().fg(Theme::ACCENT_GOLD)));
    }
    if let Some(city) = &profile.city {
        lines.push(Line::from(city.clone()));
    }
    lines.push(Line::from(""));
    lines.extend(balance_lines(&props.wallet));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "v: toggle VIP   w: wallet   a: my ads",
        Style::default().fg(Theme::MUTED_TEXT),
    ));
    render_text(frame, chunks[0], "Profile", lines);

    let now = Utc::now();
    let rows = props
        .transactions
        .iter()
        .map(|tx| {
            let sign = match tx.kind {
                TransactionKind::Deposit | TransactionKind::Referral => "+",
                TransactionKind::Withdrawal | TransactionKind::Payment => "-",
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:?} ", tx.kind), Style::default().fg(Theme::MUTED_TEXT)),
                Span::raw(format!("{sign}{}", format_amount(tx.amount, tx.currency))),
                Span::styled(
                    format!("  {}", format_since(tx.at, now)),
                    Style::default().fg(Theme::MUTED_TEXT),
                ),
            ]))
        })
        .collect();
    render_list(frame, chunks[1], "Transactions", rows, "No transactions", ui);
}

pub fn render_auth(frame: &mut Frame, area: Rect, view: ViewKind) {
    let lines = vec![
        Line::styled(
            if view == ViewKind::Register { "Create an account" } else { "Sign in" },
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from("b: continue as buyer"),
        Line::from("s: continue as seller"),
        Line::from(if view == ViewKind::Register {
            "l: I already have an account"
        } else {
            "r: create a new account"
        }),
    ];
    render_text(frame, area, view.title(), lines);
}

pub fn render_wallet(frame: &mut Frame, area: Rect, props: &WalletProps) {
    let mut lines = balance_lines(&props.wallet);
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "l: buy LOVE   p: profile",
        Style::default().fg(Theme::MUTED_TEXT),
    ));
    render_text(frame, area, "Wallet", lines);
}

pub fn render_seller(frame: &mut Frame, area: Rect, props: &SellerProfileProps) {
    let seller = &props.seller;
    let mut lines = vec![
        Line::styled(
            seller.name.clone(),
            Style::default().fg(Theme::ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::from(vec![
            Span::styled(format!("★{:.1}", seller.rating), Style::default().fg(Theme::ACCENT_GOLD)),
            Span::styled(
                if seller.verified { "  verified" } else { "" },
                Style::default().fg(Theme::SUCCESS),
            ),
        ]),
        Line::from(match seller.age {
            Some(age) => format!("{}, {}", seller.location, age),
            None => seller.location.clone(),
        }),
        Line::from(""),
        Line::from(seller.about.clone()),
    ];
    if !seller.services.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Services", Style::default().fg(Theme::INFO)));
        lines.extend(seller.services.iter().map(|s| Line::from(format!("  · {s}"))));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("your LOVE balance: {:.0}", props.wallet.balance(crate::model::Currency::Love)),
        Style::default().fg(Theme::MUTED_TEXT),
    ));
    render_text(frame, area, "Seller", lines);
}

pub fn render_my_ads(frame: &mut Frame, area: Rect, props: &MyAdsProps) {
    let lines = vec![
        Line::from(format!("Ads posted by {}", props.profile.display_name())),
        Line::from(""),
        Line::styled("No active ads.", Style::default().fg(Theme::MUTED_TEXT)),
        Line::styled("n: post an ad from the work section", Style::default().fg(Theme::MUTED_TEXT)),
    ];
    render_text(frame, area, "My ads", lines);
}

pub fn profile_key(props: &ProfileProps, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('v') => {
            let vip_status = match props.profile.vip_status {
                VipStatus::Vip => VipStatus::None,
                VipStatus::None => VipStatus::Vip,
            };
            props.update_profile.call(ProfilePatch {
                vip_status: Some(vip_status),
                ..ProfilePatch::default()
            });
            true
        }
        KeyCode::Char('w') => {
            props.go_to.call(PageId::Wallet);
            true
        }
        KeyCode::Char('a') => {
            props.go_to.call(PageId::MyAds);
            true
        }
        _ => false,
    }
}

/// Sign in, then land on home
pub fn auth_key(props: &AuthProps, key: KeyEvent) -> bool {
    let role = match key.code {
        KeyCode::Char('b') => UserRole::Buyer,
        KeyCode::Char('s') => UserRole::Seller,
        KeyCode::Char('l') => {
            props.go_to.call(PageId::Login);
            return true;
        }
        KeyCode::Char('r') => {
            props.go_to.call(PageId::Register);
            return true;
        }
        _ => return false,
    };
    props.set_user_role.call(Some(role));
    props.go_to.call(PageId::Home);
    true
}

pub fn wallet_key(props: &WalletProps, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('l') => {
            props.open_love_purchase.call();
            true
        }
        KeyCode::Char('p') => {
            props.go_to.call(PageId::Profile);
            true
        }
        _ => false,
    }
}

pub fn my_ads_key(props: &MyAdsProps, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('n') {
        props.go_to.call(PageId::Work);
        return true;
    }
    false
}
