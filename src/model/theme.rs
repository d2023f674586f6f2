use ratatui::style::Color;

use super::booking::BookingStatus;
use super::notification::NotificationKind;

pub struct Theme;

impl Theme {
    // ── Base palette ────────────────────────────────────────────
    pub const BACKGROUND: Color = Color::Rgb(20, 16, 24);
    pub const SURFACE: Color = Color::Rgb(32, 26, 38);
    pub const TEXT: Color = Color::Rgb(232, 226, 236);
    pub const MUTED_TEXT: Color = Color::Rgb(110, 100, 120);

    // ── Accent colors ───────────────────────────────────────────
    pub const ACCENT: Color = Color::Rgb(235, 90, 150); // rose, primary accent
    pub const ACCENT_GOLD: Color = Color::Rgb(230, 180, 70); // premium / wallet

    // ── Semantic colors ─────────────────────────────────────────
    pub const SUCCESS: Color = Color::Rgb(80, 210, 120);
    pub const WARNING: Color = Color::Rgb(230, 180, 60);
    pub const ERROR: Color = Color::Rgb(230, 80, 80);
    pub const INFO: Color = Color::Rgb(120, 170, 240);

    // ── UI chrome ───────────────────────────────────────────────
    pub const HEADER_BG: Color = Color::Rgb(28, 22, 34);
    pub const FOOTER_BG: Color = Color::Rgb(28, 22, 34);
    pub const PANEL_BORDER: Color = Color::Rgb(60, 50, 70);
    pub const ACTIVE_BORDER: Color = Color::Rgb(235, 90, 150); // = ACCENT
    pub const SELECTION_BG: Color = Color::Rgb(60, 36, 58);
    pub const FAVORITE: Color = Color::Rgb(240, 70, 110);

    pub fn booking_status_color(status: BookingStatus) -> Color {
        match status {
            BookingStatus::PendingSellerConfirmation => Self::WARNING,
            BookingStatus::Confirmed | BookingStatus::SellerReady | BookingStatus::BuyerReady => {
                Self::INFO
            }
            BookingStatus::InProgress => Self::ACCENT_GOLD,
            BookingStatus::Completed => Self::SUCCESS,
            BookingStatus::Cancelled | BookingStatus::Rejected => Self::ERROR,
        }
    }

    pub fn notification_color(kind: NotificationKind) -> Color {
        match kind {
            NotificationKind::Message => Self::ACCENT,
            NotificationKind::Booking => Self::INFO,
            NotificationKind::Review => Self::SUCCESS,
            NotificationKind::Referral => Self::ACCENT_GOLD,
            NotificationKind::System | NotificationKind::AdResponse => Self::MUTED_TEXT,
        }
    }
}
