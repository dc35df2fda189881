//! Monochrome gallery palette and semantic styling for the TUI.
//!
//! The site this fronts is black type on white; in the terminal that
//! becomes light-on-dark with a single warm accent.

use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const INK: Color = Color::Rgb(235, 235, 230); // #ebebe6
pub const INK_DIM: Color = Color::Rgb(150, 150, 148); // #969694
pub const INK_FAINT: Color = Color::Rgb(95, 95, 95); // #5f5f5f
pub const ACCENT: Color = Color::Rgb(214, 177, 132); // #d6b184 — warm print tone
pub const SUCCESS_GREEN: Color = Color::Rgb(139, 191, 139); // #8bbf8b
pub const ERROR_RED: Color = Color::Rgb(222, 112, 112); // #de7070
pub const BG_HIGHLIGHT: Color = Color::Rgb(38, 38, 36); // #262624

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(INK).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(ACCENT)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(INK_FAINT)
}

/// Active menu category / tab.
pub fn menu_active() -> Style {
    Style::default()
        .fg(INK)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Inactive menu category / tab.
pub fn menu_inactive() -> Style {
    Style::default().fg(INK_DIM)
}

/// Normal card text.
pub fn card_text() -> Style {
    Style::default().fg(INK_DIM)
}

/// Selected card.
pub fn card_selected() -> Style {
    Style::default()
        .fg(INK)
        .bg(BG_HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// The "no content" placeholder.
pub fn placeholder() -> Style {
    Style::default()
        .fg(INK_FAINT)
        .add_modifier(Modifier::ITALIC)
}

/// Status bar text.
pub fn status_bar() -> Style {
    Style::default().fg(INK_DIM)
}

/// Success notification / confirmation line.
pub fn success() -> Style {
    Style::default().fg(SUCCESS_GREEN)
}

/// Error notification / inline form error.
pub fn error() -> Style {
    Style::default().fg(ERROR_RED)
}
