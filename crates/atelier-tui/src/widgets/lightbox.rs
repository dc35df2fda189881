//! Full-screen lightbox overlay: one photo, counter, caption.
//!
//! The terminal can't show the pixels, so the "photo" is its URL set large
//! and centered, the way the site's lightbox centers the image. The fade
//! cue dims the URL for a couple of ticks after every navigation, standing
//! in for the site's 200ms opacity transition.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use atelier_core::Gallery;

use crate::theme;

/// Everything the overlay needs for one frame.
pub struct LightboxView<'a> {
    pub gallery: &'a Gallery,
    pub brand: &'a str,
    /// Mid-transition: dim the image line.
    pub fading: bool,
}

/// Render the lightbox as a modal over the whole content area.
pub fn render(frame: &mut Frame, area: Rect, view: &LightboxView<'_>) {
    let Some(image) = view.gallery.current_image() else {
        return;
    };

    // Blank out the grid underneath — the lightbox suspends it entirely.
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border_default());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, middle, bottom] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .areas(inner);

    // The photo line.
    let image_style = if view.fading {
        theme::placeholder()
    } else {
        theme::title_style()
    };
    let photo = Paragraph::new(Line::from(Span::styled(image, image_style)))
        .alignment(Alignment::Center);
    frame.render_widget(photo, middle);

    // Counter, caption, and key hints along the bottom rows.
    let [counter_row, caption_row, hint_row] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(bottom_rows(bottom));

    if let Some(counter) = view.gallery.counter_text() {
        frame.render_widget(
            Paragraph::new(counter)
                .style(theme::status_bar())
                .alignment(Alignment::Center),
            counter_row,
        );
    }

    frame.render_widget(
        Paragraph::new(view.gallery.caption(view.brand))
            .style(theme::menu_inactive())
            .alignment(Alignment::Center),
        caption_row,
    );

    frame.render_widget(
        Paragraph::new("← previous · → next · esc close")
            .style(theme::placeholder())
            .alignment(Alignment::Center),
        hint_row,
    );
}

/// Pin three one-line rows to the bottom of the area.
fn bottom_rows(area: Rect) -> Rect {
    let height = 3.min(area.height);
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height),
        width: area.width,
        height,
    }
}
