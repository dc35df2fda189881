//! Portfolio screen — the cover grid, or one collection's photos.
//!
//! Layout:
//! ┌─ menu bar: all · Gastronomy · Exterior · ...        All Work ─┐
//! │ ┌────────────┐ ┌────────────┐ ┌────────────┐                  │
//! │ │ GASTRONOMY │ │ EXTERIOR   │ │ EDITORIAL  │   cover cards    │
//! │ │ <url>      │ │ <url>      │ │ <url>      │   (or photo      │
//! │ │ View Coll. │ │ View Coll. │ │ View Coll. │    cards)        │
//! │ └────────────┘ └────────────┘ └────────────┘                  │
//! └────────────────────────────────────────────────────────────────┘

use std::cell::Cell;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use atelier_core::{MenuEntry, ViewItem, ViewKind};

use crate::action::Action;
use crate::component::Component;
use crate::theme;

/// Minimum card width; the column count follows the terminal.
const CARD_WIDTH: u16 = 28;
const CARD_HEIGHT: u16 = 5;

/// Portfolio screen state.
pub struct GridScreen {
    items: Vec<ViewItem>,
    menu: Vec<MenuEntry>,
    label: String,
    selected: usize,
    loading: bool,
    fetch_error: Option<String>,
    throbber_state: throbber_widgets_tui::ThrobberState,
    /// Column count from the last render, for Up/Down movement.
    columns: Cell<usize>,
}

impl GridScreen {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            menu: Vec::new(),
            label: String::new(),
            selected: 0,
            loading: true,
            fetch_error: None,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            columns: Cell::new(1),
        }
    }

    fn select_back(&mut self, n: usize) {
        self.selected = self.selected.saturating_sub(n);
    }

    fn select_forward(&mut self, n: usize) {
        if !self.items.is_empty() {
            self.selected = (self.selected + n).min(self.items.len() - 1);
        }
    }

    /// Action for activating the selected card: covers navigate into the
    /// collection, photos open the lightbox at their position.
    fn activate_selected(&self) -> Option<Action> {
        let item = self.items.get(self.selected)?;
        match item.kind {
            ViewKind::Cover => Some(Action::ApplyFilter(item.title.clone())),
            ViewKind::Photo => Some(Action::OpenLightbox(self.selected)),
        }
    }

    // ── Render helpers ───────────────────────────────────────────────

    fn render_menu_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, entry) in self.menu.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ·  ", theme::menu_inactive()));
            }
            let style = if entry.active {
                theme::menu_active()
            } else {
                theme::menu_inactive()
            };
            spans.push(Span::styled(
                format!("{} {}", i + 1, entry.category),
                style,
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);

        // Active collection label, right-aligned.
        frame.render_widget(
            Paragraph::new(Span::styled(self.label.clone(), theme::title_style()))
                .alignment(Alignment::Right),
            area,
        );
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let throbber = throbber_widgets_tui::Throbber::default()
            .label("Loading portfolio ...")
            .style(theme::menu_inactive())
            .throbber_style(ratatui::style::Style::default().fg(theme::ACCENT));
        let row = centered_row(area);
        frame.render_stateful_widget(throbber, row, &mut self.throbber_state.clone());
    }

    fn render_placeholder(&self, frame: &mut Frame, area: Rect) {
        let text = match &self.fetch_error {
            // The fetch failed: the grid stays empty, offer the reload key.
            Some(_) => "Nothing to show — press r to reload",
            None => "No content available",
        };
        frame.render_widget(
            Paragraph::new(text)
                .style(theme::placeholder())
                .alignment(Alignment::Center),
            centered_row(area),
        );
    }

    fn render_cards(&self, frame: &mut Frame, area: Rect) {
        let columns = usize::from((area.width / CARD_WIDTH).max(1));
        self.columns.set(columns);

        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        let selected_row = self.selected / columns;
        // Keep the selected row in view.
        let first_row = selected_row.saturating_sub(visible_rows - 1);

        for (idx, item) in self.items.iter().enumerate() {
            let row = idx / columns;
            if row < first_row || row >= first_row + visible_rows {
                continue;
            }
            let col = idx % columns;
            let cell = Rect {
                x: area.x + u16::try_from(col).unwrap_or(0) * CARD_WIDTH,
                y: area.y + u16::try_from(row - first_row).unwrap_or(0) * CARD_HEIGHT,
                width: CARD_WIDTH.min(area.width),
                height: CARD_HEIGHT.min(area.height),
            };
            self.render_card(frame, cell, item, idx == self.selected);
        }
    }

    fn render_card(&self, frame: &mut Frame, area: Rect, item: &ViewItem, selected: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if selected {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let title_style = if selected {
            theme::card_selected()
        } else {
            theme::title_style()
        };
        let mut lines = vec![
            Line::from(Span::styled(item.title.to_uppercase(), title_style)),
            Line::from(Span::styled(
                truncate(item.image.as_deref().unwrap_or_default(), inner.width),
                theme::card_text(),
            )),
        ];
        if item.kind == ViewKind::Cover {
            lines.push(Line::from(Span::styled(
                "View Collection",
                theme::placeholder(),
            )));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

impl Component for GridScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let columns = self.columns.get();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.select_back(1),
            KeyCode::Right | KeyCode::Char('l') => self.select_forward(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_back(columns),
            KeyCode::Down | KeyCode::Char('j') => self.select_forward(columns),
            KeyCode::Enter => return Ok(self.activate_selected()),
            KeyCode::Char(c @ '1'..='9') => {
                let digit = usize::try_from(c.to_digit(10).unwrap_or(1)).unwrap_or(1);
                if let Some(entry) = self.menu.get(digit - 1) {
                    return Ok(Some(Action::ApplyFilter(entry.category.clone())));
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => {
                if self.loading {
                    self.throbber_state.calc_next();
                }
            }
            Action::GridUpdated(snapshot) => {
                self.items = snapshot.items.clone();
                self.menu = snapshot.menu.clone();
                self.label.clone_from(&snapshot.label);
                self.selected = 0;
            }
            Action::PostsLoaded(_) => {
                self.loading = false;
                self.fetch_error = None;
            }
            Action::FetchFailed(reason) => {
                self.loading = false;
                self.fetch_error = Some(reason.clone());
            }
            Action::Reload => {
                self.loading = true;
                self.fetch_error = None;
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let [menu_bar, content] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

        self.render_menu_bar(frame, menu_bar);

        if self.loading {
            self.render_loading(frame, content);
        } else if self.items.is_empty() {
            self.render_placeholder(frame, content);
        } else {
            self.render_cards(frame, content);
        }
    }

    fn id(&self) -> &str {
        "grid"
    }
}

// ── Small helpers ────────────────────────────────────────────────────

/// One-line Rect vertically centered in the area.
fn centered_row(area: Rect) -> Rect {
    Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1.min(area.height),
    }
}

fn truncate(value: &str, max_chars: u16) -> String {
    let max_chars = usize::from(max_chars);
    if value.chars().count() <= max_chars {
        return value.to_owned();
    }
    let mut out: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::action::GridSnapshot;

    fn snapshot(n: usize) -> GridSnapshot {
        GridSnapshot {
            items: (0..n)
                .map(|i| ViewItem::photo("Exterior", format!("img{i}.jpg")))
                .collect(),
            menu: Vec::new(),
            label: "Exterior".into(),
        }
    }

    #[test]
    fn selection_is_clamped_to_the_item_range() {
        let mut screen = GridScreen::new();
        screen
            .update(&Action::GridUpdated(snapshot(3)))
            .expect("update");

        screen.select_back(1);
        assert_eq!(screen.selected, 0);
        screen.select_forward(10);
        assert_eq!(screen.selected, 2);
    }

    #[test]
    fn activating_a_photo_opens_the_lightbox_at_its_index() {
        let mut screen = GridScreen::new();
        screen
            .update(&Action::GridUpdated(snapshot(3)))
            .expect("update");
        screen.select_forward(2);

        assert!(matches!(
            screen.activate_selected(),
            Some(Action::OpenLightbox(2))
        ));
    }

    #[test]
    fn activating_a_cover_applies_its_title_as_filter() {
        let mut screen = GridScreen::new();
        let snap = GridSnapshot {
            items: vec![ViewItem::cover("Gastronomy", Some("a.jpg".into()))],
            menu: Vec::new(),
            label: "All Work".into(),
        };
        screen.update(&Action::GridUpdated(snap)).expect("update");

        match screen.activate_selected() {
            Some(Action::ApplyFilter(filter)) => assert_eq!(filter, "Gastronomy"),
            other => panic!("expected ApplyFilter, got {other:?}"),
        }
    }

    #[test]
    fn a_new_snapshot_resets_the_selection() {
        let mut screen = GridScreen::new();
        screen
            .update(&Action::GridUpdated(snapshot(5)))
            .expect("update");
        screen.select_forward(4);

        screen
            .update(&Action::GridUpdated(snapshot(2)))
            .expect("update");
        assert_eq!(screen.selected, 0);
    }
}
