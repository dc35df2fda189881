//! Application core — event loop, screen management, action dispatch.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use atelier_config::Config;
use atelier_core::{FILTER_ALL, Portfolio, menu};

use crate::action::{Action, GridSnapshot, Notification, NotificationLevel};
use crate::component::Component;
use crate::event::{Event, EventReader};
use crate::screen::ScreenId;
use crate::screens::create_screens;
use crate::theme;
use crate::tui::Tui;
use crate::widgets::lightbox::{self, LightboxView};

/// Fade cue after opening or stepping the lightbox (the site uses 200ms).
const FADE_DURATION: Duration = Duration::from_millis(200);
/// Close transition before the lightbox actually leaves the screen.
const CLOSE_DELAY: Duration = Duration::from_millis(300);
/// How long the contact confirmation stays before the submit row restores.
const CONFIRMATION_DURATION: Duration = Duration::from_secs(5);
/// Toast lifetime.
const NOTIFICATION_DURATION: Duration = Duration::from_secs(5);

/// Top-level application state and event loop.
pub struct App {
    /// Current active screen.
    active_screen: ScreenId,
    /// All screen components, keyed by ScreenId.
    screens: HashMap<ScreenId, Box<dyn Component>>,
    /// Whether the app should keep running.
    running: bool,
    /// Resolved configuration (site, relay, presentation).
    config: Config,
    /// The single owner of all portfolio navigation state.
    portfolio: Portfolio,
    /// Action sender — components can dispatch actions through this.
    action_tx: mpsc::UnboundedSender<Action>,
    /// Action receiver — main loop drains this.
    action_rx: mpsc::UnboundedReceiver<Action>,
    /// Cancellation token for in-flight fetch tasks.
    data_cancel: CancellationToken,
    /// Active notification toast with display timestamp.
    notification: Option<(Notification, Instant)>,
    /// Lightbox fade cue deadline.
    fade_until: Option<Instant>,
    /// Pending lightbox close deadline.
    closing_at: Option<Instant>,
    /// When the contact confirmation appeared.
    sent_at: Option<Instant>,
    /// Terminal size for responsive layout.
    terminal_size: (u16, u16),
}

impl App {
    /// Create a new App with all screens.
    pub fn new(config: Config) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let screens: HashMap<ScreenId, Box<dyn Component>> =
            create_screens().into_iter().collect();

        Self {
            active_screen: ScreenId::Grid,
            screens,
            running: true,
            config,
            portfolio: Portfolio::new(),
            action_tx,
            action_rx,
            data_cancel: CancellationToken::new(),
            notification: None,
            fade_until: None,
            closing_at: None,
            sent_at: None,
            terminal_size: (0, 0),
        }
    }

    /// Initialize all screen components with the action sender.
    fn init_screens(&mut self) -> Result<()> {
        for screen in self.screens.values_mut() {
            screen.init(self.action_tx.clone())?;
        }
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            screen.set_focused(true);
        }
        Ok(())
    }

    /// Spawn the one-shot fetch task against the content API.
    fn spawn_fetch(&self) {
        let cfg = self.config.clone();
        let tx = self.action_tx.clone();
        let cancel = self.data_cancel.clone();
        tokio::spawn(async move {
            crate::data_bridge::fetch_posts(cfg, tx, cancel).await;
        });
    }

    /// Run the main event loop. This is the heart of the TUI.
    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        self.terminal_size = tui.size().unwrap_or((80, 24));
        self.init_screens()?;

        // Initial load
        self.spawn_fetch();

        let mut events = EventReader::new(
            Duration::from_millis(250), // 4 Hz tick
            Duration::from_millis(33),  // ~30 FPS render
        );

        info!("TUI event loop started");

        while self.running {
            // 1. Wait for the next event
            let Some(event) = events.next().await else {
                break;
            };

            // 2. Map event → action(s)
            match event {
                Event::Key(key) => {
                    if let Some(action) = self.handle_key_event(key)? {
                        self.action_tx.send(action)?;
                    }
                }
                Event::Resize(w, h) => {
                    self.action_tx.send(Action::Resize(w, h))?;
                }
                Event::Tick => {
                    self.action_tx.send(Action::Tick)?;
                }
                Event::Render => {
                    self.action_tx.send(Action::Render)?;
                }
            }

            // 3. Drain and process all queued actions
            while let Ok(action) = self.action_rx.try_recv() {
                self.process_action(&action)?;

                if let Action::Render = action {
                    tui.draw(|frame| self.render(frame))?;
                }
            }
        }

        // Cancel any in-flight fetch and clean up
        self.data_cancel.cancel();
        events.stop();
        info!("TUI event loop ended");
        Ok(())
    }

    /// Map a key event to an action. Global keys are handled here;
    /// screen-specific keys are delegated to the active screen component.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Ctrl+C always quits
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            return Ok(Some(Action::Quit));
        }

        // Lightbox modality: while open, the grid underneath receives
        // nothing — only the carousel keys work.
        if self.portfolio.gallery().is_open() {
            return Ok(match key.code {
                KeyCode::Esc => Some(Action::CloseLightbox),
                KeyCode::Right => Some(Action::NextImage),
                KeyCode::Left => Some(Action::PreviousImage),
                _ => None,
            });
        }

        // Contact form captures everything except Esc (back to the work grid)
        if self.active_screen == ScreenId::Contact {
            if key.code == KeyCode::Esc {
                return Ok(Some(Action::SwitchScreen(ScreenId::Grid)));
            }
            if let Some(screen) = self.screens.get_mut(&ScreenId::Contact) {
                return screen.handle_key_event(key);
            }
            return Ok(None);
        }

        // Global keybindings on the grid
        match key.code {
            KeyCode::Char('q') => return Ok(Some(Action::Quit)),
            KeyCode::Tab | KeyCode::Char('c') => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.next())));
            }
            KeyCode::BackTab => {
                return Ok(Some(Action::SwitchScreen(self.active_screen.prev())));
            }
            KeyCode::Char('r') => return Ok(Some(Action::Reload)),
            // Esc backs out of a collection to the cover grid.
            KeyCode::Esc => {
                if self.portfolio.active_filter() != FILTER_ALL {
                    return Ok(Some(Action::ApplyFilter(FILTER_ALL.to_owned())));
                }
                return Ok(None);
            }
            _ => {}
        }

        // Delegate to active screen component
        if let Some(screen) = self.screens.get_mut(&self.active_screen) {
            return screen.handle_key_event(key);
        }

        Ok(None)
    }

    /// Process a single action — update app state and propagate to components.
    fn process_action(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => {
                self.running = false;
            }

            Action::Resize(w, h) => {
                self.terminal_size = (*w, *h);
            }

            Action::Tick => self.on_tick(),

            Action::SwitchScreen(id) => {
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    screen.set_focused(false);
                }
                self.active_screen = *id;
                if let Some(screen) = self.screens.get_mut(&self.active_screen) {
                    screen.set_focused(true);
                }
            }

            Action::Reload => self.spawn_fetch(),

            Action::PostsLoaded(posts) => {
                let count = self.portfolio.ingest(posts.clone());
                info!(count, "portfolio loaded");
                // Render whatever filter is current — "all" on first load.
                let filter = self.portfolio.active_filter().to_owned();
                self.apply_filter(&filter);
            }

            Action::FetchFailed(reason) => {
                self.notification = Some((
                    Notification::error(format!("Could not load the portfolio: {reason}")),
                    Instant::now(),
                ));
            }

            Action::ApplyFilter(filter) => self.apply_filter(filter),

            Action::OpenLightbox(index) => match self.portfolio.gallery_mut().open(*index) {
                Ok(()) => {
                    self.fade_until = Some(Instant::now() + FADE_DURATION);
                    self.closing_at = None;
                }
                // Rejected opens (empty gallery, stale index) are no-ops.
                Err(e) => debug!(error = %e, "lightbox open rejected"),
            },

            Action::CloseLightbox => {
                if self.closing_at.is_none() {
                    self.closing_at = Some(Instant::now() + CLOSE_DELAY);
                }
            }

            Action::NextImage => {
                if self.closing_at.is_none() {
                    self.portfolio.gallery_mut().next();
                    self.fade_until = Some(Instant::now() + FADE_DURATION);
                }
            }

            Action::PreviousImage => {
                if self.closing_at.is_none() {
                    self.portfolio.gallery_mut().previous();
                    self.fade_until = Some(Instant::now() + FADE_DURATION);
                }
            }

            Action::SubmitContact(form) => {
                let cfg = self.config.clone();
                let tx = self.action_tx.clone();
                let form = form.clone();
                tokio::spawn(async move {
                    crate::data_bridge::submit_contact(cfg, form, tx).await;
                });
            }

            Action::ContactSent => {
                self.sent_at = Some(Instant::now());
                self.notification =
                    Some((Notification::success("Message delivered"), Instant::now()));
            }

            Action::Notify(n) => {
                self.notification = Some((n.clone(), Instant::now()));
            }

            _ => {}
        }

        // Propagate to all screens; queue any follow-ups.
        for screen in self.screens.values_mut() {
            if let Some(follow_up) = screen.update(action)? {
                self.action_tx.send(follow_up)?;
            }
        }

        Ok(())
    }

    /// Re-run the view pipeline for a filter and push the result to the grid.
    fn apply_filter(&mut self, filter: &str) {
        let items = self.portfolio.render(filter);
        let snapshot = GridSnapshot {
            items,
            menu: menu::menu_entries(&self.config.ui.categories, filter),
            label: self.portfolio.collection_label().to_owned(),
        };
        let _ = self.action_tx.send(Action::GridUpdated(snapshot));
    }

    /// Advance every pending deadline.
    fn on_tick(&mut self) {
        let now = Instant::now();

        if let Some(at) = self.closing_at {
            if now >= at {
                self.portfolio.gallery_mut().close();
                self.closing_at = None;
                self.fade_until = None;
            }
        }

        if let Some(until) = self.fade_until {
            if now >= until {
                self.fade_until = None;
            }
        }

        if let Some(sent) = self.sent_at {
            if now.duration_since(sent) >= CONFIRMATION_DURATION {
                self.sent_at = None;
                let _ = self.action_tx.send(Action::RestoreSubmit);
            }
        }

        if let Some((_, shown)) = &self.notification {
            if shown.elapsed() >= NOTIFICATION_DURATION {
                self.notification = None;
            }
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let [header, content, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        // Header: brand left, tabs right.
        frame.render_widget(
            Paragraph::new(Span::styled(
                self.config.ui.brand.to_uppercase(),
                theme::title_style(),
            )),
            header,
        );
        let mut tabs: Vec<Span> = Vec::new();
        for (i, id) in ScreenId::ALL.iter().enumerate() {
            if i > 0 {
                tabs.push(Span::styled("  ", theme::menu_inactive()));
            }
            tabs.push(Span::styled(
                id.label(),
                if *id == self.active_screen {
                    theme::menu_active()
                } else {
                    theme::menu_inactive()
                },
            ));
        }
        frame.render_widget(
            Paragraph::new(Line::from(tabs)).alignment(Alignment::Right),
            header,
        );

        // Active screen
        if let Some(screen) = self.screens.get(&self.active_screen) {
            screen.render(frame, content);
        }

        // Lightbox overlay suspends the grid entirely while open.
        if self.portfolio.gallery().is_open() {
            lightbox::render(
                frame,
                content,
                &LightboxView {
                    gallery: self.portfolio.gallery(),
                    brand: &self.config.ui.brand,
                    fading: self.fade_until.is_some() || self.closing_at.is_some(),
                },
            );
        }

        // Footer: notification toast, or key hints.
        if let Some((notification, _)) = &self.notification {
            let style = match notification.level {
                NotificationLevel::Success => theme::success(),
                NotificationLevel::Error => theme::error(),
                NotificationLevel::Info => theme::status_bar(),
            };
            frame.render_widget(
                Paragraph::new(Span::styled(notification.message.clone(), style)),
                footer,
            );
        } else {
            let narrow = self.terminal_size.0 < 90;
            let hints = match self.active_screen {
                _ if self.portfolio.gallery().is_open() => {
                    "← → navigate · esc close · ctrl-c quit"
                }
                ScreenId::Grid if narrow => "enter open · esc back · q quit",
                ScreenId::Grid => {
                    "↑↓←→ select · enter open · 1-9 filter · esc all work · r reload · tab contact · q quit"
                }
                ScreenId::Contact => "tab next field · enter send · esc back",
            };
            frame.render_widget(
                Paragraph::new(Span::styled(hints, theme::status_bar())),
                footer,
            );
        }
    }
}
