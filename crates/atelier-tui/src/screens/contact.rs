//! Contact screen — name / email / message form over the relay.
//!
//! Submit lifecycle mirrors the site's form: sending disables the submit
//! control, success clears the fields and shows a confirmation that the
//! app restores after 5 seconds, failure keeps the fields populated so the
//! visitor can retry.

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use atelier_api::ContactForm;

use crate::action::Action;
use crate::component::Component;
use crate::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// Submit control state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum FormStatus {
    #[default]
    Idle,
    Sending,
    /// Confirmation visible; the app restores to Idle after 5 seconds.
    Sent,
    Error(String),
}

pub struct ContactScreen {
    name: String,
    email: String,
    message: String,
    active_field: Field,
    status: FormStatus,
    /// Validation hint shown under the submit row.
    hint: Option<String>,
}

impl ContactScreen {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            active_field: Field::Name,
            status: FormStatus::default(),
            hint: None,
        }
    }

    fn form(&self) -> ContactForm {
        ContactForm {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    fn field_value_mut(&mut self) -> &mut String {
        match self.active_field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    fn submit(&mut self) -> Option<Action> {
        if self.status == FormStatus::Sending {
            return None;
        }
        let form = self.form();
        if !form.is_complete() {
            self.hint = Some("All fields are required".into());
            return None;
        }
        self.hint = None;
        self.status = FormStatus::Sending;
        Some(Action::SubmitContact(form))
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: Field, value: &str) {
        let active = self.active_field == field && self.status != FormStatus::Sending;
        let block = Block::default()
            .title(format!(" {} ", field.label()))
            .title_style(theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if active {
                theme::border_focused()
            } else {
                theme::border_default()
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Trailing cursor cell on the active field.
        let text = if active {
            format!("{value}▏")
        } else {
            value.to_owned()
        };
        frame.render_widget(Paragraph::new(text).style(theme::card_text()), inner);
    }

    fn submit_line(&self) -> Line<'_> {
        match &self.status {
            FormStatus::Idle => Line::from(Span::styled(
                "[ Enter to send ]",
                theme::menu_active(),
            )),
            FormStatus::Sending => Line::from(Span::styled(
                "SENDING ... connecting to server",
                theme::menu_inactive(),
            )),
            FormStatus::Sent => Line::from(Span::styled(
                "MESSAGE SENT — Thank you. I will reply shortly.",
                theme::success(),
            )),
            FormStatus::Error(message) => Line::from(Span::styled(
                format!("Error sending message. Please try again. ({message})"),
                theme::error(),
            )),
        }
    }
}

impl Component for ContactScreen {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Input is suspended while a submission is in flight.
        if self.status == FormStatus::Sending {
            return Ok(None);
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.active_field = self.active_field.next(),
            KeyCode::BackTab | KeyCode::Up => self.active_field = self.active_field.prev(),
            KeyCode::Backspace => {
                self.field_value_mut().pop();
            }
            KeyCode::Enter => return Ok(self.submit()),
            KeyCode::Char(c) => self.field_value_mut().push(c),
            _ => {}
        }
        Ok(None)
    }

    fn update(&mut self, action: &Action) -> Result<Option<Action>> {
        match action {
            Action::ContactSent => {
                // Success resets the form; the confirmation stays up until
                // the app fires RestoreSubmit.
                self.status = FormStatus::Sent;
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.active_field = Field::Name;
            }
            Action::ContactFailed(message) => {
                // Fields stay populated for retry.
                self.status = FormStatus::Error(message.clone());
            }
            Action::RestoreSubmit => {
                if self.status == FormStatus::Sent {
                    self.status = FormStatus::Idle;
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let width = area.width.clamp(20, 64);
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let panel = Rect {
            x,
            y: area.y,
            width,
            height: area.height,
        };

        let [intro, name, email, message, submit, hint] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(panel);

        frame.render_widget(
            Paragraph::new("Get in touch about prints, bookings, and collaborations.")
                .style(theme::menu_inactive())
                .alignment(Alignment::Center),
            intro,
        );

        self.render_field(frame, name, Field::Name, &self.name);
        self.render_field(frame, email, Field::Email, &self.email);
        self.render_field(frame, message, Field::Message, &self.message);

        frame.render_widget(
            Paragraph::new(self.submit_line()).alignment(Alignment::Center),
            submit,
        );

        if let Some(h) = &self.hint {
            frame.render_widget(
                Paragraph::new(h.clone())
                    .style(theme::error())
                    .alignment(Alignment::Center),
                hint,
            );
        }
    }

    fn id(&self) -> &str {
        "contact"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactScreen {
        let mut s = ContactScreen::new();
        s.name = "Ada".into();
        s.email = "ada@example.com".into();
        s.message = "Hello".into();
        s
    }

    #[test]
    fn incomplete_form_does_not_submit() {
        let mut s = ContactScreen::new();
        assert!(s.submit().is_none());
        assert!(s.hint.is_some());
        assert_eq!(s.status, FormStatus::Idle);
    }

    #[test]
    fn complete_form_submits_and_locks_input() {
        let mut s = filled();
        let action = s.submit();
        assert!(matches!(action, Some(Action::SubmitContact(_))));
        assert_eq!(s.status, FormStatus::Sending);

        // A second Enter while sending is swallowed.
        assert!(s.submit().is_none());
    }

    #[test]
    fn success_resets_fields_and_failure_keeps_them() {
        let mut s = filled();
        s.submit();
        s.update(&Action::ContactSent).expect("update");
        assert_eq!(s.status, FormStatus::Sent);
        assert!(s.name.is_empty() && s.email.is_empty() && s.message.is_empty());

        let mut s = filled();
        s.submit();
        s.update(&Action::ContactFailed("relay down".into()))
            .expect("update");
        assert!(matches!(s.status, FormStatus::Error(_)));
        assert_eq!(s.name, "Ada");
    }

    #[test]
    fn restore_submit_returns_to_idle_after_confirmation() {
        let mut s = filled();
        s.submit();
        s.update(&Action::ContactSent).expect("update");
        s.update(&Action::RestoreSubmit).expect("update");
        assert_eq!(s.status, FormStatus::Idle);
    }
}
