use crossterm::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::components::{Component, Outcome};
use crate::content::email::{ContactError, ContactForm, validate};
use crate::theme;

const FIELD_COUNT: usize = 4;
/// Rows the message input occupies before it starts scrolling content.
const MESSAGE_ROWS: u16 = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SendStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(ContactError),
}

/// The contact form. Typing goes to the focused field; Tab cycles fields,
/// the button (click or Enter while past the last field) submits. The app
/// owns delivery and reports back through [`ContactPanel::set_status`].
#[derive(Debug, Default)]
pub struct ContactPanel {
    form: ContactForm,
    /// 0..FIELD_COUNT are fields, FIELD_COUNT is the send button.
    focus: usize,
    status: SendStatus,
}

impl ContactPanel {
    pub fn set_status(&mut self, status: SendStatus) {
        if status == SendStatus::Sent {
            self.form = ContactForm::default();
            self.focus = 0;
        }
        self.status = status;
    }

    pub fn status(&self) -> &SendStatus {
        &self.status
    }

    fn field_mut(&mut self, index: usize) -> Option<&mut String> {
        match index {
            0 => Some(&mut self.form.name),
            1 => Some(&mut self.form.email),
            2 => Some(&mut self.form.subject),
            3 => Some(&mut self.form.message),
            _ => None,
        }
    }

    fn submit(&mut self) -> Outcome {
        if self.status == SendStatus::Sending {
            return Outcome::Consumed;
        }
        // surface validation errors without a round trip
        if let Err(error) = validate(&self.form) {
            self.status = SendStatus::Failed(error);
            return Outcome::Consumed;
        }
        self.status = SendStatus::Sending;
        Outcome::Submit(self.form.clone())
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Tab => {
                self.focus = (self.focus + 1) % (FIELD_COUNT + 1);
                Outcome::Consumed
            }
            KeyCode::BackTab => {
                self.focus = self.focus.checked_sub(1).unwrap_or(FIELD_COUNT);
                Outcome::Consumed
            }
            KeyCode::Enter if self.focus == FIELD_COUNT => self.submit(),
            KeyCode::Enter if self.focus == 3 => {
                self.form.message.push('\n');
                Outcome::Consumed
            }
            KeyCode::Backspace => {
                if let Some(field) = self.field_mut(self.focus) {
                    field.pop();
                }
                Outcome::Consumed
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.field_mut(self.focus) {
                    field.push(c);
                }
                Outcome::Consumed
            }
            _ => Outcome::Ignored,
        }
    }

    /// Map a content-local row back to the field laid out on it.
    fn focus_at_row(row: u16) -> Option<usize> {
        match row {
            0 | 1 => Some(0),
            2 | 3 => Some(1),
            4 | 5 => Some(2),
            r if (6..7 + MESSAGE_ROWS).contains(&r) => Some(3),
            r if r == 8 + MESSAGE_ROWS => Some(FIELD_COUNT),
            _ => None,
        }
    }
}

impl Component for ContactPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        let mut lines: Vec<Line> = Vec::new();
        let label = |text: &str, active: bool| {
            let style = if active {
                Style::default().fg(theme::accent())
            } else {
                Style::default().fg(theme::muted())
            };
            Line::from(Span::styled(text.to_owned(), style))
        };
        let input = |value: &str, active: bool| {
            let mut text = value.to_owned();
            if active {
                text.push('▏');
            }
            Line::raw(text)
        };

        lines.push(label("NOM", self.focus == 0));
        lines.push(input(&self.form.name, self.focus == 0));
        lines.push(label("EMAIL", self.focus == 1));
        lines.push(input(&self.form.email, self.focus == 1));
        lines.push(label("SUJET", self.focus == 2));
        lines.push(input(&self.form.subject, self.focus == 2));
        lines.push(label("MESSAGE", self.focus == 3));

        // show the tail of the message so the cursor line stays visible
        let message_lines: Vec<&str> = self.form.message.split('\n').collect();
        let skip = message_lines.len().saturating_sub(MESSAGE_ROWS as usize);
        let visible = &message_lines[skip..];
        for (i, line) in visible.iter().enumerate() {
            lines.push(input(line, self.focus == 3 && i + 1 == visible.len()));
        }
        for _ in visible.len()..MESSAGE_ROWS as usize {
            lines.push(Line::raw(""));
        }

        lines.push(Line::raw(""));
        let button_style = if self.focus == FIELD_COUNT {
            Style::default()
                .fg(theme::window_title_focused_fg())
                .bg(theme::accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::accent())
        };
        lines.push(Line::from(Span::styled("[ ENVOYER ]", button_style)));

        lines.push(match &self.status {
            SendStatus::Idle => Line::raw(""),
            SendStatus::Sending => Line::from(Span::styled(
                "envoi…",
                Style::default().fg(theme::muted()),
            )),
            SendStatus::Sent => Line::from(Span::styled(
                "message envoyé",
                Style::default().fg(theme::success()),
            )),
            SendStatus::Failed(error) => Line::from(Span::styled(
                error.to_string(),
                Style::default().fg(theme::error()),
            )),
        });

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn handle_event(&mut self, event: &Event, _area: Rect) -> Outcome {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match Self::focus_at_row(mouse.row) {
                    Some(target) if target == FIELD_COUNT => {
                        self.focus = target;
                        self.submit()
                    }
                    Some(target) => {
                        self.focus = target;
                        Outcome::Consumed
                    }
                    None => Outcome::Ignored,
                }
            }
            _ => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn type_str(panel: &mut ContactPanel, text: &str) {
        for c in text.chars() {
            panel.handle_event(&key(KeyCode::Char(c)), Rect::default());
        }
    }

    #[test]
    fn tab_cycles_through_fields_and_button() {
        let mut panel = ContactPanel::default();
        for expected in [1, 2, 3, 4, 0] {
            panel.handle_event(&key(KeyCode::Tab), Rect::default());
            assert_eq!(panel.focus, expected);
        }
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut panel = ContactPanel::default();
        type_str(&mut panel, "Ada");
        panel.handle_event(&key(KeyCode::Tab), Rect::default());
        type_str(&mut panel, "ada@example.test");
        assert_eq!(panel.form.name, "Ada");
        assert_eq!(panel.form.email, "ada@example.test");
    }

    #[test]
    fn incomplete_submit_reports_validation_error_locally() {
        let mut panel = ContactPanel::default();
        panel.focus = FIELD_COUNT;
        let outcome = panel.handle_event(&key(KeyCode::Enter), Rect::default());
        assert!(matches!(outcome, Outcome::Consumed));
        assert_eq!(panel.status, SendStatus::Failed(ContactError::MissingField));
    }

    #[test]
    fn complete_submit_yields_the_form_and_marks_sending() {
        let mut panel = ContactPanel::default();
        type_str(&mut panel, "Ada");
        panel.handle_event(&key(KeyCode::Tab), Rect::default());
        type_str(&mut panel, "ada@example.test");
        panel.handle_event(&key(KeyCode::Tab), Rect::default());
        type_str(&mut panel, "Bonjour");
        panel.handle_event(&key(KeyCode::Tab), Rect::default());
        type_str(&mut panel, "Beau bureau.");
        panel.handle_event(&key(KeyCode::Tab), Rect::default());

        let outcome = panel.handle_event(&key(KeyCode::Enter), Rect::default());
        let Outcome::Submit(form) = outcome else {
            panic!("expected submit outcome");
        };
        assert_eq!(form.subject, "Bonjour");
        assert_eq!(panel.status, SendStatus::Sending);

        // a second Enter while sending must not double-submit
        let outcome = panel.handle_event(&key(KeyCode::Enter), Rect::default());
        assert!(matches!(outcome, Outcome::Consumed));
    }

    #[test]
    fn successful_send_clears_the_form() {
        let mut panel = ContactPanel::default();
        type_str(&mut panel, "Ada");
        panel.set_status(SendStatus::Sent);
        assert_eq!(panel.form, ContactForm::default());
    }
}
