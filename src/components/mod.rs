//! Window content renderers.
//!
//! One component per static window plus the detail-window body. Components
//! receive events already localized to their content area by the app and
//! answer with an [`Outcome`] instead of mutating shared state; opening
//! detail windows or submitting the contact form is the app's job.

pub mod career;
pub mod contact;
pub mod detail;
pub mod markdown;
pub mod profile;
pub mod projects;
pub mod skills;

pub use career::CareerPanel;
pub use contact::ContactPanel;
pub use detail::DetailPanel;
pub use profile::ProfilePanel;
pub use projects::ProjectsPanel;
pub use skills::SkillsPanel;

use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::content::Detail;
use crate::content::email::ContactForm;
use crate::theme;

/// What a component wants the app to do with an event.
#[derive(Debug, Clone)]
pub enum Outcome {
    Ignored,
    Consumed,
    OpenDetail(Detail),
    Submit(ContactForm),
}

/// Per-view fetch state as the panel sees it.
#[derive(Debug, Clone, Default)]
pub enum LoadState<T> {
    #[default]
    Loading,
    Ready(T),
    Failed(String),
}

pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Handle an event localized to the content area. Default: not
    /// interested.
    fn handle_event(&mut self, _event: &Event, _area: Rect) -> Outcome {
        Outcome::Ignored
    }
}

/// A scrollable list of prebuilt lines, some of which open a detail
/// window when clicked. Covers every read-only panel.
#[derive(Debug, Default)]
pub struct RowList {
    rows: Vec<(Line<'static>, Option<Detail>)>,
    offset: usize,
}

impl RowList {
    pub fn set_rows(&mut self, rows: Vec<(Line<'static>, Option<Detail>)>) {
        self.rows = rows;
        self.offset = 0;
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let max_offset = self.rows.len().saturating_sub(area.height as usize);
        self.offset = self.offset.min(max_offset);
        let lines: Vec<Line> = self
            .rows
            .iter()
            .skip(self.offset)
            .take(area.height as usize)
            .map(|(line, _)| line.clone())
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    /// Scroll wheel and row clicks. Coordinates are content-local.
    pub fn handle_event(&mut self, event: &Event, area: Rect) -> Outcome {
        let Event::Mouse(mouse) = event else {
            return Outcome::Ignored;
        };
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.offset = self.offset.saturating_sub(1);
                Outcome::Consumed
            }
            MouseEventKind::ScrollDown => {
                let max_offset = self.rows.len().saturating_sub(area.height as usize);
                self.offset = (self.offset + 1).min(max_offset);
                Outcome::Consumed
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let index = self.offset + mouse.row as usize;
                match self.rows.get(index).and_then(|(_, detail)| detail.clone()) {
                    Some(detail) => Outcome::OpenDetail(detail),
                    None => Outcome::Ignored,
                }
            }
            _ => Outcome::Ignored,
        }
    }
}

/// Render a fetch failure or pending state; returns the data when ready.
pub fn render_load_state<'a, T>(
    state: &'a LoadState<T>,
    frame: &mut Frame,
    area: Rect,
) -> Option<&'a T> {
    match state {
        LoadState::Ready(data) => Some(data),
        LoadState::Loading => {
            frame.render_widget(
                Paragraph::new("loading…").style(Style::default().fg(theme::muted())),
                area,
            );
            None
        }
        LoadState::Failed(message) => {
            frame.render_widget(
                Paragraph::new(format!("error: {message}"))
                    .style(Style::default().fg(theme::error())),
                area,
            );
            None
        }
    }
}
