use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::components::{Component, LoadState, Outcome, RowList, render_load_state};
use crate::content::{Detail, Education, Experience};
use crate::theme;

pub type CareerData = (Vec<Education>, Vec<Experience>);

/// Education and experience timeline. Every entry row opens a detail
/// window with the full record.
#[derive(Debug, Default)]
pub struct CareerPanel {
    state: LoadState<CareerData>,
    list: RowList,
}

impl CareerPanel {
    pub fn set_state(&mut self, state: LoadState<CareerData>) {
        if let LoadState::Ready((education, experience)) = &state {
            self.list.set_rows(build_rows(education, experience));
        }
        self.state = state;
    }

    pub fn state(&self) -> &LoadState<CareerData> {
        &self.state
    }
}

impl Component for CareerPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        if render_load_state(&self.state, frame, area).is_some() {
            self.list.render(frame, area);
        }
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> Outcome {
        self.list.handle_event(event, area)
    }
}

fn period(start: &str, end: Option<&str>) -> String {
    match end {
        Some(end) => format!("{start}–{end}"),
        None => format!("{start}–"),
    }
}

fn build_rows(
    education: &[Education],
    experience: &[Experience],
) -> Vec<(Line<'static>, Option<Detail>)> {
    let mut rows = Vec::new();

    rows.push((
        Line::from(Span::styled(
            "FORMATION",
            Style::default().fg(theme::heading()),
        )),
        None,
    ));
    for entry in education {
        let detail = Some(Detail::Education(entry.clone()));
        rows.push((
            Line::from(vec![
                Span::styled(
                    entry.degree.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", period(&entry.start, entry.end.as_deref())),
                    Style::default().fg(theme::muted()),
                ),
            ]),
            detail.clone(),
        ));
        rows.push((
            Line::from(Span::styled(
                format!("  {}", entry.institution),
                Style::default().fg(theme::muted()),
            )),
            detail,
        ));
    }

    rows.push((Line::raw(""), None));
    rows.push((
        Line::from(Span::styled(
            "EXPÉRIENCE",
            Style::default().fg(theme::heading()),
        )),
        None,
    ));
    for entry in experience {
        let detail = Some(Detail::Experience(entry.clone()));
        rows.push((
            Line::from(vec![
                Span::styled(
                    entry.role.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", period(&entry.start, entry.end.as_deref())),
                    Style::default().fg(theme::muted()),
                ),
            ]),
            detail.clone(),
        ));
        rows.push((
            Line::from(Span::styled(
                format!("  {}", entry.company),
                Style::default().fg(theme::muted()),
            )),
            detail,
        ));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entry_row_carries_its_detail() {
        let education = crate::content::demo::education();
        let experience = crate::content::demo::experience();
        let rows = build_rows(&education, &experience);

        let detail_rows = rows.iter().filter(|(_, d)| d.is_some()).count();
        // two rows per entry
        assert_eq!(detail_rows, (education.len() + experience.len()) * 2);
    }
}
