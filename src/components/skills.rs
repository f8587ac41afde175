use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::components::{Component, LoadState, Outcome, RowList, render_load_state};
use crate::content::{BehavioralSkill, Detail, TechnicalSkillGroup};
use crate::theme;

pub type SkillsData = (Vec<TechnicalSkillGroup>, Vec<BehavioralSkill>);

/// Technical skills grouped by category with level gauges, then the
/// behavioral list. Skill rows open detail windows.
#[derive(Debug, Default)]
pub struct SkillsPanel {
    state: LoadState<SkillsData>,
    list: RowList,
}

impl SkillsPanel {
    pub fn set_state(&mut self, state: LoadState<SkillsData>) {
        if let LoadState::Ready((technical, behavioral)) = &state {
            self.list.set_rows(build_rows(technical, behavioral));
        }
        self.state = state;
    }

    pub fn state(&self) -> &LoadState<SkillsData> {
        &self.state
    }
}

impl Component for SkillsPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        if render_load_state(&self.state, frame, area).is_some() {
            self.list.render(frame, area);
        }
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> Outcome {
        self.list.handle_event(event, area)
    }
}

/// Five-cell gauge for a 0..=5 level.
pub fn level_gauge(level: u8) -> String {
    let filled = usize::from(level.min(5));
    let mut gauge = String::new();
    for slot in 0..5 {
        gauge.push(if slot < filled { '■' } else { '□' });
    }
    gauge
}

fn build_rows(
    technical: &[TechnicalSkillGroup],
    behavioral: &[BehavioralSkill],
) -> Vec<(Line<'static>, Option<Detail>)> {
    let mut rows = Vec::new();

    for group in technical {
        rows.push((
            Line::from(Span::styled(
                group.category.to_uppercase(),
                Style::default().fg(theme::heading()),
            )),
            None,
        ));
        for skill in &group.items {
            rows.push((
                Line::from(vec![
                    Span::raw(format!("{:<16}", skill.name)),
                    Span::styled(level_gauge(skill.level), Style::default().fg(theme::accent())),
                ]),
                Some(Detail::TechnicalSkill(skill.clone())),
            ));
        }
        rows.push((Line::raw(""), None));
    }

    rows.push((
        Line::from(Span::styled(
            "SAVOIR-ÊTRE",
            Style::default().fg(theme::heading()),
        )),
        None,
    ));
    for skill in behavioral {
        rows.push((
            Line::raw(format!("- {}", skill.name)),
            Some(Detail::BehavioralSkill(skill.clone())),
        ));
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gauge_fills_to_level_and_caps_at_five() {
        assert_eq!(level_gauge(0), "□□□□□");
        assert_eq!(level_gauge(3), "■■■□□");
        assert_eq!(level_gauge(9), "■■■■■");
    }
}
