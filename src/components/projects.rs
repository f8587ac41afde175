use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::components::{Component, LoadState, Outcome, RowList, render_load_state};
use crate::content::{Detail, Repo};
use crate::theme;

/// Repository list from the hosting API. Each repo opens a detail window;
/// featured ones additionally carry their parsed README there.
#[derive(Debug, Default)]
pub struct ProjectsPanel {
    state: LoadState<Vec<Repo>>,
    list: RowList,
}

impl ProjectsPanel {
    pub fn set_state(&mut self, state: LoadState<Vec<Repo>>) {
        if let LoadState::Ready(repos) = &state {
            self.list.set_rows(build_rows(repos));
        }
        self.state = state;
    }

    pub fn state(&self) -> &LoadState<Vec<Repo>> {
        &self.state
    }
}

impl Component for ProjectsPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        if render_load_state(&self.state, frame, area).is_some() {
            self.list.render(frame, area);
        }
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> Outcome {
        self.list.handle_event(event, area)
    }
}

fn build_rows(repos: &[Repo]) -> Vec<(Line<'static>, Option<Detail>)> {
    let mut rows = Vec::new();
    for repo in repos {
        let detail = Some(Detail::Repository(repo.clone()));

        let mut title = vec![Span::styled(
            repo.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(language) = &repo.language {
            title.push(Span::styled(
                format!("  {language}"),
                Style::default().fg(theme::muted()),
            ));
        }
        if repo.stargazers_count > 0 {
            title.push(Span::styled(
                format!("  ★{}", repo.stargazers_count),
                Style::default().fg(theme::accent()),
            ));
        }
        if repo.readme.is_some() {
            title.push(Span::styled(
                "  [readme]",
                Style::default().fg(theme::success()),
            ));
        }
        rows.push((Line::from(title), detail.clone()));

        if let Some(description) = &repo.description {
            rows.push((
                Line::from(Span::styled(
                    format!("  {description}"),
                    Style::default().fg(theme::muted()),
                )),
                detail,
            ));
        }
        rows.push((Line::raw(""), None));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_link_back_to_their_repo() {
        let repos = crate::content::demo::repos();
        let rows = build_rows(&repos);
        let linked: Vec<&Detail> = rows.iter().filter_map(|(_, d)| d.as_ref()).collect();
        assert!(!linked.is_empty());
        let Detail::Repository(first) = linked[0] else {
            panic!("expected repository detail");
        };
        assert_eq!(first.name, repos[0].name);
    }
}
