use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::components::skills::level_gauge;
use crate::components::{Component, Outcome, RowList, markdown};
use crate::content::{Detail, Education, Experience, Repo, TechnicalSkill};
use crate::theme;

/// Body of a spawned detail window. The content is fixed at open time;
/// the panel only scrolls.
#[derive(Debug)]
pub struct DetailPanel {
    list: RowList,
}

impl DetailPanel {
    pub fn new(detail: &Detail) -> Self {
        let lines = match detail {
            Detail::Education(education) => education_lines(education),
            Detail::Experience(experience) => experience_lines(experience),
            Detail::TechnicalSkill(skill) => {
                skill_lines(&skill.name, Some(skill.level), &skill_sections(skill))
            }
            Detail::BehavioralSkill(skill) => skill_lines(
                &skill.name,
                None,
                &[
                    ("Définition", skill.definition.as_deref()),
                    ("Preuves", skill.evidence.as_deref()),
                    ("Auto-évaluation", skill.self_review.as_deref()),
                    ("Progression", skill.growth.as_deref()),
                ],
            ),
            Detail::Repository(repo) => repo_lines(repo),
        };
        let mut list = RowList::default();
        list.set_rows(lines.into_iter().map(|line| (line, None)).collect());
        Self { list }
    }
}

impl Component for DetailPanel {
    fn render(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        self.list.render(frame, area);
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> Outcome {
        // rows carry no targets, so only scrolling comes back consumed
        self.list.handle_event(event, area)
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_owned(),
        Style::default().fg(theme::heading()),
    ))
}

fn muted(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(theme::muted())))
}

fn body_lines(lines: &mut Vec<Line<'static>>, text: &str) {
    for line in text.lines() {
        lines.push(Line::raw(line.to_owned()));
    }
}

fn period(start: &str, end: Option<&str>) -> String {
    match end {
        Some(end) => format!("{start}–{end}"),
        None => format!("{start}–"),
    }
}

fn education_lines(education: &Education) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        education.degree.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let mut place = education.institution.clone();
    if let Some(note) = &education.institution_note {
        place.push_str(&format!(" ({note})"));
    }
    if let Some(city) = &education.city {
        place.push_str(&format!(" · {city}"));
    }
    lines.push(muted(place));
    lines.push(muted(period(&education.start, education.end.as_deref())));

    if let Some(description) = &education.description {
        lines.push(Line::raw(""));
        body_lines(&mut lines, description);
    }
    if let Some(technologies) = &education.technologies {
        lines.push(Line::raw(""));
        lines.push(heading("TECHNOLOGIES"));
        body_lines(&mut lines, technologies);
    }
    if let Some(courses) = &education.courses {
        lines.push(Line::raw(""));
        lines.push(heading("COURS"));
        body_lines(&mut lines, courses);
    }
    lines
}

fn experience_lines(experience: &Experience) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    lines.push(Line::from(Span::styled(
        experience.role.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    let mut place = experience.company.clone();
    if let Some(city) = &experience.city {
        place.push_str(&format!(" · {city}"));
    }
    lines.push(muted(place));
    lines.push(muted(period(&experience.start, experience.end.as_deref())));

    if let Some(summary) = &experience.summary {
        lines.push(Line::raw(""));
        body_lines(&mut lines, summary);
    }
    if !experience.tasks.is_empty() {
        lines.push(Line::raw(""));
        lines.push(heading("MISSIONS"));
        for task in &experience.tasks {
            lines.push(Line::raw(format!("- {}", task.description)));
        }
    }
    lines
}

fn skill_sections(skill: &TechnicalSkill) -> [(&'static str, Option<&str>); 4] {
    [
        ("Définition", skill.definition.as_deref()),
        ("Preuves", skill.evidence.as_deref()),
        ("Auto-évaluation", skill.self_review.as_deref()),
        ("Progression", skill.growth.as_deref()),
    ]
}

fn skill_lines(
    name: &str,
    level: Option<u8>,
    sections: &[(&'static str, Option<&str>)],
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut title = vec![Span::styled(
        name.to_owned(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(level) = level {
        title.push(Span::styled(
            format!("  {}", level_gauge(level)),
            Style::default().fg(theme::accent()),
        ));
    }
    lines.push(Line::from(title));

    for (label, body) in sections {
        if let Some(body) = body {
            lines.push(Line::raw(""));
            lines.push(heading(&label.to_uppercase()));
            body_lines(&mut lines, body);
        }
    }
    lines
}

fn repo_lines(repo: &Repo) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
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
    lines.push(Line::from(title));

    if let Some(description) = &repo.description {
        lines.push(Line::raw(description.clone()));
    }
    lines.push(Line::from(Span::styled(
        repo.html_url.clone(),
        Style::default().fg(theme::link()),
    )));
    if let Some(homepage) = &repo.homepage {
        lines.push(Line::from(Span::styled(
            homepage.clone(),
            Style::default().fg(theme::link()),
        )));
    }
    if !repo.topics.is_empty() {
        lines.push(muted(repo.topics.join(" · ")));
    }

    if let Some(readme) = &repo.readme {
        for (label, body) in readme.labeled() {
            lines.push(Line::raw(""));
            lines.push(heading(&label.to_uppercase()));
            lines.extend(markdown::markdown_text(body).lines);
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::demo;

    fn plain(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn experience_detail_lists_every_task() {
        let experience = demo::experience().remove(0);
        let text = plain(&experience_lines(&experience));
        for task in &experience.tasks {
            assert!(text.iter().any(|line| line.contains(&task.description)));
        }
    }

    #[test]
    fn repository_detail_includes_parsed_readme_sections() {
        let repos = demo::repos();
        let featured = repos
            .iter()
            .find(|repo| repo.readme.is_some())
            .expect("demo data has a featured repo");
        let text = plain(&repo_lines(featured));
        assert!(text.iter().any(|line| line == "PRÉSENTATION"));
        assert!(text.iter().any(|line| line.contains(&featured.html_url)));
    }

    #[test]
    fn open_ended_period_keeps_trailing_dash() {
        assert_eq!(period("2023", None), "2023–");
        assert_eq!(period("2020", Some("2023")), "2020–2023");
    }
}
