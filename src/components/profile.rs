use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::components::{Component, LoadState, Outcome, RowList, render_load_state};
use crate::content::{Interest, Language, Profile};
use crate::theme;

pub type ProfileData = (Option<Profile>, Vec<Language>, Vec<Interest>);

/// Identity card: name, headline, contact lines, bio, languages and
/// interests. Nothing here opens a detail window.
#[derive(Debug, Default)]
pub struct ProfilePanel {
    state: LoadState<ProfileData>,
    list: RowList,
}

impl ProfilePanel {
    pub fn set_state(&mut self, state: LoadState<ProfileData>) {
        if let LoadState::Ready((profile, languages, interests)) = &state {
            self.list.set_rows(build_rows(profile, languages, interests));
        }
        self.state = state;
    }

    pub fn state(&self) -> &LoadState<ProfileData> {
        &self.state
    }
}

impl Component for ProfilePanel {
    fn render(&mut self, frame: &mut Frame, area: Rect, _focused: bool) {
        if render_load_state(&self.state, frame, area).is_some() {
            self.list.render(frame, area);
        }
    }

    fn handle_event(&mut self, event: &Event, area: Rect) -> Outcome {
        self.list.handle_event(event, area)
    }
}

fn build_rows(
    profile: &Option<Profile>,
    languages: &[Language],
    interests: &[Interest],
) -> Vec<(Line<'static>, Option<crate::content::Detail>)> {
    let mut rows = Vec::new();
    let mut push = |line: Line<'static>| rows.push((line, None));

    match profile {
        Some(profile) => {
            push(Line::from(Span::styled(
                profile.full_name(),
                Style::default()
                    .fg(theme::accent())
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(headline) = &profile.headline {
                push(Line::raw(headline.clone()));
            }
            if let Some(seeking) = &profile.seeking {
                push(Line::from(Span::styled(
                    format!("recherche: {seeking}"),
                    Style::default().fg(theme::muted()),
                )));
            }
            push(Line::raw(""));

            for (label, value) in [
                ("lieu", &profile.location),
                ("email", &profile.email),
                ("web", &profile.website),
            ] {
                if let Some(value) = value {
                    push(Line::from(vec![
                        Span::styled(format!("{label:<6}"), Style::default().fg(theme::muted())),
                        Span::raw(value.clone()),
                    ]));
                }
            }

            if let Some(bio) = &profile.bio {
                push(Line::raw(""));
                for line in bio.lines() {
                    push(Line::raw(line.to_owned()));
                }
            }
            if let Some(values) = &profile.values {
                push(Line::raw(""));
                push(Line::from(Span::styled(
                    "VALEURS",
                    Style::default().fg(theme::heading()),
                )));
                for line in values.lines() {
                    push(Line::raw(line.to_owned()));
                }
            }
        }
        None => {
            // store has no profile row; the rest of the panel still renders
            push(Line::from(Span::styled(
                "Profil indisponible.",
                Style::default().fg(theme::muted()),
            )));
        }
    }

    if !languages.is_empty() {
        push(Line::raw(""));
        push(Line::from(Span::styled(
            "LANGUES",
            Style::default().fg(theme::heading()),
        )));
        for language in languages {
            push(Line::from(vec![
                Span::raw(format!("{:<12}", language.name)),
                Span::styled(language.level.clone(), Style::default().fg(theme::muted())),
            ]));
        }
    }

    if !interests.is_empty() {
        push(Line::raw(""));
        push(Line::from(Span::styled(
            "INTÉRÊTS",
            Style::default().fg(theme::heading()),
        )));
        let names: Vec<&str> = interests.iter().map(|i| i.name.as_str()).collect();
        push(Line::raw(names.join(" · ")));
    }

    rows
}
