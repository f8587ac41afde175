//! Splits a raw README into the fixed set of portfolio sections.
//!
//! Project READMEs follow a loose convention of second-level headings; the
//! parser matches each heading against keyword sets and collects the text
//! up to the next heading. Anything malformed simply yields fewer
//! sections, never an error.

use serde::Deserialize;

/// Parsed README, one optional body per known section. Absent and empty
/// are equivalent: a section whose content trims to nothing is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReadmeSections {
    pub presentation: Option<String>,
    pub objectives: Option<String>,
    pub steps: Option<String>,
    pub actors: Option<String>,
    pub results: Option<String>,
    pub outcomes: Option<String>,
    pub critical_review: Option<String>,
}

/// Keyword sets per section, in match priority order. Headings are
/// French in the source data; a couple of accent-less spellings are
/// accepted alongside.
const SECTION_KEYWORDS: [(Section, &[&str]); 7] = [
    (Section::Presentation, &["présentation", "presentation"]),
    (Section::Objectives, &["objectifs", "contexte", "enjeux"]),
    (Section::Steps, &["étapes", "etapes"]),
    (Section::Actors, &["acteurs", "interactions"]),
    (Section::Results, &["résultats", "resultats"]),
    (Section::Outcomes, &["lendemains"]),
    (Section::CriticalReview, &["regard critique", "regard"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Presentation,
    Objectives,
    Steps,
    Actors,
    Results,
    Outcomes,
    CriticalReview,
}

/// Parse `raw` into section records. Pure and deterministic; input with no
/// recognizable headings produces an all-absent record.
pub fn parse_readme(raw: &str) -> ReadmeSections {
    let mut sections = ReadmeSections::default();

    // (byte offset of line start, byte offset past the heading line, title)
    let mut headings: Vec<(usize, usize, String)> = Vec::new();
    let mut offset = 0;
    for line in raw.split_inclusive('\n') {
        let trimmed = line.trim_end_matches(['\n', '\r']);
        if let Some(title) = heading_title(trimmed) {
            headings.push((offset, offset + line.len(), title));
        }
        offset += line.len();
    }

    for (index, (_, body_start, title)) in headings.iter().enumerate() {
        let body_end = headings
            .get(index + 1)
            .map(|(start, _, _)| *start)
            .unwrap_or(raw.len());
        let body = raw[*body_start..body_end].trim();
        let Some(section) = match_section(title) else {
            continue;
        };
        let slot = section_slot(&mut sections, section);
        *slot = (!body.is_empty()).then(|| body.to_string());
    }

    sections
}

/// The normalized title of a `##` heading line, or `None` for any other
/// line (including deeper or shallower headings).
fn heading_title(line: &str) -> Option<String> {
    let rest = line.strip_prefix("##")?;
    if rest.starts_with('#') {
        return None;
    }
    let rest = rest.strip_prefix(char::is_whitespace)?;
    Some(rest.trim().to_lowercase())
}

/// First keyword set containing the title wins; a heading never populates
/// two sections.
fn match_section(title: &str) -> Option<Section> {
    SECTION_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| title.contains(keyword)))
        .map(|(section, _)| *section)
}

fn section_slot(sections: &mut ReadmeSections, section: Section) -> &mut Option<String> {
    match section {
        Section::Presentation => &mut sections.presentation,
        Section::Objectives => &mut sections.objectives,
        Section::Steps => &mut sections.steps,
        Section::Actors => &mut sections.actors,
        Section::Results => &mut sections.results,
        Section::Outcomes => &mut sections.outcomes,
        Section::CriticalReview => &mut sections.critical_review,
    }
}

impl ReadmeSections {
    pub fn is_empty(&self) -> bool {
        self.presentation.is_none()
            && self.objectives.is_none()
            && self.steps.is_none()
            && self.actors.is_none()
            && self.results.is_none()
            && self.outcomes.is_none()
            && self.critical_review.is_none()
    }

    /// Populated sections with a display label, in document order.
    pub fn labeled(&self) -> Vec<(&'static str, &str)> {
        [
            ("Présentation", &self.presentation),
            ("Objectifs", &self.objectives),
            ("Étapes", &self.steps),
            ("Acteurs", &self.actors),
            ("Résultats", &self.results),
            ("Lendemains", &self.outcomes),
            ("Regard critique", &self.critical_review),
        ]
        .into_iter()
        .filter_map(|(label, body)| body.as_deref().map(|body| (label, body)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {
        "
        # Finance-inator

        Some intro text before any section.

        ## Présentation

        Un outil de suivi de budget.

        ## Objectifs et contexte

        - apprendre
        - livrer

        ## Notes diverses

        ignorée, le titre ne correspond à aucune section

        ## Résultats

        Ça marche.
        "
    };

    #[test]
    fn matches_known_headings_and_ignores_the_rest() {
        let sections = parse_readme(SAMPLE);
        assert_eq!(
            sections.presentation.as_deref(),
            Some("Un outil de suivi de budget.")
        );
        assert_eq!(sections.objectives.as_deref(), Some("- apprendre\n- livrer"));
        assert_eq!(sections.results.as_deref(), Some("Ça marche."));
        assert!(sections.steps.is_none());
        assert!(sections.actors.is_none());
        assert!(sections.outcomes.is_none());
        assert!(sections.critical_review.is_none());
    }

    #[test]
    fn parsing_is_deterministic() {
        assert_eq!(parse_readme(SAMPLE), parse_readme(SAMPLE));
    }

    #[test]
    fn headingless_input_yields_all_absent() {
        let sections = parse_readme("just a paragraph\nand another line\n");
        assert!(sections.is_empty());
    }

    #[test]
    fn empty_section_body_is_recorded_as_absent() {
        let sections = parse_readme("## Présentation\n\n\n## Résultats\nok\n");
        assert!(sections.presentation.is_none());
        assert_eq!(sections.results.as_deref(), Some("ok"));
    }

    #[test]
    fn deeper_headings_do_not_terminate_a_section() {
        let sections = parse_readme(indoc! {
            "
            ## Étapes

            ### Phase 1

            fondations

            ## Acteurs

            moi
            "
        });
        let steps = sections.steps.expect("steps populated");
        assert!(steps.contains("### Phase 1"));
        assert!(steps.contains("fondations"));
        assert_eq!(sections.actors.as_deref(), Some("moi"));
    }

    #[test]
    fn first_matching_keyword_set_wins() {
        // the title matches both the results and the critical-review sets;
        // a heading only lands in the earlier of the two.
        let sections = parse_readme("## Regard critique et résultats\ntexte\n");
        assert_eq!(sections.results.as_deref(), Some("texte"));
        assert!(sections.critical_review.is_none());
    }
}
