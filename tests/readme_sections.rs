use deskfolio::content::{ReadmeSections, parse_readme};
use indoc::indoc;

#[test]
fn only_matched_headings_populate_sections() {
    let raw = indoc! {"
        # Finance-inator

        intro ignored, it sits before any known heading

        ## Présentation

        Un outil de suivi budgétaire.

        ## Résultats

        Adopté par toute la famille.

        ## Licence

        MIT.
    "};
    let sections = parse_readme(raw);

    assert_eq!(
        sections.presentation.as_deref(),
        Some("Un outil de suivi budgétaire.")
    );
    assert_eq!(
        sections.results.as_deref(),
        Some("Adopté par toute la famille.")
    );
    assert!(sections.objectives.is_none());
    assert!(sections.steps.is_none());
    assert!(sections.actors.is_none());
    assert!(sections.outcomes.is_none());
    assert!(sections.critical_review.is_none());
}

#[test]
fn parsing_is_idempotent() {
    let raw = indoc! {"
        ## Objectifs

        - suivre les dépenses
        - prévoir le budget

        ## Regard critique

        Trop de configuration manuelle.
    "};
    let first = parse_readme(raw);
    let second = parse_readme(raw);
    assert_eq!(first, second);
    assert!(first.objectives.is_some());
    assert!(first.critical_review.is_some());
}

#[test]
fn headingless_input_yields_an_all_absent_record() {
    let sections = parse_readme("just a paragraph\nwith two lines\n");
    assert_eq!(sections, ReadmeSections::default());
    assert!(sections.is_empty());
}

#[test]
fn accentless_spellings_are_accepted() {
    let sections = parse_readme("## Resultats\n\ncontenu\n\n## Etapes\n\nplan\n");
    assert_eq!(sections.results.as_deref(), Some("contenu"));
    assert_eq!(sections.steps.as_deref(), Some("plan"));
}
