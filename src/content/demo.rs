//! Canned portfolio content for running without a backend.

use indoc::indoc;

use super::{
    BehavioralSkill, Education, Experience, ExperienceTask, Interest, Language, Profile, Repo,
    TechnicalSkill, TechnicalSkillGroup, parse_readme,
};

pub fn profile() -> Profile {
    Profile {
        id: 1,
        first_name: "Alex".into(),
        last_name: "Moreau".into(),
        email: Some("alex@moreau.dev".into()),
        website: Some("https://moreau.dev".into()),
        location: Some("Rennes, FR".into()),
        headline: Some("Apprentice developer".into()),
        seeking: Some("Apprenticeship, backend or data".into()),
        bio: Some(
            "Developer in training, fond of small tools that do one thing \
             well. This desktop is one of them."
                .into(),
        ),
        values: Some("Curiosity, consistency, shipping.".into()),
    }
}

pub fn education() -> Vec<Education> {
    vec![
        Education {
            id: 1,
            institution: "IUT de Rennes".into(),
            institution_note: Some("Computer science department".into()),
            city: Some("Rennes".into()),
            degree: "BUT Informatique".into(),
            start: "2023".into(),
            end: None,
            description: Some("Programming, databases, systems.".into()),
            technologies: Some("Rust, SQL, Linux".into()),
            courses: Some("Algorithms, networks, project work".into()),
            order: 1,
        },
        Education {
            id: 2,
            institution: "Lycée Descartes".into(),
            institution_note: None,
            city: Some("Rennes".into()),
            degree: "Baccalauréat général".into(),
            start: "2020".into(),
            end: Some("2023".into()),
            description: None,
            technologies: None,
            courses: Some("Maths, NSI".into()),
            order: 2,
        },
    ]
}

pub fn experience() -> Vec<Experience> {
    vec![Experience {
        id: 1,
        company: "Atelier Logiciel".into(),
        city: Some("Rennes".into()),
        role: "Intern developer".into(),
        start: "2024-06".into(),
        end: Some("2024-08".into()),
        summary: Some("Internal tooling for a small software shop.".into()),
        order: 1,
        tasks: vec![
            ExperienceTask {
                id: 1,
                description: "Built a reporting CLI".into(),
                order: 1,
            },
            ExperienceTask {
                id: 2,
                description: "Migrated build scripts".into(),
                order: 2,
            },
        ],
    }]
}

pub fn technical_skills() -> Vec<TechnicalSkillGroup> {
    vec![
        TechnicalSkillGroup {
            id: 1,
            category: "Languages".into(),
            order: 1,
            items: vec![
                TechnicalSkill {
                    id: 1,
                    name: "Rust".into(),
                    level: 3,
                    order: 1,
                    definition: Some("Systems programming language.".into()),
                    evidence: Some("This application.".into()),
                    self_review: Some("Comfortable, still learning async.".into()),
                    growth: Some("Contribute to an open-source crate.".into()),
                },
                TechnicalSkill {
                    id: 2,
                    name: "SQL".into(),
                    level: 4,
                    order: 2,
                    definition: Some("Relational querying.".into()),
                    evidence: Some("Portfolio data model.".into()),
                    self_review: None,
                    growth: None,
                },
            ],
        },
        TechnicalSkillGroup {
            id: 2,
            category: "Tooling".into(),
            order: 2,
            items: vec![TechnicalSkill {
                id: 3,
                name: "Git".into(),
                level: 4,
                order: 1,
                definition: None,
                evidence: None,
                self_review: None,
                growth: None,
            }],
        },
    ]
}

pub fn behavioral_skills() -> Vec<BehavioralSkill> {
    vec![
        BehavioralSkill {
            id: 1,
            name: "Autonomy".into(),
            order: 1,
            definition: Some("Working without constant direction.".into()),
            evidence: Some("Solo side projects, including this one.".into()),
            self_review: Some("Good, sometimes too heads-down.".into()),
            growth: Some("Ask for feedback earlier.".into()),
        },
        BehavioralSkill {
            id: 2,
            name: "Planning".into(),
            order: 2,
            definition: Some("Cutting work into steps.".into()),
            evidence: None,
            self_review: None,
            growth: None,
        },
    ]
}

pub fn languages() -> Vec<Language> {
    vec![
        Language {
            id: 1,
            name: "French".into(),
            level: "Native".into(),
            order: 1,
        },
        Language {
            id: 2,
            name: "English".into(),
            level: "B2".into(),
            order: 2,
        },
    ]
}

pub fn interests() -> Vec<Interest> {
    vec![
        Interest {
            id: 1,
            name: "Cycling".into(),
            order: 1,
        },
        Interest {
            id: 2,
            name: "Retro computing".into(),
            order: 2,
        },
    ]
}

pub fn repos() -> Vec<Repo> {
    let readme = indoc! {
        "
        ## Présentation

        Un gestionnaire de budget en ligne de commande.

        ## Objectifs

        Suivre les dépenses sans tableur.

        ## Résultats

        Utilisé tous les mois depuis un an.

        ## Regard critique

        Le format de stockage mériterait une migration.
        "
    };
    vec![
        Repo {
            id: 101,
            name: "Finance-inator".into(),
            description: Some("Budget tracking CLI".into()),
            html_url: "https://example.test/finance-inator".into(),
            topics: vec!["cli".into(), "finance".into()],
            language: Some("Rust".into()),
            stargazers_count: 12,
            homepage: None,
            fork: false,
            readme: Some(parse_readme(readme)),
        },
        Repo {
            id: 102,
            name: "Fitness-inator".into(),
            description: Some("Workout log with charts".into()),
            html_url: "https://example.test/fitness-inator".into(),
            topics: vec![],
            language: Some("TypeScript".into()),
            stargazers_count: 3,
            homepage: None,
            fork: false,
            readme: None,
        },
    ]
}
