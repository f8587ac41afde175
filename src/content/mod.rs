//! Portfolio entities and the adapters that fetch them.
//!
//! Every record mirrors one row shape of the backing store. Lists carry an
//! explicit `order` field and the adapters sort by it; optional fields are
//! tolerated everywhere and simply render as omitted sections.

pub mod demo;
pub mod email;
pub mod github;
pub mod loader;
pub mod readme;
pub mod store;

use serde::Deserialize;

use crate::window::{DetailKey, DetailKind, DetailPayload};

pub use readme::{ReadmeSections, parse_readme};

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    /// Current role, shown under the name.
    #[serde(default)]
    pub headline: Option<String>,
    /// What kind of position is being looked for.
    #[serde(default)]
    pub seeking: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub values: Option<String>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub id: i64,
    pub institution: String,
    #[serde(default)]
    pub institution_note: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    pub degree: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Option<String>,
    #[serde(default)]
    pub courses: Option<String>,
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceTask {
    pub id: i64,
    pub description: String,
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub id: i64,
    pub company: String,
    #[serde(default)]
    pub city: Option<String>,
    pub role: String,
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    pub order: i32,
    #[serde(default)]
    pub tasks: Vec<ExperienceTask>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechnicalSkillGroup {
    pub id: i64,
    pub category: String,
    pub order: i32,
    #[serde(default)]
    pub items: Vec<TechnicalSkill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechnicalSkill {
    pub id: i64,
    pub name: String,
    /// Self-assessed level, 0..=5.
    pub level: u8,
    pub order: i32,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub self_review: Option<String>,
    #[serde(default)]
    pub growth: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BehavioralSkill {
    pub id: i64,
    pub name: String,
    pub order: i32,
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub self_review: Option<String>,
    #[serde(default)]
    pub growth: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Language {
    pub id: i64,
    pub name: String,
    pub level: String,
    pub order: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Interest {
    pub id: i64,
    pub name: String,
    pub order: i32,
}

/// Repository summary as returned by the hosting API, plus the parsed
/// README the adapter attaches for featured projects.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub readme: Option<ReadmeSections>,
}

/// Entity displayed by a detail window. Closed set: one variant per
/// detail kind.
#[derive(Debug, Clone)]
pub enum Detail {
    Education(Education),
    Experience(Experience),
    TechnicalSkill(TechnicalSkill),
    BehavioralSkill(BehavioralSkill),
    Repository(Repo),
}

impl DetailPayload for Detail {
    fn key(&self) -> DetailKey {
        match self {
            Detail::Education(e) => DetailKey::new(DetailKind::Education, e.id),
            Detail::Experience(e) => DetailKey::new(DetailKind::Experience, e.id),
            Detail::TechnicalSkill(s) => DetailKey::new(DetailKind::TechnicalSkill, s.id),
            Detail::BehavioralSkill(s) => DetailKey::new(DetailKind::BehavioralSkill, s.id),
            Detail::Repository(r) => DetailKey::new(DetailKind::Repository, r.id),
        }
    }

    fn title(&self) -> String {
        match self {
            Detail::Education(e) => e.degree.to_uppercase(),
            Detail::Experience(e) => e.company.to_uppercase(),
            Detail::TechnicalSkill(s) => s.name.to_uppercase(),
            Detail::BehavioralSkill(s) => s.name.to_uppercase(),
            Detail::Repository(r) => r.name.to_uppercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_keys_separate_kinds_with_equal_record_ids() {
        let education = Detail::Education(Education {
            id: 1,
            institution: "ENSAI".into(),
            institution_note: None,
            city: None,
            degree: "Licence".into(),
            start: "2020".into(),
            end: None,
            description: None,
            technologies: None,
            courses: None,
            order: 1,
        });
        let skill = Detail::TechnicalSkill(TechnicalSkill {
            id: 1,
            name: "sql".into(),
            level: 4,
            order: 1,
            definition: None,
            evidence: None,
            self_review: None,
            growth: None,
        });
        assert_ne!(education.key(), skill.key());
        assert_eq!(education.key(), education.key());
    }

    #[test]
    fn repo_deserializes_with_missing_optional_fields() {
        let repo: Repo = serde_json::from_str(
            r#"{"id": 9, "name": "Finance-inator", "html_url": "https://example.test/r"}"#,
        )
        .expect("minimal repo payload");
        assert!(repo.description.is_none());
        assert!(!repo.fork);
        assert!(repo.readme.is_none());
        assert!(repo.topics.is_empty());
    }
}
