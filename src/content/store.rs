//! Typed request/response adapter for the portfolio data store.
//!
//! One JSON endpoint per resource; responses are cached for an hour so
//! repeated view refreshes stay cheap. Failures are converted to
//! [`FetchError`] at this boundary and never propagate further than the
//! view that asked.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{
    BehavioralSkill, Education, Experience, Interest, Language, Profile, TechnicalSkillGroup,
};

/// How long fetched resources stay fresh.
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{resource}: server returned {status}")]
    Status {
        resource: String,
        status: StatusCode,
    },
    #[error("fetch worker panicked")]
    Worker,
}

/// A single cached value with an expiry, safe to share across the fetch
/// worker threads.
#[derive(Debug)]
pub struct Cached<T> {
    slot: Mutex<Option<(Instant, T)>>,
}

impl<T: Clone> Cached<T> {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Return the cached value when still fresh, otherwise run `fetch`
    /// and remember its result. Errors are not cached.
    pub fn get_or_fetch<F>(&self, ttl: Duration, fetch: F) -> Result<T, FetchError>
    where
        F: FnOnce() -> Result<T, FetchError>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some((stored_at, value)) = slot.as_ref()
            && stored_at.elapsed() < ttl
        {
            return Ok(value.clone());
        }
        let value = fetch()?;
        *slot = Some((Instant::now(), value.clone()));
        Ok(value)
    }
}

pub struct DataStore {
    client: Client,
    base_url: String,
    profile: Cached<Option<Profile>>,
    education: Cached<Vec<Education>>,
    experience: Cached<Vec<Experience>>,
    technical: Cached<Vec<TechnicalSkillGroup>>,
    behavioral: Cached<Vec<BehavioralSkill>>,
    languages: Cached<Vec<Language>>,
    interests: Cached<Vec<Interest>>,
}

impl DataStore {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            profile: Cached::new(),
            education: Cached::new(),
            experience: Cached::new(),
            technical: Cached::new(),
            behavioral: Cached::new(),
            languages: Cached::new(),
            interests: Cached::new(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, FetchError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), resource);
        tracing::debug!(%url, "fetching resource");
        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                resource: resource.to_string(),
                status,
            });
        }
        Ok(response.json()?)
    }

    /// The profile row, or `None` when the store has none. A `null` body
    /// is the store's way of saying "no record", not a failure.
    pub fn profile(&self) -> Result<Option<Profile>, FetchError> {
        self.profile
            .get_or_fetch(CACHE_TTL, || self.get_json("profile"))
    }

    pub fn education(&self) -> Result<Vec<Education>, FetchError> {
        self.education.get_or_fetch(CACHE_TTL, || {
            let mut records: Vec<Education> = self.get_json("education")?;
            records.sort_by_key(|record| record.order);
            Ok(records)
        })
    }

    pub fn experience(&self) -> Result<Vec<Experience>, FetchError> {
        self.experience.get_or_fetch(CACHE_TTL, || {
            let mut records: Vec<Experience> = self.get_json("experience")?;
            records.sort_by_key(|record| record.order);
            for record in &mut records {
                record.tasks.sort_by_key(|task| task.order);
            }
            Ok(records)
        })
    }

    pub fn technical_skills(&self) -> Result<Vec<TechnicalSkillGroup>, FetchError> {
        self.technical.get_or_fetch(CACHE_TTL, || {
            let mut groups: Vec<TechnicalSkillGroup> = self.get_json("skills/technical")?;
            groups.sort_by_key(|group| group.order);
            for group in &mut groups {
                group.items.sort_by_key(|item| item.order);
            }
            Ok(groups)
        })
    }

    pub fn behavioral_skills(&self) -> Result<Vec<BehavioralSkill>, FetchError> {
        self.behavioral.get_or_fetch(CACHE_TTL, || {
            let mut records: Vec<BehavioralSkill> = self.get_json("skills/behavioral")?;
            records.sort_by_key(|record| record.order);
            Ok(records)
        })
    }

    pub fn languages(&self) -> Result<Vec<Language>, FetchError> {
        self.languages.get_or_fetch(CACHE_TTL, || {
            let mut records: Vec<Language> = self.get_json("languages")?;
            records.sort_by_key(|record| record.order);
            Ok(records)
        })
    }

    pub fn interests(&self) -> Result<Vec<Interest>, FetchError> {
        self.interests.get_or_fetch(CACHE_TTL, || {
            let mut records: Vec<Interest> = self.get_json("interests")?;
            records.sort_by_key(|record| record.order);
            Ok(records)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn cached_value_is_reused_within_ttl() {
        let cache: Cached<u32> = Cached::new();
        let mut calls = 0;
        let first = cache
            .get_or_fetch(Duration::from_secs(60), || {
                calls += 1;
                Ok(1)
            })
            .expect("first fetch");
        let second = cache
            .get_or_fetch(Duration::from_secs(60), || {
                calls += 1;
                Ok(2)
            })
            .expect("cached fetch");
        assert_eq!((first, second), (1, 1));
        assert_eq!(calls, 1);
    }

    #[test]
    fn errors_are_not_cached() {
        let cache: Cached<u32> = Cached::new();
        let failed = cache.get_or_fetch(Duration::from_secs(60), || Err(FetchError::Worker));
        assert!(failed.is_err());
        let ok = cache.get_or_fetch(Duration::from_secs(60), || Ok(7));
        assert_eq!(ok.expect("second fetch"), 7);
    }

    #[test]
    fn absent_profile_body_decodes_to_none() {
        // the store returns a JSON `null` when no profile row exists
        let absent: Option<Profile> =
            serde_json::from_str("null").expect("nullable profile row");
        assert!(absent.is_none());
    }

    #[test]
    fn cache_works_without_default_values() {
        #[derive(Clone)]
        struct Opaque(u8);

        let cache: Cached<Opaque> = Cached::new();
        let value = cache
            .get_or_fetch(Duration::from_secs(60), || Ok(Opaque(3)))
            .expect("fetch");
        assert_eq!(value.0, 3);
    }

    #[test]
    fn zero_ttl_always_refetches() {
        let cache: Cached<u32> = Cached::new();
        let _ = cache.get_or_fetch(Duration::ZERO, || Ok(1));
        let second = cache.get_or_fetch(Duration::ZERO, || Ok(2));
        assert_eq!(second.expect("refetched"), 2);
    }
}
