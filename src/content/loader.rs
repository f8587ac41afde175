//! Background view loading.
//!
//! Each view fans out one request per data source on its own worker
//! threads, joins them, and sends a single per-view result back into the
//! UI event loop over a channel. Any constituent failure fails that view
//! only. Results are tagged with the generation captured at spawn time;
//! the UI drops results from stale generations instead of aborting the
//! underlying requests.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;

use super::email::ContactError;
use super::github::GithubClient;
use super::store::{DataStore, FetchError};
use super::{
    BehavioralSkill, Education, Experience, Interest, Language, Profile, Repo,
    TechnicalSkillGroup, demo,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Profile,
    Career,
    Skills,
    Projects,
}

impl View {
    pub const ALL: [View; 4] = [View::Profile, View::Career, View::Skills, View::Projects];
}

/// Joined payload of one view.
#[derive(Debug, Clone)]
pub enum ViewData {
    Profile {
        /// `None` when the store has no profile row.
        profile: Option<Profile>,
        languages: Vec<Language>,
        interests: Vec<Interest>,
    },
    Career {
        education: Vec<Education>,
        experience: Vec<Experience>,
    },
    Skills {
        technical: Vec<TechnicalSkillGroup>,
        behavioral: Vec<BehavioralSkill>,
    },
    Projects {
        repos: Vec<Repo>,
    },
}

#[derive(Debug)]
pub struct ViewResult {
    pub generation: u64,
    pub view: View,
    pub result: Result<ViewData, String>,
}

/// Everything the fetch side can deliver into the event loop.
#[derive(Debug)]
pub enum AppMessage {
    View(ViewResult),
    ContactSent(Result<(), ContactError>),
}

/// Where view content comes from: the live adapters, or canned demo data.
/// A remote source without a hosting account still serves the store-backed
/// views; the projects view is just empty.
#[derive(Clone)]
pub enum ContentSource {
    Remote {
        store: Arc<DataStore>,
        github: Option<Arc<GithubClient>>,
    },
    Demo,
}

pub struct Loader {
    source: ContentSource,
    tx: Sender<AppMessage>,
}

impl Loader {
    pub fn new(source: ContentSource, tx: Sender<AppMessage>) -> Self {
        Self { source, tx }
    }

    /// Spawn one worker per view for `generation`.
    pub fn spawn_all(&self, generation: u64) {
        for view in View::ALL {
            self.spawn(view, generation);
        }
    }

    pub fn spawn(&self, view: View, generation: u64) {
        let source = self.source.clone();
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = load_view(&source, view).map_err(|error| error.to_string());
            // receiver gone means the app is shutting down
            let _ = tx.send(AppMessage::View(ViewResult {
                generation,
                view,
                result,
            }));
        });
    }
}

fn load_view(source: &ContentSource, view: View) -> Result<ViewData, FetchError> {
    match source {
        ContentSource::Demo => Ok(demo_view(view)),
        ContentSource::Remote { store, github } => match view {
            View::Profile => load_profile_view(store),
            View::Career => load_career_view(store),
            View::Skills => load_skills_view(store),
            View::Projects => Ok(ViewData::Projects {
                repos: match github {
                    Some(github) => github.repos()?,
                    None => Vec::new(),
                },
            }),
        },
    }
}

fn load_profile_view(store: &DataStore) -> Result<ViewData, FetchError> {
    thread::scope(|scope| {
        let profile = scope.spawn(|| store.profile());
        let languages = scope.spawn(|| store.languages());
        let interests = scope.spawn(|| store.interests());
        Ok(ViewData::Profile {
            profile: join(profile)?,
            languages: join(languages)?,
            interests: join(interests)?,
        })
    })
}

fn load_career_view(store: &DataStore) -> Result<ViewData, FetchError> {
    thread::scope(|scope| {
        let education = scope.spawn(|| store.education());
        let experience = scope.spawn(|| store.experience());
        Ok(ViewData::Career {
            education: join(education)?,
            experience: join(experience)?,
        })
    })
}

fn load_skills_view(store: &DataStore) -> Result<ViewData, FetchError> {
    thread::scope(|scope| {
        let technical = scope.spawn(|| store.technical_skills());
        let behavioral = scope.spawn(|| store.behavioral_skills());
        Ok(ViewData::Skills {
            technical: join(technical)?,
            behavioral: join(behavioral)?,
        })
    })
}

fn join<'scope, T>(
    handle: thread::ScopedJoinHandle<'scope, Result<T, FetchError>>,
) -> Result<T, FetchError> {
    handle.join().unwrap_or(Err(FetchError::Worker))
}

fn demo_view(view: View) -> ViewData {
    match view {
        View::Profile => ViewData::Profile {
            profile: Some(demo::profile()),
            languages: demo::languages(),
            interests: demo::interests(),
        },
        View::Career => ViewData::Career {
            education: demo::education(),
            experience: demo::experience(),
        },
        View::Skills => ViewData::Skills {
            technical: demo::technical_skills(),
            behavioral: demo::behavioral_skills(),
        },
        View::Projects => ViewData::Projects {
            repos: demo::repos(),
        },
    }
}
