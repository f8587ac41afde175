//! Window identity, configuration and the floating-window core.
//!
//! Two window families exist. Static windows come from a fixed
//! configuration list, live for the whole session and only toggle between
//! open and closed. Detail windows are spawned on demand for one specific
//! entity and are keyed by an identity derived from that entity, which
//! guarantees at most one open window per record.

pub mod geometry;
pub mod manager;

pub use geometry::{Bounds, DragResize, GeometryLimits, Point, Size};
pub use manager::{BASE_RANK, DetailWindow, SpawnConfig, WindowManager};

use crate::constants::cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StaticWindowId {
    Profile,
    Career,
    Projects,
    Skills,
    Contact,
}

impl StaticWindowId {
    pub const ALL: [StaticWindowId; 5] = [
        StaticWindowId::Profile,
        StaticWindowId::Career,
        StaticWindowId::Projects,
        StaticWindowId::Skills,
        StaticWindowId::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            StaticWindowId::Profile => "PROFILE.HTML",
            StaticWindowId::Career => "CAREER.HTML",
            StaticWindowId::Projects => "PROJECTS.HTML",
            StaticWindowId::Skills => "SKILLS.HTML",
            StaticWindowId::Contact => "CONTACT.HTML",
        }
    }
}

/// Which kind of entity a detail window shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DetailKind {
    Education,
    Experience,
    TechnicalSkill,
    BehavioralSkill,
    Repository,
}

/// Identity of a detail window, derived from the entity it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DetailKey {
    pub kind: DetailKind,
    pub record: i64,
}

impl DetailKey {
    pub fn new(kind: DetailKind, record: i64) -> Self {
        Self { kind, record }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WindowId {
    Static(StaticWindowId),
    Detail(DetailKey),
}

/// Payload carried by a detail window. The identity derivation is a total
/// function over the payload: every variant carries its record id, so no
/// fallback key is needed.
pub trait DetailPayload {
    fn key(&self) -> DetailKey;
    fn title(&self) -> String;
}

/// Configuration-time description of one static window.
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    pub id: StaticWindowId,
    pub position: Point,
    pub size: Size,
    pub max_size: Option<Size>,
}

/// The fixed desktop layout, in terminal cells.
pub fn window_layout() -> [WindowConfig; 5] {
    [
        WindowConfig {
            id: StaticWindowId::Profile,
            position: Point::new(0, 0),
            size: Size::new(52, 14),
            max_size: None,
        },
        WindowConfig {
            id: StaticWindowId::Career,
            position: Point::new(0, 15),
            size: Size::new(52, 17),
            max_size: Some(Size::new(52, 17)),
        },
        WindowConfig {
            id: StaticWindowId::Projects,
            position: Point::new(53, 0),
            size: Size::new(58, 32),
            max_size: None,
        },
        WindowConfig {
            id: StaticWindowId::Skills,
            position: Point::new(112, 0),
            size: Size::new(37, 21),
            max_size: Some(Size::new(37, 17)),
        },
        WindowConfig {
            id: StaticWindowId::Contact,
            position: Point::new(120, 12),
            size: Size::new(30, 19),
            max_size: None,
        },
    ]
}

/// Geometry limits used by the terminal front end.
pub fn cell_limits() -> GeometryLimits {
    GeometryLimits {
        min_width: cell::MIN_WINDOW_WIDTH,
        min_height: cell::MIN_WINDOW_HEIGHT,
    }
}

/// Spawn configuration used by the terminal front end.
pub fn cell_spawn() -> SpawnConfig {
    SpawnConfig {
        base: Point::new(cell::SPAWN_BASE_X, cell::SPAWN_BASE_Y),
        offset: cell::SPAWN_OFFSET,
        window_size: Size::new(cell::DETAIL_WIDTH, cell::DETAIL_HEIGHT),
    }
}
