//! Stacking, identity and lifecycle authority for all windows.
//!
//! The manager owns the z-order ledger, the open/closed flags of the
//! static windows and the collection of detail windows. Nothing else
//! mutates those; the presentation layer only calls the operations here.
//! All state lives in memory and every operation is synchronous and
//! infallible, so I/O failures elsewhere cannot disturb stacking state.

use std::collections::BTreeMap;

use super::geometry::{Bounds, Point, Size};
use super::{DetailKey, DetailPayload, StaticWindowId, WindowId};

pub use crate::constants::BASE_RANK;
use crate::constants::{
    DETAIL_HEIGHT, DETAIL_WIDTH, SPAWN_BASE_X, SPAWN_BASE_Y, SPAWN_OFFSET,
};

/// Where newly spawned detail windows land and how far successive spawns
/// are staggered apart.
#[derive(Debug, Clone, Copy)]
pub struct SpawnConfig {
    pub base: Point,
    pub offset: i32,
    /// Nominal detail window size, used when clamping a spawn position
    /// into the container.
    pub window_size: Size,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            base: Point::new(SPAWN_BASE_X, SPAWN_BASE_Y),
            offset: SPAWN_OFFSET,
            window_size: Size::new(DETAIL_WIDTH, DETAIL_HEIGHT),
        }
    }
}

/// One open detail window: derived identity, the entity payload it shows
/// and the position it spawned at.
#[derive(Debug, Clone)]
pub struct DetailWindow<P> {
    pub key: DetailKey,
    pub payload: P,
    pub spawn: Point,
}

#[derive(Debug)]
pub struct WindowManager<P: DetailPayload> {
    ranks: BTreeMap<WindowId, u64>,
    next_rank: u64,
    open: BTreeMap<StaticWindowId, bool>,
    details: Vec<DetailWindow<P>>,
    spawn: SpawnConfig,
}

impl<P: DetailPayload> WindowManager<P> {
    pub fn new(spawn: SpawnConfig) -> Self {
        let open = StaticWindowId::ALL.iter().map(|&id| (id, true)).collect();
        Self {
            ranks: BTreeMap::new(),
            next_rank: BASE_RANK,
            open,
            details: Vec::new(),
            spawn,
        }
    }

    /// Assign the next rank to `id`. Later calls always win; calling twice
    /// in a row burns a rank but leaves the ordering unchanged.
    pub fn bring_to_front(&mut self, id: WindowId) {
        self.next_rank += 1;
        self.ranks.insert(id, self.next_rank);
    }

    /// Ledger rank for `id`, or the baseline when it was never focused.
    pub fn rank(&self, id: WindowId) -> u64 {
        self.ranks.get(&id).copied().unwrap_or(BASE_RANK)
    }

    pub fn static_open(&self, id: StaticWindowId) -> bool {
        self.open.get(&id).copied().unwrap_or(false)
    }

    pub fn set_static_open(&mut self, id: StaticWindowId, open: bool) {
        self.open.insert(id, open);
        if open {
            self.bring_to_front(WindowId::Static(id));
        }
    }

    pub fn toggle_static(&mut self, id: StaticWindowId) {
        let open = !self.static_open(id);
        self.set_static_open(id, open);
    }

    /// Open a detail window for `payload`, or bring the existing window
    /// for the same entity to the front. Returns the derived key.
    pub fn open_detail(&mut self, payload: P, bounds: Option<Bounds>) -> DetailKey {
        let key = payload.key();
        if self.details.iter().any(|detail| detail.key == key) {
            self.bring_to_front(WindowId::Detail(key));
            return key;
        }

        let count = self.details.len() as i32;
        let raw = Point::new(
            self.spawn.base.x + count * self.spawn.offset,
            self.spawn.base.y + count * self.spawn.offset,
        );
        let spawn = match bounds {
            Some(bounds) => clamp_spawn(raw, self.spawn.window_size, bounds),
            None => raw,
        };
        tracing::debug!(?key, x = spawn.x, y = spawn.y, "opened detail window");
        self.details.push(DetailWindow {
            key,
            payload,
            spawn,
        });
        self.bring_to_front(WindowId::Detail(key));
        key
    }

    /// Remove the detail window with `key`; no-op when absent.
    pub fn close_detail(&mut self, key: DetailKey) {
        let before = self.details.len();
        self.details.retain(|detail| detail.key != key);
        if self.details.len() != before {
            tracing::debug!(?key, "closed detail window");
            self.ranks.remove(&WindowId::Detail(key));
        }
    }

    pub fn close_all_details(&mut self) {
        for detail in &self.details {
            self.ranks.remove(&WindowId::Detail(detail.key));
        }
        self.details.clear();
    }

    /// Close every window: all details removed, all statics marked closed.
    pub fn close_all(&mut self) {
        self.close_all_details();
        for open in self.open.values_mut() {
            *open = false;
        }
    }

    pub fn details(&self) -> &[DetailWindow<P>] {
        &self.details
    }

    pub fn detail(&self, key: DetailKey) -> Option<&DetailWindow<P>> {
        self.details.iter().find(|detail| detail.key == key)
    }

    /// All currently visible windows, back to front.
    pub fn stacking_order(&self) -> Vec<WindowId> {
        let mut ids: Vec<WindowId> = StaticWindowId::ALL
            .iter()
            .copied()
            .filter(|&id| self.static_open(id))
            .map(WindowId::Static)
            .chain(self.details.iter().map(|d| WindowId::Detail(d.key)))
            .collect();
        ids.sort_by_key(|&id| self.rank(id));
        ids
    }

    /// The frontmost visible window, if any.
    pub fn front(&self) -> Option<WindowId> {
        self.stacking_order().into_iter().next_back()
    }
}

/// Clamp a spawn position so a window of `size` stays inside `bounds`,
/// favoring the top-left edge when the container is smaller than the
/// window.
fn clamp_spawn(raw: Point, size: Size, bounds: Bounds) -> Point {
    let max_x = (bounds.width() - size.width).max(0);
    let max_y = (bounds.height() - size.height).max(0);
    Point {
        x: raw.x.max(bounds.left).min(bounds.left + max_x),
        y: raw.y.max(bounds.top).min(bounds.top + max_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::DetailKind;

    #[derive(Debug, Clone)]
    struct Item(i64);

    impl DetailPayload for Item {
        fn key(&self) -> DetailKey {
            DetailKey::new(DetailKind::Repository, self.0)
        }

        fn title(&self) -> String {
            format!("item {}", self.0)
        }
    }

    fn manager() -> WindowManager<Item> {
        WindowManager::new(SpawnConfig::default())
    }

    #[test]
    fn ranks_strictly_increase_and_latest_wins() {
        let mut wm = manager();
        let a = WindowId::Static(StaticWindowId::Profile);
        let b = WindowId::Static(StaticWindowId::Contact);
        wm.bring_to_front(a);
        let first = wm.rank(a);
        wm.bring_to_front(b);
        wm.bring_to_front(a);
        assert!(first > BASE_RANK);
        assert!(wm.rank(a) > wm.rank(b));
        assert_eq!(wm.front(), Some(a));
    }

    #[test]
    fn untracked_windows_sit_at_the_baseline() {
        let wm = manager();
        assert_eq!(wm.rank(WindowId::Static(StaticWindowId::Skills)), BASE_RANK);
    }

    #[test]
    fn reopening_the_same_entity_refocuses_instead_of_duplicating() {
        let mut wm = manager();
        let key = wm.open_detail(Item(7), None);
        wm.bring_to_front(WindowId::Static(StaticWindowId::Profile));
        let again = wm.open_detail(Item(7), None);
        assert_eq!(key, again);
        assert_eq!(wm.details().len(), 1);
        // refocused: the detail now outranks everything else
        assert_eq!(wm.front(), Some(WindowId::Detail(key)));
    }

    #[test]
    fn spawns_stagger_without_a_measured_container() {
        let mut wm = manager();
        wm.open_detail(Item(1), None);
        wm.open_detail(Item(2), None);
        wm.open_detail(Item(3), None);
        let positions: Vec<Point> = wm.details().iter().map(|d| d.spawn).collect();
        assert_eq!(
            positions,
            vec![
                Point::new(300, 150),
                Point::new(330, 180),
                Point::new(360, 210),
            ]
        );
    }

    #[test]
    fn spawn_positions_clamp_into_the_container() {
        let mut wm = manager();
        // container too small to fit the detail size at the raw position
        let bounds = Bounds::from_size(0, 0, 500, 300);
        wm.open_detail(Item(1), Some(bounds));
        let spawn = wm.details()[0].spawn;
        assert_eq!(spawn, Point::new(120, 0));
    }

    #[test]
    fn close_detail_is_a_noop_for_unknown_keys() {
        let mut wm = manager();
        wm.open_detail(Item(1), None);
        wm.close_detail(DetailKey::new(DetailKind::Education, 99));
        assert_eq!(wm.details().len(), 1);
    }

    #[test]
    fn close_all_clears_details_and_static_flags() {
        let mut wm = manager();
        wm.open_detail(Item(1), None);
        wm.open_detail(Item(2), None);
        wm.close_all();
        assert!(wm.details().is_empty());
        for id in StaticWindowId::ALL {
            assert!(!wm.static_open(id));
        }
    }
}
