//! Desktop orchestration: owns the window manager, per-window geometry,
//! the content panels and the loader channel, and translates terminal
//! events into operations on them.

use std::collections::BTreeMap;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::components::contact::SendStatus;
use crate::components::{
    CareerPanel, Component, ContactPanel, DetailPanel, LoadState, Outcome, ProfilePanel,
    ProjectsPanel, SkillsPanel,
};
use crate::content::Detail;
use crate::content::email::{ContactError, ContactForm, Mailer};
use crate::content::loader::{AppMessage, ContentSource, Loader, View, ViewData};
use crate::event_loop::ControlFlow;
use crate::theme;
use crate::window::{
    Bounds, DetailKey, DetailPayload, DragResize, Point, Size, StaticWindowId, WindowConfig,
    WindowId, cell_limits, cell_spawn, window_layout,
};

const CLOSE_GLYPH: &str = "[✕]";

pub struct App {
    wm: crate::window::WindowManager<Detail>,
    layout: [WindowConfig; 5],
    geometry: BTreeMap<WindowId, DragResize>,

    profile: ProfilePanel,
    career: CareerPanel,
    skills: SkillsPanel,
    projects: ProjectsPanel,
    contact: ContactPanel,
    details: BTreeMap<DetailKey, DetailPanel>,

    /// Desktop rectangle measured on the last draw.
    bounds: Option<Bounds>,
    /// Windows as drawn last frame, back to front, with their outer rects.
    draw_rects: Vec<(WindowId, Rect)>,
    nav_rects: Vec<(StaticWindowId, Rect)>,
    /// Window owning the active pointer session, if any.
    pointer: Option<WindowId>,

    loader: Loader,
    rx: Receiver<AppMessage>,
    tx: Sender<AppMessage>,
    generation: u64,
    mailer: Option<Mailer>,
}

impl App {
    pub fn new(source: ContentSource, mailer: Option<Mailer>) -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        let loader = Loader::new(source, tx.clone());
        let generation = 0;
        loader.spawn_all(generation);
        Self {
            wm: crate::window::WindowManager::new(cell_spawn()),
            layout: window_layout(),
            geometry: BTreeMap::new(),
            profile: ProfilePanel::default(),
            career: CareerPanel::default(),
            skills: SkillsPanel::default(),
            projects: ProjectsPanel::default(),
            contact: ContactPanel::default(),
            details: BTreeMap::new(),
            bounds: None,
            draw_rects: Vec::new(),
            nav_rects: Vec::new(),
            pointer: None,
            loader,
            rx,
            tx,
            generation,
            mailer,
        }
    }

    /// Drain fetch results delivered since the last tick.
    pub fn on_tick(&mut self) {
        while let Ok(message) = self.rx.try_recv() {
            match message {
                AppMessage::View(result) => {
                    if result.generation != self.generation {
                        tracing::debug!(view = ?result.view, "dropped stale view result");
                        continue;
                    }
                    self.apply_view(result.view, result.result);
                }
                AppMessage::ContactSent(result) => {
                    let status = match result {
                        Ok(()) => SendStatus::Sent,
                        Err(error) => SendStatus::Failed(error),
                    };
                    self.contact.set_status(status);
                }
            }
        }
    }

    fn apply_view(&mut self, view: View, result: Result<ViewData, String>) {
        match (view, result) {
            (View::Profile, Ok(ViewData::Profile { profile, languages, interests })) => {
                self.profile.set_state(LoadState::Ready((profile, languages, interests)));
            }
            (View::Career, Ok(ViewData::Career { education, experience })) => {
                self.career.set_state(LoadState::Ready((education, experience)));
            }
            (View::Skills, Ok(ViewData::Skills { technical, behavioral })) => {
                self.skills.set_state(LoadState::Ready((technical, behavioral)));
            }
            (View::Projects, Ok(ViewData::Projects { repos })) => {
                self.projects.set_state(LoadState::Ready(repos));
            }
            (view, Err(message)) => match view {
                View::Profile => self.profile.set_state(LoadState::Failed(message)),
                View::Career => self.career.set_state(LoadState::Failed(message)),
                View::Skills => self.skills.set_state(LoadState::Failed(message)),
                View::Projects => self.projects.set_state(LoadState::Failed(message)),
            },
            // a worker never delivers another view's payload
            (view, Ok(_)) => tracing::debug!(?view, "mismatched view payload"),
        }
    }

    fn refresh(&mut self) {
        self.generation += 1;
        self.profile.set_state(LoadState::Loading);
        self.career.set_state(LoadState::Loading);
        self.skills.set_state(LoadState::Loading);
        self.projects.set_state(LoadState::Loading);
        self.loader.spawn_all(self.generation);
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let nav = Rect {
            height: area.height.min(1),
            ..area
        };
        let desktop = Rect {
            y: area.y + nav.height,
            height: area.height.saturating_sub(nav.height),
            ..area
        };
        self.bounds = Some(Bounds::from_size(
            i32::from(desktop.x),
            i32::from(desktop.y),
            i32::from(desktop.width),
            i32::from(desktop.height),
        ));

        self.draw_nav(frame, nav);

        self.draw_rects.clear();
        for id in self.wm.stacking_order() {
            self.draw_window(frame, desktop, id);
        }
    }

    fn draw_nav(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(theme::nav_bg())),
            area,
        );
        self.nav_rects.clear();
        let mut x = area.x + 1;
        for id in StaticWindowId::ALL {
            let label = format!(" {} ", id.title());
            let width = label.chars().count() as u16;
            if x + width > area.right() {
                break;
            }
            let style = if self.wm.static_open(id) {
                Style::default().fg(theme::nav_open_fg()).bg(theme::nav_open_bg())
            } else {
                Style::default().fg(theme::nav_fg()).bg(theme::nav_bg())
            };
            let rect = Rect { x, width, ..area };
            frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
            self.nav_rects.push((id, rect));
            x += width + 1;
        }
    }

    fn draw_window(&mut self, frame: &mut Frame, desktop: Rect, id: WindowId) {
        let Some(rect) = self.window_rect(desktop, id) else {
            return;
        };
        let focused = self.wm.front() == Some(id);
        let title = self.window_title(id);

        let border = if focused {
            theme::window_border_focused()
        } else {
            theme::window_border()
        };
        let title_style = if focused {
            Style::default()
                .fg(theme::window_title_focused_fg())
                .bg(theme::window_title_focused_bg())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme::window_title_fg())
        };

        let block = Block::bordered()
            .border_style(Style::default().fg(border))
            .title(Span::styled(format!(" {title} "), title_style))
            .title_top(Line::from(CLOSE_GLYPH).right_aligned());
        let inner = block.inner(rect);

        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);
        if inner.width > 0 && inner.height > 0 {
            self.render_component(frame, id, inner, focused);
        }
        self.draw_rects.push((id, rect));
    }

    /// The on-screen rect of `id`, clipped to the desktop. `None` when the
    /// window sits entirely outside the visible desktop.
    fn window_rect(&mut self, desktop: Rect, id: WindowId) -> Option<Rect> {
        let max = match id {
            WindowId::Static(static_id) => self
                .layout
                .iter()
                .find(|config| config.id == static_id)
                .and_then(|config| config.max_size),
            WindowId::Detail(_) => None,
        };
        let geometry = self.ensure_geometry(desktop, id)?;
        let position = geometry.position();
        let size = geometry.displayed_size(max);

        let left = position.x.max(i32::from(desktop.x));
        let top = position.y.max(i32::from(desktop.y));
        let right = (position.x + size.width).min(i32::from(desktop.right()));
        let bottom = (position.y + size.height).min(i32::from(desktop.bottom()));
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }

    fn ensure_geometry(&mut self, desktop: Rect, id: WindowId) -> Option<&DragResize> {
        if !self.geometry.contains_key(&id) {
            let entry = match id {
                WindowId::Static(static_id) => {
                    let config = self.layout.iter().find(|c| c.id == static_id)?;
                    DragResize::new(
                        Point::new(
                            i32::from(desktop.x) + config.position.x,
                            i32::from(desktop.y) + config.position.y,
                        ),
                        config.size,
                        cell_limits(),
                    )
                }
                WindowId::Detail(key) => {
                    let detail = self.wm.detail(key)?;
                    DragResize::new(
                        detail.spawn,
                        Size::new(
                            crate::constants::cell::DETAIL_WIDTH,
                            crate::constants::cell::DETAIL_HEIGHT,
                        ),
                        cell_limits(),
                    )
                }
            };
            self.geometry.insert(id, entry);
        }
        self.geometry.get(&id)
    }

    fn window_title(&self, id: WindowId) -> String {
        match id {
            WindowId::Static(static_id) => static_id.title().to_owned(),
            WindowId::Detail(key) => self
                .wm
                .detail(key)
                .map(|detail| detail.payload.title())
                .unwrap_or_default(),
        }
    }

    fn render_component(&mut self, frame: &mut Frame, id: WindowId, inner: Rect, focused: bool) {
        match id {
            WindowId::Static(StaticWindowId::Profile) => {
                self.profile.render(frame, inner, focused);
            }
            WindowId::Static(StaticWindowId::Career) => self.career.render(frame, inner, focused),
            WindowId::Static(StaticWindowId::Skills) => self.skills.render(frame, inner, focused),
            WindowId::Static(StaticWindowId::Projects) => {
                self.projects.render(frame, inner, focused);
            }
            WindowId::Static(StaticWindowId::Contact) => {
                self.contact.render(frame, inner, focused);
            }
            WindowId::Detail(key) => {
                if let Some(panel) = self.details.get_mut(&key) {
                    panel.render(frame, inner, focused);
                }
            }
        }
    }

    pub fn on_event(&mut self, event: &Event) -> ControlFlow {
        match event {
            Event::Key(key) => self.on_key(key),
            Event::Mouse(mouse) => {
                self.on_mouse(mouse);
                ControlFlow::Continue
            }
            _ => ControlFlow::Continue,
        }
    }

    fn on_key(&mut self, key: &KeyEvent) -> ControlFlow {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => return ControlFlow::Quit,
                KeyCode::Char('r') => {
                    self.refresh();
                    return ControlFlow::Continue;
                }
                KeyCode::Char('w') => {
                    if let Some(front) = self.wm.front() {
                        self.close_window(front);
                    }
                    return ControlFlow::Continue;
                }
                KeyCode::Char('l') => {
                    self.wm.close_all();
                    self.details.clear();
                    self.geometry
                        .retain(|id, _| matches!(id, WindowId::Static(_)));
                    return ControlFlow::Continue;
                }
                _ => {}
            }
        }
        if let KeyCode::F(n @ 1..=5) = key.code {
            self.wm.toggle_static(StaticWindowId::ALL[usize::from(n) - 1]);
            return ControlFlow::Continue;
        }
        if key.code == KeyCode::Esc {
            // frontmost detail window, if one is open
            let front_detail = self
                .wm
                .stacking_order()
                .into_iter()
                .rev()
                .find_map(|id| match id {
                    WindowId::Detail(key) => Some(key),
                    WindowId::Static(_) => None,
                });
            if let Some(key) = front_detail {
                self.close_window(WindowId::Detail(key));
            }
            return ControlFlow::Continue;
        }

        // everything else goes to the focused window
        if let Some(front) = self.wm.front() {
            let outcome = self.component_event(front, &Event::Key(*key), Rect::default());
            self.apply_outcome(outcome);
        }
        ControlFlow::Continue
    }

    fn on_mouse(&mut self, mouse: &MouseEvent) {
        let point = Point::new(i32::from(mouse.column), i32::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_press(mouse, point),
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(id) = self.pointer
                    && let Some(geometry) = self.geometry.get_mut(&id)
                {
                    geometry.pointer_move(point, self.bounds);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(id) = self.pointer.take()
                    && let Some(geometry) = self.geometry.get_mut(&id)
                {
                    geometry.pointer_up();
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                // scroll targets the window under the cursor, focused or not
                if let Some((id, rect)) = self.window_at(mouse.column, mouse.row) {
                    let inner = inner_rect(rect);
                    if let Some(local) = localize(mouse, inner) {
                        let outcome = self.component_event(id, &Event::Mouse(local), inner);
                        self.apply_outcome(outcome);
                    }
                }
            }
            _ => {}
        }
    }

    fn on_press(&mut self, mouse: &MouseEvent, point: Point) {
        if let Some((id, _)) = self
            .nav_rects
            .iter()
            .find(|(_, rect)| rect_contains(*rect, mouse.column, mouse.row))
            .copied()
        {
            self.wm.toggle_static(id);
            return;
        }

        let Some((id, rect)) = self.window_at(mouse.column, mouse.row) else {
            return;
        };
        self.wm.bring_to_front(id);

        // title row: close glyph or drag handle
        if mouse.row == rect.y {
            let glyph_start = rect.right().saturating_sub(1 + CLOSE_GLYPH.chars().count() as u16);
            if mouse.column >= glyph_start && mouse.column < rect.right().saturating_sub(1) {
                self.close_window(id);
                return;
            }
            if let Some(geometry) = self.geometry.get_mut(&id) {
                geometry.begin_drag(point);
                self.pointer = Some(id);
            }
            return;
        }

        // bottom-right corner: resize handle
        if mouse.column == rect.right().saturating_sub(1)
            && mouse.row == rect.bottom().saturating_sub(1)
        {
            if let Some(geometry) = self.geometry.get_mut(&id) {
                geometry.begin_resize(point);
                self.pointer = Some(id);
            }
            return;
        }

        let inner = inner_rect(rect);
        if let Some(local) = localize(mouse, inner) {
            let outcome = self.component_event(id, &Event::Mouse(local), inner);
            self.apply_outcome(outcome);
        }
    }

    /// Topmost drawn window containing the cell, using last frame's rects.
    fn window_at(&self, column: u16, row: u16) -> Option<(WindowId, Rect)> {
        self.draw_rects
            .iter()
            .rev()
            .find(|(_, rect)| rect_contains(*rect, column, row))
            .copied()
    }

    fn component_event(&mut self, id: WindowId, event: &Event, inner: Rect) -> Outcome {
        match id {
            WindowId::Static(StaticWindowId::Profile) => self.profile.handle_event(event, inner),
            WindowId::Static(StaticWindowId::Career) => self.career.handle_event(event, inner),
            WindowId::Static(StaticWindowId::Skills) => self.skills.handle_event(event, inner),
            WindowId::Static(StaticWindowId::Projects) => self.projects.handle_event(event, inner),
            WindowId::Static(StaticWindowId::Contact) => self.contact.handle_event(event, inner),
            WindowId::Detail(key) => match self.details.get_mut(&key) {
                Some(panel) => panel.handle_event(event, inner),
                None => Outcome::Ignored,
            },
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Ignored | Outcome::Consumed => {}
            Outcome::OpenDetail(detail) => self.open_detail(detail),
            Outcome::Submit(form) => self.submit_contact(form),
        }
    }

    fn open_detail(&mut self, detail: Detail) {
        self.details
            .entry(detail.key())
            .or_insert_with(|| DetailPanel::new(&detail));
        self.wm.open_detail(detail, self.bounds);
    }

    fn close_window(&mut self, id: WindowId) {
        match id {
            WindowId::Static(static_id) => self.wm.set_static_open(static_id, false),
            WindowId::Detail(key) => {
                self.wm.close_detail(key);
                self.details.remove(&key);
                self.geometry.remove(&id);
            }
        }
    }

    fn submit_contact(&mut self, form: ContactForm) {
        let Some(mailer) = self.mailer.clone() else {
            self.contact
                .set_status(SendStatus::Failed(ContactError::Configuration));
            return;
        };
        let tx = self.tx.clone();
        thread::spawn(move || {
            let result = mailer.send(&form);
            let _ = tx.send(AppMessage::ContactSent(result));
        });
    }
}

fn rect_contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// The content area inside a bordered window rect.
fn inner_rect(rect: Rect) -> Rect {
    Rect {
        x: rect.x + 1,
        y: rect.y + 1,
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

/// Rebase a mouse event onto the content area; `None` when it falls on
/// the chrome.
fn localize(mouse: &MouseEvent, inner: Rect) -> Option<MouseEvent> {
    if !rect_contains(inner, mouse.column, mouse.row) {
        return None;
    }
    Some(MouseEvent {
        column: mouse.column - inner.x,
        row: mouse.row - inner.y,
        ..*mouse
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn app() -> App {
        App::new(ContentSource::Demo, None)
    }

    fn wait_for_views(app: &mut App) {
        // demo workers finish quickly; poll the channel until all land
        for _ in 0..100 {
            app.on_tick();
            if matches!(app.profile.state(), LoadState::Ready(_))
                && matches!(app.projects.state(), LoadState::Ready(_))
            {
                return;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
    }

    fn press(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn seed_draw_rect(app: &mut App, id: WindowId, rect: Rect) {
        app.draw_rects.push((id, rect));
        app.geometry.insert(
            id,
            DragResize::new(
                Point::new(i32::from(rect.x), i32::from(rect.y)),
                Size::new(i32::from(rect.width), i32::from(rect.height)),
                cell_limits(),
            ),
        );
    }

    #[test]
    fn ctrl_q_quits() {
        let mut app = app();
        let quit = app.on_key(&KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        });
        assert!(matches!(quit, ControlFlow::Quit));
    }

    #[test]
    fn demo_results_fill_the_panels() {
        let mut app = app();
        wait_for_views(&mut app);
        assert!(matches!(app.profile.state(), LoadState::Ready(_)));
        assert!(matches!(app.career.state(), LoadState::Ready(_)));
        assert!(matches!(app.skills.state(), LoadState::Ready(_)));
        assert!(matches!(app.projects.state(), LoadState::Ready(_)));
    }

    #[test]
    fn title_bar_press_arms_a_drag_session() {
        let mut app = app();
        let id = WindowId::Static(StaticWindowId::Profile);
        seed_draw_rect(&mut app, id, Rect::new(10, 5, 40, 12));

        app.on_mouse(&press(20, 5));
        assert_eq!(app.pointer, Some(id));
        assert!(app.geometry[&id].dragging());
        assert_eq!(app.wm.front(), Some(id));
    }

    #[test]
    fn corner_press_arms_a_resize_session() {
        let mut app = app();
        let id = WindowId::Static(StaticWindowId::Career);
        seed_draw_rect(&mut app, id, Rect::new(0, 2, 40, 12));

        app.on_mouse(&press(39, 13));
        assert!(app.geometry[&id].resizing());
    }

    #[test]
    fn close_glyph_press_closes_the_window() {
        let mut app = app();
        let id = WindowId::Static(StaticWindowId::Skills);
        let rect = Rect::new(0, 2, 40, 12);
        seed_draw_rect(&mut app, id, rect);

        // glyph occupies the cells just left of the top-right corner
        app.on_mouse(&press(rect.right() - 2, rect.y));
        assert!(!app.wm.static_open(StaticWindowId::Skills));
    }

    #[test]
    fn release_ends_the_pointer_session() {
        let mut app = app();
        let id = WindowId::Static(StaticWindowId::Profile);
        seed_draw_rect(&mut app, id, Rect::new(10, 5, 40, 12));
        app.on_mouse(&press(20, 5));

        app.on_mouse(&MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 25,
            row: 6,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(app.pointer, None);
        assert!(!app.geometry[&id].active());
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn function_keys_toggle_static_windows() {
        let mut app = app();
        assert!(app.wm.static_open(StaticWindowId::Profile));
        app.on_key(&key(KeyCode::F(1), KeyModifiers::NONE));
        assert!(!app.wm.static_open(StaticWindowId::Profile));
        app.on_key(&key(KeyCode::F(1), KeyModifiers::NONE));
        assert!(app.wm.static_open(StaticWindowId::Profile));
    }

    #[test]
    fn ctrl_l_clears_the_desktop() {
        let mut app = app();
        app.open_detail(Detail::Education(crate::content::demo::education().remove(0)));
        assert_eq!(app.details.len(), 1);

        app.on_key(&key(KeyCode::Char('l'), KeyModifiers::CONTROL));
        assert!(app.details.is_empty());
        assert!(app.wm.stacking_order().is_empty());
    }

    #[test]
    fn reopening_an_entity_keeps_one_panel() {
        let mut app = app();
        let record = crate::content::demo::education().remove(0);
        app.open_detail(Detail::Education(record.clone()));
        app.open_detail(Detail::Education(record));

        assert_eq!(app.details.len(), 1);
        let detail_windows = app
            .wm
            .stacking_order()
            .into_iter()
            .filter(|id| matches!(id, WindowId::Detail(_)))
            .count();
        assert_eq!(detail_windows, 1);
    }

    #[test]
    fn stale_view_results_are_dropped() {
        use crate::content::loader::ViewResult;

        let mut app = app();
        wait_for_views(&mut app);
        assert!(matches!(app.profile.state(), LoadState::Ready(_)));

        // a result from a superseded generation must not touch the panel
        let stale = app.generation;
        app.generation += 1;
        app.tx
            .send(AppMessage::View(ViewResult {
                generation: stale,
                view: View::Profile,
                result: Err("late failure".into()),
            }))
            .expect("channel open");
        app.on_tick();
        assert!(matches!(app.profile.state(), LoadState::Ready(_)));
    }

    #[test]
    fn submitting_without_a_mailer_reports_misconfiguration() {
        let mut app = app();
        app.submit_contact(ContactForm {
            name: "Ada".into(),
            email: "ada@example.test".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        });
        assert_eq!(
            *app.contact.status(),
            SendStatus::Failed(ContactError::Configuration)
        );
    }

}
