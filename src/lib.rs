//! A portfolio presented as a desktop of draggable, resizable terminal
//! windows. The window core (stacking, identity, move/resize geometry)
//! is pure state; content arrives over a channel from background fetch
//! threads and everything renders through ratatui.

pub mod app;
pub mod components;
pub mod constants;
pub mod content;
pub mod event_loop;
pub mod theme;
pub mod tracing_sub;
pub mod window;
