// The game core (catalog, engine, session) has no terminal dependencies; the
// binary in main.rs drives it through `app` and draws it with `ui`.

pub mod app;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod event;
pub mod logging;
pub mod session;
pub mod speech;
pub mod ui;
