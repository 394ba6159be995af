//! Terminal front end for the depth-of-field plotter.
//!
//! Holds the interactive state, the ratatui components that draw it, start-up
//! configuration and file logging. The optics and sweeps live in
//! `dofplot_core`.

pub mod app;
pub mod components;
pub mod config;
pub mod logging;
pub mod state;

pub use app::App;
pub use config::{ConfigError, StartupConfig};
pub use logging::init_logging;
pub use state::{AppState, Control};
