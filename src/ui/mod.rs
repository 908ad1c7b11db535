//! Terminal stage inspector built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, stage stepping
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   stage, output, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`PipelineTrace`] and call [`App::run`] to start the event loop.
//!
//! [`PipelineTrace`]: crate::snapshot::PipelineTrace
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
