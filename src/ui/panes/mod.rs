//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with highlighting and the error line, if any
//! - [`stage`]: The snapshot of the currently selected pipeline stage
//! - [`output`]: Final output text, or the error that stopped the pipeline
//! - [`status`]: Status bar with keybindings and stage position
//!
//! Each pane module exports a primary `render_*` function taking the frame,
//! its area, the data to show, focus, and (for scrollable panes) a mutable
//! scroll offset that the renderer clamps.

pub mod output;
pub mod source;
pub mod stage;
pub mod status;

pub use output::render_output_pane;
pub use source::render_source_pane;
pub use stage::render_stage_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `offset` so a list of `total` rows fills `visible` rows
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
