//! Main TUI application state and logic

use crate::snapshot::{PipelineTrace, Stage};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use tracing::debug;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Stage,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> stage -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Stage,
            FocusedPane::Stage => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Stage => FocusedPane::Source,
            FocusedPane::Output => FocusedPane::Stage,
        }
    }
}

/// The main application state
pub struct App {
    /// The recorded pipeline run
    pub trace: PipelineTrace,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index into `Stage::ALL` of the stage being shown
    pub stage_index: usize,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub stage_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app showing the first stage of `trace`
    pub fn new(trace: PipelineTrace) -> Self {
        let status_message = match &trace.result {
            Ok(_) => String::from("Compiled"),
            Err(err) => format!("Failed in {} stage", err.stage()),
        };

        App {
            trace,
            focused_pane: FocusedPane::Stage,
            stage_index: 0,
            source_scroll: 0,
            stage_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    pub fn stage(&self) -> Stage {
        Stage::ALL[self.stage_index]
    }

    /// Furthest stage worth showing: the last one, or the one that failed
    fn last_stage_index(&self) -> usize {
        match self.trace.failed_stage() {
            Some(stage) => stage as usize,
            None => Stage::ALL.len() - 1,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub(crate) fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes, plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        // Left column: Source (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        let stage = self.stage();
        let error_location = self.trace.result.as_ref().err().and_then(|e| e.location());

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.trace.source,
            error_location,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            &self.trace.result,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        // Right column: the selected stage
        super::panes::render_stage_pane(
            frame,
            columns[1],
            &self.trace,
            stage,
            self.focused_pane == FocusedPane::Stage,
            &mut self.stage_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            stage,
            self.trace.failed_stage(),
        );
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => self.step_to(self.stage_index.saturating_sub(1)),
            KeyCode::Right => self.step_to(self.stage_index + 1),
            KeyCode::Enter => self.step_to(self.last_stage_index()),
            KeyCode::Backspace => self.step_to(0),
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                // Clamped against content height on the next render
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Stage => &mut self.stage_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }

    /// Move to stage `index`, clamped to the stages worth showing
    fn step_to(&mut self, index: usize) {
        let index = index.min(self.last_stage_index());
        if index == self.stage_index {
            self.status_message = if index == 0 {
                "Already at first stage".to_string()
            } else {
                "No further stages".to_string()
            };
            return;
        }

        self.stage_index = index;
        self.stage_scroll = 0;
        let stage = self.stage();
        debug!(%stage, "showing stage");
        self.status_message = match self.trace.failed_stage() {
            Some(failed) if failed == stage => format!("{} failed", stage),
            _ => format!("Showing {}", stage.artifact()),
        };
    }
}
