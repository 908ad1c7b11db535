//! Stage pane: the snapshot of the selected pipeline stage
//!
//! Stages that completed show their snapshot lines; node kinds in AST
//! outlines are tinted. The stage that failed shows the error instead, and
//! stages after it are marked as not reached.

use super::{border_style, clamp_scroll};
use crate::snapshot::{PipelineTrace, Stage};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

const NODE_KINDS: [&str; 3] = ["Program", "FunctionDeclaration", "Identifier"];

/// Tint a leading node-kind word in an outline line
fn style_outline_line(line: &str) -> Line<'static> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];
    let (head, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    if NODE_KINDS.contains(&head) {
        let mut spans = vec![
            Span::raw(indent.to_string()),
            Span::styled(head.to_string(), Style::default().fg(DEFAULT_THEME.type_name)),
        ];
        if !rest.is_empty() {
            spans.push(Span::styled(
                format!(" {}", rest),
                Style::default().fg(DEFAULT_THEME.fg),
            ));
        }
        Line::from(spans)
    } else {
        Line::styled(line.to_string(), Style::default().fg(DEFAULT_THEME.comment))
    }
}

/// Render the stage pane for `stage`
pub fn render_stage_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &PipelineTrace,
    stage: Stage,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let index = stage as usize;
    let title = format!(
        " Stage {}/{}: {} ",
        index + 1,
        Stage::ALL.len(),
        stage.artifact()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(snapshot) = trace.snapshot(index) else {
        let (text, color) = match &trace.result {
            Err(err) if err.stage() == stage => (format!("{} failed:\n{}", stage, err), DEFAULT_THEME.error),
            _ => ("(not reached)".to_string(), DEFAULT_THEME.comment),
        };
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD));
        frame.render_widget(paragraph, area);
        return;
    };

    if snapshot.lines.is_empty() {
        let paragraph = Paragraph::new("(empty)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    clamp_scroll(scroll_offset, snapshot.lines.len(), visible_height);

    let items: Vec<ListItem> = snapshot
        .lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| match stage {
            Stage::Parse | Stage::Transform => ListItem::new(style_outline_line(line)),
            Stage::Lex | Stage::Generate => {
                ListItem::new(line.as_str()).style(Style::default().fg(DEFAULT_THEME.fg))
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
