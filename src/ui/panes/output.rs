//! Output pane: the generated text, or the error that stopped the pipeline

use super::{border_style, clamp_scroll};
use crate::compiler::CompileError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the output pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    result: &Result<String, CompileError>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let output = match result {
        Ok(output) => output,
        Err(err) => {
            let paragraph = Paragraph::new(err.to_string())
                .block(block)
                .wrap(Wrap { trim: false })
                .style(
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                );
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let lines: Vec<&str> = output.lines().collect();
    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let items: Vec<ListItem> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(*line).style(Style::default().fg(DEFAULT_THEME.success)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
