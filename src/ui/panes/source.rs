//! Source text pane with syntax highlighting
//!
//! Highlights the `fn` keyword, the declared name following it, and
//! parentheses/braces. Characters the lexer rejects are shown in the error
//! color. When compilation failed at a known location, that line is marked.
//!
//! The highlighter is a character scan of its own and does not run the lexer,
//! so it can color input the lexer rejects.

use super::{border_style, clamp_scroll};
use crate::parser::ast::SourceLocation;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Push the pending word, styled by what precedes it
fn flush_word(word: &mut String, after_fn: &mut bool, spans: &mut Vec<Span<'static>>) {
    if word.is_empty() {
        return;
    }
    let style = if word == "fn" {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if *after_fn {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    };
    *after_fn = word == "fn";
    spans.push(Span::styled(std::mem::take(word), style));
}

/// Simple syntax highlighting for one line of fn source
fn highlight_source_line(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let mut after_fn = false;

    for c in line.chars() {
        if c.is_ascii_alphabetic() {
            current_word.push(c);
            continue;
        }

        flush_word(&mut current_word, &mut after_fn, &mut spans);

        let style = match c {
            '(' | ')' | '{' | '}' => Style::default().fg(DEFAULT_THEME.primary),
            c if c.is_whitespace() => Style::default(),
            _ => Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::UNDERLINED),
        };
        if !c.is_whitespace() {
            after_fn = false;
        }
        spans.push(Span::styled(c.to_string(), style));
    }

    flush_word(&mut current_word, &mut after_fn, &mut spans);

    Line::from(spans)
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    error_location: Option<SourceLocation>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines: Vec<&str> = source.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let error_line = error_location.map(|loc| loc.line);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_error = error_line == Some(line_num);

            let num_style = if is_error {
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content = highlight_source_line(line);
            if is_error {
                for span in &mut content.spans {
                    span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
                }
            }

            let mut spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
