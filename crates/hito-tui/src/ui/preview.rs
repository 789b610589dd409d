//! Preview pane rendering.
//!
//! [`preview_lines`] turns the session's [`Preview`] into styled lines;
//! [`render_preview`] wraps them in a bordered block.

use std::fmt::Write as _;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use hito_core::config::theme::{parse_color, Theme};
use hito_core::{FileEntry, Preview, PreviewLine};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// How the preview pane lays out its text.
#[derive(Debug, Clone, Copy)]
pub struct PreviewOptions<'a> {
    pub date_format: &'a str,
    pub wrap: bool,
}

/// Renders the preview pane for the selected entry.
pub fn render_preview(
    f: &mut Frame,
    area: Rect,
    preview: &Preview,
    selected: Option<&FileEntry>,
    theme: &Theme,
    options: PreviewOptions<'_>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            "Preview",
            Style::default().fg(parse_color(&theme.preview.title_fg)),
        ))
        .border_style(Style::default().fg(parse_color(&theme.preview.border_fg)));

    // Fill every cell of the inner area so nothing from the previous frame
    // survives a shorter preview.
    let inner = block.inner(area);
    let inner_width = inner.width as usize;
    let inner_height = inner.height as usize;

    let mut content = preview_lines(preview, selected, theme, options.date_format);
    for line in &mut content {
        let width = line.width();
        if width < inner_width {
            line.spans.push(Span::raw(" ".repeat(inner_width - width)));
        }
    }
    while content.len() < inner_height {
        content.push(Line::from(" ".repeat(inner_width)));
    }

    let paragraph = Paragraph::new(content).block(block);
    let paragraph = if options.wrap {
        paragraph.wrap(Wrap { trim: false })
    } else {
        paragraph
    };
    f.render_widget(paragraph, area);
}

/// Builds the preview text: a header naming the entry, a blank line, then
/// the body for the preview kind.
pub fn preview_lines(
    preview: &Preview,
    selected: Option<&FileEntry>,
    theme: &Theme,
    date_format: &str,
) -> Vec<Line<'static>> {
    let meta = Style::default().fg(parse_color(&theme.preview.meta_fg));
    let error = Style::default().fg(parse_color(&theme.preview.error_fg));
    let truncation = Style::default().fg(parse_color(&theme.preview.truncation_fg));

    let Some(entry) = selected else {
        return vec![Line::from(Span::styled("No file selected", meta))];
    };

    let mut lines = vec![header_line(entry, theme), Line::from("")];
    match preview {
        Preview::None => {}
        Preview::Directory {
            path, modified, ..
        } => {
            lines.push(Line::from(Span::styled(
                format!("Path: {}", path.display()),
                meta,
            )));
            let modified = modified
                .map(|t| format_time(t, date_format))
                .unwrap_or_else(|| "-".to_string());
            lines.push(Line::from(Span::styled(format!("Modified: {modified}"), meta)));
        }
        Preview::Text {
            lines: text,
            more_lines,
            truncated_bytes,
        } => {
            lines.extend(text.iter().map(|line| text_line(line, truncation)));
            if *more_lines > 0 {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    format!("... ({more_lines} more lines)"),
                    truncation,
                )));
            } else if *truncated_bytes {
                lines.push(Line::from(Span::styled("... (truncated)", truncation)));
            }
        }
        Preview::Binary { size } => {
            lines.push(Line::from(Span::styled(
                format!("Binary file ({size} bytes)"),
                meta,
            )));
            lines.push(Line::from(Span::styled("Cannot preview", meta)));
        }
        Preview::Unreadable { message } => {
            lines.push(Line::from(Span::styled(format!("Error: {message}"), error)));
        }
    }
    lines
}

fn header_line(entry: &FileEntry, theme: &Theme) -> Line<'static> {
    if entry.is_dir() {
        return Line::from(Span::styled(
            entry.name().to_string(),
            Style::default()
                .fg(parse_color(&theme.preview.dir_title_fg))
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(vec![
        Span::styled(
            entry.name().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({} bytes)", entry.size()),
            Style::default().fg(parse_color(&theme.preview.meta_fg)),
        ),
    ])
}

fn text_line(line: &PreviewLine, truncation: Style) -> Line<'static> {
    let mut spans = vec![Span::raw(line.text.clone())];
    if line.truncated {
        spans.push(Span::styled("...", truncation));
    }
    Line::from(spans)
}

/// Formats `time` in local time with a strftime-style pattern.
///
/// An invalid pattern falls back to `%Y-%m-%d %H:%M:%S`.
pub fn format_time(time: SystemTime, pattern: &str) -> String {
    let local: DateTime<Local> = time.into();
    let mut out = String::new();
    if write!(out, "{}", local.format(pattern)).is_ok() {
        return out;
    }
    local.format(FALLBACK_DATE_FORMAT).to_string()
}
