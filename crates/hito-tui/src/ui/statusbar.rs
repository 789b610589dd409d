//! Status bar rendering.
//!
//! A single row at the bottom of the terminal: cursor position, the
//! selected entry, the hidden-file indicator and then either the transient
//! status message or the key help.

use hito_core::config::theme::{parse_color, Theme};
use hito_core::FileEntry;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub entry_count: usize,
    pub selected_index: Option<usize>,
    pub selected_entry: Option<&'a FileEntry>,
    pub show_hidden: bool,
    pub status_message: Option<&'a str>,
    pub help_text: &'a str,
}

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let bar = Paragraph::new(status_line(props, theme)).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}

fn status_line(props: &StatusBarProps<'_>, theme: &Theme) -> Line<'static> {
    let bg = parse_color(&theme.statusbar.bg);
    let fg = parse_color(&theme.statusbar.fg);

    let position = match props.selected_index {
        Some(i) if props.entry_count > 0 => format!(" {}/{}", i + 1, props.entry_count),
        _ => " 0/0".to_owned(),
    };

    let file_info = props
        .selected_entry
        .map(|e| {
            if e.is_dir() {
                format!("  {}/", e.name())
            } else {
                format!("  {} ({})", e.name(), format_size(e.size()))
            }
        })
        .unwrap_or_default();

    let hidden_indicator = if props.show_hidden { " [H]" } else { "" };

    let tail = match props.status_message {
        Some(msg) => Span::styled(
            format!("  {msg}"),
            Style::default()
                .fg(parse_color(&theme.statusbar.message_fg))
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ),
        None => Span::styled(
            format!("  {}", props.help_text),
            Style::default()
                .fg(parse_color(&theme.statusbar.help_fg))
                .bg(bg),
        ),
    };

    Line::from(vec![
        Span::styled(
            position,
            Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(file_info, Style::default().fg(fg).bg(bg)),
        Span::styled(
            hidden_indicator.to_owned(),
            Style::default()
                .fg(parse_color(&theme.statusbar.hidden_fg))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        tail,
    ])
}

/// Human-readable size with one decimal above 1 KB.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
