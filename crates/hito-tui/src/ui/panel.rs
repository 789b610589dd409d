//! Entry list panel.
//!
//! Renders only the rows inside the navigation window so the selection is
//! always on screen, with the current path as the block title.

use std::path::Path;

use hito_core::config::theme::{parse_color, Theme};
use hito_core::{FileEntry, NavigationState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::icons::{icon_for_entry, marker_for_entry};

/// Renders the visible slice of the listing held by `nav`.
pub fn render_file_list(
    f: &mut Frame,
    area: Rect,
    nav: &NavigationState,
    cwd: &Path,
    theme: &Theme,
    show_icons: bool,
) {
    let window = nav.visible_window();
    let start = window.start;
    let entries = &nav.listing().entries()[window];

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let prefix = if show_icons {
                icon_for_entry(entry)
            } else {
                marker_for_entry(entry)
            };
            let display = format!("{prefix}{}", entry.name());
            ListItem::new(Line::from(Span::styled(display, entry_style(entry, theme))))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    panel_title(cwd),
                    Style::default().fg(parse_color(&theme.panel.title_fg)),
                ))
                .border_style(Style::default().fg(parse_color(&theme.panel.border_fg))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(nav.selected_index().map(|i| i - start));

    f.render_stateful_widget(list, area, &mut state);
}

/// The current path, with the home directory shortened to `~`.
pub fn panel_title(cwd: &Path) -> String {
    let home = std::env::var_os("HOME").map(std::path::PathBuf::from);
    abbreviate_home(cwd, home.as_deref())
}

fn abbreviate_home(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|h| path.strip_prefix(h).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}

fn entry_style(entry: &FileEntry, theme: &Theme) -> Style {
    if entry.is_parent_sentinel() {
        Style::default().fg(parse_color(&theme.panel.parent_fg))
    } else if entry.is_dir() {
        Style::default()
            .fg(parse_color(&theme.panel.dir_fg))
            .add_modifier(Modifier::BOLD)
    } else if entry.is_symlink() {
        Style::default().fg(parse_color(&theme.panel.symlink_fg))
    } else if entry.is_hidden() {
        Style::default().fg(parse_color(&theme.panel.hidden_fg))
    } else {
        Style::default().fg(parse_color(&theme.panel.file_fg))
    }
}
