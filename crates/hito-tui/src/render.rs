//! Frame composition.
//!
//! Lays out the entry list and the preview side by side above a one-line
//! status bar. Drawing reads the [`App`] and never mutates it.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::ui::panel::render_file_list;
use crate::ui::preview::{render_preview, PreviewOptions};
use crate::ui::statusbar::{render_statusbar, StatusBarProps};

/// Rows taken by the status bar.
const STATUS_ROWS: u16 = 1;
/// Top and bottom border of the list block.
const BORDER_ROWS: u16 = 2;

/// Number of list rows visible in a terminal `height` rows tall.
pub fn list_viewport_height(height: u16) -> usize {
    usize::from(height.saturating_sub(STATUS_ROWS + BORDER_ROWS)).max(1)
}

/// Main render function. Composes the full UI each frame.
pub fn render(f: &mut Frame, app: &App) {
    let (list_area, preview_area, status_area) = split_screen(f.area(), app.config().ui.panel_ratio);
    let session = app.session();
    let theme = app.theme();
    let ui = &app.config().ui;

    render_file_list(f, list_area, session.nav(), session.cwd(), theme, ui.show_icons);

    render_preview(
        f,
        preview_area,
        session.preview(),
        session.selected(),
        theme,
        PreviewOptions {
            date_format: &ui.date_format,
            wrap: app.config().preview.wrap,
        },
    );

    let help = app.help_text();
    let props = StatusBarProps {
        entry_count: session.listing().len(),
        selected_index: session.nav().selected_index(),
        selected_entry: session.selected(),
        show_hidden: session.show_hidden(),
        status_message: session.status(),
        help_text: &help,
    };
    render_statusbar(f, status_area, &props, theme);
}

/// Splits the screen into (list, preview, status bar).
fn split_screen(area: Rect, panel_ratio: f64) -> (Rect, Rect, Rect) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_ROWS)])
        .split(area);

    let list_percent = ratio_percent(panel_ratio);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(list_percent),
            Constraint::Percentage(100 - list_percent),
        ])
        .split(vertical[0]);

    (horizontal[0], horizontal[1], vertical[1])
}

/// Converts the list/preview ratio to a percentage in `10..=90`.
fn ratio_percent(ratio: f64) -> u16 {
    if !ratio.is_finite() {
        return 50;
    }
    (ratio.clamp(0.1, 0.9) * 100.0).round() as u16
}
