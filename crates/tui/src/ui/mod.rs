pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::AppState;

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Min(0),    // Form and list
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, &theme);
    screens::records::render(frame, layout[1], &state.view);
    render_bottom_bar(frame, layout[2], &theme);
    components::summary::render(frame, area, state.summary.as_ref());
}

fn render_info_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let synced = state
        .view
        .last_sync()
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled("Server", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.base_url)),
        Span::styled("Records", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {}  ", state.view.records().len())),
        Span::styled("Synced", Style::default().fg(theme.text_muted)),
        Span::raw(format!(": {synced}")),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let separator = || Span::styled("  │  ", Style::default().fg(theme.border));
    let key = |label: &'static str| Span::styled(label, Style::default().fg(theme.accent));

    let bar = Paragraph::new(Line::from(vec![
        key("Tab"),
        Span::raw(" next field  "),
        key("Enter"),
        Span::raw(" submit"),
        separator(),
        key("Ctrl+S"),
        Span::raw(" summary"),
        separator(),
        key("Esc"),
        Span::raw(" quit"),
    ]));
    frame.render_widget(bar, area);
}
