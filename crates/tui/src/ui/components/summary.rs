use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::{app::SummaryState, ui::Theme};

/// Calculates a centered rect of at most `width` x `height`.
fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    horizontal[1]
}

fn summary_lines(summary: &SummaryState, theme: &Theme) -> Vec<Line<'static>> {
    match summary {
        SummaryState::Unavailable => vec![Line::from(Span::styled(
            "unavailable",
            Style::default().fg(theme.error),
        ))],
        SummaryState::Loaded { total, categories } => {
            let mut lines = vec![
                Line::from(vec![
                    Span::styled("Total", Style::default().fg(theme.text_muted)),
                    Span::styled(
                        format!("  ¥{total}"),
                        Style::default()
                            .fg(theme.positive)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::default(),
            ];
            lines.extend(categories.iter().map(|(name, sum)| {
                Line::from(vec![
                    Span::styled(format!("{name:<16}"), Style::default().fg(theme.text)),
                    Span::raw(format!("¥{sum}")),
                ])
            }));
            lines
        }
    }
}

pub fn render(frame: &mut Frame<'_>, area: Rect, summary: Option<&SummaryState>) {
    let Some(summary) = summary else {
        return;
    };
    let theme = Theme::default();
    let lines = summary_lines(summary, &theme);

    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered_box(36, height, area);

    let block = Block::default()
        .title(" summary ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));

    frame.render_widget(Clear, rect);
    frame.render_widget(Paragraph::new(lines).block(block), rect);
}
