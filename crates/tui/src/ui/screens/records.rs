use api_types::record::Record;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::{
    app::{FormField, RecordListView},
    ui::Theme,
};

const FIELDS: [FormField; 3] = [FormField::Date, FormField::Category, FormField::Amount];
const LABEL_WIDTH: usize = 10;

/// Text of one list entry: `"<date> - <category> - ¥<amount>"`.
///
/// A non-numeric amount renders as nothing after the currency sign.
pub fn list_item_text(record: &Record) -> String {
    let amount = record.amount.map(|a| a.to_string()).unwrap_or_default();
    format!("{} - {} - ¥{}", record.date, record.category, amount)
}

pub fn render(frame: &mut Frame<'_>, area: Rect, view: &RecordListView) {
    let theme = Theme::default();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Form: three inputs + submit, inside borders
            Constraint::Min(0),    // Records
        ])
        .split(area);

    render_form(frame, layout[0], view, &theme);
    render_list(frame, layout[1], view, &theme);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, view: &RecordListView, theme: &Theme) {
    let block = Block::default()
        .title(" household account book ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Submit
        ])
        .split(inner);

    for (row, field) in rows.iter().zip(FIELDS) {
        let focused = view.focus() == field;
        render_input(frame, *row, field, view.draft().text(field), focused, theme);
    }

    let submit = Line::from(vec![
        Span::styled(
            "[ Submit ]",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Enter", Style::default().fg(theme.text_muted)),
    ]);
    frame.render_widget(Paragraph::new(submit), rows[4]);
}

/// Renders a labeled input with a cursor when focused.
fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    field: FormField,
    value: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };
    let label = format!("{:<width$}", format!("{}:", field.label()), width = LABEL_WIDTH);

    let value_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };

    let line = Line::from(vec![
        Span::styled(label, Style::default().fg(theme.text_muted)),
        Span::styled(format!("{value}{cursor}"), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, view: &RecordListView, theme: &Theme) {
    let block = Block::default()
        .title(" records ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    // Entries have no identity; position is all that distinguishes them.
    let items: Vec<ListItem> = view
        .records()
        .iter()
        .map(|record| ListItem::new(format!("• {}", list_item_text(record))))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(theme.text))
        .block(block);
    frame.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::app::view_with_records;

    fn rendered_lines(view: &RecordListView) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), view))
            .unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn list_item_format() {
        let record = Record::new("2024-01-01", "food", 1200);
        assert_eq!(list_item_text(&record), "2024-01-01 - food - ¥1200");
    }

    #[test]
    fn non_numeric_amount_renders_empty() {
        let record = Record {
            date: "2024-01-01".to_string(),
            category: "food".to_string(),
            amount: None,
        };
        assert_eq!(list_item_text(&record), "2024-01-01 - food - ¥");
    }

    #[test]
    fn renders_one_item_per_record() {
        let view = view_with_records(vec![Record::new("2024-01-01", "food", 1200)]);

        let lines = rendered_lines(&view);
        let items: Vec<&String> = lines.iter().filter(|line| line.contains(" - ¥")).collect();

        assert_eq!(items.len(), 1);
        assert!(items[0].contains("• 2024-01-01 - food - ¥1200"));
    }

    #[test]
    fn renders_records_in_given_order() {
        let view = view_with_records(vec![
            Record::new("2024-02-02", "rent", 50000),
            Record::new("2024-01-01", "food", 1200),
        ]);

        let lines = rendered_lines(&view);
        let items: Vec<&String> = lines.iter().filter(|line| line.contains(" - ¥")).collect();

        assert_eq!(items.len(), 2);
        assert!(items[0].contains("2024-02-02 - rent - ¥50000"));
        assert!(items[1].contains("2024-01-01 - food - ¥1200"));
    }

    #[test]
    fn form_shows_labels_and_default_amount() {
        let lines = rendered_lines(&RecordListView::new());

        assert!(lines.iter().any(|line| line.contains("Date:")));
        assert!(lines.iter().any(|line| line.contains("Category:")));
        assert!(lines.iter().any(|line| line.contains("Amount:   0")));
        assert!(lines.iter().any(|line| line.contains("[ Submit ]")));
    }
}
