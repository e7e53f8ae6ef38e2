use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};
use strum::IntoEnumIterator;

use crate::{
    app::{
        dashboard::TerminalDashboard,
        table::{Column, RowCell},
    },
    models::Indicator,
};

pub fn indicator_color(indicator: &Indicator) -> Color {
    match indicator {
        Indicator::Up => Color::Green,
        Indicator::Down => Color::Red,
        Indicator::Flat => Color::Reset,
    }
}

fn column_width(column: Column) -> Constraint {
    match column {
        Column::SerialNumber => Constraint::Length(5),
        Column::Symbol => Constraint::Length(12),
        Column::LastUpdated => Constraint::Length(22),
        Column::LastPrice | Column::DayHigh | Column::DayLow => Constraint::Length(12),
        Column::AverageValue | Column::CurrentValue => Constraint::Length(13),
        _ => Constraint::Length(10),
    }
}

fn styled_cell(cell: &RowCell) -> Cell<'static> {
    let content = Cell::from(cell.text().clone());
    match cell.indicator() {
        Some(indicator) => content.style(Style::default().fg(indicator_color(indicator))),
        None => content,
    }
}

pub fn render(
    frame: &mut Frame,
    dashboard: &TerminalDashboard,
    table_state: &mut TableState,
    last_refreshed: Option<&DateTime<Local>>,
    source: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("Stock Dashboard  ({})", source))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, chunks[0]);

    let status = match last_refreshed {
        Some(at) => format!(
            "Last refreshed {}  |  r: refresh  q: quit",
            at.format("%Y-%m-%d %H:%M:%S")
        ),
        None => String::from("Waiting for first refresh...  |  r: refresh  q: quit"),
    };
    frame.render_widget(
        Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );

    let rows = dashboard.table_body();

    if rows.is_empty() {
        let empty_message = Paragraph::new("No quotes to display.")
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty_message, chunks[1]);
        return;
    }

    let header_cells = Column::iter()
        .map(|column| Cell::from(column.to_string()).style(Style::default().fg(Color::Yellow)));
    let header = Row::new(header_cells).style(Style::default()).height(1);

    let body = rows
        .iter()
        .map(|row| Row::new(row.cells().iter().map(styled_cell)).height(1));

    let total_style = Style::default().add_modifier(Modifier::BOLD);
    let footer_cells = Column::iter().map(|column| match column {
        Column::SerialNumber => Cell::from("Total").style(total_style),
        Column::AverageValue => {
            Cell::from(dashboard.average_value_sum().clone()).style(total_style)
        }
        Column::CurrentValue => {
            Cell::from(dashboard.current_value_sum().clone()).style(total_style)
        }
        _ => Cell::from(""),
    });
    let footer = Row::new(footer_cells).height(1);

    // The selected row's company name stands in for the symbol tooltip.
    let block_title = table_state
        .selected()
        .and_then(|i| rows.get(i))
        .and_then(|row| row.cell(Column::Symbol).title().clone())
        .unwrap_or_else(|| String::from("Quotes"));

    let widths: Vec<Constraint> = Column::iter().map(column_width).collect();

    let table = Table::new(body, widths)
        .header(header)
        .footer(footer)
        .block(Block::default().title(block_title).borders(Borders::ALL))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(table, chunks[1], table_state);
}
