use derive_getters::Getters;

use crate::app::{html, table::QuoteRow};

/// The rows area of the quote table.
pub trait TableBody {
    fn clear(&mut self);
    fn append_row(&mut self, row: &QuoteRow);
}

/// A single text cell, such as a summary total.
pub trait SummaryCell {
    fn set_text(&mut self, text: &str);
}

impl TableBody for Vec<QuoteRow> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append_row(&mut self, row: &QuoteRow) {
        self.push(row.clone());
    }
}

impl SummaryCell for String {
    fn set_text(&mut self, text: &str) {
        self.clear();
        self.push_str(text);
    }
}

/// Table body kept as rendered `<tr>` markup.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HtmlTableBody {
    rows: Vec<String>,
}

impl HtmlTableBody {
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn inner_html(&self) -> String {
        self.rows.concat()
    }
}

impl TableBody for HtmlTableBody {
    fn clear(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, row: &QuoteRow) {
        self.rows.push(html::row_markup(row));
    }
}

/// The three elements a refresh cycle writes to.
#[derive(Clone, Debug, Default, Getters)]
pub struct RefreshContext<B, C> {
    table_body: B,
    average_value_sum: C,
    current_value_sum: C,
}

impl<B, C> RefreshContext<B, C>
where
    B: TableBody,
    C: SummaryCell,
{
    pub fn new(table_body: B, average_value_sum: C, current_value_sum: C) -> Self {
        Self {
            table_body,
            average_value_sum,
            current_value_sum,
        }
    }

    pub fn table_body_mut(&mut self) -> &mut B {
        &mut self.table_body
    }

    pub fn average_value_sum_mut(&mut self) -> &mut C {
        &mut self.average_value_sum
    }

    pub fn current_value_sum_mut(&mut self) -> &mut C {
        &mut self.current_value_sum
    }
}

pub type HtmlDashboard = RefreshContext<HtmlTableBody, String>;
pub type TerminalDashboard = RefreshContext<Vec<QuoteRow>, String>;
