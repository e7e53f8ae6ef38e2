use anyhow::{Context, Result};
use derive_getters::Getters;
use rust_decimal::Decimal;
use strum_macros::{Display, EnumIter};

use crate::models::{Indicator, Quote, Summary, money};

/// Table columns, in display order.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum Column {
    #[strum(to_string = "S.No")]
    SerialNumber,
    #[strum(to_string = "Symbol")]
    Symbol,
    #[strum(to_string = "QOH")]
    Qoh,
    #[strum(to_string = "Avg. Price")]
    AveragePrice,
    #[strum(to_string = "Last Price")]
    LastPrice,
    #[strum(to_string = "Last Updated")]
    LastUpdated,
    #[strum(to_string = "Change")]
    Change,
    #[strum(to_string = "% Change")]
    PercentageChange,
    #[strum(to_string = "Prev. Close")]
    PreviousClose,
    #[strum(to_string = "Open")]
    OpenPrice,
    #[strum(to_string = "Day High")]
    DayHigh,
    #[strum(to_string = "Day Low")]
    DayLow,
    #[strum(to_string = "52W High")]
    WeekHigh,
    #[strum(to_string = "52W Low")]
    WeekLow,
    #[strum(to_string = "Avg. Value")]
    AverageValue,
    #[strum(to_string = "Cur. Value")]
    CurrentValue,
}

pub const COLUMN_COUNT: usize = 16;

#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct RowCell {
    text: String,
    title: Option<String>,
    indicator: Option<Indicator>,
}

impl RowCell {
    fn plain(text: String) -> Self {
        Self {
            text,
            title: None,
            indicator: None,
        }
    }

    fn titled(text: String, title: String) -> Self {
        Self {
            text,
            title: Some(title),
            indicator: None,
        }
    }

    fn marked(value: &Decimal, indicator: Indicator) -> Self {
        Self {
            text: format!("{} {}", money(value), indicator.arrow()),
            title: None,
            indicator: Some(indicator),
        }
    }
}

#[derive(Clone, Debug, Eq, Getters, PartialEq)]
pub struct QuoteRow {
    cells: Vec<RowCell>,
}

impl QuoteRow {
    pub fn cell(&self, column: Column) -> &RowCell {
        &self.cells[column as usize]
    }
}

pub fn build_row(quote: &Quote) -> QuoteRow {
    let last_price = Indicator::higher_is_better(quote.last_price(), quote.prev_last_price());
    let day_high = Indicator::higher_is_better(quote.day_high(), quote.prev_day_high());
    let day_low = Indicator::lower_is_better(quote.day_low(), quote.prev_day_low());

    let cells = vec![
        RowCell::plain(quote.serial_number().to_string()),
        RowCell::titled(quote.symbol().to_string(), quote.company_name().to_string()),
        RowCell::plain(money(quote.qoh())),
        RowCell::plain(money(quote.average_price())),
        RowCell::marked(quote.last_price(), last_price),
        RowCell::plain(quote.last_updated().to_string()),
        RowCell::plain(money(quote.change())),
        RowCell::plain(format!("{}%", money(quote.percentage_change()))),
        RowCell::plain(money(quote.previous_close())),
        RowCell::plain(money(quote.open_price())),
        RowCell::marked(quote.day_high(), day_high),
        RowCell::marked(quote.day_low(), day_low),
        RowCell::plain(money(quote.week_high())),
        RowCell::plain(money(quote.week_low())),
        RowCell::plain(money(quote.average_value())),
        RowCell::plain(money(quote.current_value())),
    ];

    QuoteRow { cells }
}

/// Fails instead of panicking when a total leaves `Decimal`'s range.
pub fn summarize(quotes: &[Quote]) -> Result<Summary> {
    let mut average_value_sum = Decimal::ZERO;
    let mut current_value_sum = Decimal::ZERO;

    for quote in quotes {
        average_value_sum = average_value_sum
            .checked_add(*quote.average_value())
            .with_context(|| format!("Average value sum overflows at {}", quote.symbol()))?;
        current_value_sum = current_value_sum
            .checked_add(*quote.current_value())
            .with_context(|| format!("Current value sum overflows at {}", quote.symbol()))?;
    }

    Ok(Summary::new(average_value_sum, current_value_sum))
}
