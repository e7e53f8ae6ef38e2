use std::cmp::Ordering;

use rust_decimal::Decimal;
use strum_macros::{Display, EnumIter};

/// Direction marker shown next to a value that has a previous counterpart.
///
/// `Up` always means "moved the good way" and is drawn green, so for a day low
/// a falling value is `Up`.
#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum Indicator {
    Up,
    Down,
    Flat,
}

impl Indicator {
    /// Last price and day high: a larger value is an improvement.
    pub fn higher_is_better(current: &Decimal, previous: &Decimal) -> Self {
        match current.cmp(previous) {
            Ordering::Greater => Indicator::Up,
            Ordering::Less => Indicator::Down,
            Ordering::Equal => Indicator::Flat,
        }
    }

    /// Day low: a smaller value is an improvement.
    pub fn lower_is_better(current: &Decimal, previous: &Decimal) -> Self {
        match current.cmp(previous) {
            Ordering::Less => Indicator::Up,
            Ordering::Greater => Indicator::Down,
            Ordering::Equal => Indicator::Flat,
        }
    }

    pub fn arrow(&self) -> char {
        match self {
            Indicator::Up => '▲',
            Indicator::Down => '▼',
            Indicator::Flat => '■',
        }
    }

    /// CSS color name used in the emitted markup.
    pub fn css_color(&self) -> &'static str {
        match self {
            Indicator::Up => "green",
            Indicator::Down => "red",
            Indicator::Flat => "black",
        }
    }
}
