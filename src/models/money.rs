use rust_decimal::{Decimal, RoundingStrategy};

/// Two-decimal display text; halves round away from zero.
pub fn money(value: &Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
