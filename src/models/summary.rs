use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::money;

#[derive(Clone, Debug, Default, Eq, Getters, PartialEq, new)]
pub struct Summary {
    average_value_sum: Decimal,
    current_value_sum: Decimal,
}

impl Summary {
    pub fn average_value_text(&self) -> String {
        money(&self.average_value_sum)
    }

    pub fn current_value_text(&self) -> String {
        money(&self.current_value_sum)
    }
}
