use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One stock as served by `/api/stocks`.
#[derive(Clone, Debug, Deserialize, Eq, Getters, PartialEq, Serialize, new)]
pub struct Quote {
    #[serde(deserialize_with = "string_or_number")]
    serial_number: String,
    symbol: String,
    company_name: String,
    qoh: Decimal,
    average_price: Decimal,
    last_price: Decimal,
    prev_last_price: Decimal,
    last_updated: String,
    change: Decimal,
    percentage_change: Decimal,
    previous_close: Decimal,
    open_price: Decimal,
    day_high: Decimal,
    prev_day_high: Decimal,
    day_low: Decimal,
    prev_day_low: Decimal,
    week_high: Decimal,
    week_low: Decimal,
    average_value: Decimal,
    current_value: Decimal,
}

// The backend zero-pads the ordinal ("01"), so both forms are shown verbatim.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected serial number as string or number, found {}",
            other
        ))),
    }
}
