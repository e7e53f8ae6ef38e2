#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;
    use strum::IntoEnumIterator;

    use crate::{
        app::table::{COLUMN_COUNT, Column, build_row, summarize},
        models::{Indicator, Quote, money},
        test::fixtures::{quote, quote_value, quote_with},
    };

    #[test]
    fn builds_example_row() {
        let row = build_row(&quote());

        assert_eq!(row.cells().len(), COLUMN_COUNT);
        assert_eq!(row.cell(Column::SerialNumber).text(), "1");

        let last_price = row.cell(Column::LastPrice);
        assert_eq!(last_price.text(), "10.00 ▲");
        assert_eq!(last_price.indicator(), &Some(Indicator::Up));

        let day_high = row.cell(Column::DayHigh);
        assert_eq!(day_high.text(), "15.00 ■");
        assert_eq!(day_high.indicator(), &Some(Indicator::Flat));

        let day_low = row.cell(Column::DayLow);
        assert_eq!(day_low.text(), "5.00 ▲");
        assert_eq!(day_low.indicator(), &Some(Indicator::Up));
    }

    #[test]
    fn cells_follow_column_order() {
        let row = build_row(&quote());
        let texts: Vec<&str> = row.cells().iter().map(|cell| cell.text().as_str()).collect();

        assert_eq!(
            texts,
            vec![
                "1",
                "ABC",
                "10.00",
                "10.00",
                "10.00 ▲",
                "18-Oct-2026 15:30:00",
                "0.00",
                "0.00%",
                "9.50",
                "9.75",
                "15.00 ■",
                "5.00 ▲",
                "20.10",
                "4.25",
                "100.00",
                "110.00",
            ]
        );
        assert_eq!(Column::iter().count(), COLUMN_COUNT);
    }

    #[test]
    fn symbol_carries_company_name() {
        let row = build_row(&quote());
        let symbol = row.cell(Column::Symbol);

        assert_eq!(symbol.title().as_deref(), Some("ABC Industries Ltd"));
        assert!(row.cell(Column::LastPrice).title().is_none());
    }

    #[test]
    fn day_low_rising_is_red() {
        let row = build_row(&quote_with(json!({
            "last_price": 8.5,
            "day_high": 16,
            "day_low": 7
        })));

        assert_eq!(row.cell(Column::LastPrice).text(), "8.50 ▼");
        assert_eq!(row.cell(Column::DayHigh).text(), "16.00 ▲");
        assert_eq!(row.cell(Column::DayLow).text(), "7.00 ▼");
        assert_eq!(*row.cell(Column::DayLow).indicator(), Some(Indicator::Down));
    }

    #[test]
    fn negative_change_keeps_sign() {
        let row = build_row(&quote_with(json!({
            "change": -1.5,
            "percentage_change": -13.0435
        })));

        assert_eq!(row.cell(Column::Change).text(), "-1.50");
        assert_eq!(row.cell(Column::PercentageChange).text(), "-13.04%");
    }

    #[test]
    fn zero_padded_serial_is_kept() {
        let row = build_row(&quote_with(json!({ "serial_number": "07" })));

        assert_eq!(row.cell(Column::SerialNumber).text(), "07");
    }

    #[test]
    fn rejects_missing_fields() {
        let mut value = quote_value();
        value.as_object_mut().unwrap().remove("day_low");

        assert!(serde_json::from_value::<Quote>(value).is_err());
    }

    #[test]
    fn summarizes_valuations() {
        let quotes = vec![
            quote(),
            quote_with(json!({ "average_value": 250.25, "current_value": 0.75 })),
        ];
        let summary = summarize(&quotes).unwrap();

        assert_eq!(*summary.average_value_sum(), dec!(350.25));
        assert_eq!(*summary.current_value_sum(), dec!(110.75));
        assert_eq!(summary.current_value_text(), "110.75");
    }

    #[test]
    fn empty_summary_is_zero() {
        let summary = summarize(&[]).unwrap();

        assert_eq!(summary.average_value_text(), "0.00");
        assert_eq!(summary.current_value_text(), "0.00");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(money(&dec!(2.678)), "2.68");
        assert_eq!(money(&dec!(2.675)), "2.68");
        assert_eq!(money(&dec!(-1.555)), "-1.56");
        assert_eq!(money(&dec!(2.674)), "2.67");
        assert_eq!(money(&dec!(7)), "7.00");
    }

    #[test]
    fn row_cells_round_long_fractions() {
        let row = build_row(&quote_with(json!({
            "last_price": 10.456,
            "week_high": 2.678,
            "percentage_change": 4.9951
        })));

        assert_eq!(row.cell(Column::LastPrice).text(), "10.46 ▲");
        assert_eq!(row.cell(Column::WeekHigh).text(), "2.68");
        assert_eq!(row.cell(Column::PercentageChange).text(), "5.00%");
    }

    #[test]
    fn summary_totals_round_long_fractions() {
        let quotes = vec![
            quote(),
            quote_with(json!({ "average_value": 0.004, "current_value": 2.678 })),
        ];
        let summary = summarize(&quotes).unwrap();

        assert_eq!(summary.average_value_text(), "100.00");
        assert_eq!(summary.current_value_text(), "112.68");
    }

    #[test]
    fn summary_overflow_is_an_error() {
        let huge = quote_with(json!({ "average_value": "50000000000000000000000000000" }));

        let err = summarize(&[huge.clone(), huge]).unwrap_err();

        assert!(err.to_string().contains("Average value sum overflows at ABC"));
    }
}
