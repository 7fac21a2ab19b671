#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::{
        app::{
            calc::{
                ColumnLabel, Direction, HistoryTable, NO_BUSINESS_SUMMARY, business_paragraphs,
                daily_returns, flatten_columns, percent_change, price_change, round2,
                split_summary,
            },
            utils::{
                fmt_count, fmt_large_number, fmt_or_na, fmt_percent_fraction, fmt_price,
                group_thousands,
            },
        },
        models::{Interval, PriceSeries},
        test::mock::{daily_samples, sample},
    };

    #[test]
    fn daily_returns_rounded() {
        let returns: Vec<_> = daily_returns(&[100.0, 110.0, 99.0])
            .into_iter()
            .map(round2)
            .collect();

        assert_eq!(returns, vec![dec!(0.00), dec!(10.00), dec!(-10.00)]);
    }

    #[test]
    fn daily_returns_zero_prior_close() {
        let returns = daily_returns(&[0.0, 5.0, 10.0]);

        assert_eq!(returns[0], 0.0);
        assert_eq!(returns[1], 0.0);
        assert_eq!(round2(returns[2]), dec!(100));
    }

    #[test]
    fn daily_returns_empty() {
        assert!(daily_returns(&[]).is_empty());
    }

    #[test]
    fn split_nine_sentences() {
        let text = "S1. S2. S3. S4. S5. S6. S7. S8. S9.";
        let [first, second, third] = split_summary(text);

        assert_eq!(first, "S1. S2. S3.");
        assert_eq!(second, "S4. S5. S6.");
        assert_eq!(third, "S7. S8. S9.");
    }

    #[test]
    fn split_single_sentence() {
        let text = "Microsoft develops software.";
        let paragraphs = split_summary(text);

        assert_eq!(paragraphs[0], text);
        assert!(paragraphs[1].is_empty());
        assert!(paragraphs[2].is_empty());
    }

    #[test]
    fn split_uneven_remainder_goes_last() {
        let [first, second, third] = split_summary("A. B. C. D. E");

        assert_eq!(first, "A.");
        assert_eq!(second, "B.");
        assert_eq!(third, "C. D. E");
    }

    #[test]
    fn missing_summary_yields_placeholder() {
        assert_eq!(business_paragraphs(None), vec![NO_BUSINESS_SUMMARY.to_string()]);
        assert_eq!(business_paragraphs(Some("One. Two. Three.")).len(), 3);
    }

    #[test]
    fn price_change_needs_both_operands() {
        assert_eq!(price_change(Some(110.0), Some(100.0)), Some(10.0));
        assert_eq!(price_change(None, Some(100.0)), None);
        assert_eq!(percent_change(Some(110.0), None), None);
        assert_eq!(percent_change(Some(1.0), Some(0.0)), None);

        let pct = percent_change(Some(95.0), Some(100.0)).unwrap();
        assert!((pct + 5.0).abs() < 1e-9);
    }

    #[test]
    fn direction_of_change() {
        assert_eq!(Direction::of(0.0), Direction::Up);
        assert_eq!(Direction::of(2.5), Direction::Up);
        assert_eq!(Direction::of(-0.01), Direction::Down);
    }

    #[test]
    fn nested_columns_flatten_to_field() {
        let labels = vec![
            ColumnLabel::Nested(String::from("MSFT"), String::from("Close")),
            ColumnLabel::Field(String::from("Volume")),
        ];

        assert_eq!(flatten_columns(&labels), vec!["Close", "Volume"]);
    }

    #[test]
    fn history_table_columns_and_rows() {
        let series = PriceSeries::new(String::from("MSFT"), Interval::OneDay, daily_samples());
        let table = HistoryTable::from_series("MSFT", &series);

        assert_eq!(
            table.columns(),
            &vec![
                "Date", "Open", "High", "Low", "Close", "Adj Close", "% Change", "Volume"
            ]
        );
        assert_eq!(table.rows().len(), 3);
        assert_eq!(*table.rows()[1].pct_change(), dec!(10.00));
        assert_eq!(
            table.record(&table.rows()[2]),
            vec![
                "2024-01-04", "110.00", "110.50", "98.00", "99.00", "99.00", "-10.00", "2000"
            ]
        );
        assert_eq!(table.file_name(), "MSFT_stock_data.csv");
    }

    #[test]
    fn history_table_without_adj_close() {
        let samples = daily_samples()
            .into_iter()
            .map(|s| {
                crate::models::PriceSample::new(
                    *s.timestamp(),
                    *s.open(),
                    *s.high(),
                    *s.low(),
                    *s.close(),
                    None,
                    *s.volume(),
                )
            })
            .collect();
        let series = PriceSeries::new(String::from("MSFT"), Interval::OneDay, samples);
        let table = HistoryTable::from_series("MSFT", &series);

        assert!(!table.has_adj_close());
        assert_eq!(
            table.columns(),
            &vec!["Date", "Open", "High", "Low", "Close", "% Change", "Volume"]
        );
    }

    #[test]
    fn series_orders_and_dedups_timestamps() {
        let series = PriceSeries::new(
            String::from("MSFT"),
            Interval::OneDay,
            vec![
                sample(3, 1.0, 1.0, 1.0, 3.0, 0),
                sample(2, 1.0, 1.0, 1.0, 2.0, 0),
                sample(3, 1.0, 1.0, 1.0, 4.0, 0),
            ],
        );

        assert_eq!(series.closes(), vec![2.0, 4.0]);
    }

    #[test]
    fn absent_values_render_not_available() {
        assert_eq!(fmt_or_na(None::<f64>), "N/A");
        assert_eq!(fmt_price(None), "N/A");
        assert_eq!(fmt_price(Some(420.456)), "420.46");
        assert_eq!(fmt_percent_fraction(Some(0.0072)), "0.72%");
        assert_eq!(fmt_large_number("$", Some(3_100_000_000_000.0)), "$3,100,000,000,000");
        assert_eq!(fmt_large_number("$", None), "N/A");
        assert_eq!(fmt_count(Some(228_000)), "228,000");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-1_234), "-1,234");
    }
}
