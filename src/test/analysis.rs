#[cfg(test)]
mod tests {
    use crate::{
        app::{
            analysis::{
                AnalysisForm, AnalysisOutcome, NO_HISTORY, NO_INTRADAY, assemble_analysis,
            },
            calc::Direction,
        },
        config::DashboardConfig,
        models::{QuoteSnapshot, SelectionError},
        test::mock::{MockFetch, full_quote},
    };

    fn form(ticker: &str, start: &str, end: &str) -> AnalysisForm {
        AnalysisForm {
            ticker: ticker.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    fn valid_form() -> AnalysisForm {
        form("MSFT", "2024-01-01", "2024-02-01")
    }

    #[tokio::test]
    async fn equal_dates_rejected_before_fetch() {
        let fetch = MockFetch::new();
        let outcome = assemble_analysis(
            &fetch,
            &DashboardConfig::default(),
            &form("MSFT", "2024-01-01", "2024-01-01"),
        )
        .await;

        assert_eq!(outcome, AnalysisOutcome::Rejected(SelectionError::InvalidRange));
        assert_eq!(fetch.calls(), 0);
    }

    #[tokio::test]
    async fn reversed_dates_rejected_before_fetch() {
        let fetch = MockFetch::new();
        let outcome = assemble_analysis(
            &fetch,
            &DashboardConfig::default(),
            &form("MSFT", "2024-03-01", "2024-01-01"),
        )
        .await;

        assert_eq!(outcome, AnalysisOutcome::Rejected(SelectionError::InvalidRange));
        assert_eq!(fetch.calls(), 0);
    }

    #[tokio::test]
    async fn blank_symbol_rejected() {
        let fetch = MockFetch::new();
        let outcome = assemble_analysis(
            &fetch,
            &DashboardConfig::default(),
            &form("   ", "2024-01-01", "2024-02-01"),
        )
        .await;

        assert_eq!(outcome, AnalysisOutcome::Rejected(SelectionError::EmptySymbol));
        assert_eq!(fetch.calls(), 0);
    }

    #[tokio::test]
    async fn malformed_date_rejected() {
        let fetch = MockFetch::new();
        let outcome = assemble_analysis(
            &fetch,
            &DashboardConfig::default(),
            &form("MSFT", "2024-13-01", "2024-02-01"),
        )
        .await;

        match outcome {
            AnalysisOutcome::Rejected(SelectionError::InvalidDate { field, value }) => {
                assert_eq!(field, "start date");
                assert_eq!(value, "2024-13-01");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert_eq!(fetch.calls(), 0);
    }

    #[tokio::test]
    async fn symbol_is_normalised() {
        let fetch = MockFetch::new();
        let outcome = assemble_analysis(
            &fetch,
            &DashboardConfig::default(),
            &form(" msft ", "2024-01-01", "2024-02-01"),
        )
        .await;

        let AnalysisOutcome::Ready(analysis) = outcome else {
            panic!("expected a ready analysis");
        };
        assert_eq!(analysis.selection().symbol(), "MSFT");
        assert_eq!(analysis.header().title(), "Microsoft Corporation (MSFT)");
    }

    #[tokio::test]
    async fn news_is_capped_at_ten() {
        for (feed, expected) in [(0, 0), (5, 5), (50, 10)] {
            let mut fetch = MockFetch::new();
            fetch.news_feed_size = feed;

            let outcome =
                assemble_analysis(&fetch, &DashboardConfig::default(), &valid_form()).await;
            let AnalysisOutcome::Ready(analysis) = outcome else {
                panic!("expected a ready analysis");
            };

            let news = analysis.news().as_ref().unwrap();
            assert_eq!(news.len(), expected);
            assert!(news.len() <= 10);
        }
    }

    #[tokio::test]
    async fn statement_failure_keeps_history() {
        let mut fetch = MockFetch::new();
        fetch.statements_fail = true;

        let outcome = assemble_analysis(&fetch, &DashboardConfig::default(), &valid_form()).await;
        let AnalysisOutcome::Ready(analysis) = outcome else {
            panic!("expected a ready analysis");
        };

        let err = analysis.statements().as_ref().unwrap_err();
        assert!(err.starts_with("Could not fetch financial statements:"));
        assert!(analysis.table().is_some());
        assert_eq!(analysis.history().len(), 3);
        assert!(analysis.history_notice().is_none());
    }

    #[tokio::test]
    async fn news_failure_is_inline() {
        let mut fetch = MockFetch::new();
        fetch.news_fail = true;

        let outcome = assemble_analysis(&fetch, &DashboardConfig::default(), &valid_form()).await;
        let AnalysisOutcome::Ready(analysis) = outcome else {
            panic!("expected a ready analysis");
        };

        assert!(
            analysis
                .news()
                .as_ref()
                .unwrap_err()
                .starts_with("Could not fetch news:")
        );
        assert!(analysis.statements().is_ok());
    }

    #[tokio::test]
    async fn empty_history_skips_table() {
        let mut fetch = MockFetch::new();
        fetch.history.clear();
        fetch.intraday.clear();

        let outcome = assemble_analysis(&fetch, &DashboardConfig::default(), &valid_form()).await;
        let AnalysisOutcome::Ready(analysis) = outcome else {
            panic!("expected a ready analysis");
        };

        assert!(analysis.table().is_none());
        assert_eq!(analysis.history_notice(), Some(NO_HISTORY));
        assert_eq!(analysis.intraday_notice(), Some(NO_INTRADAY));
        assert!(analysis.news().is_ok());
    }

    #[tokio::test]
    async fn quote_fault_fails_the_pass() {
        let mut fetch = MockFetch::new();
        fetch.quote = None;

        let outcome = assemble_analysis(&fetch, &DashboardConfig::default(), &valid_form()).await;

        match outcome {
            AnalysisOutcome::Failed(message) => {
                assert!(message.starts_with("An error occurred:"));
                assert!(message.contains("Quote not found"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn header_reports_change() {
        let fetch = MockFetch::new();
        let outcome = assemble_analysis(&fetch, &DashboardConfig::default(), &valid_form()).await;
        let AnalysisOutcome::Ready(analysis) = outcome else {
            panic!("expected a ready analysis");
        };

        let change = analysis.header().change().as_ref().unwrap();
        assert_eq!(change.direction, Direction::Up);
        assert!((change.amount - 10.0).abs() < 1e-9);
        assert!((change.percent - 10.0).abs() < 1e-9);
        assert_eq!(analysis.header().currency(), "USD");
        assert!(analysis.header().after_hours().is_none());
        assert_eq!(analysis.business_summary().len(), 3);
    }

    #[tokio::test]
    async fn header_without_previous_close() {
        let mut fetch = MockFetch::new();
        fetch.quote = Some(QuoteSnapshot {
            previous_close: None,
            currency: None,
            post_market_price: Some(111.25),
            ..full_quote("MSFT")
        });

        let outcome = assemble_analysis(&fetch, &DashboardConfig::default(), &valid_form()).await;
        let AnalysisOutcome::Ready(analysis) = outcome else {
            panic!("expected a ready analysis");
        };

        assert!(analysis.header().change().is_none());
        assert_eq!(analysis.header().currency(), "USD");
        assert_eq!(*analysis.header().after_hours(), Some(111.25));
    }

    #[test]
    fn form_defaults_cover_lookback() {
        let config = DashboardConfig::default();
        let form = AnalysisForm::with_defaults(&config);

        assert_eq!(form.ticker, "MSFT");
        let start = chrono::NaiveDate::parse_from_str(&form.start, "%Y-%m-%d").unwrap();
        let end = chrono::NaiveDate::parse_from_str(&form.end, "%Y-%m-%d").unwrap();
        assert_eq!((end - start).num_days(), 365);
    }
}
