#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use crate::{config::DashboardConfig, models::Interval};

    #[test]
    fn defaults_match_dashboard_lists() {
        let config = DashboardConfig::default();

        let symbols: Vec<_> = config.indices().iter().map(|e| e.symbol().as_str()).collect();
        assert_eq!(symbols, vec!["^GSPC", "^IXIC", "^DJI", "^NSEI", "^BSESN"]);
        assert_eq!(config.global_trending().currency_prefix(), "$");
        assert_eq!(config.regional_trending().entries()[0].label(), "RELIANCE");
        assert_eq!(*config.intraday_interval(), Interval::FiveMinutes);
        assert_eq!(*config.news_limit(), 10);
        assert_eq!(config.default_ticker(), "MSFT");
        assert_eq!(*config.default_lookback_days(), 365);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = DashboardConfig::from_json(
            r#"{
                "news_limit": 5,
                "intraday_interval": "15m",
                "intraday_charts": [{ "symbol": "^FTSE", "label": "FTSE 100" }]
            }"#,
        )
        .unwrap();

        assert_eq!(*config.news_limit(), 5);
        assert_eq!(*config.intraday_interval(), Interval::FifteenMinutes);
        assert_eq!(config.intraday_charts().len(), 1);
        assert_eq!(config.indices().len(), 5);
        assert_eq!(config.default_ticker(), "MSFT");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(DashboardConfig::from_json("{ not json").is_err());
        assert!(DashboardConfig::from_json(r#"{ "intraday_interval": "2m" }"#).is_err());
    }

    #[test]
    fn from_path_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_ticker": "AAPL" }}"#).unwrap();

        let config = DashboardConfig::from_path(file.path()).unwrap();
        assert_eq!(config.default_ticker(), "AAPL");
    }

    #[test]
    fn cli_ticker_overrides_blank_ignored() {
        let config = DashboardConfig::default().with_default_ticker(Some(String::from("  ")));
        assert_eq!(config.default_ticker(), "MSFT");

        let config = config.with_default_ticker(Some(String::from("NVDA")));
        assert_eq!(config.default_ticker(), "NVDA");
    }
}
