#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use crate::{
        app::{calc::HistoryTable, export::write_history_csv},
        models::{Interval, PriceSeries},
        test::mock::daily_samples,
    };

    #[test]
    fn writes_header_and_rounded_rows() {
        let dir = tempdir().unwrap();
        let series = PriceSeries::new(String::from("MSFT"), Interval::OneDay, daily_samples());
        let table = HistoryTable::from_series("MSFT", &series);

        let path = write_history_csv(&table, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("MSFT_stock_data.csv"));
        let contents = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Date,Open,High,Low,Close,Adj Close,% Change,Volume");
        assert_eq!(lines[1], "2024-01-02,100.00,112.00,99.00,100.00,100.00,0.00,1000");
        assert_eq!(lines[3], "2024-01-04,110.00,110.50,98.00,99.00,99.00,-10.00,2000");
    }

    #[test]
    fn export_overwrites_previous_file() {
        let dir = tempdir().unwrap();
        let series = PriceSeries::new(String::from("MSFT"), Interval::OneDay, daily_samples());
        let table = HistoryTable::from_series("MSFT", &series);

        write_history_csv(&table, dir.path()).unwrap();
        let path = write_history_csv(&table, dir.path()).unwrap();

        let contents = fs::read_to_string(path).unwrap();
        assert_eq!(contents.lines().count(), 4);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        let series = PriceSeries::new(String::from("MSFT"), Interval::OneDay, daily_samples());
        let table = HistoryTable::from_series("MSFT", &series);

        let result = write_history_csv(&table, &dir.path().join("missing"));
        assert!(result.is_err());
    }
}
