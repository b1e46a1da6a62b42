//! Unit tests for CsvStore - the per-symbol CSV directory.

#[cfg(test)]
mod store_tests {
    use crate::data::normalizer::NormalizedRow;
    use crate::data::store::CsvStore;
    use std::fs;

    fn row(ts: &str, v: &str) -> NormalizedRow {
        NormalizedRow {
            timestamp: ts.to_string(),
            open: v.to_string(),
            high: v.to_string(),
            low: v.to_string(),
            close: v.to_string(),
            volume: v.to_string(),
        }
    }

    #[test]
    fn test_path_strips_separator() {
        let store = CsvStore::new("/tmp/data", true);
        assert_eq!(
            store.path_for("BTC/USDT"),
            std::path::PathBuf::from("/tmp/data/BTCUSDT.csv")
        );
    }

    #[test]
    fn test_write_creates_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("data"), true);

        let path = store.write_symbol("ETH/USDT", &[row("20231114T", "1.0")]).unwrap();

        assert!(path.ends_with("ETHUSDT.csv"));
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "timestamp,open,high,low,close,volume\n20231114T,1.0,1.0,1.0,1.0,1.0\n"
        );
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path(), false);

        store
            .write_symbol("BTC/USDT", &[row("a", "1"), row("b", "2"), row("c", "3")])
            .unwrap();
        let path = store.write_symbol("BTC/USDT", &[row("d", "4")]).unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "d,4,4,4,4,4\n");
    }

    #[test]
    fn test_csv_files_lists_only_csv() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("BTCUSDT.csv"), "x").unwrap();
        fs::write(dir.path().join("ETHUSDT.csv"), "y").unwrap();
        fs::write(dir.path().join("notes.txt"), "z").unwrap();
        fs::create_dir(dir.path().join("nested.csv")).unwrap();

        let store = CsvStore::new(dir.path(), true);
        let files = store.csv_files().unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["BTCUSDT.csv", "ETHUSDT.csv"]);
    }

    #[test]
    fn test_clear_all_truncates_csv_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("BTCUSDT.csv"), "timestamp,open\n1,2\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        let store = CsvStore::new(dir.path(), true);
        let cleared = store.clear_all().unwrap();

        assert_eq!(cleared.len(), 1);
        assert_eq!(fs::read_to_string(dir.path().join("BTCUSDT.csv")).unwrap(), "");
        assert_eq!(fs::read_to_string(dir.path().join("notes.txt")).unwrap(), "keep me");
    }

    #[test]
    fn test_clear_all_missing_dir_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::new(dir.path().join("absent"), true);
        assert!(store.clear_all().unwrap().is_empty());
    }
}
