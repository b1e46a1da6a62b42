//! Unit tests for the symbol manifest.

#[cfg(test)]
mod manifest_tests {
    use crate::data::manifest::Manifest;
    use serde_json::Value;

    #[test]
    fn test_arrays_are_index_aligned() {
        let manifest = Manifest::from_symbols(&["BTC/USDT", "ETH/USDT", "SOL/USDT"], 10);

        assert_eq!(manifest.len(), 3);
        assert_eq!(manifest.symbol.len(), manifest.pricescale.len());
        assert_eq!(manifest.symbol.len(), manifest.description.len());
        assert!(manifest.pricescale.iter().all(|p| *p == 10));
        assert_eq!(manifest.symbol[1], "ETH/USDT");
        assert_eq!(manifest.description[1], "Description for ETH/USDT");
    }

    #[test]
    fn test_empty_manifest() {
        let symbols: Vec<String> = Vec::new();
        let manifest = Manifest::from_symbols(&symbols, 10);
        assert!(manifest.is_empty());
        assert!(manifest.pricescale.is_empty());
        assert!(manifest.description.is_empty());
    }

    #[test]
    fn test_json_schema() {
        let manifest = Manifest::from_symbols(&["BTC/USDT"], 100);
        let json: Value = serde_json::to_value(&manifest).unwrap();

        assert_eq!(json["symbol"][0], "BTC/USDT");
        assert_eq!(json["pricescale"][0], 100);
        assert_eq!(json["description"][0], "Description for BTC/USDT");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_write_creates_parent_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("symbol_info").join("seed_ohlcv_data.json");

        Manifest::from_symbols(&["A/USDT", "B/USDT"], 10).write(&path).unwrap();
        Manifest::from_symbols(&["C/USDT"], 10).write(&path).unwrap();

        let read = Manifest::read(&path).unwrap();
        assert_eq!(read.symbol, vec!["C/USDT"]);
        assert_eq!(read.pricescale, vec![10]);
    }
}
