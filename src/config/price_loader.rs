// ==========================================
// 饮品服务计算器 - 价格表加载
// ==========================================
// 格式: CSV，表头 beverage,pump_pot,per_gallon
// 说明: 价格由外部电商系统导出，调用方加载一次后显式传入计价引擎
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::pricing::{BeveragePrice, PriceTable};
use crate::domain::types::BeverageKind;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct PriceRow {
    beverage: String,
    pump_pot: f64,
    per_gallon: f64,
}

/// 从 CSV 文件加载价格表
pub fn load_price_table(path: &Path) -> ConfigResult<PriceTable> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    let table = read_price_table(file)?;
    info!(path = %path.display(), entries = table.len(), "价格表加载完成");
    Ok(table)
}

/// 从任意 Reader 解析价格表
pub fn read_price_table<R: Read>(reader: R) -> ConfigResult<PriceTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = PriceTable::new();
    for (index, record) in csv_reader.deserialize::<PriceRow>().enumerate() {
        // 表头占第 1 行
        let row = index + 2;
        let record = record?;

        let beverage: BeverageKind = record
            .beverage
            .parse()
            .map_err(|message| ConfigError::PriceRowError { row, message })?;

        for (field, value) in [("pump_pot", record.pump_pot), ("per_gallon", record.per_gallon)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::PriceRowError {
                    row,
                    message: format!("{} 必须为非负数: {}", field, value),
                });
            }
        }

        table.insert(
            beverage,
            BeveragePrice {
                pump_pot: record.pump_pot,
                per_gallon: record.per_gallon,
            },
        );
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "beverage,pump_pot,per_gallon\n\
                          regularCoffee,24.99,14.00\n\
                          hot-tea, 19.99 , 12.50\n";

    #[test]
    fn test_read_price_table() {
        let table = read_price_table(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        let tea = table.get(BeverageKind::HotTea).unwrap();
        assert_eq!(tea.pump_pot, 19.99);
        assert_eq!(tea.per_gallon, 12.5);
        assert!(table.get(BeverageKind::IcedTea).is_none());
    }

    #[test]
    fn test_unknown_beverage_reports_row() {
        let raw = "beverage,pump_pot,per_gallon\nregularCoffee,1,2\nespresso,1,2\n";
        match read_price_table(raw.as_bytes()) {
            Err(ConfigError::PriceRowError { row, .. }) => assert_eq!(row, 3),
            other => panic!("Expected PriceRowError, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        let raw = "beverage,pump_pot,per_gallon\nicedTea,-1,2\n";
        assert!(matches!(
            read_price_table(raw.as_bytes()),
            Err(ConfigError::PriceRowError { row: 2, .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let table = load_price_table(file.path()).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let result = load_price_table(Path::new("/nonexistent/pricing.csv"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
