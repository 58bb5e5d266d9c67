// ==========================================
// 饮品服务计算器 - 应用配置
// ==========================================
// 来源: 环境变量（缺省值见 config_keys 注释）
// 说明: 读取逻辑基于查找函数，测试可注入任意 key-value 来源
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::field_map::FieldNameMap;
use crate::engine::pricing::PricingPolicy;
use std::path::PathBuf;
use std::time::Duration;

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    /// 调试模式：只渲染结果，不提交（默认 false）
    pub const DEBUG: &str = "BEVCALC_DEBUG";
    /// 商品 ID（默认 1398）
    pub const PRODUCT_ID: &str = "BEVCALC_PRODUCT_ID";
    /// 购物车提交地址（非调试模式必填）
    pub const CART_URL: &str = "BEVCALC_CART_URL";
    /// 提交成功后的跳转地址（默认 /cart/）
    pub const REDIRECT_URL: &str = "BEVCALC_REDIRECT_URL";
    /// 价格表 CSV 路径（默认 <config_dir>/beverage-calc/pricing.csv）
    pub const PRICING_FILE: &str = "BEVCALC_PRICING_FILE";
    /// 字段名映射 JSON 路径（缺省使用附加项命名规则）
    pub const FIELD_MAP_FILE: &str = "BEVCALC_FIELD_MAP_FILE";
    /// 推荐总量上限，加仑（默认 20）
    pub const VOLUME_CAP_GAL: &str = "BEVCALC_VOLUME_CAP_GAL";
    /// 热水费用（默认 6.99）
    pub const HOT_WATER_FEE: &str = "BEVCALC_HOT_WATER_FEE";
    /// 押金（默认 50）
    pub const DEPOSIT: &str = "BEVCALC_DEPOSIT";
    /// 提交超时，秒（默认 30）
    pub const SUBMIT_TIMEOUT_SECS: &str = "BEVCALC_SUBMIT_TIMEOUT_SECS";
    /// 界面语言（默认 en）
    pub const LOCALE: &str = "BEVCALC_LOCALE";
}

pub const DEFAULT_PRODUCT_ID: &str = "1398";
pub const DEFAULT_REDIRECT_URL: &str = "/cart/";
pub const DEFAULT_SUBMIT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_LOCALE: &str = "en";

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub debug: bool,
    pub product_id: String,
    pub cart_url: Option<String>,
    pub redirect_url: String,
    pub pricing_file: PathBuf,
    pub field_map_file: Option<PathBuf>,
    pub pricing: PricingPolicy,
    pub submit_timeout_secs: u64,
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debug: false,
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            cart_url: None,
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            pricing_file: default_pricing_path(),
            field_map_file: None,
            pricing: PricingPolicy::default(),
            submit_timeout_secs: DEFAULT_SUBMIT_TIMEOUT_SECS,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

/// 默认价格表路径
pub fn default_pricing_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("beverage-calc")
        .join("pricing.csv")
}

impl AppConfig {
    /// 从环境变量加载
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意 key-value 来源加载
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = AppConfig::default();
        let policy = PricingPolicy {
            volume_cap_gallons: parse_f64(config_keys::VOLUME_CAP_GAL, get(config_keys::VOLUME_CAP_GAL))?
                .unwrap_or(defaults.pricing.volume_cap_gallons),
            hot_water_fee: parse_f64(config_keys::HOT_WATER_FEE, get(config_keys::HOT_WATER_FEE))?
                .unwrap_or(defaults.pricing.hot_water_fee),
            deposit: parse_f64(config_keys::DEPOSIT, get(config_keys::DEPOSIT))?
                .unwrap_or(defaults.pricing.deposit),
        };

        let submit_timeout_secs = match get(config_keys::SUBMIT_TIMEOUT_SECS) {
            None => defaults.submit_timeout_secs,
            Some(value) => value.parse::<u64>().map_err(|_| ConfigError::ConfigValueError {
                key: config_keys::SUBMIT_TIMEOUT_SECS.to_string(),
                value: value.clone(),
                message: "期望正整数秒".to_string(),
            })?,
        };

        Ok(Self {
            debug: get(config_keys::DEBUG).map(|v| parse_flag(&v)).unwrap_or(false),
            product_id: get(config_keys::PRODUCT_ID).unwrap_or(defaults.product_id),
            cart_url: get(config_keys::CART_URL),
            redirect_url: get(config_keys::REDIRECT_URL).unwrap_or(defaults.redirect_url),
            pricing_file: get(config_keys::PRICING_FILE)
                .map(PathBuf::from)
                .unwrap_or(defaults.pricing_file),
            field_map_file: get(config_keys::FIELD_MAP_FILE).map(PathBuf::from),
            pricing: policy,
            submit_timeout_secs,
            locale: get(config_keys::LOCALE).unwrap_or(defaults.locale),
        })
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_secs(self.submit_timeout_secs)
    }

    /// 字段名映射：配置了文件则从文件加载，否则按商品 ID 生成
    pub fn field_name_map(&self) -> ConfigResult<FieldNameMap> {
        match &self.field_map_file {
            Some(path) => FieldNameMap::load_from_path(path),
            None => Ok(FieldNameMap::addon_fields(&self.product_id)),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

fn parse_f64(key: &str, value: Option<String>) -> ConfigResult<Option<f64>> {
    match value {
        None => Ok(None),
        Some(v) => match v.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() && parsed >= 0.0 => Ok(Some(parsed)),
            _ => Err(ConfigError::ConfigValueError {
                key: key.to_string(),
                value: v,
                message: "期望非负数".to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(!config.debug);
        assert_eq!(config.product_id, "1398");
        assert_eq!(config.redirect_url, "/cart/");
        assert_eq!(config.pricing, PricingPolicy::default());
        assert_eq!(config.submit_timeout(), Duration::from_secs(30));
        assert!(config.cart_url.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (config_keys::DEBUG, "true"),
            (config_keys::PRODUCT_ID, "42"),
            (config_keys::VOLUME_CAP_GAL, "15"),
            (config_keys::DEPOSIT, " 25.5 "),
            (config_keys::CART_URL, "https://shop.example/wp-admin/admin-ajax.php"),
        ]))
        .unwrap();
        assert!(config.debug);
        assert_eq!(config.pricing.volume_cap_gallons, 15.0);
        assert_eq!(config.pricing.deposit, 25.5);
        assert_eq!(config.pricing.hot_water_fee, 6.99);
        let map = config.field_name_map().unwrap();
        assert_eq!(map.product_id, "42");
        assert_eq!(map.hot_water, "addon-42-hot-water[gallons]");
    }

    #[test]
    fn test_debug_flag_values() {
        for (raw, expected) in [("1", true), ("on", true), ("0", false), ("no", false)] {
            let config = AppConfig::from_lookup(lookup_from(&[(config_keys::DEBUG, raw)])).unwrap();
            assert_eq!(config.debug, expected, "raw={}", raw);
        }
    }

    #[test]
    fn test_invalid_number_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[(config_keys::VOLUME_CAP_GAL, "lots")]));
        assert!(matches!(result, Err(ConfigError::ConfigValueError { .. })));
    }
}
