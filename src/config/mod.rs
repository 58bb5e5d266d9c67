// ==========================================
// 饮品服务计算器 - 配置层
// ==========================================
// 职责: 应用配置、价格表加载、提交字段名映射
// ==========================================

pub mod app_config;
pub mod error;
pub mod field_map;
pub mod price_loader;

pub use app_config::{config_keys, AppConfig};
pub use error::{ConfigError, ConfigResult};
pub use field_map::{BeverageFields, FieldNameMap};
pub use price_loader::{load_price_table, read_price_table};
