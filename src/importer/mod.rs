// ==========================================
// 饮品服务计算器 - 表单导入层
// ==========================================
// 职责: 读取外部表单字段并校验为 OrderForm
// ==========================================

pub mod error;
pub mod form_reader;
pub mod form_source;

pub use error::{FormError, FormResult};
pub use form_reader::{field_names, FormReader};
pub use form_source::{FormSource, PairsFormSource};
