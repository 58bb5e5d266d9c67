// ==========================================
// 饮品服务计算器 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::domain::types::BeverageKind;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("无效输入 (字段 {field}): {message}")]
    InvalidInput { field: String, message: String },

    #[error("价格缺失: {0} 未配置价格")]
    MissingPrice(BeverageKind),

    #[error("字段映射缺失: {0} 未配置提交字段名")]
    MissingFieldMapping(BeverageKind),
}

impl CalcError {
    pub fn invalid(field: &str, message: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Result 类型别名
pub type CalcResult<T> = Result<T, CalcError>;
