// ==========================================
// 饮品服务计算器 - 表单读取错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 表单读取错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    // ===== 输入错误 =====
    #[error("必填字段缺失: {0}")]
    MissingField(String),

    #[error("类型转换失败 (字段 {field}): {message}")]
    TypeConversionError { field: String, message: String },

    // ===== 配置错误 =====
    /// 时段 / 性别比例不在支持范围内
    #[error("配置错误 (字段 {field}, 值 {value}): {message}")]
    UnsupportedOption {
        field: String,
        value: String,
        message: String,
    },

    // ===== 来源错误 =====
    #[error("表单来源读取失败: {0}")]
    SourceError(String),
}

/// Result 类型别名
pub type FormResult<T> = Result<T, FormError>;
