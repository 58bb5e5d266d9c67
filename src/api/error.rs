// ==========================================
// 饮品服务计算器 - API层错误类型
// ==========================================
// 职责: 汇总各层错误，转换为面向用户的错误消息
// ==========================================

use crate::api::submission::SubmitError;
use crate::config::error::ConfigError;
use crate::engine::error::CalcError;
use crate::importer::error::FormError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入与配置错误（阻断提交）
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("配置错误: {0}")]
    ConfigurationError(String),

    // ==========================================
    // 业务规则错误（可恢复：用户调整输入后重试）
    // ==========================================
    #[error("订单超出最大供应量: 推荐总量 {total_gallons} 加仑 > 上限 {cap_gallons} 加仑")]
    VolumeCapExceeded { total_gallons: f64, cap_gallons: f64 },

    // ==========================================
    // 提交错误
    // ==========================================
    #[error("订单提交失败: {0}")]
    SubmissionFailed(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<FormError> for ApiError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::UnsupportedOption { .. } => ApiError::ConfigurationError(err.to_string()),
            FormError::MissingField(_)
            | FormError::TypeConversionError { .. }
            | FormError::SourceError(_) => ApiError::InvalidInput(err.to_string()),
        }
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        match err {
            CalcError::InvalidInput { .. } => ApiError::InvalidInput(err.to_string()),
            CalcError::MissingPrice(_) | CalcError::MissingFieldMapping(_) => {
                ApiError::ConfigurationError(err.to_string())
            }
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigurationError(err.to_string())
    }
}

impl From<SubmitError> for ApiError {
    fn from(err: SubmitError) -> Self {
        ApiError::SubmissionFailed(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
