// ==========================================
// 饮品服务计算器 - API层
// ==========================================
// 职责: 对外业务接口（重算 / 提交）与错误转换
// ==========================================

pub mod calculator_api;
pub mod error;
pub mod submission;

pub use calculator_api::{CalculatorApi, Quote, SubmitOutcome};
pub use error::{ApiError, ApiResult};
pub use submission::{
    sink_from_config, DebugSink, HttpCartSink, OrderSink, Submission, SubmitError, SubmitReceipt,
};
