// ==========================================
// 饮品服务计算器 - 引擎层
// ==========================================
// 职责: 消耗量估算、容器装配、计价、载荷构建
// 红线: 引擎无状态，每次重算全量替换结果
// ==========================================

pub mod calculator;
pub mod consumption;
pub mod error;
pub mod packer;
pub mod payload;
pub mod pricing;
pub mod summary;

// 重导出核心引擎
pub use calculator::BeverageCalculator;
pub use consumption::{consumption_ratio, ratio_percent, ConsumptionEstimator};
pub use error::{CalcError, CalcResult};
pub use packer::{ContainerPacker, PackResult};
pub use payload::{build_submission_payload, compose_notes, SubmissionPayload};
pub use pricing::{ounces_to_gallons, PricingEngine, PricingPolicy};
pub use summary::{format_money, render_debug, render_summary};
