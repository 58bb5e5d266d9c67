// ==========================================
// 饮品服务计算器 - 领域层
// ==========================================
// 职责: 实体与类型定义，不包含计算规则
// ==========================================

pub mod form;
pub mod order;
pub mod pricing;
pub mod types;

pub use form::{OrderForm, RawForm, ADDONS_FIELD};
pub use order::{ContainerAllocation, OrderLineItem};
pub use pricing::{BeveragePrice, HotWaterLine, PriceLine, PriceSummary, PriceTable, VolumeWarning};
pub use types::{BeverageKind, ContainerSize, GenderRatio, TimeOfDay};
