// ==========================================
// 饮品服务计算器 - 核心库
// ==========================================
// 职责: 按来宾人数 / 时段 / 性别比例 / 杯量估算饮品消耗，
//       装配容器并生成报价与购物车提交载荷
// 外部协作: 表单来源 (FormSource) + 订单提交 (OrderSink)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 估算 / 装配 / 计价
pub mod engine;

// 导入层 - 表单读取
pub mod importer;

// 配置层 - 应用配置 / 价格表 / 字段映射
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{BeverageKind, ContainerSize, GenderRatio, TimeOfDay};

// 领域实体
pub use domain::{
    ContainerAllocation, OrderForm, OrderLineItem, PriceSummary, PriceTable, RawForm,
};

// 引擎
pub use engine::{BeverageCalculator, ConsumptionEstimator, ContainerPacker, PricingEngine};

// API
pub use api::{CalculatorApi, OrderSink, Quote, SubmitOutcome};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Beverage Service Calculator";
