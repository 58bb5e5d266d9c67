// ==========================================
// 饮品服务计算器 - 价格领域模型
// ==========================================
// 价格表由外部电商系统提供，启动时加载一次，显式传入计价引擎
// ==========================================

use crate::domain::order::ContainerAllocation;
use crate::domain::types::BeverageKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// BeveragePrice - 单个饮品价格
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeveragePrice {
    pub pump_pot: f64,   // 保温壶单价
    pub per_gallon: f64, // Cambro 每加仑单价
}

// ==========================================
// PriceTable - 价格表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceTable {
    prices: HashMap<BeverageKind, BeveragePrice>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(mut self, beverage: BeverageKind, price: BeveragePrice) -> Self {
        self.insert(beverage, price);
        self
    }

    pub fn insert(&mut self, beverage: BeverageKind, price: BeveragePrice) {
        self.prices.insert(beverage, price);
    }

    pub fn get(&self, beverage: BeverageKind) -> Option<&BeveragePrice> {
        self.prices.get(&beverage)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

// ==========================================
// 报价汇总
// ==========================================

/// 单个饮品的报价行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceLine {
    pub beverage: BeverageKind,
    pub allocation: ContainerAllocation,
    pub recommended_gallons: Option<f64>, // 仅 Cambro 有推荐量
    pub cost: f64,
}

/// 热水行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotWaterLine {
    pub gallons: f64,
    pub fee: f64,
}

/// 总量上限告警
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeWarning {
    pub total_gallons: f64,
    pub cap_gallons: f64,
    pub message: String,
}

/// 报价汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSummary {
    pub lines: Vec<PriceLine>,
    pub hot_water: Option<HotWaterLine>,
    pub deposit: f64,
    pub total_cost: f64,
    pub total_gallons: f64,
    pub volume_warning: Option<VolumeWarning>,
}

impl PriceSummary {
    /// 超出总量上限时禁止提交
    pub fn is_blocked(&self) -> bool {
        self.volume_warning.is_some()
    }
}
