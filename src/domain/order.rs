// ==========================================
// 饮品服务计算器 - 订单行领域模型
// ==========================================
// 红线: 每个饮品只选一种容器规格，只有 LargeCambro 可多于 1 个
// 红线: overage = 容量 × 数量 - 盎司数，恒 >= 0
// ==========================================

use crate::domain::types::{BeverageKind, ContainerSize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// ContainerAllocation - 容器分配
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerAllocation {
    pub size: ContainerSize,
    pub count: u32,
}

impl ContainerAllocation {
    /// 总容量（盎司）
    ///
    /// 大号 Cambro 数量可达 ceil(u32::MAX / 640)，总容量以 u64 计算
    pub fn capacity_oz(&self) -> u64 {
        u64::from(self.size.capacity_oz()) * u64::from(self.count)
    }

    /// 以“规格 → 数量”映射形式返回（恒为单键）
    pub fn containers(&self) -> BTreeMap<ContainerSize, u32> {
        BTreeMap::from([(self.size, self.count)])
    }
}

// ==========================================
// OrderLineItem - 单个饮品的订单行
// ==========================================
// 每次重算全量生成，不做合并
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub beverage: BeverageKind,
    pub ounces: u32,                     // 需求盎司数
    pub allocation: ContainerAllocation, // 容器分配
    pub overage: u32,                    // 富余容量（盎司）
}

impl OrderLineItem {
    pub fn containers(&self) -> BTreeMap<ContainerSize, u32> {
        self.allocation.containers()
    }

    pub fn uses_cambro(&self) -> bool {
        self.allocation.size.is_cambro()
    }
}
