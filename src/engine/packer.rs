// ==========================================
// 饮品服务计算器 - 容器装配引擎
// ==========================================
// 输入: 需求盎司数
// 输出: 单一规格容器分配 + 富余容量
// 红线: 三档贪心策略，不混用规格，不拆分容器
//       (<=88 → 1 保温壶; <=320 → 1 中号 Cambro; 其余 → ceil(oz/640) 大号 Cambro)
// ==========================================

use crate::domain::order::{ContainerAllocation, OrderLineItem};
use crate::domain::types::{BeverageKind, ContainerSize};
use tracing::instrument;

/// 装配结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackResult {
    pub allocation: ContainerAllocation,
    pub overage: u32,
}

// ==========================================
// ContainerPacker - 容器装配引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ContainerPacker {
    // 无状态引擎
}

impl ContainerPacker {
    pub fn new() -> Self {
        Self {}
    }

    /// 选择容器规格
    ///
    /// 按顺序匹配，命中即返回；边界均为闭区间（<=），0 盎司同样得到 1 个保温壶
    pub fn select_size(&self, ounces: u32) -> ContainerSize {
        if ounces <= ContainerSize::PumpPot.capacity_oz() {
            ContainerSize::PumpPot
        } else if ounces <= ContainerSize::MidCambro.capacity_oz() {
            ContainerSize::MidCambro
        } else {
            ContainerSize::LargeCambro
        }
    }

    /// 装配
    pub fn pack(&self, ounces: u32) -> PackResult {
        let size = self.select_size(ounces);
        let count = match size {
            ContainerSize::LargeCambro => ounces.div_ceil(size.capacity_oz()),
            _ => 1,
        };
        let allocation = ContainerAllocation { size, count };
        // 容量 >= ounces，且富余不足一个容器（< 640），必然落在 u32 内
        let overage = (allocation.capacity_oz() - u64::from(ounces)) as u32;
        PackResult { allocation, overage }
    }

    /// 装配并生成订单行
    #[instrument(skip(self))]
    pub fn pack_line(&self, beverage: BeverageKind, ounces: u32) -> OrderLineItem {
        let PackResult { allocation, overage } = self.pack(ounces);
        OrderLineItem {
            beverage,
            ounces,
            allocation,
            overage,
        }
    }
}
