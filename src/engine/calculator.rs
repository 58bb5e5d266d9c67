// ==========================================
// 饮品服务计算器 - 计算编排
// ==========================================
// 输入: OrderForm
// 输出: 订单行列表（仅已勾选饮品，每次全量重建）
// ==========================================

use crate::domain::form::OrderForm;
use crate::domain::order::OrderLineItem;
use crate::engine::consumption::ConsumptionEstimator;
use crate::engine::error::CalcResult;
use crate::engine::packer::ContainerPacker;
use tracing::{debug, instrument};

// ==========================================
// BeverageCalculator - 估算 + 装配
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct BeverageCalculator {
    estimator: ConsumptionEstimator,
    packer: ContainerPacker,
}

impl BeverageCalculator {
    pub fn new() -> Self {
        Self {
            estimator: ConsumptionEstimator::new(),
            packer: ContainerPacker::new(),
        }
    }

    /// 计算全部已勾选饮品的订单行
    #[instrument(skip(self, form), fields(
        guests = form.guests,
        time = %form.time,
        gender_ratio = %form.gender_ratio,
        beverages = form.beverages.len()
    ))]
    pub fn calculate(&self, form: &OrderForm) -> CalcResult<Vec<OrderLineItem>> {
        let mut items = Vec::with_capacity(form.beverages.len());
        for beverage in &form.beverages {
            let ounces = self.estimator.estimate(
                *beverage,
                form.guests,
                form.time,
                form.gender_ratio,
                form.cup_size_oz,
            )?;
            let item = self.packer.pack_line(*beverage, ounces);
            debug!(
                beverage = %item.beverage,
                ounces = item.ounces,
                size = %item.allocation.size,
                count = item.allocation.count,
                overage = item.overage,
                "订单行生成"
            );
            items.push(item);
        }
        Ok(items)
    }
}
