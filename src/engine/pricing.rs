// ==========================================
// 饮品服务计算器 - 计价引擎
// ==========================================
// 输入: 订单行 + 价格表（显式传入） + 热水加仑数
// 输出: PriceSummary（含总量上限校验）
// 红线: 保温壶按个计价；Cambro 按推荐加仑数计价
// 红线: 推荐总量 > 上限 时必须给出可见告警并阻断提交
// ==========================================

use crate::domain::order::OrderLineItem;
use crate::domain::pricing::{HotWaterLine, PriceLine, PriceSummary, PriceTable, VolumeWarning};
use crate::engine::error::{CalcError, CalcResult};
use crate::i18n::t_with_args;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// 每盎司折合加仑
pub const GALLONS_PER_OUNCE: f64 = 0.0078125;

/// 盎司 → 加仑，向上取整到 0.5 加仑
///
/// 0.5 × ceil(oz × 0.0078125 / 0.5) 等价于 ceil(oz / 64) / 2，整数运算无舍入误差
pub fn ounces_to_gallons(ounces: u32) -> f64 {
    f64::from(ounces.div_ceil(64)) / 2.0
}

// ==========================================
// PricingPolicy - 计价参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub hot_water_fee: f64,      // 热水固定费用
    pub deposit: f64,            // 可退押金
    pub volume_cap_gallons: f64, // 推荐总量上限（加仑）
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            hot_water_fee: 6.99,
            deposit: 50.0,
            volume_cap_gallons: 20.0,
        }
    }
}

// ==========================================
// PricingEngine - 计价引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    policy: PricingPolicy,
}

impl PricingEngine {
    pub fn new(policy: PricingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &PricingPolicy {
        &self.policy
    }

    /// 单个订单行计价
    pub fn price_line(&self, item: &OrderLineItem, prices: &PriceTable) -> CalcResult<PriceLine> {
        let price = prices
            .get(item.beverage)
            .ok_or(CalcError::MissingPrice(item.beverage))?;

        let (recommended_gallons, cost) = if item.uses_cambro() {
            let gallons = ounces_to_gallons(item.ounces);
            (Some(gallons), price.per_gallon * gallons)
        } else {
            (None, price.pump_pot * f64::from(item.allocation.count))
        };

        Ok(PriceLine {
            beverage: item.beverage,
            allocation: item.allocation,
            recommended_gallons,
            cost,
        })
    }

    /// 生成报价汇总
    ///
    /// # 规则
    /// 1) 总价 = 各行费用 + 热水费（water > 0） + 押金
    /// 2) 推荐总量只累计 Cambro 行
    /// 3) 推荐总量严格大于上限时附带 VolumeWarning
    #[instrument(skip(self, items, prices), fields(lines = items.len()))]
    pub fn summarize(
        &self,
        items: &[OrderLineItem],
        water_gallons: f64,
        prices: &PriceTable,
    ) -> CalcResult<PriceSummary> {
        let lines = items
            .iter()
            .map(|item| self.price_line(item, prices))
            .collect::<CalcResult<Vec<_>>>()?;

        let mut total_cost: f64 = lines.iter().map(|line| line.cost).sum();
        let total_gallons: f64 = lines.iter().filter_map(|line| line.recommended_gallons).sum();

        let hot_water = if water_gallons > 0.0 {
            total_cost += self.policy.hot_water_fee;
            Some(HotWaterLine {
                gallons: water_gallons,
                fee: self.policy.hot_water_fee,
            })
        } else {
            None
        };

        total_cost += self.policy.deposit;

        let volume_warning = if total_gallons > self.policy.volume_cap_gallons {
            let cap = self.policy.volume_cap_gallons.to_string();
            warn!(
                total_gallons,
                cap_gallons = self.policy.volume_cap_gallons,
                "推荐总量超出上限，阻断提交"
            );
            Some(VolumeWarning {
                total_gallons,
                cap_gallons: self.policy.volume_cap_gallons,
                message: t_with_args(
                    "summary.volume_exceeded",
                    &[("cap", cap.as_str())],
                ),
            })
        } else {
            None
        };

        Ok(PriceSummary {
            lines,
            hot_water,
            deposit: self.policy.deposit,
            total_cost,
            total_gallons,
            volume_warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ounces_to_gallons_half_steps() {
        assert_eq!(ounces_to_gallons(0), 0.0);
        assert_eq!(ounces_to_gallons(1), 0.5);
        assert_eq!(ounces_to_gallons(64), 0.5);
        assert_eq!(ounces_to_gallons(65), 1.0);
        assert_eq!(ounces_to_gallons(400), 3.5);
        assert_eq!(ounces_to_gallons(640), 5.0);
    }

    #[test]
    fn test_matches_float_formula() {
        for oz in [1u32, 63, 64, 65, 127, 128, 129, 321, 999, 2560] {
            let expected = 0.5 * ((f64::from(oz) * GALLONS_PER_OUNCE) / 0.5).ceil();
            assert_eq!(ounces_to_gallons(oz), expected, "oz={}", oz);
        }
    }
}
