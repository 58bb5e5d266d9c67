// ==========================================
// 饮品服务计算器 - 消耗量估算引擎
// ==========================================
// 输入: 饮品 + 来宾人数 + 时段 + 性别比例 + 杯量
// 输出: 需求盎司数
// 红线: 比例表为静态查表，不做插值
// ==========================================

use crate::domain::types::{BeverageKind, GenderRatio, TimeOfDay};
use crate::engine::error::{CalcError, CalcResult};
use tracing::{debug, instrument};

// ==========================================
// 消耗比例表
// ==========================================
// 以整数百分比存储，drinkers = ceil(guests × pct / 100) 可精确整数运算
pub fn ratio_percent(beverage: BeverageKind, time: TimeOfDay, gender: GenderRatio) -> u32 {
    use BeverageKind::*;
    use GenderRatio::*;
    use TimeOfDay::*;

    match (beverage, time, gender) {
        (RegularCoffee, Morning, AllMen) => 60,
        (RegularCoffee, Morning, Mixed) => 50,
        (RegularCoffee, Morning, AllWomen) => 50,
        (RegularCoffee, Evening, AllMen) => 35,
        (RegularCoffee, Evening, Mixed) => 35,
        (RegularCoffee, Evening, AllWomen) => 30,

        (DecafCoffee, Morning, AllMen) => 20,
        (DecafCoffee, Morning, Mixed) => 25,
        (DecafCoffee, Morning, AllWomen) => 25,
        (DecafCoffee, Evening, AllMen) => 25,
        (DecafCoffee, Evening, Mixed) => 20,
        (DecafCoffee, Evening, AllWomen) => 20,

        (HotTea, _, AllMen) => 10,
        (HotTea, _, Mixed) => 10,
        (HotTea, _, AllWomen) => 15,

        (IcedTea, _, AllMen) => 20,
        (IcedTea, _, Mixed) => 20,
        (IcedTea, _, AllWomen) => 25,
    }
}

/// 消耗比例（0..=1）
pub fn consumption_ratio(beverage: BeverageKind, time: TimeOfDay, gender: GenderRatio) -> f64 {
    f64::from(ratio_percent(beverage, time, gender)) / 100.0
}

// ==========================================
// ConsumptionEstimator - 消耗量估算引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsumptionEstimator {
    // 无状态引擎
}

impl ConsumptionEstimator {
    pub fn new() -> Self {
        Self {}
    }

    /// 饮用人数 = ceil(guests × ratio)
    pub fn drinkers(
        &self,
        beverage: BeverageKind,
        guests: u32,
        time: TimeOfDay,
        gender: GenderRatio,
    ) -> u32 {
        let pct = u64::from(ratio_percent(beverage, time, gender));
        let drinkers = (u64::from(guests) * pct).div_ceil(100);
        // pct <= 100，结果不会超过 guests
        drinkers as u32
    }

    /// 估算需求盎司数
    ///
    /// # 规则
    /// 1) ratio = 比例表[饮品][时段][性别比例]
    /// 2) drinkers = ceil(guests × ratio)
    /// 3) ounces = ceil(drinkers × cup_size_oz)
    ///
    /// # 错误
    /// - guests 为 0
    /// - cup_size_oz 非正数或非有限值
    #[instrument(skip(self))]
    pub fn estimate(
        &self,
        beverage: BeverageKind,
        guests: u32,
        time: TimeOfDay,
        gender: GenderRatio,
        cup_size_oz: f64,
    ) -> CalcResult<u32> {
        if guests == 0 {
            return Err(CalcError::invalid("guests", "来宾人数必须为正整数"));
        }
        if !cup_size_oz.is_finite() || cup_size_oz <= 0.0 {
            return Err(CalcError::invalid(
                "cupSize",
                format!("杯量必须为正数: {}", cup_size_oz),
            ));
        }

        let drinkers = self.drinkers(beverage, guests, time, gender);
        let ounces = (f64::from(drinkers) * cup_size_oz).ceil();
        if ounces > f64::from(u32::MAX) {
            return Err(CalcError::invalid(
                "cupSize",
                format!("需求量溢出: {} oz", ounces),
            ));
        }

        debug!(drinkers, ounces, "消耗量估算完成");
        Ok(ounces as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_table_values() {
        assert_eq!(
            consumption_ratio(BeverageKind::RegularCoffee, TimeOfDay::Morning, GenderRatio::AllMen),
            0.6
        );
        assert_eq!(
            consumption_ratio(BeverageKind::DecafCoffee, TimeOfDay::Evening, GenderRatio::AllMen),
            0.25
        );
        assert_eq!(
            consumption_ratio(BeverageKind::HotTea, TimeOfDay::Evening, GenderRatio::AllWomen),
            0.15
        );
    }

    #[test]
    fn test_ratios_within_unit_interval() {
        for beverage in BeverageKind::ALL {
            for time in [TimeOfDay::Morning, TimeOfDay::Evening] {
                for gender in [GenderRatio::AllMen, GenderRatio::Mixed, GenderRatio::AllWomen] {
                    let pct = ratio_percent(beverage, time, gender);
                    assert!(pct <= 100);
                }
            }
        }
    }

    #[test]
    fn test_drinkers_rounds_up() {
        let estimator = ConsumptionEstimator::new();
        // 7 × 0.35 = 2.45 → 3
        assert_eq!(
            estimator.drinkers(BeverageKind::RegularCoffee, 7, TimeOfDay::Evening, GenderRatio::Mixed),
            3
        );
        // 20 × 0.1 = 2
        assert_eq!(
            estimator.drinkers(BeverageKind::HotTea, 20, TimeOfDay::Evening, GenderRatio::AllMen),
            2
        );
    }

    #[test]
    fn test_rejects_zero_guests_and_bad_cup() {
        let estimator = ConsumptionEstimator::new();
        assert!(estimator
            .estimate(BeverageKind::HotTea, 0, TimeOfDay::Morning, GenderRatio::Mixed, 8.0)
            .is_err());
        assert!(estimator
            .estimate(BeverageKind::HotTea, 10, TimeOfDay::Morning, GenderRatio::Mixed, 0.0)
            .is_err());
        assert!(estimator
            .estimate(BeverageKind::HotTea, 10, TimeOfDay::Morning, GenderRatio::Mixed, f64::NAN)
            .is_err());
    }
}
