// ==========================================
// 饮品服务计算器 - 领域类型定义
// ==========================================
// 职责: 饮品种类 / 时段 / 性别比例 / 容器规格
// 红线: 不支持的时段与性别比例组合在解析阶段即被拒绝
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 饮品种类 (Beverage Kind)
// ==========================================
// 序列化格式: camelCase (与表单字段名一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BeverageKind {
    RegularCoffee, // 普通咖啡
    DecafCoffee,   // 低因咖啡
    HotTea,        // 热茶
    IcedTea,       // 冰茶
}

impl BeverageKind {
    /// 全部饮品，按表单展示顺序
    pub const ALL: [BeverageKind; 4] = [
        BeverageKind::RegularCoffee,
        BeverageKind::DecafCoffee,
        BeverageKind::HotTea,
        BeverageKind::IcedTea,
    ];

    /// 表单字段名（勾选即出现）
    pub fn field_name(&self) -> &'static str {
        match self {
            BeverageKind::RegularCoffee => "regularCoffee",
            BeverageKind::DecafCoffee => "decafCoffee",
            BeverageKind::HotTea => "hotTea",
            BeverageKind::IcedTea => "icedTea",
        }
    }

    /// 外部商品附加项命名中使用的短横线形式
    pub fn slug(&self) -> &'static str {
        match self {
            BeverageKind::RegularCoffee => "regular-coffee",
            BeverageKind::DecafCoffee => "decaf-coffee",
            BeverageKind::HotTea => "hot-tea",
            BeverageKind::IcedTea => "iced-tea",
        }
    }

    /// i18n 键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            BeverageKind::RegularCoffee => "beverage.regular_coffee",
            BeverageKind::DecafCoffee => "beverage.decaf_coffee",
            BeverageKind::HotTea => "beverage.hot_tea",
            BeverageKind::IcedTea => "beverage.iced_tea",
        }
    }
}

impl fmt::Display for BeverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BeverageKind::RegularCoffee => write!(f, "Regular Coffee"),
            BeverageKind::DecafCoffee => write!(f, "Decaf Coffee"),
            BeverageKind::HotTea => write!(f, "Hot Tea"),
            BeverageKind::IcedTea => write!(f, "Iced Tea"),
        }
    }
}

impl FromStr for BeverageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        BeverageKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.field_name() == value || kind.slug() == value)
            .ok_or_else(|| format!("未知饮品: {}", value))
    }
}

// ==========================================
// 时段 (Time Of Day)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning, // 上午场
    Evening, // 晚间场
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Morning => write!(f, "morn"),
            TimeOfDay::Evening => write!(f, "eve"),
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "morn" | "morning" => Ok(TimeOfDay::Morning),
            "eve" | "evening" => Ok(TimeOfDay::Evening),
            other => Err(format!("不支持的时段: {}", other)),
        }
    }
}

// ==========================================
// 性别比例 (Gender Ratio)
// ==========================================
// 女性来宾百分比，仅支持 0 / 50 / 100 三档，不做插值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenderRatio {
    AllMen,   // 0
    Mixed,    // 50
    AllWomen, // 100
}

impl GenderRatio {
    pub fn percent(&self) -> u32 {
        match self {
            GenderRatio::AllMen => 0,
            GenderRatio::Mixed => 50,
            GenderRatio::AllWomen => 100,
        }
    }

    pub fn from_percent(percent: u32) -> Option<Self> {
        match percent {
            0 => Some(GenderRatio::AllMen),
            50 => Some(GenderRatio::Mixed),
            100 => Some(GenderRatio::AllWomen),
            _ => None,
        }
    }
}

impl fmt::Display for GenderRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.percent())
    }
}

impl FromStr for GenderRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        value
            .parse::<u32>()
            .ok()
            .and_then(GenderRatio::from_percent)
            .ok_or_else(|| format!("不支持的性别比例: {}（仅支持 0/50/100）", value))
    }
}

// ==========================================
// 容器规格 (Container Size)
// ==========================================
// 顺序: PumpPot < MidCambro < LargeCambro
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerSize {
    PumpPot,     // 2.5 升保温壶 (88 oz)
    MidCambro,   // 2.5 加仑 Cambro (320 oz)
    LargeCambro, // 5 加仑 Cambro (640 oz)，可重复
}

impl ContainerSize {
    /// 容量（盎司）
    pub fn capacity_oz(&self) -> u32 {
        match self {
            ContainerSize::PumpPot => 88,
            ContainerSize::MidCambro => 320,
            ContainerSize::LargeCambro => 640,
        }
    }

    /// Cambro 按推荐加仑数计价，保温壶按个计价
    pub fn is_cambro(&self) -> bool {
        !matches!(self, ContainerSize::PumpPot)
    }

    pub fn i18n_key(&self) -> &'static str {
        match self {
            ContainerSize::PumpPot => "container.pump_pot",
            ContainerSize::MidCambro => "container.mid_cambro",
            ContainerSize::LargeCambro => "container.large_cambro",
        }
    }
}

impl fmt::Display for ContainerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerSize::PumpPot => write!(f, "PUMP_POT"),
            ContainerSize::MidCambro => write!(f, "MID_CAMBRO"),
            ContainerSize::LargeCambro => write!(f, "LARGE_CAMBRO"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beverage_from_field_name_and_slug() {
        assert_eq!("hotTea".parse::<BeverageKind>().unwrap(), BeverageKind::HotTea);
        assert_eq!(
            "decaf-coffee".parse::<BeverageKind>().unwrap(),
            BeverageKind::DecafCoffee
        );
        assert!("espresso".parse::<BeverageKind>().is_err());
    }

    #[test]
    fn test_time_of_day_aliases() {
        assert_eq!("morn".parse::<TimeOfDay>().unwrap(), TimeOfDay::Morning);
        assert_eq!("evening".parse::<TimeOfDay>().unwrap(), TimeOfDay::Evening);
        assert!("noon".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_gender_ratio_only_three_steps() {
        assert_eq!("50".parse::<GenderRatio>().unwrap(), GenderRatio::Mixed);
        assert_eq!(" 100 ".parse::<GenderRatio>().unwrap(), GenderRatio::AllWomen);
        assert!("75".parse::<GenderRatio>().is_err());
        assert!("abc".parse::<GenderRatio>().is_err());
    }

    #[test]
    fn test_container_capacity() {
        assert_eq!(ContainerSize::PumpPot.capacity_oz(), 88);
        assert_eq!(ContainerSize::MidCambro.capacity_oz(), 320);
        assert_eq!(ContainerSize::LargeCambro.capacity_oz(), 640);
        assert!(!ContainerSize::PumpPot.is_cambro());
        assert!(ContainerSize::LargeCambro.is_cambro());
    }
}
