// ==========================================
// 饮品服务计算器 - 表单领域模型
// ==========================================
// RawForm: 浏览器序列化的原始字段（名称 → 值）
// OrderForm: 校验后的表单
// ==========================================

use crate::domain::types::{BeverageKind, GenderRatio, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 多选附加项的字段名
pub const ADDONS_FIELD: &str = "addons[]";

// ==========================================
// RawForm - 原始表单字段
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawForm {
    pub fields: HashMap<String, String>,
    pub addons: Vec<String>,
}

impl RawForm {
    /// 从 (name, value) 序列构造
    ///
    /// `addons[]` 累积为列表，其余字段同名后者覆盖前者
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut form = RawForm::default();
        for (name, value) in pairs {
            let name = name.into();
            let value = value.into();
            if name == ADDONS_FIELD {
                form.addons.push(value);
            } else {
                form.fields.insert(name, value);
            }
        }
        form
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }
}

// ==========================================
// OrderForm - 校验后的表单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderForm {
    pub beverages: Vec<BeverageKind>, // 已勾选饮品（按展示顺序）
    pub guests: u32,                  // 来宾人数
    pub time: TimeOfDay,              // 时段
    pub gender_ratio: GenderRatio,    // 女性比例
    pub cup_size_oz: f64,             // 杯量（盎司）
    pub water_gallons: f64,           // 热水加仑数
    pub notes: String,                // 备注
    pub addons: Vec<String>,          // 附加项
}

impl OrderForm {
    pub fn wants_hot_water(&self) -> bool {
        self.water_gallons > 0.0
    }
}
