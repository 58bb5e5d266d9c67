// ==========================================
// 饮品服务计算器 - 表单读取器
// ==========================================
// 职责: 原始字段 → OrderForm 映射 + 类型转换
// 红线: guests / cupSize 缺失或非法时拒绝，不以 0/NaN 继续计算
// ==========================================

use crate::domain::form::{OrderForm, RawForm};
use crate::domain::types::{BeverageKind, GenderRatio, TimeOfDay};
use crate::importer::error::{FormError, FormResult};
use std::str::FromStr;

// ==========================================
// 字段名
// ==========================================
pub mod field_names {
    pub const GUESTS: &str = "guests";
    pub const TIME: &str = "time";
    pub const GENDER_RATIO: &str = "genderRatio";
    pub const CUP_SIZE: &str = "cupSize";
    pub const WATER: &str = "water";
    pub const NOTES: &str = "notes";
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormReader;

impl FormReader {
    pub fn new() -> Self {
        Self
    }

    /// 映射为 OrderForm
    pub fn map_to_order_form(&self, raw: &RawForm) -> FormResult<OrderForm> {
        // 勾选即出现，按展示顺序收集
        let beverages = BeverageKind::ALL
            .iter()
            .copied()
            .filter(|kind| raw.contains(kind.field_name()))
            .collect();

        Ok(OrderForm {
            beverages,
            guests: self.parse_guests(raw)?,
            time: self.parse_option::<TimeOfDay>(raw, field_names::TIME)?,
            gender_ratio: self.parse_option::<GenderRatio>(raw, field_names::GENDER_RATIO)?,
            cup_size_oz: self.parse_cup_size(raw)?,
            water_gallons: self.parse_water(raw)?,
            notes: self.get_string(raw, field_names::NOTES).unwrap_or_default(),
            addons: raw
                .addons
                .iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect(),
        })
    }

    /// 提取字符串字段（空白视为缺失）
    fn get_string(&self, raw: &RawForm, key: &str) -> Option<String> {
        raw.get(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn require(&self, raw: &RawForm, key: &str) -> FormResult<String> {
        self.get_string(raw, key)
            .ok_or_else(|| FormError::MissingField(key.to_string()))
    }

    /// 来宾人数：正整数
    fn parse_guests(&self, raw: &RawForm) -> FormResult<u32> {
        let value = self.require(raw, field_names::GUESTS)?;
        match value.parse::<u32>() {
            Ok(guests) if guests > 0 => Ok(guests),
            _ => Err(FormError::TypeConversionError {
                field: field_names::GUESTS.to_string(),
                message: format!("来宾人数必须为正整数: {}", value),
            }),
        }
    }

    /// 杯量：正有限数
    fn parse_cup_size(&self, raw: &RawForm) -> FormResult<f64> {
        let value = self.require(raw, field_names::CUP_SIZE)?;
        match value.parse::<f64>() {
            Ok(cup) if cup.is_finite() && cup > 0.0 => Ok(cup),
            _ => Err(FormError::TypeConversionError {
                field: field_names::CUP_SIZE.to_string(),
                message: format!("杯量必须为正数: {}", value),
            }),
        }
    }

    /// 热水加仑数：可选，缺失视为 0
    fn parse_water(&self, raw: &RawForm) -> FormResult<f64> {
        match self.get_string(raw, field_names::WATER) {
            None => Ok(0.0),
            Some(value) => match value.parse::<f64>() {
                Ok(gallons) if gallons.is_finite() && gallons >= 0.0 => Ok(gallons),
                _ => Err(FormError::TypeConversionError {
                    field: field_names::WATER.to_string(),
                    message: format!("热水加仑数必须为非负数: {}", value),
                }),
            },
        }
    }

    /// 枚举型选项（时段 / 性别比例），不支持的值属于配置错误
    fn parse_option<T>(&self, raw: &RawForm, key: &str) -> FormResult<T>
    where
        T: FromStr<Err = String>,
    {
        let value = self.require(raw, key)?;
        value.parse::<T>().map_err(|message| FormError::UnsupportedOption {
            field: key.to_string(),
            value: value.clone(),
            message,
        })
    }
}
