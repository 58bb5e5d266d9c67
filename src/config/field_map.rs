// ==========================================
// 饮品服务计算器 - 提交字段名映射
// ==========================================
// 职责: 外部电商系统的表单字段标识（不透明字符串），作为配置注入
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::{BeverageKind, ContainerSize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

// ==========================================
// BeverageFields - 单个饮品的字段名
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeverageFields {
    pub pump_pot: String,
    pub mid_cambro: String,
    pub large_cambro: String,
    pub gallons: String,
}

impl BeverageFields {
    pub fn container_key(&self, size: ContainerSize) -> &str {
        match size {
            ContainerSize::PumpPot => &self.pump_pot,
            ContainerSize::MidCambro => &self.mid_cambro,
            ContainerSize::LargeCambro => &self.large_cambro,
        }
    }
}

// ==========================================
// FieldNameMap - 字段名映射
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNameMap {
    #[serde(default = "default_add_to_cart_key")]
    pub add_to_cart_key: String,
    #[serde(default = "default_quantity_key")]
    pub quantity_key: String,
    pub product_id: String,
    pub beverages: BTreeMap<BeverageKind, BeverageFields>,
    pub hot_water: String,
    pub notes: String,
}

fn default_add_to_cart_key() -> String {
    "add-to-cart".to_string()
}

fn default_quantity_key() -> String {
    "quantity".to_string()
}

impl FieldNameMap {
    /// 电商附加项插件的命名规则
    ///
    /// 例: `addon-1398-regular-coffee[2-5-liter-pump-pot]`
    pub fn addon_fields(product_id: &str) -> Self {
        let beverages = BeverageKind::ALL
            .iter()
            .map(|kind| {
                let prefix = format!("addon-{}-{}", product_id, kind.slug());
                (
                    *kind,
                    BeverageFields {
                        pump_pot: format!("{}[2-5-liter-pump-pot]", prefix),
                        mid_cambro: format!("{}[2-5-gallon-cambro]", prefix),
                        large_cambro: format!("{}[5-gallon-cambro]", prefix),
                        gallons: format!("{}[gallons-if-using-cambros]", prefix),
                    },
                )
            })
            .collect();

        Self {
            add_to_cart_key: default_add_to_cart_key(),
            quantity_key: default_quantity_key(),
            product_id: product_id.to_string(),
            beverages,
            hot_water: format!("addon-{}-hot-water[gallons]", product_id),
            notes: format!("addon-{}-details[order-notes]", product_id),
        }
    }

    /// 从 JSON 文件加载
    pub fn load_from_path(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        let map: FieldNameMap = serde_json::from_str(raw)?;
        map.validate()?;
        Ok(map)
    }

    /// 每个饮品都必须有字段名
    pub fn validate(&self) -> ConfigResult<()> {
        let missing: Vec<String> = BeverageKind::ALL
            .iter()
            .filter(|kind| !self.beverages.contains_key(kind))
            .map(|kind| kind.field_name().to_string())
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::IncompleteFieldMap(missing.join(", ")))
        }
    }

    pub fn beverage(&self, kind: BeverageKind) -> Option<&BeverageFields> {
        self.beverages.get(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addon_field_names() {
        let map = FieldNameMap::addon_fields("1398");
        let fields = map.beverage(BeverageKind::RegularCoffee).unwrap();
        assert_eq!(
            fields.container_key(ContainerSize::PumpPot),
            "addon-1398-regular-coffee[2-5-liter-pump-pot]"
        );
        assert_eq!(
            fields.container_key(ContainerSize::LargeCambro),
            "addon-1398-regular-coffee[5-gallon-cambro]"
        );
        assert_eq!(
            map.beverage(BeverageKind::IcedTea).unwrap().gallons,
            "addon-1398-iced-tea[gallons-if-using-cambros]"
        );
        assert_eq!(map.hot_water, "addon-1398-hot-water[gallons]");
        assert_eq!(map.notes, "addon-1398-details[order-notes]");
    }

    #[test]
    fn test_json_round_trip_keeps_defaults() {
        let map = FieldNameMap::addon_fields("77");
        let mut value = serde_json::to_value(&map).unwrap();
        value.as_object_mut().unwrap().remove("add_to_cart_key");
        let loaded = FieldNameMap::from_json(&value.to_string()).unwrap();
        assert_eq!(loaded.add_to_cart_key, "add-to-cart");
        assert_eq!(loaded, map);
    }

    #[test]
    fn test_incomplete_map_rejected() {
        let mut map = FieldNameMap::addon_fields("1");
        map.beverages.remove(&BeverageKind::HotTea);
        let raw = serde_json::to_string(&map).unwrap();
        match FieldNameMap::from_json(&raw) {
            Err(ConfigError::IncompleteFieldMap(missing)) => assert_eq!(missing, "hotTea"),
            other => panic!("Expected IncompleteFieldMap, got {:?}", other),
        }
    }
}
