// ==========================================
// 饮品服务计算器 - 提交载荷构建
// ==========================================
// 输入: 订单行 + 表单 + 字段名映射（注入）
// 输出: 扁平的 HTTP 表单字段映射
// 说明: 纯函数，不修改任何共享状态
// ==========================================

use crate::config::field_map::FieldNameMap;
use crate::domain::form::OrderForm;
use crate::domain::order::OrderLineItem;
use crate::engine::error::{CalcError, CalcResult};
use crate::engine::pricing::ounces_to_gallons;
use std::collections::BTreeMap;

/// 提交载荷（字段名 → 值）
pub type SubmissionPayload = BTreeMap<String, String>;

/// 附加项前缀
pub const ADDONS_PREFIX: &str = "Addons Requested: ";

/// 订单备注：附加项列表 + 用户备注
pub fn compose_notes(form: &OrderForm) -> String {
    let mut notes = String::new();
    if !form.addons.is_empty() {
        notes.push_str(ADDONS_PREFIX);
        notes.push_str(&form.addons.join(", "));
        notes.push_str("\n\n");
    }
    notes.push_str(&form.notes);
    notes
}

/// 构建提交载荷
///
/// # 返回
/// - Ok(None): 没有勾选任何饮品，无需提交
/// - Ok(Some(payload)): 提交载荷
///
/// # 字段
/// - 商品 ID / 数量 = 1
/// - 每个饮品: 所选容器规格 → 数量；Cambro 另附推荐加仑数
/// - 热水加仑数
/// - 备注
pub fn build_submission_payload(
    items: &[OrderLineItem],
    form: &OrderForm,
    fields: &FieldNameMap,
) -> CalcResult<Option<SubmissionPayload>> {
    if items.is_empty() {
        return Ok(None);
    }

    let mut payload = SubmissionPayload::new();
    payload.insert(fields.add_to_cart_key.clone(), fields.product_id.clone());
    payload.insert(fields.quantity_key.clone(), "1".to_string());

    for item in items {
        let beverage_fields = fields
            .beverage(item.beverage)
            .ok_or(CalcError::MissingFieldMapping(item.beverage))?;

        payload.insert(
            beverage_fields.container_key(item.allocation.size).to_string(),
            item.allocation.count.to_string(),
        );
        if item.uses_cambro() {
            payload.insert(
                beverage_fields.gallons.clone(),
                ounces_to_gallons(item.ounces).to_string(),
            );
        }
    }

    payload.insert(fields.hot_water.clone(), form.water_gallons.to_string());
    payload.insert(fields.notes.clone(), compose_notes(form));

    Ok(Some(payload))
}
