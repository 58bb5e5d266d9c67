// ==========================================
// 饮品服务计算器 - 报价文本渲染
// ==========================================
// 职责: PriceSummary → 本地化纯文本；调试模式下渲染订单行
// ==========================================

use crate::domain::order::OrderLineItem;
use crate::domain::pricing::PriceSummary;
use crate::i18n::{t, t_with_args};
use std::fmt::Write;

/// 金额格式（两位小数）
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// 渲染报价汇总
pub fn render_summary(summary: &PriceSummary) -> String {
    let mut out = String::new();

    for line in &summary.lines {
        let _ = writeln!(out, "{}", t(line.beverage.i18n_key()));
        if let Some(gallons) = line.recommended_gallons {
            let gallons = gallons.to_string();
            let _ = writeln!(
                out,
                "  {}",
                t_with_args("summary.recommended_amount", &[("gallons", gallons.as_str())])
            );
        }
        let _ = writeln!(
            out,
            "  ({}) {}  {}",
            line.allocation.count,
            t(line.allocation.size.i18n_key()),
            format_money(line.cost)
        );
    }

    if let Some(water) = &summary.hot_water {
        let _ = writeln!(out, "{}", t("summary.hot_water"));
        let _ = writeln!(
            out,
            "  ({}) {}  {}",
            water.gallons,
            t("summary.gallons"),
            format_money(water.fee)
        );
    }

    let _ = writeln!(out, "{}  {}", t("summary.deposit"), format_money(summary.deposit));
    let _ = writeln!(out, "{}  {}", t("summary.total"), format_money(summary.total_cost));

    if let Some(warning) = &summary.volume_warning {
        let _ = writeln!(out, "! {}", warning.message);
    }

    out
}

/// 调试渲染：盎司数 / 容器规格 / 富余容量
pub fn render_debug(items: &[OrderLineItem]) -> String {
    let mut out = String::new();
    for item in items {
        let _ = writeln!(
            out,
            "{}: oz={} container={} count={} overage={}",
            item.beverage.field_name(),
            item.ounces,
            item.allocation.size,
            item.allocation.count,
            item.overage
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::ContainerAllocation;
    use crate::domain::types::{BeverageKind, ContainerSize};

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(50.0), "$50.00");
        assert_eq!(format_money(6.99), "$6.99");
        assert_eq!(format_money(105.499), "$105.50");
    }

    #[test]
    fn test_render_debug() {
        let items = vec![OrderLineItem {
            beverage: BeverageKind::RegularCoffee,
            ounces: 400,
            allocation: ContainerAllocation {
                size: ContainerSize::LargeCambro,
                count: 1,
            },
            overage: 240,
        }];
        assert_eq!(
            render_debug(&items),
            "regularCoffee: oz=400 container=LARGE_CAMBRO count=1 overage=240\n"
        );
    }
}
