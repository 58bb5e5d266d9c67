// ==========================================
// PricingEngine 引擎集成测试
// ==========================================
// 测试目标: 验证计价规则与总量上限
// 覆盖范围: 保温壶 / Cambro 计价、热水费、押金、总量上限、价格缺失
// ==========================================


use beverage_calc::engine::{CalcError, ContainerPacker, PricingEngine, PricingPolicy};
use beverage_calc::{BeverageKind, OrderLineItem, PriceTable};
use test_helpers::{assert_close, sample_price_table};

fn line(beverage: BeverageKind, ounces: u32) -> OrderLineItem {
    ContainerPacker::new().pack_line(beverage, ounces)
}

// ==========================================
// 测试用例 1: 单行计价
// ==========================================

#[test]
fn test_pump_pot_priced_per_unit() {
    let engine = PricingEngine::default();
    let price_line = engine
        .price_line(&line(BeverageKind::HotTea, 12), &sample_price_table())
        .unwrap();

    assert_eq!(price_line.recommended_gallons, None);
    assert_close(price_line.cost, 19.99);
}

#[test]
fn test_cambro_priced_per_recommended_gallon() {
    let engine = PricingEngine::default();

    // 400 oz → 3.5 加仑 × 14.00
    let large = engine
        .price_line(&line(BeverageKind::RegularCoffee, 400), &sample_price_table())
        .unwrap();
    assert_eq!(large.recommended_gallons, Some(3.5));
    assert_close(large.cost, 49.0);

    // 300 oz → 中号 Cambro，2.5 加仑 × 10.00
    let mid = engine
        .price_line(&line(BeverageKind::IcedTea, 300), &sample_price_table())
        .unwrap();
    assert_eq!(mid.recommended_gallons, Some(2.5));
    assert_close(mid.cost, 25.0);
}

// ==========================================
// 测试用例 2: 汇总
// ==========================================

#[test]
fn test_summary_totals() {
    println!("\n=== 测试：报价汇总 ===");

    let engine = PricingEngine::default();
    let items = vec![
        line(BeverageKind::RegularCoffee, 400),
        line(BeverageKind::HotTea, 12),
    ];
    let summary = engine.summarize(&items, 2.0, &sample_price_table()).unwrap();

    // 49.00 + 19.99 + 6.99 + 50.00
    assert_close(summary.total_cost, 125.98);
    // 只累计 Cambro
    assert_close(summary.total_gallons, 3.5);
    assert_eq!(summary.lines.len(), 2);
    let water = summary.hot_water.as_ref().unwrap();
    assert_close(water.fee, 6.99);
    assert_close(water.gallons, 2.0);
    assert_close(summary.deposit, 50.0);
    assert!(!summary.is_blocked());
}

#[test]
fn test_no_water_no_fee_and_deposit_always_applied() {
    let engine = PricingEngine::default();
    let summary = engine.summarize(&[], 0.0, &sample_price_table()).unwrap();

    assert!(summary.hot_water.is_none());
    assert_close(summary.total_cost, 50.0);
    assert_close(summary.total_gallons, 0.0);
}

// ==========================================
// 测试用例 3: 总量上限
// ==========================================

#[test]
fn test_volume_cap_is_strictly_greater_than() {
    let engine = PricingEngine::default();

    // 2560 oz → 20.0 加仑，未超限
    let at_cap = engine
        .summarize(&[line(BeverageKind::RegularCoffee, 2560)], 0.0, &sample_price_table())
        .unwrap();
    assert_close(at_cap.total_gallons, 20.0);
    assert!(!at_cap.is_blocked());

    // 2561 oz → 20.5 加仑，超限
    let over_cap = engine
        .summarize(&[line(BeverageKind::RegularCoffee, 2561)], 0.0, &sample_price_table())
        .unwrap();
    assert_close(over_cap.total_gallons, 20.5);
    assert!(over_cap.is_blocked());
    let warning = over_cap.volume_warning.unwrap();
    assert_close(warning.cap_gallons, 20.0);
    assert!(!warning.message.is_empty());
}

#[test]
fn test_volume_cap_sums_across_beverages() {
    let engine = PricingEngine::default();

    // 每个 12.0 加仑单独未超限，合计 24.0 超限
    let items = vec![
        line(BeverageKind::RegularCoffee, 1536),
        line(BeverageKind::DecafCoffee, 1536),
    ];
    let summary = engine.summarize(&items, 0.0, &sample_price_table()).unwrap();
    assert_close(summary.total_gallons, 24.0);
    assert!(summary.is_blocked());
}

#[test]
fn test_custom_policy() {
    let engine = PricingEngine::new(PricingPolicy {
        hot_water_fee: 10.0,
        deposit: 0.0,
        volume_cap_gallons: 3.0,
    });
    let summary = engine
        .summarize(&[line(BeverageKind::RegularCoffee, 400)], 1.0, &sample_price_table())
        .unwrap();

    assert_close(summary.total_cost, 59.0);
    assert!(summary.is_blocked());
}

// ==========================================
// 测试用例 4: 价格缺失
// ==========================================

#[test]
fn test_missing_price_is_error() {
    let engine = PricingEngine::default();
    let result = engine.summarize(&[line(BeverageKind::IcedTea, 50)], 0.0, &PriceTable::new());
    assert_eq!(result, Err(CalcError::MissingPrice(BeverageKind::IcedTea)));
}
