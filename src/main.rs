// ==========================================
// 饮品服务计算器 - 命令行入口
// ==========================================
// 用法: beverage-calc [--quote-only] name=value ...
// 例:   beverage-calc guests=100 time=morn genderRatio=50 cupSize=8 regularCoffee
// ==========================================

use anyhow::Context;
use beverage_calc::api::{sink_from_config, CalculatorApi, SubmitOutcome, SubmitReceipt};
use beverage_calc::config::{load_price_table, AppConfig};
use beverage_calc::importer::PairsFormSource;
use beverage_calc::{i18n, logging};

const QUOTE_ONLY_FLAG: &str = "--quote-only";

fn print_usage() {
    println!("{} {}", beverage_calc::APP_NAME, beverage_calc::VERSION);
    println!();
    println!("用法: beverage-calc [{}] name=value ...", QUOTE_ONLY_FLAG);
    println!();
    println!("字段:");
    println!("  guests=<正整数>            来宾人数");
    println!("  time=morn|eve              时段");
    println!("  genderRatio=0|50|100       女性比例");
    println!("  cupSize=<盎司>             杯量");
    println!("  regularCoffee decafCoffee hotTea icedTea  勾选饮品");
    println!("  water=<加仑>               热水（可选）");
    println!("  notes=<文本>               备注（可选）");
    println!("  addons[]=<附加项>          可重复");
    println!();
    println!("环境变量: BEVCALC_DEBUG, BEVCALC_CART_URL, BEVCALC_PRICING_FILE, ...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    let config = AppConfig::from_env().context("加载配置失败")?;
    i18n::set_locale(&config.locale);

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    let quote_only = args.iter().any(|a| a == QUOTE_ONLY_FLAG);
    args.retain(|a| a != QUOTE_ONLY_FLAG);

    tracing::info!(
        version = beverage_calc::VERSION,
        debug = config.debug,
        pricing_file = %config.pricing_file.display(),
        "启动饮品服务计算器"
    );

    // 价格表只加载一次，显式传入
    let prices = load_price_table(&config.pricing_file)
        .with_context(|| format!("加载价格表失败: {}", config.pricing_file.display()))?;
    let api = CalculatorApi::from_config(&config, prices)?;

    let source = PairsFormSource::from_args(&args)?;
    let quote = api.recalculate(&source)?;
    print!("{}", quote.render());

    if quote_only {
        return Ok(());
    }
    if quote.is_blocked() {
        // 告警已随报价文本输出，等待用户调整输入
        std::process::exit(2);
    }

    let sink = sink_from_config(&config)?;
    match api.submit(&source, sink.as_ref()).await? {
        SubmitOutcome::NothingToSubmit => println!("未勾选任何饮品，无需提交"),
        SubmitOutcome::Submitted(SubmitReceipt::Redirect(url)) => println!("已加入购物车: {}", url),
        SubmitOutcome::Submitted(SubmitReceipt::Rendered(text)) => print!("{}", text),
    }

    Ok(())
}
