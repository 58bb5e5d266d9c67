// ==========================================
// 饮品服务计算器 - 计算器 API
// ==========================================
// 职责: 重算报价、提交订单
// 红线: 超出总量上限的订单禁止提交
// 红线: 每次调用全量重算，不保留上次结果
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::submission::{OrderSink, Submission, SubmitReceipt};
use crate::config::app_config::AppConfig;
use crate::config::field_map::FieldNameMap;
use crate::domain::form::OrderForm;
use crate::domain::order::OrderLineItem;
use crate::domain::pricing::{PriceSummary, PriceTable};
use crate::engine::calculator::BeverageCalculator;
use crate::engine::payload::{build_submission_payload, SubmissionPayload};
use crate::engine::pricing::{PricingEngine, PricingPolicy};
use crate::engine::summary::render_summary;
use crate::importer::form_reader::FormReader;
use crate::importer::form_source::FormSource;
use serde::Serialize;
use tracing::{info, instrument, warn};

// ==========================================
// Quote - 一次计算的完整结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Quote {
    pub form: OrderForm,
    pub line_items: Vec<OrderLineItem>,
    pub summary: PriceSummary,
}

impl Quote {
    pub fn is_blocked(&self) -> bool {
        self.summary.is_blocked()
    }

    /// 本地化报价文本
    pub fn render(&self) -> String {
        render_summary(&self.summary)
    }
}

/// 提交结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 未勾选任何饮品
    NothingToSubmit,
    Submitted(SubmitReceipt),
}

// ==========================================
// CalculatorApi
// ==========================================
pub struct CalculatorApi {
    reader: FormReader,
    calculator: BeverageCalculator,
    pricing: PricingEngine,
    prices: PriceTable,
    fields: FieldNameMap,
}

impl CalculatorApi {
    /// 价格表由调用方加载一次后传入
    pub fn new(prices: PriceTable, fields: FieldNameMap, policy: PricingPolicy) -> Self {
        Self {
            reader: FormReader::new(),
            calculator: BeverageCalculator::new(),
            pricing: PricingEngine::new(policy),
            prices,
            fields,
        }
    }

    pub fn from_config(config: &AppConfig, prices: PriceTable) -> ApiResult<Self> {
        let fields = config.field_name_map()?;
        Ok(Self::new(prices, fields, config.pricing))
    }

    pub fn field_name_map(&self) -> &FieldNameMap {
        &self.fields
    }

    /// 读取表单并重算报价
    pub fn recalculate(&self, source: &dyn FormSource) -> ApiResult<Quote> {
        let raw = source.read_form()?;
        let form = self.reader.map_to_order_form(&raw)?;
        self.quote_form(form)
    }

    /// 对已校验表单计算报价
    #[instrument(skip(self, form), fields(guests = form.guests, beverages = form.beverages.len()))]
    pub fn quote_form(&self, form: OrderForm) -> ApiResult<Quote> {
        let line_items = self.calculator.calculate(&form)?;
        let summary = self
            .pricing
            .summarize(&line_items, form.water_gallons, &self.prices)?;

        info!(
            total_cost = summary.total_cost,
            total_gallons = summary.total_gallons,
            blocked = summary.is_blocked(),
            "报价完成"
        );

        Ok(Quote {
            form,
            line_items,
            summary,
        })
    }

    /// 构建提交载荷（不校验总量上限）
    pub fn payload_for(&self, quote: &Quote) -> ApiResult<Option<SubmissionPayload>> {
        Ok(build_submission_payload(
            &quote.line_items,
            &quote.form,
            &self.fields,
        )?)
    }

    /// 重算并提交订单
    ///
    /// # 规则
    /// 1) 表单非法 / 配置错误 → 错误返回，不提交
    /// 2) 推荐总量超出上限 → VolumeCapExceeded，不提交
    /// 3) 未勾选任何饮品 → NothingToSubmit
    /// 4) 其余情况交给 sink，单次提交
    pub async fn submit(
        &self,
        source: &dyn FormSource,
        sink: &dyn OrderSink,
    ) -> ApiResult<SubmitOutcome> {
        let quote = self.recalculate(source)?;

        if let Some(warning) = &quote.summary.volume_warning {
            warn!(
                total_gallons = warning.total_gallons,
                cap_gallons = warning.cap_gallons,
                "订单超出最大供应量，拒绝提交"
            );
            return Err(ApiError::VolumeCapExceeded {
                total_gallons: warning.total_gallons,
                cap_gallons: warning.cap_gallons,
            });
        }

        let payload = match self.payload_for(&quote)? {
            Some(payload) => payload,
            None => return Ok(SubmitOutcome::NothingToSubmit),
        };

        let receipt = sink
            .submit(Submission {
                line_items: &quote.line_items,
                payload: &payload,
            })
            .await?;

        Ok(SubmitOutcome::Submitted(receipt))
    }
}
