// ==========================================
// 饮品服务计算器 - 订单提交
// ==========================================
// 职责: 定义订单提交接口（购物车属于外部电商系统）
// 实现: HttpCartSink（HTTP 表单 POST）、DebugSink（只渲染不提交）
// 说明: 单次提交，不重试；HTTP 请求带超时，失败向调用方返回错误
// ==========================================

use crate::config::app_config::AppConfig;
use crate::domain::order::OrderLineItem;
use crate::engine::payload::SubmissionPayload;
use crate::engine::summary::render_debug;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument};

// ==========================================
// 错误与回执
// ==========================================

/// 提交错误类型
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("未配置购物车提交地址")]
    MissingEndpoint,

    #[error("提交超时")]
    Timeout,

    #[error("购物车返回错误状态: {0}")]
    Status(u16),

    #[error("HTTP 请求失败: {0}")]
    Http(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SubmitError::Timeout
        } else if let Some(status) = err.status() {
            SubmitError::Status(status.as_u16())
        } else {
            SubmitError::Http(err.to_string())
        }
    }
}

/// 提交回执
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReceipt {
    /// 已加入购物车，跳转至该地址
    Redirect(String),
    /// 调试模式：渲染结果，未提交
    Rendered(String),
}

/// 一次提交的内容
#[derive(Debug, Clone, Copy)]
pub struct Submission<'a> {
    pub line_items: &'a [OrderLineItem],
    pub payload: &'a SubmissionPayload,
}

// ==========================================
// OrderSink Trait
// ==========================================
#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn submit(&self, submission: Submission<'_>) -> Result<SubmitReceipt, SubmitError>;
}

// ==========================================
// HttpCartSink - HTTP 表单提交
// ==========================================
pub struct HttpCartSink {
    client: reqwest::Client,
    endpoint: String,
    redirect_url: String,
}

impl HttpCartSink {
    pub fn new(
        endpoint: impl Into<String>,
        redirect_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            redirect_url: redirect_url.into(),
        })
    }
}

#[async_trait]
impl OrderSink for HttpCartSink {
    #[instrument(skip(self, submission), fields(endpoint = %self.endpoint, fields = submission.payload.len()))]
    async fn submit(&self, submission: Submission<'_>) -> Result<SubmitReceipt, SubmitError> {
        self.client
            .post(&self.endpoint)
            .form(submission.payload)
            .send()
            .await?
            .error_for_status()?;

        info!(redirect = %self.redirect_url, "订单已加入购物车");
        Ok(SubmitReceipt::Redirect(self.redirect_url.clone()))
    }
}

// ==========================================
// DebugSink - 调试模式
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct DebugSink;

#[async_trait]
impl OrderSink for DebugSink {
    async fn submit(&self, submission: Submission<'_>) -> Result<SubmitReceipt, SubmitError> {
        info!(lines = submission.line_items.len(), "调试模式: 跳过提交");
        Ok(SubmitReceipt::Rendered(render_debug(submission.line_items)))
    }
}

/// 按配置选择提交方式
pub fn sink_from_config(config: &AppConfig) -> Result<Box<dyn OrderSink>, SubmitError> {
    if config.debug {
        return Ok(Box::new(DebugSink));
    }
    let endpoint = config.cart_url.as_deref().ok_or(SubmitError::MissingEndpoint)?;
    Ok(Box::new(HttpCartSink::new(
        endpoint,
        config.redirect_url.clone(),
        config.submit_timeout(),
    )?))
}
