use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::config::Config;
use crate::error::{AppError, AppResult};

use super::model::{Employee, Envelope};

/// 上游员工目录接口的 HTTP 客户端
///
/// 每个方法只发出一次请求，不做重试，也不持有缓存状态。
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.upstream_timeout())
            .build()?;
        Ok(Self::with_client(http, &config.upstream_base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        let url = format!("{}/employees", self.base_url);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?.error_for_status()?;
        // 上游返回空数据视为空列表，而不是错误
        Ok(decode_data::<Vec<Employee>>(response).await?.unwrap_or_default())
    }

    pub async fn get_employee_by_id(&self, id: i64) -> AppResult<Employee> {
        let url = format!("{}/employee/{}", self.base_url, id);
        tracing::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(AppError::not_found_id(id.to_string()));
        }

        decode_data::<Employee>(response.error_for_status()?)
            .await?
            .ok_or_else(|| AppError::not_found_id(id.to_string()))
    }

    pub async fn create_employee(&self, fields: &Map<String, Value>) -> AppResult<Employee> {
        let url = format!("{}/create", self.base_url);
        tracing::debug!("POST {}", url);

        let response = self.send(self.http.post(&url).json(fields)).await?;
        Ok(decode_data::<Employee>(response).await?.unwrap_or_default())
    }

    pub async fn delete_employee(&self, id: i64) -> AppResult<()> {
        let url = format!("{}/delete/{}", self.base_url, id);
        tracing::debug!("DELETE {}", url);

        self.send(self.http.delete(&url)).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder) -> AppResult<reqwest::Response> {
        Ok(request.send().await?.error_for_status()?)
    }
}

async fn decode_data<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<Option<T>> {
    let body = response.bytes().await?;
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let envelope: Option<Envelope<T>> = serde_json::from_slice(&body)?;
    Ok(envelope.and_then(|e| {
        if let Some(message) = e.message.as_deref() {
            tracing::debug!(
                "Upstream status: {}, message: {}",
                e.status.as_deref().unwrap_or("unknown"),
                message
            );
        }
        e.data
    }))
}
