//! Gemini API連携
//!
//! `generateContent` に指示文と画像（Base64のinline_data）を送る。

use super::VisionModel;
use crate::config::Config;
use crate::error::{CalMealError, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine};
use calmeal_common::ImageInput;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

/// Gemini APIレスポンス
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

pub struct GeminiClient {
    api_key: String,
    model: String,
    api_base: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// 設定からクライアントを生成（APIキー必須）
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.get_api_key()?;

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| CalMealError::Config(format!("HTTPクライアント初期化エラー: {}", e)))?;

        Ok(Self {
            api_key,
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl VisionModel for GeminiClient {
    async fn generate(&self, prompt: &str, image: &ImageInput) -> Result<String> {
        let request = build_request(prompt, image);

        log::debug!("Sending request to {} (model: {})", self.endpoint(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| CalMealError::ExternalService(format!("通信エラー: {}", e)))?;

        let status = response.status();
        log::debug!("Gemini response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| CalMealError::ExternalService(format!("レスポンス読み込みエラー: {}", e)))?;

        if !status.is_success() {
            log::error!("Gemini API error response: {}", body);
            return Err(CalMealError::ExternalService(format!(
                "Gemini API error ({}): {}",
                status,
                error_message(&body)
            )));
        }

        extract_text(&body)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

fn build_request(prompt: &str, image: &ImageInput) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text {
                    text: prompt.to_string(),
                },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.media_type().mime().to_string(),
                        data: general_purpose::STANDARD.encode(image.data()),
                    },
                },
            ],
        }],
    }
}

/// レスポンス本文から生成テキストを取り出す（複数partは連結）
fn extract_text(body: &str) -> Result<String> {
    let response: GeminiResponse = serde_json::from_str(body)
        .map_err(|e| CalMealError::ExternalService(format!("レスポンス形式が不正: {}", e)))?;

    let text: String = response
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .map(|content| {
            content
                .parts
                .iter()
                .filter_map(|p| p.text.as_deref())
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(CalMealError::ExternalService("Empty response".into()));
    }

    Ok(text)
}

/// エラーレスポンスから `error.message` を取り出す（なければ本文）
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
