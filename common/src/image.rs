//! 画像入力
//!
//! モデルへ渡す画像（バイト列 + メディアタイプ）。jpeg/pngのみ扱う。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 画像メディアタイプ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Jpeg,
    Png,
}

impl MediaType {
    /// MIMEタイプ
    pub fn mime(&self) -> &'static str {
        match self {
            MediaType::Jpeg => "image/jpeg",
            MediaType::Png => "image/png",
        }
    }

    /// 拡張子から判定
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(MediaType::Jpeg),
            "png" => Some(MediaType::Png),
            _ => None,
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_lowercase();
        let name = lower.strip_prefix("image/").unwrap_or(lower.as_str());
        MediaType::from_extension(name).ok_or_else(|| Error::UnsupportedMediaType(s.to_string()))
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mime())
    }
}

/// 解析対象の画像
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageInput {
    data: Vec<u8>,
    media_type: MediaType,
}

impl ImageInput {
    /// 空の画像は受け付けない
    pub fn new(data: Vec<u8>, media_type: MediaType) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::MissingInput);
        }
        Ok(Self { data, media_type })
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
