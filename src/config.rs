use crate::error::{CalMealError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// APIキーを読む環境変数（先勝ち）
const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    /// 未設定ならタイムアウトなし
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            api_base: DEFAULT_API_BASE.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 書き換え用の読み込み
    ///
    /// JSONとして読めない設定ファイルは警告を出して既定値から作り直す。
    /// `config --set-*` で壊れたファイルを上書きできるようにするため。
    pub fn load_for_update() -> Result<Self> {
        Self::load_for_update_from(&Self::config_path()?)
    }

    pub fn load_for_update_from(config_path: &std::path::Path) -> Result<Self> {
        match Self::load_from(config_path) {
            Err(CalMealError::JsonParse(e)) => {
                log::warn!("設定ファイルを解析できないため既定値で作り直します ({}): {}", config_path.display(), e);
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CalMealError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("calmeal").join("config.json"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        for name in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(name) {
                if !key.trim().is_empty() {
                    return Ok(key);
                }
            }
        }

        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(CalMealError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn set_model(&mut self, model: String) -> Result<()> {
        self.model = model;
        self.save()
    }
}
