//! 解析モジュール
//!
//! 画像1枚につきモデルを1回だけ呼び出し、返ってきたテキストを
//! 共通ライブラリの正規化層へ渡す。リトライはしない。

mod gemini;

pub use gemini::GeminiClient;

use crate::error::Result;
use async_trait::async_trait;
use calmeal_common::{ImageInput, NutritionReport, MEAL_ANALYSIS_PROMPT};

/// ビジョン言語モデルの呼び出し口
#[async_trait]
pub trait VisionModel: Send + Sync {
    /// 指示文と画像を送り、モデルが生成したテキストを返す
    async fn generate(&self, prompt: &str, image: &ImageInput) -> Result<String>;

    /// ログ表示用のモデル名
    fn name(&self) -> &str;
}

/// 食事写真を解析してレポートを作る
pub async fn analyze_meal(model: &dyn VisionModel, image: &ImageInput) -> Result<NutritionReport> {
    log::info!(
        "Analyzing {} image ({} bytes) with {}",
        image.media_type(),
        image.len(),
        model.name()
    );

    let raw_text = model.generate(MEAL_ANALYSIS_PROMPT, image).await?;
    log::debug!("Model response: {} chars", raw_text.len());

    let report = NutritionReport::from_text(&raw_text);
    if report.nutrients.is_fallback() {
        log::warn!("No macronutrient percentages found; using default distribution");
    }
    if report.items.is_fallback() {
        log::warn!("No itemized calorie lines found; using sample item");
    }

    Ok(report)
}
