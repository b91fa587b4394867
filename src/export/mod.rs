pub mod excel;

use crate::error::Result;
use calmeal_common::NutritionReport;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// JSON保存時のラッパー
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SavedReport<'a> {
    generated_at: String,
    source: &'a str,
    model: Option<&'a str>,
    #[serde(flatten)]
    report: &'a NutritionReport,
}

/// 出力先がディレクトリなら `<stem>.<extension>` を付ける
pub fn output_path_for_format(output: &Path, stem: &str, extension: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.{}", stem, extension))
    } else {
        output.to_path_buf()
    }
}

/// レポートをJSONで保存
///
/// * `source` - 画像またはテキストファイルのパス
/// * `model` - 解析に使ったモデル（オフライン解析時はNone）
pub fn save_json(
    report: &NutritionReport,
    source: &str,
    model: Option<&str>,
    output_path: &Path,
) -> Result<()> {
    let saved = SavedReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        source,
        model,
        report,
    };

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(&saved)?;
    std::fs::write(output_path, json)?;
    Ok(())
}

/// 保存済みJSONからレポートを読み戻す
pub fn load_json(path: &Path) -> Result<NutritionReport> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
