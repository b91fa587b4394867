//! Excel生成（CLI版）
//!
//! 共通ライブラリでバッファを作り、ファイルへ書き出す

use crate::error::{CalMealError, Result};
use calmeal_common::export::excel_core::generate_report_excel_buffer;
use calmeal_common::NutritionReport;
use std::path::Path;

pub fn generate_excel(report: &NutritionReport, output_path: &Path) -> Result<()> {
    let buffer = generate_report_excel_buffer(report).map_err(CalMealError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, buffer)
        .map_err(|e| CalMealError::ExcelGeneration(format!("ファイル書き込みエラー: {}", e)))?;

    log::debug!("Excel written: {}", output_path.display());
    Ok(())
}
