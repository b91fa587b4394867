//! Excel生成（共通ライブラリ）
//!
//! 解析レポートをブック形式で書き出す:
//! - Summary: 判定・合計カロリー・品目表・カロリー棒グラフ
//! - Macros: 栄養素割合・三大栄養素の円グラフ
//! - Raw: モデル出力の全文

use crate::report::NutritionReport;
use crate::types::Nutrient;
use rust_xlsxwriter::*;

const SUMMARY_SHEET: &str = "Summary";
const MACROS_SHEET: &str = "Macros";
const RAW_SHEET: &str = "Raw";

/// 品目表の開始行（0始まり）
const ITEM_TABLE_ROW: u32 = 5;

/// セルに書ける最大文字数
const MAX_CELL_CHARS: usize = 32_767;

/// 代替値であることを示す注記
const FALLBACK_NOTE: &str = "※ 抽出できなかったため表示用の代替値です";

/// レポートからExcelをバッファに生成
pub fn generate_report_excel_buffer(report: &NutritionReport) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0x155724))
        .set_background_color(Color::RGB(0xE9F7EF))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let label_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5));

    let note_format = Format::new()
        .set_italic()
        .set_font_color(Color::RGB(0x721C24));

    let wrap_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::Top);

    write_summary_sheet(&mut workbook, report, &header_format, &label_format, &note_format)?;
    write_macros_sheet(&mut workbook, report, &header_format, &note_format)?;

    let raw = workbook.add_worksheet();
    raw.set_name(RAW_SHEET)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;
    raw.set_column_width(0, 120)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;
    raw.write_string_with_format(0, 0, cell_text(&report.raw_text), &wrap_format)
        .map_err(|e| format!("本文書き込みエラー: {}", e))?;

    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

fn cell_text(text: &str) -> String {
    text.chars().take(MAX_CELL_CHARS).collect()
}

fn write_summary_sheet(
    workbook: &mut Workbook,
    report: &NutritionReport,
    header_format: &Format,
    label_format: &Format,
    note_format: &Format,
) -> Result<(), String> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;
    sheet.set_column_width(0, 40)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;
    sheet.set_column_width(1, 14)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;

    let assessment = if report.healthy { "Healthy" } else { "Unhealthy" };
    sheet.write_string_with_format(0, 0, "Assessment", label_format)
        .map_err(|e| format!("書き込みエラー: {}", e))?;
    sheet.write_string(0, 1, assessment)
        .map_err(|e| format!("書き込みエラー: {}", e))?;
    sheet.write_string(1, 0, cell_text(&report.headline))
        .map_err(|e| format!("書き込みエラー: {}", e))?;

    sheet.write_string_with_format(2, 0, "Total Calories (kcal)", label_format)
        .map_err(|e| format!("書き込みエラー: {}", e))?;
    sheet.write_number(2, 1, report.total_calories as f64)
        .map_err(|e| format!("書き込みエラー: {}", e))?;

    // 品目表
    sheet.write_string_with_format(ITEM_TABLE_ROW - 1, 0, "Food Item", header_format)
        .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;
    sheet.write_string_with_format(ITEM_TABLE_ROW - 1, 1, "Calories", header_format)
        .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;

    let items = report.items.value();
    for (i, entry) in items.iter().enumerate() {
        let row = ITEM_TABLE_ROW + i as u32;
        sheet.write_string(row, 0, cell_text(&entry.item))
            .map_err(|e| format!("品目書き込みエラー: {}", e))?;
        sheet.write_number(row, 1, f64::from(entry.calories))
            .map_err(|e| format!("カロリー書き込みエラー: {}", e))?;
    }

    let last_row = ITEM_TABLE_ROW + items.len() as u32 - 1;
    if report.items.is_fallback() {
        sheet.write_string_with_format(last_row + 1, 0, FALLBACK_NOTE, note_format)
            .map_err(|e| format!("注記書き込みエラー: {}", e))?;
    }

    if let Some(recommendations) = &report.recommendations {
        let row = last_row + 3;
        sheet.write_string_with_format(row, 0, "Recommendations", label_format)
            .map_err(|e| format!("書き込みエラー: {}", e))?;
        sheet.write_string(row + 1, 0, cell_text(recommendations))
            .map_err(|e| format!("書き込みエラー: {}", e))?;
    }

    let mut chart = Chart::new(ChartType::Column);
    chart
        .add_series()
        .set_categories((SUMMARY_SHEET, ITEM_TABLE_ROW, 0, last_row, 0))
        .set_values((SUMMARY_SHEET, ITEM_TABLE_ROW, 1, last_row, 1));
    chart.title().set_name("Calories by Food Item");
    chart.legend().set_hidden();

    sheet.insert_chart(0, 3, &chart)
        .map_err(|e| format!("グラフ挿入エラー: {}", e))?;

    Ok(())
}

fn write_macros_sheet(
    workbook: &mut Workbook,
    report: &NutritionReport,
    header_format: &Format,
    note_format: &Format,
) -> Result<(), String> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(MACROS_SHEET)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;
    sheet.set_column_width(0, 14)
        .map_err(|e| format!("列幅設定エラー: {}", e))?;

    sheet.write_string_with_format(0, 0, "Nutrient", header_format)
        .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;
    sheet.write_string_with_format(0, 1, "Percent", header_format)
        .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;

    // 三大栄養素を先頭3行に置き、円グラフの範囲とする
    let dist = report.nutrients.value();
    for (i, nutrient) in Nutrient::ALL.iter().enumerate() {
        let row = 1 + i as u32;
        sheet.write_string(row, 0, nutrient.label())
            .map_err(|e| format!("栄養素書き込みエラー: {}", e))?;
        sheet.write_number(row, 1, f64::from(dist.get(*nutrient)))
            .map_err(|e| format!("割合書き込みエラー: {}", e))?;
    }

    if report.nutrients.is_fallback() {
        let row = 1 + Nutrient::ALL.len() as u32;
        sheet.write_string_with_format(row, 0, FALLBACK_NOTE, note_format)
            .map_err(|e| format!("注記書き込みエラー: {}", e))?;
    }

    let macro_rows = Nutrient::MACROS.len() as u32;
    let mut chart = Chart::new(ChartType::Pie);
    chart
        .add_series()
        .set_categories((MACROS_SHEET, 1, 0, macro_rows, 0))
        .set_values((MACROS_SHEET, 1, 1, macro_rows, 1));
    chart.title().set_name("Macronutrient Distribution");

    sheet.insert_chart(0, 3, &chart)
        .map_err(|e| format!("グラフ挿入エラー: {}", e))?;

    Ok(())
}
