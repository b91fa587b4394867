//! 端末表示
//!
//! レポートをプレーンテキストに整形する。代替値には印を付ける。

use calmeal_common::{Nutrient, NutritionReport};
use std::fmt::Write;

const BAR_WIDTH: usize = 40;
const FALLBACK_MARK: &str = "（代替値: 抽出できませんでした）";

/// レポートを表示用文字列にする
pub fn render_report(report: &NutritionReport, show_raw: bool) -> String {
    let mut out = String::new();

    let verdict = if report.healthy { "🟢 Healthy" } else { "🔴 Unhealthy" };
    let _ = writeln!(out, "{}  {}", verdict, report.headline);
    let _ = writeln!(out);

    // 栄養素
    let _ = write!(out, "■ Macronutrient Distribution");
    if report.nutrients.is_fallback() {
        let _ = write!(out, " {}", FALLBACK_MARK);
    }
    let _ = writeln!(out);

    let dist = report.nutrients.value();
    for nutrient in Nutrient::ALL {
        let value = dist.get(nutrient);
        if nutrient.is_macro() {
            let _ = writeln!(out, "  {:<8} {:>3}% {}", nutrient.label(), value, bar(value));
        } else {
            let _ = writeln!(out, "  {:<8} {:>3}%", nutrient.label(), value);
        }
    }
    let _ = writeln!(out);

    // 品目
    let _ = write!(out, "■ Calories by Food Item");
    if report.items.is_fallback() {
        let _ = write!(out, " {}", FALLBACK_MARK);
    }
    let _ = writeln!(out);

    let items = report.items.value();
    let name_width = items
        .iter()
        .map(|e| e.item.chars().count())
        .max()
        .unwrap_or(0)
        .max("Food Item".len());

    let _ = writeln!(out, "  {:<width$}  {:>8}", "Food Item", "Calories", width = name_width);
    for entry in items {
        let _ = writeln!(
            out,
            "  {:<width$}  {:>8}",
            entry.item,
            entry.calories,
            width = name_width
        );
    }
    let _ = writeln!(out, "  Total Calories: {} kcal", report.total_calories);
    let _ = writeln!(out);

    // 提案
    let _ = writeln!(out, "■ Recommendations");
    match &report.recommendations {
        Some(text) => {
            for line in text.lines() {
                let _ = writeln!(out, "  {}", line);
            }
        }
        None => {
            let _ = writeln!(out, "  No specific recommendations found in the analysis.");
        }
    }

    if show_raw {
        let _ = writeln!(out);
        let _ = writeln!(out, "■ Detailed Analysis");
        let _ = writeln!(out, "{}", report.raw_text);
    }

    out
}

/// 割合を棒で表す（100% = BAR_WIDTH）
fn bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    "█".repeat(filled)
}
