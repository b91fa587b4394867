//! 表示用の派生値
//!
//! - total_calories: 品目カロリーの合計
//! - is_healthy: 健康判定（部分文字列による簡易判定）
//! - recommendations: "suggest" 以降の提案部分
//! - headline: 先頭文（判定バナー用）

use crate::types::FoodCalorieList;
use regex::Regex;

lazy_static::lazy_static! {
    static ref HEALTHY_RE: Regex = Regex::new(r"(?i)healthy").unwrap();
    static ref SUGGEST_RE: Regex = Regex::new(r"(?i)suggest").unwrap();
}

/// カロリー合計
pub fn total_calories(items: &FoodCalorieList) -> u64 {
    items.total_calories()
}

/// 健康判定
///
/// 大文字小文字を区別せず "healthy" を含むかどうかだけを見る。
/// "unhealthy" も部分一致するため true になる点に注意。
pub fn is_healthy(text: &str) -> bool {
    HEALTHY_RE.is_match(text)
}

/// 提案部分の抽出
///
/// 最初の "suggest"（大文字小文字を区別しない）から末尾までを
/// 元テキストのまま返す。見つからなければ None。
pub fn recommendations(text: &str) -> Option<&str> {
    SUGGEST_RE.find(text).map(|m| &text[m.start()..])
}

/// 先頭文（最初の `.` まで）
pub fn headline(text: &str) -> String {
    let first = text.split('.').next().unwrap_or_default();
    format!("{}.", first)
}
