//! 栄養素割合の抽出
//!
//! 解析テキスト中の `Protein: 25%` のような記述から割合を読み取り、
//! 三大栄養素（Protein/Carbs/Fat）を合計100に正規化する。
//! Fiber/Sugarは読み取った値をそのまま返す。

use crate::digits::parse_decimal;
use crate::types::{Extraction, Nutrient, NutrientDistribution};
use regex::Regex;

/// 三大栄養素が一つも見つからない場合の代替値
pub const FALLBACK_MACROS: [(Nutrient, u32); 3] = [
    (Nutrient::Protein, 33),
    (Nutrient::Carbs, 34),
    (Nutrient::Fat, 33),
];

lazy_static::lazy_static! {
    static ref NUTRIENT_PATTERNS: Vec<(Nutrient, Regex)> = Nutrient::ALL
        .iter()
        .map(|&n| {
            let pattern = format!(r"(?i){}:?\s*(\d+)%", regex::escape(n.label()));
            (n, Regex::new(&pattern).unwrap())
        })
        .collect();
}

/// 解析テキストから栄養素の割合を抽出
///
/// 1. 各栄養素の最初の `<名前>:? <数字>%` を取得（なければ0）
/// 2. Protein/Carbs/Fatがすべて0なら 33/34/33 を代替値として使用（Fallback）
/// 3. 三大栄養素を `round(value * 100 / sum)` で再計算
///
/// 丸めは偶数丸め（round-half-to-even）。合計が99や101になる誤差は補正しない。
///
/// # Examples
/// ```
/// use calmeal_common::extract_nutrients;
///
/// let result = extract_nutrients("Protein: 25%, Carbs: 50%, Fat: 25%");
/// assert!(!result.is_fallback());
/// assert_eq!(result.value().carbs, 50);
/// ```
pub fn extract_nutrients(text: &str) -> Extraction<NutrientDistribution> {
    let mut dist = NutrientDistribution::default();

    for (nutrient, re) in NUTRIENT_PATTERNS.iter() {
        let value = re
            .captures(text)
            .and_then(|cap| parse_decimal(&cap[1]))
            .unwrap_or(0);
        dist.set(*nutrient, value);
    }

    let fallback = dist.macro_total() == 0;
    if fallback {
        for (nutrient, value) in FALLBACK_MACROS {
            dist.set(nutrient, value);
        }
    }

    normalize_macros(&mut dist);

    if fallback {
        Extraction::Fallback(dist)
    } else {
        Extraction::Extracted(dist)
    }
}

/// 三大栄養素を合計100に揃える（Fiber/Sugarは対象外）
fn normalize_macros(dist: &mut NutrientDistribution) {
    let sum = dist.macro_total();
    if sum == 0 {
        return;
    }

    for nutrient in Nutrient::MACROS {
        let scaled = round_half_even(u64::from(dist.get(nutrient)) * 100, sum);
        dist.set(nutrient, u32::try_from(scaled).unwrap_or(u32::MAX));
    }
}

/// `numerator / denominator` を偶数丸めで整数化
fn round_half_even(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let twice = remainder * 2;

    if twice > denominator || (twice == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
