//! 品目別カロリーの抽出
//!
//! `1. Rice - 150 calories` 形式の行を出現順に読み取る。
//! 形式に合わない行（前置きや講評）は無視する。

use crate::digits::parse_decimal;
use crate::types::{Extraction, FoodCalorieEntry, FoodCalorieList};
use regex::Regex;

/// 品目が一つも見つからない場合の代替行
pub const FALLBACK_ITEM: &str = "Sample Item";
pub const FALLBACK_CALORIES: u32 = 500;

lazy_static::lazy_static! {
    static ref ITEM_LINE_RE: Regex =
        Regex::new(r"(?i)\d+\.\s*(.*?)\s*-\s*(\d+)\s*calories").unwrap();
}

/// 解析テキストから品目ごとのカロリーを抽出
///
/// 行ごとに最初の一致のみ採用する。品目名が空の行と、
/// カロリーが `u32` に収まらない行は読み飛ばす。
/// 一件も取れなければ `("Sample Item", 500)` を代替値として返す。
///
/// # Examples
/// ```
/// use calmeal_common::extract_calories;
///
/// let result = extract_calories("1. Rice - 150 calories\n2. Dal - 120 calories");
/// assert_eq!(result.value().total_calories(), 270);
/// ```
pub fn extract_calories(text: &str) -> Extraction<FoodCalorieList> {
    let entries: Vec<FoodCalorieEntry> = text.lines().filter_map(parse_item_line).collect();

    if entries.is_empty() {
        return Extraction::Fallback(FoodCalorieList::new(vec![FoodCalorieEntry::new(
            FALLBACK_ITEM,
            FALLBACK_CALORIES,
        )]));
    }

    Extraction::Extracted(FoodCalorieList::new(entries))
}

fn parse_item_line(line: &str) -> Option<FoodCalorieEntry> {
    let cap = ITEM_LINE_RE.captures(line)?;
    let item = cap[1].trim();
    if item.is_empty() {
        return None;
    }
    let calories = parse_decimal(&cap[2])?;
    Some(FoodCalorieEntry::new(item, calories))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &FoodCalorieList) -> Vec<(&str, u32)> {
        list.iter().map(|e| (e.item.as_str(), e.calories)).collect()
    }

    #[test]
    fn test_extract_two_items_in_order() {
        let result = extract_calories("1. Rice - 150 calories\n2. Dal - 120 calories");
        assert!(!result.is_fallback());
        assert_eq!(pairs(result.value()), vec![("Rice", 150), ("Dal", 120)]);
        assert_eq!(result.value().total_calories(), 270);
    }

    #[test]
    fn test_extract_ignores_prose() {
        let text = r#"Here is the breakdown of your meal:

1. Chapati (2 pieces) - 240 calories
2. Paneer butter masala - 350 Calories
Total: approximately 590 calories.

The meal is fairly heavy on fat."#;

        let result = extract_calories(text);
        assert_eq!(
            pairs(result.value()),
            vec![("Chapati (2 pieces)", 240), ("Paneer butter masala", 350)]
        );
    }

    #[test]
    fn test_extract_markdown_bold_items() {
        let text = "1. **Grilled chicken** - 220 calories\n2.   Salad   -   45 CALORIES";
        let result = extract_calories(text);
        assert_eq!(
            pairs(result.value()),
            vec![("**Grilled chicken**", 220), ("Salad", 45)]
        );
    }

    #[test]
    fn test_extract_hyphenated_item() {
        // 数字が続かないハイフンは品目名の一部
        let text = "1. Stir-fry - 300 calories";
        let result = extract_calories(text);
        assert_eq!(pairs(result.value()), vec![("Stir-fry", 300)]);
    }

    #[test]
    fn test_extract_skips_empty_item() {
        let text = "1. - 100 calories\n2. Curd - 60 calories";
        let result = extract_calories(text);
        assert_eq!(pairs(result.value()), vec![("Curd", 60)]);
    }

    #[test]
    fn test_extract_windows_line_endings() {
        let text = "1. Idli - 80 calories\r\n2. Sambar - 130 calories\r\n";
        let result = extract_calories(text);
        assert_eq!(pairs(result.value()), vec![("Idli", 80), ("Sambar", 130)]);
    }

    #[test]
    fn test_extract_fullwidth_calories() {
        let text = "1. Rice - １５０ calories\n２. Dal - 120 calories";
        let result = extract_calories(text);
        assert!(!result.is_fallback());
        assert_eq!(pairs(result.value()), vec![("Rice", 150), ("Dal", 120)]);
    }

    #[test]
    fn test_extract_skips_overflowing_calories() {
        let text = "1. Feast - 99999999999 calories\n2. Tea - 30 calories";
        let result = extract_calories(text);
        assert_eq!(pairs(result.value()), vec![("Tea", 30)]);
    }

    #[test]
    fn test_fallback_when_no_item_lines() {
        let result = extract_calories("I could not identify the food in this image.");
        assert!(result.is_fallback());
        assert_eq!(pairs(result.value()), vec![("Sample Item", 500)]);
    }

    #[test]
    fn test_fallback_for_empty_text() {
        let result = extract_calories("");
        assert!(result.is_fallback());
        assert_eq!(result.value().len(), 1);
    }
}
