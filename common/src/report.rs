//! 解析レポート
//!
//! 正規化層の全出力をまとめた表示用レコード。

use crate::assessment;
use crate::calories::extract_calories;
use crate::nutrients::extract_nutrients;
use crate::types::{Extraction, FoodCalorieList, NutrientDistribution};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionReport {
    pub nutrients: Extraction<NutrientDistribution>,
    pub items: Extraction<FoodCalorieList>,
    /// 表示中の品目（代替行を含む）の合計
    pub total_calories: u64,
    pub healthy: bool,
    pub headline: String,
    pub recommendations: Option<String>,
    /// モデル出力そのまま
    pub raw_text: String,
}

impl NutritionReport {
    /// モデル出力テキストからレポートを組み立てる
    pub fn from_text(raw_text: &str) -> Self {
        let nutrients = extract_nutrients(raw_text);
        let items = extract_calories(raw_text);
        let total_calories = assessment::total_calories(items.value());

        Self {
            nutrients,
            items,
            total_calories,
            healthy: assessment::is_healthy(raw_text),
            headline: assessment::headline(raw_text),
            recommendations: assessment::recommendations(raw_text).map(str::to_string),
            raw_text: raw_text.to_string(),
        }
    }

    /// いずれかの値が代替値かどうか
    pub fn has_fallback(&self) -> bool {
        self.nutrients.is_fallback() || self.items.is_fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"This meal is healthy. It is a balanced North Indian thali.

1. Rice - 150 calories
2. Dal - 120 calories
3. Mixed vegetable sabzi - 90 calories

Protein: 20%, Carbs: 55%, Fat: 25%, Fiber: 8%, Sugar: 5%

Suggest adding a bowl of curd for calcium."#;

    #[test]
    fn test_report_from_text() {
        let report = NutritionReport::from_text(SAMPLE);

        assert!(!report.has_fallback());
        assert_eq!(report.items.value().len(), 3);
        assert_eq!(report.total_calories, 360);
        assert!(report.healthy);
        assert_eq!(report.headline, "This meal is healthy.");
        assert_eq!(
            report.recommendations.as_deref(),
            Some("Suggest adding a bowl of curd for calcium.")
        );

        let dist = report.nutrients.value();
        assert_eq!((dist.protein, dist.carbs, dist.fat), (20, 55, 25));
        assert_eq!((dist.fiber, dist.sugar), (8, 5));
        assert_eq!(report.raw_text, SAMPLE);
    }

    #[test]
    fn test_report_fallback_totals_sample_item() {
        let report = NutritionReport::from_text("Sorry, I can't see any food.");
        assert!(report.has_fallback());
        assert!(report.nutrients.is_fallback());
        assert!(report.items.is_fallback());
        assert_eq!(report.total_calories, 500);
        assert!(report.recommendations.is_none());
    }

    #[test]
    fn test_report_json_round_trip() {
        let report = NutritionReport::from_text(SAMPLE);
        let json = serde_json::to_string_pretty(&report).unwrap();
        assert!(json.contains("\"totalCalories\": 360"));
        assert!(json.contains("\"source\": \"extracted\""));

        let parsed: NutritionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
