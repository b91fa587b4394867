//! 解析結果の型定義
//!
//! 正規化層が出力する型:
//! - NutrientDistribution: 栄養素の割合（Protein/Carbs/Fatは合計100に正規化）
//! - FoodCalorieList: 品目ごとのカロリー（出現順）
//! - Extraction: 抽出値か代替値かを区別するタグ付き結果

use serde::{Deserialize, Serialize};

/// 栄養素（固定の閉じた集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nutrient {
    Protein,
    Carbs,
    Fat,
    Fiber,
    Sugar,
}

impl Nutrient {
    /// 抽出対象の全栄養素（検索順）
    pub const ALL: [Nutrient; 5] = [
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fat,
        Nutrient::Fiber,
        Nutrient::Sugar,
    ];

    /// 合計100に正規化される三大栄養素
    pub const MACROS: [Nutrient; 3] = [Nutrient::Protein, Nutrient::Carbs, Nutrient::Fat];

    /// 表示名（パターン照合にも使用）
    pub fn label(&self) -> &'static str {
        match self {
            Nutrient::Protein => "Protein",
            Nutrient::Carbs => "Carbs",
            Nutrient::Fat => "Fat",
            Nutrient::Fiber => "Fiber",
            Nutrient::Sugar => "Sugar",
        }
    }

    pub fn is_macro(&self) -> bool {
        Self::MACROS.contains(self)
    }
}

impl std::fmt::Display for Nutrient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 栄養素の割合（%）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientDistribution {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub fiber: u32,
    pub sugar: u32,
}

impl NutrientDistribution {
    pub fn get(&self, nutrient: Nutrient) -> u32 {
        match nutrient {
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::Fiber => self.fiber,
            Nutrient::Sugar => self.sugar,
        }
    }

    pub fn set(&mut self, nutrient: Nutrient, value: u32) {
        match nutrient {
            Nutrient::Protein => self.protein = value,
            Nutrient::Carbs => self.carbs = value,
            Nutrient::Fat => self.fat = value,
            Nutrient::Fiber => self.fiber = value,
            Nutrient::Sugar => self.sugar = value,
        }
    }

    /// Protein + Carbs + Fat
    pub fn macro_total(&self) -> u64 {
        Nutrient::MACROS
            .iter()
            .map(|&n| u64::from(self.get(n)))
            .sum()
    }
}

/// 品目とカロリーの組
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodCalorieEntry {
    pub item: String,
    pub calories: u32,
}

impl FoodCalorieEntry {
    pub fn new(item: impl Into<String>, calories: u32) -> Self {
        Self {
            item: item.into(),
            calories,
        }
    }
}

/// 品目カロリーのリスト（解析テキスト中の出現順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodCalorieList(Vec<FoodCalorieEntry>);

impl FoodCalorieList {
    pub fn new(entries: Vec<FoodCalorieEntry>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FoodCalorieEntry> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[FoodCalorieEntry] {
        &self.0
    }

    /// カロリー合計
    pub fn total_calories(&self) -> u64 {
        self.0.iter().map(|e| u64::from(e.calories)).sum()
    }
}

impl From<Vec<FoodCalorieEntry>> for FoodCalorieList {
    fn from(entries: Vec<FoodCalorieEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a FoodCalorieList {
    type Item = &'a FoodCalorieEntry;
    type IntoIter = std::slice::Iter<'a, FoodCalorieEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// 抽出結果
///
/// テキストから実際に読み取れた値（Extracted）と、
/// 何も見つからず表示用に差し込んだ固定値（Fallback）を区別する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "lowercase")]
pub enum Extraction<T> {
    Extracted(T),
    Fallback(T),
}

impl<T> Extraction<T> {
    pub fn value(&self) -> &T {
        match self {
            Extraction::Extracted(v) | Extraction::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Extraction::Fallback(_))
    }
}
