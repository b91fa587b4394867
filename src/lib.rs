//! CalMeal
//!
//! 食事写真をビジョン言語モデルへ送り、返ってきた解析テキストを
//! 栄養素割合・品目カロリーへ正規化して表示・出力する。

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
pub mod render;

pub use calmeal_common::NutritionReport;
