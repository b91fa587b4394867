//! CalMeal Common Library
//!
//! 食事写真の解析テキストを構造化データへ変換するコア。
//! I/Oを持たず、CLIと将来のフロントエンドで共有される。

pub mod types;
pub mod error;
pub mod digits;
pub mod image;
pub mod prompts;
pub mod nutrients;
pub mod calories;
pub mod assessment;
pub mod report;
pub mod export;

pub use types::{
    Extraction, FoodCalorieEntry, FoodCalorieList, Nutrient, NutrientDistribution,
};
pub use error::{Error, Result};
pub use image::{ImageInput, MediaType};
pub use prompts::MEAL_ANALYSIS_PROMPT;
pub use nutrients::extract_nutrients;
pub use calories::extract_calories;
pub use assessment::{headline, is_healthy, recommendations, total_calories};
pub use report::NutritionReport;
