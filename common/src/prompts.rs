//! プロンプト生成モジュール
//!
//! 食事写真と一緒にモデルへ送る固定の指示文。
//! 品目行・栄養素割合の書式は正規化層のパターンと対になっている。

/// 食事解析用プロンプト
///
/// - 品目: `N. <item> - <calories> calories`
/// - 栄養素: `<Nutrient>: <integer>%`
/// - 提案: "Suggest" で始まる節
pub const MEAL_ANALYSIS_PROMPT: &str = r#"You are an expert nutritionist. Analyze the food items from the image and estimate total calories.
Also, provide a breakdown in this format:
1. Item 1 - number of calories
2. Item 2 - number of calories

Additionally:
- Mention if the food is healthy or not. Special mention for kids if it is complete meal to help them in growth.
- Provide the percentage of protein, carbs, fat, fiber, sugar, and other important nutrients including vitamins.
- Suggest veg food addition or replacement to balance any unhealthy intake.

IMPORTANT: Please include specific percentages for macronutrients. For example: Protein: 25%, Carbs: 50%, Fat: 25%, etc.
"#;
