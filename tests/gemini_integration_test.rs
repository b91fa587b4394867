use calmeal::analyzer::{analyze_meal, GeminiClient};
use calmeal::config::Config;
use calmeal_common::{ImageInput, MediaType};

/// 1x1の白PNG
const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00, 0x00, 0x90,
    0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08, 0xD7, 0x63, 0xF8,
    0xFF, 0xFF, 0x3F, 0x00, 0x05, 0xFE, 0x02, 0xFE, 0xDC, 0xCC, 0x59, 0xE7, 0x00, 0x00, 0x00,
    0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

#[tokio::test]
async fn gemini_meal_integration() {
    match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => {}
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    let client = GeminiClient::new(&Config::default()).expect("client init failed");
    let image = ImageInput::new(TINY_PNG.to_vec(), MediaType::Png).unwrap();

    let report = analyze_meal(&client, &image).await.expect("analysis failed");

    // 食べ物が写っていなくても表示用の値は必ず揃う
    assert!(!report.raw_text.is_empty());
    assert!(!report.items.value().is_empty());
    assert!(report.nutrients.value().macro_total() > 0);
}
