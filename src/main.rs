use calmeal::{analyzer, cli, config, error, export, input, render};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("❌ An error occurred during analysis: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    // 設定ファイルはモデル呼び出しと設定変更でのみ読む（parse/showはオフラインで動く）
    match cli.command {
        Commands::Analyze { image, media_type, model, output, excel, show_raw } => {
            println!("🥗 CalMeal - Know Your Food\n");

            // 1. 画像読み込み
            println!("[1/3] 画像を読み込み中...");
            let image_input = input::load_image(&image, media_type)?;
            println!("✔ {} ({} bytes)\n", image.display(), image_input.len());

            // 2. モデル呼び出し
            let mut config = Config::load()?;
            if let Some(model) = model {
                config.model = model;
            }
            let client = analyzer::GeminiClient::new(&config)?;

            println!("[2/3] AI解析中... (モデル: {})", config.model);
            let spinner = spinner("Analyzing your meal...");
            let result = analyzer::analyze_meal(&client, &image_input).await;
            spinner.finish_and_clear();
            let report = result?;
            println!("✔ 解析完了\n");

            // 3. 表示・保存
            println!("[3/3] 結果\n");
            print!("{}", render::render_report(&report, show_raw));

            let source = image.display().to_string();
            let stem = file_stem(&image);
            write_outputs(&report, &source, Some(config.model.as_str()), &stem, output.as_deref(), excel.as_deref())?;

            println!("\n✅ 完了");
        }

        Commands::Parse { input, output, excel, show_raw } => {
            println!("📄 CalMeal - 解析テキストの正規化\n");

            let text = std::fs::read_to_string(&input).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    error::CalMealError::FileNotFound(input.display().to_string())
                } else {
                    e.into()
                }
            })?;

            let report = calmeal::NutritionReport::from_text(&text);
            print!("{}", render::render_report(&report, show_raw));

            let source = input.display().to_string();
            let stem = file_stem(&input);
            write_outputs(&report, &source, None, &stem, output.as_deref(), excel.as_deref())?;
        }

        Commands::Show { input, show_raw } => {
            if !input.exists() {
                return Err(error::CalMealError::FileNotFound(input.display().to_string()));
            }
            let report = export::load_json(&input)?;
            print!("{}", render::render_report(&report, show_raw));
        }

        Commands::Config { set_api_key, set_model, show } => {
            let mut config = if set_api_key.is_some() || set_model.is_some() {
                Config::load_for_update()?
            } else {
                Config::load()?
            };

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if let Some(model) = set_model {
                config.set_model(model)?;
                println!("✔ モデルを設定しました");
            }

            if show {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  APIエンドポイント: {}", config.api_base);
                match config.timeout_seconds {
                    Some(secs) => println!("  タイムアウト: {}秒", secs),
                    None => println!("  タイムアウト: なし"),
                }
                println!("  APIキー: {}", if config.get_api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "calmeal".to_string())
}

fn write_outputs(
    report: &calmeal::NutritionReport,
    source: &str,
    model: Option<&str>,
    stem: &str,
    output: Option<&Path>,
    excel: Option<&Path>,
) -> Result<()> {
    if let Some(output) = output {
        let path = export::output_path_for_format(output, stem, "json");
        export::save_json(report, source, model, &path)?;
        println!("✔ JSON出力: {}", path.display());
    }

    if let Some(excel) = excel {
        let path = export::output_path_for_format(excel, stem, "xlsx");
        println!("- Excelを生成中...");
        export::excel::generate_excel(report, &path)?;
        println!("✔ Excel出力: {}", path.display());
    }

    Ok(())
}
