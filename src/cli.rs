use calmeal_common::MediaType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calmeal")]
#[command(about = "食事写真のAI栄養解析ツール - Know Your Food", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 食事写真を解析してレポートを表示
    Analyze {
        /// 食事写真（jpeg/png）
        #[arg(required = true)]
        image: PathBuf,

        /// メディアタイプを明示（jpeg/png、省略時は自動判定）
        #[arg(long)]
        media_type: Option<MediaType>,

        /// 使用するモデル（省略時は設定値）
        #[arg(short, long)]
        model: Option<String>,

        /// レポートJSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Excelの出力先
        #[arg(long)]
        excel: Option<PathBuf>,

        /// モデルの出力全文も表示
        #[arg(long)]
        show_raw: bool,
    },

    /// 保存済みのモデル出力テキストを正規化（API呼び出しなし）
    Parse {
        /// モデル出力テキストファイル
        #[arg(required = true)]
        input: PathBuf,

        /// レポートJSONの出力先
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Excelの出力先
        #[arg(long)]
        excel: Option<PathBuf>,

        /// モデルの出力全文も表示
        #[arg(long)]
        show_raw: bool,
    },

    /// 保存済みレポートJSONを表示
    Show {
        /// レポートJSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// モデルの出力全文も表示
        #[arg(long)]
        show_raw: bool,
    },

    /// 設定を表示/編集
    Config {
        /// APIキーを設定
        #[arg(long)]
        set_api_key: Option<String>,

        /// 既定のモデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
