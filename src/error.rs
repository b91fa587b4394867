use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalMealError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("APIキーが設定されていません。`calmeal config --set-api-key YOUR_KEY` で設定するか、GEMINI_API_KEY を設定してください")]
    MissingApiKey,

    #[error("画像が指定されていません: {0}")]
    MissingInput(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("解析サービスの呼び出しに失敗しました: {0}")]
    ExternalService(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error(transparent)]
    Common(#[from] calmeal_common::Error),
}

pub type Result<T> = std::result::Result<T, CalMealError>;
