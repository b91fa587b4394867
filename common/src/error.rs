//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("画像が指定されていません")]
    MissingInput,

    #[error("未対応のメディアタイプ: {0} (jpeg/pngのみ対応)")]
    UnsupportedMediaType(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
