//! # CLI入力のエラー型

/// 標準入力からの読み込みエラー。
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// 必要な行が来る前に標準入力が終わった
    #[error("標準入力から{0}を読み込めません（入力が終了しています）")]
    MissingLine(&'static str),
    /// 標準入力の読み込み失敗
    #[error("標準入力の読み込みに失敗: {0}")]
    Read(#[from] std::io::Error),
}
