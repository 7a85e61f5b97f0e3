//! # 署名検証のエラー型
//!
//! 鍵読み込み・デコード・検証の全段階で共通。
//! どのエラーも局所的には回復せず、呼び出し元へそのまま伝播する。

/// 署名検証処理のエラー型。
#[derive(Debug, thiserror::Error)]
pub enum SignVerError {
    /// 鍵ファイルを読み込めない（存在しない、権限がない等）
    #[error("鍵ファイルの読み込みに失敗 ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 鍵のバイト列がX.509 SubjectPublicKeyInfo（RSA, DER）として不正
    #[error("公開鍵の形式が不正: {0}")]
    KeyFormat(String),
    /// パーセントエスケープまたはBase64が不正
    #[error("デコードに失敗: {0}")]
    Encoding(String),
    /// 未対応の署名アルゴリズム名
    #[error("未対応の署名アルゴリズム: {0}")]
    UnsupportedAlgorithm(String),
    /// 署名バイト列がアルゴリズムの署名として構造的に不正
    #[error("署名の形式が不正: {0}")]
    MalformedSignature(String),
    /// 署名付きクエリ文字列から署名を分離できない
    #[error("署名付きクエリ文字列が不正: {0}")]
    MalformedQuery(String),
}
