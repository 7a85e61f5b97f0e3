//! # CLI設定
//!
//! コマンドライン引数と環境変数からの設定読み込み。
//!
//! | 環境変数 | 対応する引数 | デフォルト |
//! |---------|------------|-----------|
//! | `SIGNVER_KEY_FILE` | `--key` | （必須） |
//! | `SIGNVER_ALGORITHM` | `--algorithm` | `SHA1withRSA` |

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// RSA署名検証ツール
#[derive(Debug, Parser)]
#[command(name = "signver", version, about = "RSA署名（PKCS#1 v1.5）の検証")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// URLエンコードされたデータと署名を検証する
    Verify(VerifyArgs),
    /// 最後のパラメータが署名になっているクエリ文字列を検証する
    Query(QueryArgs),
}

/// 鍵とアルゴリズムの指定（全サブコマンド共通）
#[derive(Debug, Args)]
pub struct KeyArgs {
    /// DER形式（X.509 SubjectPublicKeyInfo）のRSA公開鍵ファイル
    #[arg(long, env = "SIGNVER_KEY_FILE")]
    pub key: PathBuf,
    /// 署名アルゴリズム（SHA1withRSA, SHA256withRSA, SHA384withRSA, SHA512withRSA）
    #[arg(long, env = "SIGNVER_ALGORITHM", default_value = "SHA1withRSA")]
    pub algorithm: String,
}

#[derive(Debug, Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub key: KeyArgs,
    /// URLエンコードされた署名対象データ（省略時は標準入力の1行目）
    #[arg(long)]
    pub data: Option<String>,
    /// Base64 → URLエンコードされた署名（省略時は標準入力の次の行）
    #[arg(long)]
    pub sig: Option<String>,
}

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub key: KeyArgs,
    /// 署名付きクエリ文字列（省略時は標準入力の1行目）
    #[arg(long)]
    pub query: Option<String>,
}
