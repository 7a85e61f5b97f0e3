//! # signver CLI
//!
//! DER形式のRSA公開鍵で署名を検証し、結果を1行出力する。
//!
//! ## 処理の流れ
//! 1. アルゴリズム名の確認
//! 2. 入力のデコード（引数、または標準入力）
//! 3. 公開鍵の読み込み
//! 4. 署名検証と結果の出力
//!
//! 標準出力には検証結果の1行のみを出力する。ログは標準エラー出力（`RUST_LOG` で制御）。
//! 鍵の読み込み・デコード・検証のいずれかが失敗した場合は非ゼロで終了する。

mod config;
mod error;
mod input;

use std::io::BufRead;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use signver_crypto::{
    decode_data, decode_signature, load_public_key, RsaPublicKey, SignatureAlgorithm,
    SignedQuery,
};
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, Command, KeyArgs};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let valid = run(cli.command, &mut stdin.lock())?;

    println!("{}", result_line(valid));
    Ok(())
}

/// 標準出力に出す検証結果の1行。
fn result_line(valid: bool) -> String {
    format!("署名検証結果: {}", valid)
}

/// サブコマンドを実行し、検証結果を返す。
fn run<R: BufRead>(command: Command, stdin: &mut R) -> anyhow::Result<bool> {
    match command {
        Command::Verify(args) => {
            let algorithm = parse_algorithm(&args.key)?;

            let data = input::arg_or_line(args.data, stdin, "署名対象データ")?;
            let sig = input::arg_or_line(args.sig, stdin, "署名")?;
            let data_bytes =
                decode_data(&data).context("署名対象データのデコードに失敗")?;
            let sig_bytes = decode_signature(&sig).context("署名のデコードに失敗")?;
            tracing::debug!(
                "データ {} バイト、署名 {} バイト",
                data_bytes.len(),
                sig_bytes.len()
            );

            let public_key = load_key(&args.key.key)?;
            let valid = signver_crypto::verify(&data_bytes, &sig_bytes, algorithm, &public_key)
                .context("署名検証に失敗")?;
            tracing::info!("署名検証完了 ({}): {}", algorithm, valid);
            Ok(valid)
        }
        Command::Query(args) => {
            let algorithm = parse_algorithm(&args.key)?;

            let query = input::arg_or_line(args.query, stdin, "クエリ文字列")?;
            let signed =
                SignedQuery::parse(&query).context("クエリ文字列の分離に失敗")?;
            tracing::debug!(
                "署名対象データ {} バイト、署名 {} バイト",
                signed.data.len(),
                signed.signature.len()
            );

            let public_key = load_key(&args.key.key)?;
            let valid = signed
                .verify(algorithm, &public_key)
                .context("署名検証に失敗")?;
            tracing::info!("クエリ文字列の署名検証完了 ({}): {}", algorithm, valid);
            Ok(valid)
        }
    }
}

fn parse_algorithm(args: &KeyArgs) -> anyhow::Result<SignatureAlgorithm> {
    let algorithm = args.algorithm.parse::<SignatureAlgorithm>()?;
    tracing::debug!("署名アルゴリズム: {}", algorithm);
    Ok(algorithm)
}

fn load_key(path: &Path) -> anyhow::Result<RsaPublicKey> {
    tracing::debug!("公開鍵を読み込み中: {}", path.display());
    let public_key = load_public_key(path)
        .with_context(|| format!("公開鍵の読み込みに失敗: {}", path.display()))?;
    Ok(public_key)
}
