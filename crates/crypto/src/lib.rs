//! # signver 暗号処理
//!
//! DER形式のRSA公開鍵で、URLエンコード（署名はさらにBase64）された
//! データの署名を検証する。
//!
//! ## 処理の流れ
//! 1. 入力のデコード（[`encoding`]）
//! 2. 公開鍵の読み込み（[`key`]）
//! 3. 署名検証（[`verify`]）
//!
//! ## 対応アルゴリズム
//! | 名前 | ダイジェスト | パディング |
//! |------|------------|-----------|
//! | `SHA1withRSA` | SHA-1 | PKCS#1 v1.5 |
//! | `SHA256withRSA` | SHA-256 | PKCS#1 v1.5 |
//! | `SHA384withRSA` | SHA-384 | PKCS#1 v1.5 |
//! | `SHA512withRSA` | SHA-512 | PKCS#1 v1.5 |
//!
//! 暗号プリミティブは全てRustCryptoの `rsa` / `sha1` / `sha2` に委譲する。

pub mod encoding;
pub mod error;
pub mod key;
pub mod query;
pub mod verify;

#[cfg(test)]
mod test_helpers;

pub use encoding::{decode_data, decode_signature};
pub use error::SignVerError;
pub use key::{load_public_key, parse_public_key_der};
pub use query::SignedQuery;
pub use rsa::RsaPublicKey;
pub use verify::{verify, verify_str, SignatureAlgorithm};
