//! # 署名付きクエリ文字列
//!
//! 決済サーバーからの戻りURLのクエリ文字列は、最後のパラメータが署名になっている。
//!
//! ```text
//! Amount=400&BasketID=4000&Auto=42&Error=00000&Sig=<Base64 → URLエンコード>
//! \_________________ 署名対象データ ________________/ \_______ 署名 _______/
//! ```
//!
//! 署名対象はクエリ文字列の生のテキスト（URLデコードしない）。
//! 署名パラメータは必ず最後に置かれる前提で、名前は問わない。

use rsa::RsaPublicKey;

use crate::encoding::decode_signature;
use crate::error::SignVerError;
use crate::verify::{verify, SignatureAlgorithm};

/// 署名対象データと署名に分離したクエリ文字列。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedQuery {
    /// 署名対象データ（最後の `&` より前の生テキスト）
    pub data: Vec<u8>,
    /// デコード済みの署名バイト列
    pub signature: Vec<u8>,
}

impl SignedQuery {
    /// クエリ文字列を署名対象データと署名に分離する。
    /// 先頭の `?` は無視する。
    pub fn parse(query: &str) -> Result<Self, SignVerError> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let (data, last_param) = query.rsplit_once('&').ok_or_else(|| {
            SignVerError::MalformedQuery("区切り文字 '&' がありません".into())
        })?;
        let (_, encoded_signature) = last_param.split_once('=').ok_or_else(|| {
            SignVerError::MalformedQuery(format!(
                "最後のパラメータに値がありません: {}",
                last_param
            ))
        })?;

        Ok(Self {
            data: data.as_bytes().to_vec(),
            signature: decode_signature(encoded_signature)?,
        })
    }

    /// 署名を検証する。
    pub fn verify(
        &self,
        algorithm: SignatureAlgorithm,
        public_key: &RsaPublicKey,
    ) -> Result<bool, SignVerError> {
        verify(&self.data, &self.signature, algorithm, public_key)
    }
}
