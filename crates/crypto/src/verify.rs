//! # RSA署名検証
//!
//! RSASSA-PKCS#1 v1.5 による署名検証。ダイジェスト計算とRSA検証は
//! `rsa::pkcs1v15::VerifyingKey` に委譲する。
//!
//! ## 不正な署名の扱い
//! - 長さが鍵のモジュラス長（バイト）と異なる署名: [`SignVerError::MalformedSignature`]
//! - 長さは正しいが一致しない署名（値がモジュラス以上、パディング不正を含む）: `Ok(false)`

use std::fmt;
use std::str::FromStr;

use der::oid::AssociatedOid;
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::signature::Verifier;
use rsa::traits::PublicKeyParts;
use rsa::RsaPublicKey;
use sha2::Digest;

use crate::error::SignVerError;

/// 署名アルゴリズム。名前はJCA標準名（例: `SHA1withRSA`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureAlgorithm {
    /// SHA-1 + PKCS#1 v1.5
    #[default]
    Sha1WithRsa,
    /// SHA-256 + PKCS#1 v1.5
    Sha256WithRsa,
    /// SHA-384 + PKCS#1 v1.5
    Sha384WithRsa,
    /// SHA-512 + PKCS#1 v1.5
    Sha512WithRsa,
}

impl SignatureAlgorithm {
    /// JCA標準名
    pub fn name(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1WithRsa => "SHA1withRSA",
            SignatureAlgorithm::Sha256WithRsa => "SHA256withRSA",
            SignatureAlgorithm::Sha384WithRsa => "SHA384withRSA",
            SignatureAlgorithm::Sha512WithRsa => "SHA512withRSA",
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = SignVerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SHA1withRSA" => Ok(SignatureAlgorithm::Sha1WithRsa),
            "SHA256withRSA" => Ok(SignatureAlgorithm::Sha256WithRsa),
            "SHA384withRSA" => Ok(SignatureAlgorithm::Sha384WithRsa),
            "SHA512withRSA" => Ok(SignatureAlgorithm::Sha512WithRsa),
            other => Err(SignVerError::UnsupportedAlgorithm(other.into())),
        }
    }
}

impl fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// データに対する署名を公開鍵で検証する。
///
/// 一致すれば `Ok(true)`、形式は正しいが一致しなければ `Ok(false)`。
pub fn verify(
    data: &[u8],
    signature: &[u8],
    algorithm: SignatureAlgorithm,
    public_key: &RsaPublicKey,
) -> Result<bool, SignVerError> {
    let expected_len = public_key.size();
    if signature.len() != expected_len {
        return Err(SignVerError::MalformedSignature(format!(
            "署名長が {} バイトですが、鍵のモジュラス長は {} バイトです",
            signature.len(),
            expected_len
        )));
    }

    let signature = Signature::try_from(signature)
        .map_err(|e| SignVerError::MalformedSignature(e.to_string()))?;

    let valid = match algorithm {
        SignatureAlgorithm::Sha1WithRsa => {
            pkcs1v15_verify::<sha1::Sha1>(public_key, data, &signature)
        }
        SignatureAlgorithm::Sha256WithRsa => {
            pkcs1v15_verify::<sha2::Sha256>(public_key, data, &signature)
        }
        SignatureAlgorithm::Sha384WithRsa => {
            pkcs1v15_verify::<sha2::Sha384>(public_key, data, &signature)
        }
        SignatureAlgorithm::Sha512WithRsa => {
            pkcs1v15_verify::<sha2::Sha512>(public_key, data, &signature)
        }
    };
    Ok(valid)
}

/// アルゴリズムを名前で指定して検証する。
pub fn verify_str(
    data: &[u8],
    signature: &[u8],
    algorithm: &str,
    public_key: &RsaPublicKey,
) -> Result<bool, SignVerError> {
    let algorithm = algorithm.parse()?;
    verify(data, signature, algorithm, public_key)
}

fn pkcs1v15_verify<D>(public_key: &RsaPublicKey, data: &[u8], signature: &Signature) -> bool
where
    D: Digest + AssociatedOid,
{
    VerifyingKey::<D>::new(public_key.clone())
        .verify(data, signature)
        .is_ok()
}
