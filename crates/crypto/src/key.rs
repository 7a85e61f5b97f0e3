//! # RSA公開鍵の読み込み
//!
//! X.509 SubjectPublicKeyInfo（DER形式）のRSA公開鍵のみを受け付ける。
//! PEM形式の鍵は事前にDERへ変換しておくこと:
//!
//! ```text
//! openssl rsa -inform PEM -in pubkey.pem -outform DER -pubin -out pubkey.der
//! ```

use std::path::Path;

use der::asn1::ObjectIdentifier;
use der::Decode;
use rsa::pkcs1::RsaPublicKey as Pkcs1RsaPublicKey;
use rsa::{BigUint, RsaPublicKey};
use x509_cert::spki::SubjectPublicKeyInfoRef;

use crate::error::SignVerError;

/// rsaEncryption (PKCS#1)
const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// 受け付けるモジュラス長の上限（ビット）
pub const MAX_MODULUS_BITS: usize = 16384;

/// 鍵ファイルを読み込み、RSA公開鍵としてパースする。
///
/// ファイル全体をメモリに読み込み、ハンドルは読み込み直後に解放される。
pub fn load_public_key(path: impl AsRef<Path>) -> Result<RsaPublicKey, SignVerError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| SignVerError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_public_key_der(&bytes)
}

/// SubjectPublicKeyInfo（DER）をRSA公開鍵としてパースする。
///
/// 末尾に余分なバイトがある場合や、アルゴリズムがrsaEncryption以外の場合はエラー。
pub fn parse_public_key_der(der_bytes: &[u8]) -> Result<RsaPublicKey, SignVerError> {
    let spki = SubjectPublicKeyInfoRef::from_der(der_bytes)
        .map_err(|e| SignVerError::KeyFormat(format!("SubjectPublicKeyInfo: {}", e)))?;

    if spki.algorithm.oid != RSA_ENCRYPTION {
        return Err(SignVerError::KeyFormat(format!(
            "RSA鍵ではありません (algorithm: {})",
            spki.algorithm.oid
        )));
    }

    // rsa の SPKI 変換は 4096 ビットを上限とするため、PKCS#1 構造を直接デコードする
    let pkcs1 = Pkcs1RsaPublicKey::from_der(spki.subject_public_key.raw_bytes())
        .map_err(|e| SignVerError::KeyFormat(format!("RSAPublicKey (PKCS#1): {}", e)))?;
    let n = BigUint::from_bytes_be(pkcs1.modulus.as_bytes());
    let e = BigUint::from_bytes_be(pkcs1.public_exponent.as_bytes());

    let modulus_bits = n.bits();
    if modulus_bits > MAX_MODULUS_BITS {
        return Err(SignVerError::KeyFormat(format!(
            "モジュラス長 {} ビットは上限 {} ビットを超えています",
            modulus_bits,
            MAX_MODULUS_BITS
        )));
    }

    RsaPublicKey::new_with_max_size(n, e, MAX_MODULUS_BITS)
        .map_err(|e| SignVerError::KeyFormat(format!("RSA公開鍵: {}", e)))
}
