//! テスト用の鍵・署名生成ヘルパー。
//!
//! 2048ビット鍵の生成は遅いため、テストバイナリごとに一度だけ生成して共有する。

use std::sync::OnceLock;

use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::EncodePublicKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::{RsaPrivateKey, RsaPublicKey};

/// テスト用RSA鍵ペア（署名者と、無関係な第三者）
pub struct TestKeys {
    pub signer: RsaPrivateKey,
    pub other: RsaPrivateKey,
}

pub fn test_keys() -> &'static TestKeys {
    static KEYS: OnceLock<TestKeys> = OnceLock::new();
    KEYS.get_or_init(|| {
        let mut rng = rand::rngs::OsRng;
        TestKeys {
            signer: RsaPrivateKey::new(&mut rng, 2048).unwrap(),
            other: RsaPrivateKey::new(&mut rng, 2048).unwrap(),
        }
    })
}

/// 公開鍵をSubjectPublicKeyInfo（DER）にエンコードする。
pub fn public_key_der(private_key: &RsaPrivateKey) -> Vec<u8> {
    RsaPublicKey::from(private_key)
        .to_public_key_der()
        .unwrap()
        .as_bytes()
        .to_vec()
}

/// SHA1withRSA（PKCS#1 v1.5）で署名する。
pub fn sign_sha1(private_key: &RsaPrivateKey, data: &[u8]) -> Vec<u8> {
    let signing_key = SigningKey::<sha1::Sha1>::new(private_key.clone());
    signing_key.sign(data).to_vec()
}

/// SHA256withRSA（PKCS#1 v1.5）で署名する。
pub fn sign_sha256(private_key: &RsaPrivateKey, data: &[u8]) -> Vec<u8> {
    let signing_key = SigningKey::<sha2::Sha256>::new(private_key.clone());
    signing_key.sign(data).to_vec()
}
