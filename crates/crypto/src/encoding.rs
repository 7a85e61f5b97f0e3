//! # 入力のデコード
//!
//! データは `application/x-www-form-urlencoded` 形式でURLエンコードされている。
//! 署名は生成側で Base64 → URLエンコード の順に符号化されているため、
//! URLデコード → Base64デコード の順に戻す。

use base64::Engine;
use percent_encoding::percent_decode;

use crate::error::SignVerError;

/// URLエンコードされた文字列をバイト列に戻す。
///
/// `+` は空白、`%XX` は対応するバイトになる。
/// `%` の後に16進数2桁が続かない場合はエラー（寛容なデコードはしない）。
pub fn url_decode(input: &str) -> Result<Vec<u8>, SignVerError> {
    let bytes = input.as_bytes();
    let mut pos = 0;
    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'%') {
        let start = pos + offset;
        match bytes.get(start + 1..start + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => pos = start + 3,
            _ => {
                return Err(SignVerError::Encoding(format!(
                    "不正なパーセントエスケープ (位置 {})",
                    start
                )))
            }
        }
    }

    // %2B は '+' に戻るので、置換はパーセントデコードの前に行う
    let unplussed: Vec<u8> = bytes
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    Ok(percent_decode(&unplussed).collect())
}

/// バイト列をURLエンコードする。[`url_decode`] の逆変換。
///
/// 英数字と `-_.*` はそのまま、空白は `+`、それ以外は `%XX`。
pub fn url_encode(bytes: &[u8]) -> String {
    form_urlencoded::byte_serialize(bytes).collect()
}

/// 標準Base64（パディングあり）をデコードする。
pub fn base64_decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, SignVerError> {
    base64::engine::general_purpose::STANDARD
        .decode(input)
        .map_err(|e| SignVerError::Encoding(format!("Base64: {}", e)))
}

/// 標準Base64（パディングあり）でエンコードする。
pub fn base64_encode(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// URLエンコードされた署名対象データをデコードする。
pub fn decode_data(input: &str) -> Result<Vec<u8>, SignVerError> {
    url_decode(input)
}

/// URLエンコード・Base64エンコードされた署名をデコードする。
pub fn decode_signature(input: &str) -> Result<Vec<u8>, SignVerError> {
    let base64_text = url_decode(input)?;
    base64_decode(base64_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `+` とパーセントエスケープが戻ること
    #[test]
    fn test_url_decode() {
        assert_eq!(url_decode("hello+world").unwrap(), b"hello world");
        assert_eq!(url_decode("a%3Db%26c").unwrap(), b"a=b&c");
        assert_eq!(url_decode("%2B%2b").unwrap(), b"++");
        assert_eq!(url_decode("%FF%00").unwrap(), vec![0xFF, 0x00]);
        assert_eq!(url_decode("").unwrap(), Vec::<u8>::new());
    }

    /// 不正なパーセントエスケープはEncodingエラーになること
    #[test]
    fn test_url_decode_malformed_escape() {
        for input in ["%", "abc%4", "%G0", "%%41", "100%"] {
            assert!(
                matches!(url_decode(input), Err(SignVerError::Encoding(_))),
                "エラーを期待: {:?}",
                input
            );
        }
    }

    /// 任意のバイト列がURLエンコード→デコードで元に戻ること
    #[test]
    fn test_url_roundtrip() {
        let all_bytes: Vec<u8> = (0..=255u8).collect();
        let encoded = url_encode(&all_bytes);
        assert!(encoded.is_ascii());
        assert_eq!(url_decode(&encoded).unwrap(), all_bytes);

        let text = "Montant=100&Réf=a b+c/d*e~f".as_bytes();
        assert_eq!(url_decode(&url_encode(text)).unwrap(), text);
    }

    /// 任意のバイト列がBase64エンコード→デコードで元に戻ること
    #[test]
    fn test_base64_roundtrip() {
        let all_bytes: Vec<u8> = (0..=255u8).rev().collect();
        for len in [0, 1, 2, 3, 255, 256] {
            let bytes = &all_bytes[..len];
            assert_eq!(base64_decode(base64_encode(bytes)).unwrap(), bytes);
        }
    }

    /// 不正なBase64はEncodingエラーになること
    #[test]
    fn test_base64_decode_invalid() {
        for input in ["abc", "ab!d", "a===", "YQ="] {
            assert!(
                matches!(base64_decode(input), Err(SignVerError::Encoding(_))),
                "エラーを期待: {:?}",
                input
            );
        }
    }

    /// 署名は URLデコード → Base64デコード の順で戻ること
    #[test]
    fn test_decode_signature_layers() {
        let signature = vec![0xFBu8, 0xFF, 0x3E, 0x00, 0x10];
        let b64 = base64_encode(&signature);
        // '+' と '/' を含むBase64で、URLエンコードが効いていること
        assert!(b64.contains('+') && b64.contains('/'));

        let encoded = url_encode(b64.as_bytes());
        assert!(!encoded.contains('+'));
        assert_eq!(decode_signature(&encoded).unwrap(), signature);
    }

    /// URLエンコードされていない '+' は空白になり、Base64として不正になること
    #[test]
    fn test_decode_signature_unescaped_plus() {
        let b64 = base64_encode(&[0xFBu8, 0xFF, 0x3E]);
        assert!(b64.contains('+'));
        assert!(matches!(
            decode_signature(&b64),
            Err(SignVerError::Encoding(_))
        ));
    }
}
