//! # 標準入力からの読み込み
//!
//! 引数で省略された入力を1行ずつ読む。

use std::io::BufRead;

use crate::error::InputError;

/// 1行読み込み、末尾の改行（`\n` / `\r\n`）を取り除いて返す。
pub fn read_line<R: BufRead>(reader: &mut R, what: &'static str) -> Result<String, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::MissingLine(what));
    }
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// 引数で指定されていればそれを、なければ標準入力の次の行を使う。
pub fn arg_or_line<R: BufRead>(
    arg: Option<String>,
    reader: &mut R,
    what: &'static str,
) -> Result<String, InputError> {
    match arg {
        Some(value) => Ok(value),
        None => read_line(reader, what),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    /// 改行が取り除かれ、順に読めること
    #[test]
    fn test_read_lines_in_order() {
        let mut input = Cursor::new("hello+world\r\nAAEC\n");
        assert_eq!(read_line(&mut input, "データ").unwrap(), "hello+world");
        assert_eq!(read_line(&mut input, "署名").unwrap(), "AAEC");
    }

    /// 最終行に改行がなくても読めること
    #[test]
    fn test_read_last_line_without_newline() {
        let mut input = Cursor::new("AAEC");
        assert_eq!(read_line(&mut input, "署名").unwrap(), "AAEC");
    }

    /// 入力が尽きたらMissingLineエラーになること
    #[test]
    fn test_read_line_eof() {
        let mut input = Cursor::new("only-one\n");
        read_line(&mut input, "データ").unwrap();
        assert!(matches!(
            read_line(&mut input, "署名"),
            Err(InputError::MissingLine("署名"))
        ));
    }

    /// 引数が優先され、標準入力は消費されないこと
    #[test]
    fn test_arg_takes_precedence() {
        let mut input = Cursor::new("from-stdin\n");
        assert_eq!(
            arg_or_line(Some("from-arg".into()), &mut input, "データ").unwrap(),
            "from-arg"
        );
        assert_eq!(arg_or_line(None, &mut input, "署名").unwrap(), "from-stdin");
    }
}
