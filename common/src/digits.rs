//! 数字列の解釈
//!
//! パターンの `\d` はUnicodeの十進数字（全角・アラビア数字など）にも一致するため、
//! ASCII以外の数字も値として読む。

use regex::Regex;

lazy_static::lazy_static! {
    static ref DECIMAL_DIGIT_RE: Regex = Regex::new(r"^\d$").unwrap();
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT_RE.is_match(c.encode_utf8(&mut buf))
}

/// 1文字の十進値
///
/// Unicodeの十進数字は 0..9 が連続した符号位置に並ぶ。
/// 直前に続く数字の先頭（必ず0）からの距離で値を決める。
fn decimal_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }

    Some((c as u32 - start) % 10)
}

/// 十進数字列を `u32` に変換（桁あふれ・数字以外はNone）
pub fn parse_decimal(digits: &str) -> Option<u32> {
    if digits.is_empty() {
        return None;
    }

    digits.chars().try_fold(0u32, |acc, c| {
        let d = decimal_value(c)?;
        acc.checked_mul(10)?.checked_add(d)
    })
}
