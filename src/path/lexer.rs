use crate::foundation::error::{EpicycleError, EpicycleResult};

/// Byte range of a token within the path string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

/// One lexed path token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    /// Token payload.
    pub kind: TokenKind,
    /// Location in the source string.
    pub span: Span,
}

/// Path tokens are either a single command letter or a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Any ASCII letter; unsupported letters are filtered later by the parser.
    Command(char),
    /// Signed decimal, optionally with exponent.
    Number(f64),
}

/// Split path data into command letters and numbers.
///
/// Whitespace and commas separate tokens. A sign or a second decimal point
/// also starts a new number, so `10-5` and `1.5.5` lex as two numbers each.
pub fn lex_path(input: &str) -> EpicycleResult<Vec<Token>> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;

    let digit_at = |j: usize| j < bytes.len() && bytes[j].is_ascii_digit();

    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() || c == ',' {
            i += 1;
            continue;
        }

        let start = i;

        if c.is_ascii_alphabetic() {
            i += 1;
            out.push(Token {
                kind: TokenKind::Command(c),
                span: Span { start, end: i },
            });
            continue;
        }

        if c == '+' || c == '-' || c == '.' || c.is_ascii_digit() {
            if c == '+' || c == '-' {
                i += 1;
            }
            let mantissa_start = i;
            while digit_at(i) {
                i += 1;
            }
            if i < bytes.len() && bytes[i] == b'.' {
                i += 1;
                while digit_at(i) {
                    i += 1;
                }
            }
            let mantissa = &input[mantissa_start..i];
            if !mantissa.bytes().any(|b| b.is_ascii_digit()) {
                let end = i.max(start + 1);
                return Err(EpicycleError::parse(
                    start,
                    &input[start..end],
                    "expected digits in number",
                ));
            }

            // exponent
            if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
                i += 1;
                if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
                    i += 1;
                }
                let exp_start = i;
                while digit_at(i) {
                    i += 1;
                }
                if exp_start == i {
                    return Err(EpicycleError::parse(
                        start,
                        &input[start..i],
                        "invalid number exponent (expected digits)",
                    ));
                }
            }

            let s = &input[start..i];
            let v: f64 = s
                .parse()
                .map_err(|_| EpicycleError::parse(start, s, "invalid number"))?;
            if !v.is_finite() {
                return Err(EpicycleError::parse(start, s, "number out of range"));
            }
            out.push(Token {
                kind: TokenKind::Number(v),
                span: Span { start, end: i },
            });
            continue;
        }

        let ch = input[start..].chars().next().unwrap_or(c);
        return Err(EpicycleError::parse(
            start,
            ch.to_string(),
            format!("unexpected character '{ch}'"),
        ));
    }

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/path/lexer.rs"]
mod tests;
