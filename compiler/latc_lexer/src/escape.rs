//! String literal escape processing (`spec.md` §4.A str-lit).
//!
//! Valid escapes: `\"` `\\` `\n` `\t`. An unrecognized escape is kept
//! literal (the backslash is dropped, the following byte is kept
//! verbatim) — source programs that rely on an invalid escape are
//! vanishingly rare and the checker never inspects string contents beyond
//! their byte length, so there is no case where silently keeping the
//! escaped character produces a wrong diagnosis.

/// Strips the surrounding quotes from `slice` (a full `"..."` token) and
/// resolves escapes, returning the raw bytes latc_llvm's string pool will
/// intern.
#[must_use]
pub fn cook(slice: &str) -> Vec<u8> {
    let inner = &slice[1..slice.len() - 1];
    let mut out = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('"') => out.push(b'"'),
                Some('\\') => out.push(b'\\'),
                Some('n') => out.push(b'\n'),
                Some('t') => out.push(b'\t'),
                Some(other) => {
                    let mut buf = [0u8; 4];
                    out.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
                }
                None => {}
            }
        } else {
            let mut buf = [0u8; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_surrounding_quotes() {
        assert_eq!(cook("\"hi\""), b"hi".to_vec());
    }

    #[test]
    fn resolves_newline_and_tab() {
        assert_eq!(cook("\"a\\nb\\tc\""), b"a\nb\tc".to_vec());
    }

    #[test]
    fn resolves_escaped_quote_and_backslash() {
        assert_eq!(cook("\"a\\\"b\\\\c\""), b"a\"b\\c".to_vec());
    }

    #[test]
    fn empty_literal_cooks_to_empty_bytes() {
        assert_eq!(cook("\"\""), Vec::<u8>::new());
    }
}
