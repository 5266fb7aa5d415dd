//! Compressed-form instruction selection (`spec.md` §4.D): Jasmin's short
//! forms for the common cases, falling back to the general form only when a
//! slot or constant doesn't fit.

/// `iload_k` for `k` in `0..=3`, else `iload k`.
#[must_use]
pub fn iload(slot: u16) -> String {
    if slot <= 3 {
        format!("iload_{slot}")
    } else {
        format!("iload {slot}")
    }
}

/// `istore_k` for `k` in `0..=3`, else `istore k`.
#[must_use]
pub fn istore(slot: u16) -> String {
    if slot <= 3 {
        format!("istore_{slot}")
    } else {
        format!("istore {slot}")
    }
}

/// `aload_k` / `aload k` — the reference-typed counterpart of `iload`, used
/// for `Str` locals.
#[must_use]
pub fn aload(slot: u16) -> String {
    if slot <= 3 {
        format!("aload_{slot}")
    } else {
        format!("aload {slot}")
    }
}

/// `astore_k` / `astore k`.
#[must_use]
pub fn astore(slot: u16) -> String {
    if slot <= 3 {
        format!("astore_{slot}")
    } else {
        format!("astore {slot}")
    }
}

/// Smallest instruction that pushes an `i32` constant:
/// `iconst_m1`/`iconst_k` for `-1..=5`, `bipush` for a signed byte,
/// `sipush` for a signed short, `ldc` otherwise.
#[must_use]
pub fn iconst(value: i32) -> String {
    match value {
        -1 => "iconst_m1".to_string(),
        0..=5 => format!("iconst_{value}"),
        -128..=127 => format!("bipush {value}"),
        -32768..=32767 => format!("sipush {value}"),
        _ => format!("ldc {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iload_uses_short_form_for_low_slots() {
        assert_eq!(iload(0), "iload_0");
        assert_eq!(iload(3), "iload_3");
        assert_eq!(iload(4), "iload 4");
    }

    #[test]
    fn istore_uses_short_form_for_low_slots() {
        assert_eq!(istore(1), "istore_1");
        assert_eq!(istore(10), "istore 10");
    }

    #[test]
    fn iconst_picks_the_smallest_encoding() {
        assert_eq!(iconst(-1), "iconst_m1");
        assert_eq!(iconst(0), "iconst_0");
        assert_eq!(iconst(5), "iconst_5");
        assert_eq!(iconst(6), "bipush 6");
        assert_eq!(iconst(127), "bipush 127");
        assert_eq!(iconst(128), "sipush 128");
        assert_eq!(iconst(32767), "sipush 32767");
        assert_eq!(iconst(32768), "ldc 32768");
        assert_eq!(iconst(-129), "sipush -129");
    }

    #[test]
    fn reference_loads_mirror_int_loads() {
        assert_eq!(aload(0), "aload_0");
        assert_eq!(aload(5), "aload 5");
        assert_eq!(astore(2), "astore_2");
        assert_eq!(astore(9), "astore 9");
    }
}
