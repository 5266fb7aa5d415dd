//! Runtime ABI declarations (`spec.md` §6 "Runtime ABI").
//!
//! The emitted module only declares the builtins a program actually calls
//! (`spec.md` §4.C: "used-builtin set"), in this fixed canonical order so
//! output is deterministic regardless of call order in the source.

/// `(name, declare line)` pairs in canonical emission order.
const DECLARES: &[(&str, &str)] = &[
    ("printInt", "declare void @printInt(i32)"),
    ("printString", "declare void @printString(i8*)"),
    ("error", "declare void @error()"),
    ("readInt", "declare i32 @readInt()"),
    ("readString", "declare i8* @readString()"),
    ("strcmp", "declare i32 @strcmp(i8*, i8*)"),
    ("strconcat", "declare i8* @strconcat(i8*, i8*)"),
];

/// Returns the declare lines for exactly the names in `used`, in canonical
/// order, ignoring names `used` names that aren't runtime builtins.
#[must_use]
pub fn declare_lines<'a>(used: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let used: Vec<&str> = used.into_iter().collect();
    DECLARES
        .iter()
        .filter(|(name, _)| used.contains(name))
        .map(|(_, line)| (*line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_used_builtins_are_declared() {
        let lines = declare_lines(["printInt"]);
        assert_eq!(lines, vec!["declare void @printInt(i32)".to_string()]);
    }

    #[test]
    fn declare_order_is_canonical_regardless_of_input_order() {
        let lines = declare_lines(["readString", "printInt"]);
        assert_eq!(
            lines,
            vec![
                "declare void @printInt(i32)".to_string(),
                "declare i8* @readString()".to_string(),
            ]
        );
    }

    #[test]
    fn unused_builtins_are_absent() {
        let lines = declare_lines(["printInt"]);
        assert!(!lines.iter().any(|l| l.contains("strcmp")));
    }
}
