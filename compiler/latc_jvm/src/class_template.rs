//! Jasmin class-file text assembly (`spec.md` §4.D / §4.G).

pub struct JvmMethod {
    pub name: String,
    /// JVM method descriptor, e.g. `(II)I`.
    pub descriptor: String,
    pub stack_limit: u32,
    pub locals_limit: u16,
    pub body: Vec<String>,
}

/// Renders one `.method ... .end method` block. User methods are always
/// `public static`, matching the fact that latc functions have no
/// receiver (`spec.md` §4.D).
#[must_use]
pub fn assemble_method(m: &JvmMethod) -> String {
    let mut lines = vec![format!(".method public static {}{}", m.name, m.descriptor)];
    lines.push(format!("    .limit stack {}", m.stack_limit));
    lines.push(format!("    .limit locals {}", m.locals_limit));
    for line in &m.body {
        lines.push(format!("    {line}"));
    }
    lines.push("    return".to_string());
    lines.push(".end method".to_string());
    lines.join("\n")
}

/// Assembles the full `.class` file: header, default constructor, then one
/// block per user method in declaration order.
#[must_use]
pub fn assemble_class(class_name: &str, methods: &[JvmMethod]) -> String {
    let mut sections = vec![
        format!(".class public {class_name}"),
        ".super java/lang/Object".to_string(),
        [
            ".method public <init>()V",
            "    aload_0",
            "    invokespecial java/lang/Object/<init>()V",
            "    return",
            ".end method",
        ]
        .join("\n"),
    ];
    for m in methods {
        sections.push(assemble_method(m));
    }
    let mut text = sections.join("\n\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_header_and_default_constructor_are_present() {
        let text = assemble_class("Foo", &[]);
        assert!(text.contains(".class public Foo"));
        assert!(text.contains(".super java/lang/Object"));
        assert!(text.contains("invokespecial java/lang/Object/<init>()V"));
    }

    #[test]
    fn method_carries_its_own_limits() {
        let m = JvmMethod {
            name: "main".to_string(),
            descriptor: "([Ljava/lang/String;)V".to_string(),
            stack_limit: 2,
            locals_limit: 1,
            body: vec!["iconst_0".to_string()],
        };
        let text = assemble_method(&m);
        assert!(text.contains(".limit stack 2"));
        assert!(text.contains(".limit locals 1"));
        assert!(text.contains("iconst_0"));
        assert!(text.trim_end().ends_with(".end method"));
    }

    #[test]
    fn class_has_exactly_one_trailing_newline() {
        let text = assemble_class("Foo", &[]);
        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
    }
}
