//! Terminal rendering matching `spec.md` §6/§7 exactly.
//!
//! - Syntax error: `ERROR`, then `Syntax error in line L:C:`, then the
//!   parser's message.
//! - Semantic error: `ERROR`, then `Compilation error in line L:`, then the
//!   offending source line, then an explanatory message.
//!
//! No partial artifact is written when this fires (`spec.md` §7).

use latc_ir::LineIndex;

use crate::Diagnostic;

/// Renders the phase-specific detail for one diagnostic — everything
/// `spec.md` §6/§7 specify after the leading `ERROR` line. Split out from
/// [`render`] so a caller reporting several diagnostics at once (the
/// `latc` driver) can print a single `ERROR` line followed by each
/// diagnostic's body, rather than repeating `ERROR` per diagnostic.
#[must_use]
pub fn render_body(diag: &Diagnostic, source: &str) -> String {
    let index = LineIndex::new(source);
    let (line, col) = index.line_col(diag.span.start);

    let mut out = String::new();
    if diag.code.is_syntax() {
        out.push_str(&format!("Syntax error in line {line}:{col}:\n"));
        out.push_str(&diag.message);
        out.push('\n');
    } else {
        out.push_str(&format!("Compilation error in line {line}:\n"));
        out.push_str(index.line_text(diag.span.start));
        out.push('\n');
        out.push_str(&diag.message);
        out.push('\n');
    }
    out
}

/// Render a single diagnostic into the exact `spec.md` §6/§7 shape,
/// including its leading `ERROR` line.
#[must_use]
pub fn render(diag: &Diagnostic, source: &str) -> String {
    format!("ERROR\n{}", render_body(diag, source))
}

/// Render every diagnostic in `diags` under a single leading `ERROR` line.
/// Used when the parser or checker collects more than one diagnostic
/// before giving up (`spec.md` §7: the process reports `ERROR` once, then
/// every diagnostic body in order).
#[must_use]
pub fn render_all(diags: &[Diagnostic], source: &str) -> String {
    let mut out = String::from("ERROR\n");
    for diag in diags {
        out.push_str(&render_body(diag, source));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use latc_ir::Span;

    #[test]
    fn renders_semantic_error_shape() {
        let src = "int main() {\n  int x;\n  x = true;\n  return 0;\n}\n";
        let offset = src.find("x = true").unwrap() as u32;
        let diag = Diagnostic::new(
            ErrorCode::E2004,
            "type mismatch: expected int, found boolean".to_string(),
            Span::new(offset, offset + 8),
        );
        let rendered = render(&diag, src);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("ERROR"));
        assert_eq!(lines.next(), Some("Compilation error in line 3:"));
        assert_eq!(lines.next(), Some("  x = true;"));
        assert_eq!(
            lines.next(),
            Some("type mismatch: expected int, found boolean")
        );
    }

    #[test]
    fn renders_syntax_error_shape() {
        let src = "int main( {\n  return 0;\n}\n";
        let offset = src.find('{').unwrap() as u32;
        let diag = Diagnostic::syntax("expected `)`", Span::new(offset, offset + 1));
        let rendered = render(&diag, src);
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("ERROR"));
        assert!(lines.next().unwrap().starts_with("Syntax error in line 1:"));
        assert_eq!(lines.next(), Some("expected `)`"));
    }
}
