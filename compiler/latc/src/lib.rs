//! Driver library shared by the two binaries: `compiler` (L0) and
//! `latc_llvm` (L1). Owns the only I/O in the system — reading source,
//! writing artifacts, and shelling out to `llvm-as`, `llvm-link`, and the
//! Jasmin assembler (`spec.md` §5, §6).

pub mod tracing_setup;

use std::path::{Path, PathBuf};
use std::process::Command;

use latc_diagnostic::Diagnostic;

/// Renders a parser-stage failure as `spec.md` §6's exit-code-1 format:
/// one leading `ERROR` line, then `Syntax error in line L:C:` and the
/// parser's message for each collected diagnostic.
#[must_use]
pub fn render_syntax_error(source: &str, diagnostics: &[Diagnostic]) -> String {
    latc_diagnostic::render_all(diagnostics, source)
}

/// Renders a checker-stage failure as `spec.md` §6's exit-code-2 format:
/// one leading `ERROR` line, then `Compilation error in line L:`, the
/// offending source line, and an explanatory message for each diagnostic.
#[must_use]
pub fn render_semantic_error(source: &str, diagnostics: &[Diagnostic]) -> String {
    latc_diagnostic::render_all(diagnostics, source)
}

/// The base name of `path` without its extension, as a `PathBuf` sibling
/// of the source file (e.g. `dir/prog.lat` → `dir/prog`).
#[must_use]
pub fn base_path(path: &Path) -> PathBuf {
    path.with_extension("")
}

/// Runs `llvm-as <ll_path> -o <out_bc>` (`spec.md` §6 exit code 3).
pub fn run_llvm_as_to(ll_path: &Path, out_bc: &Path) -> Result<(), String> {
    run_checked(Command::new("llvm-as").arg(ll_path).arg("-o").arg(out_bc))
}

/// Runs `llvm-link <bc_path> <runtime_bc> -o <out_bc>` (`spec.md` §6 exit
/// code 4).
pub fn run_llvm_link(bc_path: &Path, runtime_bc: &Path, out_bc: &Path) -> Result<(), String> {
    run_checked(
        Command::new("llvm-link")
            .arg(bc_path)
            .arg(runtime_bc)
            .arg("-o")
            .arg(out_bc),
    )
}

/// Runs `java -jar <jasmin_jar> -d <outdir> <j_path>`.
pub fn run_jasmin(jasmin_jar: &Path, outdir: &Path, j_path: &Path) -> Result<(), String> {
    run_checked(
        Command::new("java")
            .arg("-jar")
            .arg(jasmin_jar)
            .arg("-d")
            .arg(outdir)
            .arg(j_path),
    )
}

fn run_checked(command: &mut Command) -> Result<(), String> {
    let output = command
        .output()
        .map_err(|e| format!("failed to spawn {:?}: {e}", command.get_program()))?;
    if output.status.success() {
        Ok(())
    } else {
        Err(String::from_utf8_lossy(&output.stderr).into_owned())
    }
}
