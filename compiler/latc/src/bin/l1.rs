//! `latc_llvm <input.lat> <project_dir>` (`spec.md` §6): checks and lowers
//! an L1 source file, links it against the project's runtime bitcode, and
//! leaves `<base>.bc` beside the source.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    latc::tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();
    let Some((input, project_dir)) = args.get(1).zip(args.get(2)) else {
        eprintln!("usage: latc_llvm <input.lat> <project_dir>");
        return ExitCode::from(1);
    };

    run(Path::new(input), Path::new(project_dir))
}

fn run(input: &Path, project_dir: &Path) -> ExitCode {
    let source = match std::fs::read_to_string(input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("ERROR\ncannot read {}: {e}", input.display());
            return ExitCode::from(1);
        }
    };

    let program = match latc_parse::parse_l1(&source) {
        Ok(p) => p,
        Err(diagnostics) => {
            print!("{}", latc::render_syntax_error(&source, &diagnostics));
            return ExitCode::from(1);
        }
    };

    let module_text = match latc_check::check_and_lower(&program) {
        Ok(text) => text,
        Err(diagnostics) => {
            print!("{}", latc::render_semantic_error(&source, &diagnostics));
            return ExitCode::from(2);
        }
    };

    let base = latc::base_path(input);
    let ll_path = base.with_extension("ll");
    if let Err(e) = std::fs::write(&ll_path, &module_text) {
        eprintln!("ERROR\ncannot write {}: {e}", ll_path.display());
        return ExitCode::from(1);
    }

    let intermediate_bc = base.with_extension("bc.tmp");
    if let Err(stderr) = latc::run_llvm_as_to(&ll_path, &intermediate_bc) {
        eprintln!("ERROR\nllvm-as failed:\n{stderr}");
        return ExitCode::from(3);
    }

    let bc_path = base.with_extension("bc");
    let runtime_bc = project_dir.join("lib").join("runtime.bc");
    let link_result = latc::run_llvm_link(&intermediate_bc, &runtime_bc, &bc_path);
    let _ = std::fs::remove_file(&intermediate_bc);
    if let Err(stderr) = link_result {
        eprintln!("ERROR\nllvm-link failed:\n{stderr}");
        return ExitCode::from(4);
    }

    println!("OK");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_strips_the_lat_extension() {
        assert_eq!(latc::base_path(Path::new("dir/prog.lat")), PathBuf::from("dir/prog"));
    }
}
