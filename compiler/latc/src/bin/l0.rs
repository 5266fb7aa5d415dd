//! `compiler <input.ins> <target> <project_dir>` (`spec.md` §6): lowers an
//! L0 source file to either JVM or LLVM, invoking the matching downstream
//! assembler.

use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    latc::tracing_setup::init();

    let args: Vec<String> = std::env::args().collect();
    let (Some(input), Some(target), Some(project_dir)) = (args.get(1), args.get(2), args.get(3))
    else {
        eprintln!("usage: compiler <input.ins> <target> <project_dir>");
        return ExitCode::from(1);
    };

    match target.as_str() {
        "jvm" => run_jvm(Path::new(input), Path::new(project_dir)),
        "llvm" => run_llvm(Path::new(input)),
        other => {
            eprintln!("unknown target `{other}`, expected `jvm` or `llvm`");
            ExitCode::from(1)
        }
    }
}

fn read_and_parse(input: &Path) -> Result<latc_ir::ast::l0::Program, ExitCode> {
    let source = std::fs::read_to_string(input).map_err(|e| {
        eprintln!("ERROR\ncannot read {}: {e}", input.display());
        ExitCode::from(1)
    })?;
    latc_parse::parse_l0(&source).map_err(|diagnostics| {
        print!("{}", latc::render_syntax_error(&source, &diagnostics));
        ExitCode::from(1)
    })
}

fn run_llvm(input: &Path) -> ExitCode {
    let program = match read_and_parse(input) {
        Ok(p) => p,
        Err(code) => return code,
    };
    let module_text = latc_l0::lower_to_llvm(&program);

    let base = latc::base_path(input);
    let ll_path = base.with_extension("ll");
    if let Err(e) = std::fs::write(&ll_path, &module_text) {
        eprintln!("ERROR\ncannot write {}: {e}", ll_path.display());
        return ExitCode::from(1);
    }

    let bc_path = base.with_extension("bc");
    if let Err(stderr) = latc::run_llvm_as_to(&ll_path, &bc_path) {
        eprintln!("ERROR\nllvm-as failed:\n{stderr}");
        return ExitCode::from(3);
    }

    println!("OK");
    ExitCode::SUCCESS
}

fn run_jvm(input: &Path, project_dir: &Path) -> ExitCode {
    let program = match read_and_parse(input) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let class_name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Prog");
    let module_text = latc_l0::lower_to_jvm(class_name, &program);

    let base = latc::base_path(input);
    let j_path = base.with_extension("j");
    if let Err(e) = std::fs::write(&j_path, &module_text) {
        eprintln!("ERROR\ncannot write {}: {e}", j_path.display());
        return ExitCode::from(1);
    }

    let jasmin_jar = project_dir.join("lib").join("jasmin.jar");
    let outdir = j_path.parent().unwrap_or_else(|| Path::new("."));
    if let Err(stderr) = latc::run_jasmin(&jasmin_jar, outdir, &j_path) {
        eprintln!("ERROR\njasmin failed:\n{stderr}");
        return ExitCode::from(3);
    }

    println!("OK");
    ExitCode::SUCCESS
}
