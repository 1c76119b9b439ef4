use std::{
    env,
    path::{Path, PathBuf},
};

use argh::FromArgs;

#[derive(FromArgs, PartialEq, Debug)]
/// Top-level command.
struct Args {
    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    ContinuousIntegration(CIArgs),
    Bless(BlessArgs),
}

#[derive(FromArgs, PartialEq, Debug)]
/// Run the checks a change to the transpiler has to pass.
#[argh(subcommand, name = "ci")]
struct CIArgs {
    #[argh(switch)]
    /// fix formatting and clippy lints, and rewrite stale golden files, instead of failing.
    fix: bool,
}

#[derive(FromArgs, PartialEq, Debug)]
/// Regenerate the golden C files next to the Hormuz sources in lang/tests/data.
#[argh(subcommand, name = "bless")]
struct BlessArgs {
    #[argh(switch)]
    /// only report which golden files are out of date, without writing them.
    check: bool,
}

fn main() -> Result<(), DynError> {
    let args: Args = argh::from_env();
    match args.subcommand {
        SubCommand::ContinuousIntegration(ci_args) => {
            ci(ci_args.fix)?;
        }
        SubCommand::Bless(bless_args) => {
            bless(bless_args.check)?;
        }
    };

    Ok(())
}

type DynError = Box<dyn std::error::Error>;

fn ci(fix: bool) -> Result<(), DynError> {
    let cargo = cargo();
    let root = project_root();
    // The fuzz package sits outside the workspace and needs its own manifest.
    let fuzz_manifest = root.join("fuzz").join("Cargo.toml");

    if fix {
        println!("** formatting the workspace and the fuzz targets");
        duct::cmd!(&cargo, "fmt", "--all").dir(&root).run()?;
        duct::cmd!(&cargo, "fmt", "--manifest-path", &fuzz_manifest).dir(&root).run()?;
        println!("** applying clippy fixes to hormuz and xtask");
        duct::cmd!(&cargo, "clippy", "--workspace", "--all-targets", "--fix", "--allow-dirty")
            .dir(&root)
            .run()?;
    } else {
        println!("** checking formatting of the workspace and the fuzz targets");
        duct::cmd!(&cargo, "fmt", "--all", "--", "--check").dir(&root).run()?;
        duct::cmd!(&cargo, "fmt", "--manifest-path", &fuzz_manifest, "--", "--check")
            .dir(&root)
            .run()?;
        println!("** linting hormuz and xtask, tests included");
        duct::cmd!(&cargo, "clippy", "--workspace", "--all-targets", "--", "--deny", "clippy::all")
            .dir(&root)
            .run()?;
    }

    // Runs the lexer property tests and the CLI tests against a freshly built `hormuz` binary.
    println!("** testing hormuz with warnings denied");
    duct::cmd!(&cargo, "test", "--package", "hormuz")
        .dir(&root)
        .env("RUSTFLAGS", "-D warnings")
        .run()?;

    println!("** comparing lang/tests/data against the current transpiler");
    bless(!fix)?;

    println!("** all checks passed!");
    Ok(())
}

// Each `name.hz` has a `name.c` golden output, and optionally a `name.phrases.c` produced with
// phrase joining enabled.
fn bless(check: bool) -> Result<(), DynError> {
    use hormuz::toolchain::diagnostics::NullDiagnosticConsumer;
    use hormuz::toolchain::lexer::LexOptions;
    use hormuz::toolchain::source::SourceBuffer;

    let data = project_root().join("lang").join("tests").join("data");
    let pattern = data.join("*.hz");
    let mut stale = Vec::new();
    for input in glob::glob(&pattern.to_string_lossy())? {
        let input = input?;
        let source = SourceBuffer::new_from_file(&input)?;
        let variants = [
            (input.with_extension("c"), LexOptions::default()),
            (input.with_extension("phrases.c"), LexOptions { join_phrases: true }),
        ];
        for (golden, options) in variants {
            // Phrase goldens are opt-in, only refresh the ones that exist.
            if options.join_phrases && !golden.exists() {
                continue;
            }
            let mut diags = NullDiagnosticConsumer {};
            let generated = hormuz::toolchain::transpile(&source, options, &mut diags);
            if std::fs::read(&golden).ok().as_deref() == Some(generated.as_slice()) {
                continue;
            }
            println!("** {} is out of date.", golden.display());
            if !check {
                std::fs::write(&golden, &generated)?;
            }
            stale.push(golden);
        }
    }

    if check && !stale.is_empty() {
        return Err(format!("{} golden file(s) out of date, run `cargo xtask bless`", stale.len()).into());
    }
    println!("** done, {} golden file(s) {}.", stale.len(), if check { "stale" } else { "updated" });
    Ok(())
}

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).ancestors().nth(1).unwrap().to_path_buf()
}

fn cargo() -> String {
    env::var("CARGO").unwrap_or_else(|_| "cargo".to_string())
}
