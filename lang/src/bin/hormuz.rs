use std::ffi::OsString;
use std::path::PathBuf;

use hormuz::toolchain;
use hormuz::toolchain::diagnostics::{
    console_diagnostic_consumer, DiagnosticConsumer, NullDiagnosticConsumer,
};
use hormuz::toolchain::lexer::{LexOptions, TokenizedBuffer};
use hormuz::toolchain::source::SourceBuffer;
use thiserror::Error;
use tracing::debug;

const HELP: &str = "\
    hormuz - the Persian C to raw C transpiler

    USAGE:
        hormuz -i INPUT -o OUTPUT [--phase PHASE] [--join-phrases] [--warn]

    OPTIONS:
        -i INPUT            The Hormuz source file to read.
        -o OUTPUT           The C file to write, replaced if it exists.
        --phase PHASE       Which phase to take the input through. PHASE is one of 'lex', which
                            prints the tokens instead of writing OUTPUT, or 'gen' (the default).
        --join-phrases      Also match keywords made of several words, such as 'درحالی که'.
        --warn              Report dropped bytes and unterminated strings on stderr.
";

const USAGE: &str = "Usage: hormuz -i input -o output";

#[derive(Debug, Eq, PartialEq)]
enum TranspilePhase {
    Lex,
    Gen,
}

#[derive(Debug, Eq, PartialEq)]
struct HormuzArgs {
    phase: TranspilePhase,
    join_phrases: bool,
    warn: bool,
    input: PathBuf,
    output: PathBuf,
}

#[derive(Error, Debug)]
enum ArgsError {
    #[error("expected at least an input and an output argument")]
    Usage,

    #[error("missing input/output")]
    MissingInputOutput,

    #[error("unrecognized phase '{0}', expected 'lex' or 'gen'")]
    UnknownPhase(String),

    #[error(transparent)]
    Parse(#[from] pico_args::Error),
}

fn main() {
    hormuz::init_tracing();

    let args = match parse_args(std::env::args_os().skip(1).collect()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", USAGE);
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    let result = if args.warn {
        run(&args, &mut console_diagnostic_consumer())
    } else {
        run(&args, &mut NullDiagnosticConsumer {})
    };

    if let Err(e) = result {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn run(args: &HormuzArgs, diags: &mut impl DiagnosticConsumer) -> Result<(), hormuz::Error> {
    let options = LexOptions { join_phrases: args.join_phrases };
    match args.phase {
        TranspilePhase::Lex => {
            let source = SourceBuffer::new_from_file(&args.input)
                .map_err(|source| hormuz::Error::OpenInput { path: args.input.clone(), source })?;
            let tb = TokenizedBuffer::tokenize_with_options(&source, options, diags);
            diags.flush();
            println!("TokenizedBuffer [");
            tb.print_tokens();
            println!("]");
            Ok(())
        }
        TranspilePhase::Gen => toolchain::transpile_file(&args.input, &args.output, options, diags),
    }
}

fn parse_args(raw: Vec<OsString>) -> Result<HormuzArgs, ArgsError> {
    if raw.iter().any(|a| a == "-h" || a == "--help") {
        print!("{}", HELP);
        std::process::exit(0);
    }

    // The input and output flags alone take four arguments, anything below two is hopeless.
    if raw.len() < 2 {
        return Err(ArgsError::Usage);
    }

    let mut pargs = pico_args::Arguments::from_vec(raw);
    // A repeated flag overrides the earlier ones.
    let input = pargs.values_from_os_str("-i", parse_path)?.pop();
    let output = pargs.values_from_os_str("-o", parse_path)?.pop();
    let phase = match pargs.values_from_str::<_, String>("--phase")?.pop() {
        Some(name) => parse_phase(name)?,
        None => TranspilePhase::Gen,
    };
    let join_phrases = pargs.contains("--join-phrases");
    let warn = pargs.contains("--warn");

    let remaining = pargs.finish();
    if !remaining.is_empty() {
        debug!(?remaining, "ignoring unrecognized arguments");
    }

    match (input, output) {
        (Some(input), Some(output)) => Ok(HormuzArgs { phase, join_phrases, warn, input, output }),
        _ => Err(ArgsError::MissingInputOutput),
    }
}

fn parse_path(s: &std::ffi::OsStr) -> Result<PathBuf, &'static str> {
    Ok(PathBuf::from(s))
}

fn parse_phase(name: String) -> Result<TranspilePhase, ArgsError> {
    match name.as_str() {
        "lex" => Ok(TranspilePhase::Lex),
        "gen" => Ok(TranspilePhase::Gen),
        _ => Err(ArgsError::UnknownPhase(name)),
    }
}
