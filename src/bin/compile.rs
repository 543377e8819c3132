use std::process::ExitCode;

use clap::Parser;

use cfgc::{
    backends::flat::FlatGenerator,
    error::Error,
    grammar::ContextFreeGrammar,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grammar description to compile
    #[arg(value_name = "GRAMMAR")]
    grammar: String,

    /// Path of the CFG artifact to write
    #[arg(value_name = "OUTPUT")]
    output: String,
}

fn run(args: &Args) -> Result<(), Error> {
    let cfg = ContextFreeGrammar::builder()
        .grammar_file(&args.grammar)?
        .build();

    FlatGenerator::new().generate(&args.output, &cfg)?;

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
