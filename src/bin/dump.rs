use std::process::ExitCode;

use clap::Parser;

use cfgc::{
    error::Error,
    grammar::ContextFreeGrammar,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grammar descriptions to load
    #[arg(value_name = "GRAMMAR", required = true)]
    grammars: Vec<String>,
}

fn run(args: &Args) -> Result<(), Error> {
    let mut builder = ContextFreeGrammar::builder();

    for path in &args.grammars {
        builder = builder.grammar_file(path)?;
    }

    print!("{}", builder.build());

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
