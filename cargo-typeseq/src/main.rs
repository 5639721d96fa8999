use anyhow::Context;
use clap::Parser;
use std::convert::TryFrom;
use std::io::{self, Write};
use std::process::{Command, ExitCode};

mod parse;
mod translate;
use translate::Translator;

#[derive(Parser)]
#[command(name = "cargo", bin_name = "cargo")]
enum Cargo {
    /// Run a cargo command, rewriting type-level numbers and sequences in its diagnostics
    Typeseq(Args),
}

#[derive(clap::Args)]
#[command(version, about, long_about = None)]
struct Args {
    /// Cargo command to run
    #[arg(default_value = "build")]
    command: String,

    /// Arguments passed on to the cargo command
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let Cargo::Typeseq(args) = Cargo::parse();

    let output = Command::new("cargo")
        .arg(&args.command)
        .args(["--color", "never"])
        .args(&args.args)
        .output()
        .with_context(|| format!("failed to run cargo {}", args.command))?;

    io::stdout().write_all(&output.stdout)?;
    Translator::new(io::stderr().lock())
        .translate(&output.stderr)
        .context("failed to write diagnostics")?;

    Ok(match output.status.code() {
        Some(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        None => ExitCode::FAILURE,
    })
}
