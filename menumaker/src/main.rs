use std::{
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use menumaker::{Cli, Outcome, run::write_lines};

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match execute(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", format!("{e:#}").red());
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> anyhow::Result<ExitCode> {
    match menumaker::run(cli)? {
        Outcome::Rendered(lines) => {
            if let Some(path) = &cli.output {
                write_lines(path, &lines)?;
            } else {
                let mut out = BufWriter::new(io::stdout().lock());
                for line in &lines {
                    writeln!(out, "{line}")?;
                }
                out.flush()?;
            }
        }
        Outcome::Valid => {}
        Outcome::ConfigSchema(schema) => println!("{schema}"),
        Outcome::Invalid(err) => {
            for line in err.report_lines() {
                eprintln!("{}", line.yellow());
            }
            eprintln!("{}", "Not a valid JSON menu.".red().bold());
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}
