use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use pixelmagic::{Cli, ImageProcessor};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // Initialize logger
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("The program failed with the following error:");
            if cli.verbose {
                eprintln!("{:?}", e);
            } else {
                eprintln!("{:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let input = cli.command.input();
    let output = cli.command.output();

    let processor = ImageProcessor::new(cli.command.operation());
    let report = processor
        .process(input, output)
        .with_context(|| format!("failed to process {}", input.display()))?;

    for notice in &report.notices {
        log::warn!("Warning: {}", notice);
    }

    println!(
        "Saved {}x{} {} image to: {}",
        report.output_dimensions.0,
        report.output_dimensions.1,
        report.output_mode,
        output.display()
    );

    Ok(())
}
