use std::process::ExitCode;

use clap::Parser;
use questionnaire::config::{init_logging, ConvertArgs, OutputFormat};

fn main() -> ExitCode {
    let args = ConvertArgs::parse();
    init_logging(&args.log_level);

    let workdir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to get current directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match questionnaire::app::convert(&args, &workdir) {
        Ok(()) => {
            let kind = match args.format {
                OutputFormat::Html => "HTML",
                OutputFormat::Json => "JSON",
            };
            println!("{} written: {}", kind, args.output.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
