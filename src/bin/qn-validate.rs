use std::process::ExitCode;

use clap::Parser;
use questionnaire::config::{init_logging, user_profile_dir, Config, ValidateArgs};

fn main() -> ExitCode {
    let args = ValidateArgs::parse();
    init_logging(&args.log_level);

    let workdir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Failed to get current directory: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = Config::resolve(&args.profile, &workdir, user_profile_dir())
        .and_then(|config| questionnaire::app::validate(&args, &config));

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{:#}", e);
            return ExitCode::FAILURE;
        }
    };

    if result.is_valid() {
        println!("{}: structure is valid", args.file.display());
        return ExitCode::SUCCESS;
    }

    eprintln!(
        "{}: {} structural error(s) found",
        args.file.display(),
        result.errors.len()
    );
    for message in result.messages() {
        eprintln!("{}: {}", args.file.display(), message);
    }
    ExitCode::FAILURE
}
