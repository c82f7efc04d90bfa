use std::process::ExitCode;

use fixture_gen_rs::{Config, Error, generate, setup_logging};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(error) = setup_logging() {
        eprintln!("failed to set up logging: {error}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;
    let fixture_dir = generate(&config).await?;

    // The sole stdout line; all logging goes to stderr.
    println!("{}", fixture_dir.display());
    Ok(())
}
