//! outlook-tokens binary entry point.

use clap::error::ErrorKind;
use clap::Parser;
use outlook_tokens::auth::AuthError;
use outlook_tokens::cli::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(1);
        }
    };

    init_logging(cli.verbose);

    let config = match cli.to_config() {
        Ok(config) => config,
        Err(AuthError::Usage(message)) => {
            println!("{message}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = outlook_tokens::cli::auth::run(
        &config,
        &cli.output_token_file,
        stdin.lock(),
        stdout.lock(),
    )
    .await;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let directive = if verbose {
        "outlook_tokens=debug"
    } else {
        "outlook_tokens=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
