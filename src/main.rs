use til_draft::adapters::FileCredentialsProvider;
use til_draft::cli::{
    handle_generate_command, handle_login_command, handle_logout_command,
    handle_next_day_command, parse_args, version_line, CliCommand, InputArg, EXIT_CANCELLED,
    EXIT_FAILURE, USAGE,
};
use til_draft::config::ClientConfig;
use til_draft::orchestrator::GenerationOutcome;

use color_eyre::Result;

/// Install the tracing subscriber. Logs go to stderr so stdout stays clean JSON.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("til_draft=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Run `generate` and print the draft. Returns the process exit code.
async fn run_generate(
    config: &ClientConfig,
    credentials: &FileCredentialsProvider,
    input: InputArg,
) -> Result<i32> {
    let outcome = handle_generate_command(config, credentials, input, |canceller| {
        ctrlc::set_handler(move || {
            canceller.cancel();
        })?;
        Ok(())
    })
    .await?;

    match outcome {
        GenerationOutcome::Completed(draft) => {
            println!("{}", serde_json::to_string_pretty(&draft)?);
            Ok(0)
        }
        GenerationOutcome::Failed(e) => {
            eprintln!("Error: {}", e.user_message());
            Ok(EXIT_FAILURE)
        }
        GenerationOutcome::Cancelled => {
            eprintln!("Cancelled");
            Ok(EXIT_CANCELLED)
        }
    }
}

async fn run(command: CliCommand) -> Result<i32> {
    let config = ClientConfig::from_env();
    let credentials = FileCredentialsProvider::new()?;

    match command {
        CliCommand::Generate(input) => run_generate(&config, &credentials, input).await,
        CliCommand::NextDay => {
            let day = handle_next_day_command(&config, &credentials).await?;
            println!("{}", day);
            Ok(0)
        }
        CliCommand::Login => {
            handle_login_command(&credentials, || rpassword::prompt_password("API key: ")).await?;
            eprintln!("Saved to {}", credentials.credentials_path().display());
            Ok(0)
        }
        CliCommand::Logout => {
            handle_logout_command(&credentials).await?;
            eprintln!("Logged out");
            Ok(0)
        }
        CliCommand::Version | CliCommand::Help => Ok(0),
    }
}

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    // Handle --version and --help before any initialization
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    color_eyre::install()?;
    init_logging();

    let runtime = tokio::runtime::Runtime::new()?;
    let code = runtime.block_on(run(command))?;

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
