use clap::Parser;
use gh_client::TokenResolver;
use gh_feed::cli::Cli;
use gh_feed::output::should_style;
use gh_feed::{logger, FeedError, FeedOptions, OutputFormat};
use gh_feed_config::AppConfig;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    logger::init();

    let config = cli.apply(AppConfig::load().apply_env());
    log::debug!("Effective config: {:?}", config);

    let stdout = io::stdout();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text {
            styled: should_style(config.color, stdout.is_terminal()),
        }
    };
    let options = FeedOptions {
        limit: config.limit,
        format,
    };

    let client = match gh_client::connect(&config.host, &TokenResolver::new()).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut out = stdout.lock();
    match gh_feed::run(&client, &options, &mut out).await {
        Ok(count) => {
            log::info!("Printed {} events", count);
            ExitCode::SUCCESS
        }
        // Reader went away (e.g. piped into `head`)
        Err(FeedError::Output(e)) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", anyhow::Error::from(e));
            ExitCode::FAILURE
        }
    }
}
