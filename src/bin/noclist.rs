use std::io;
use std::process::ExitCode;

use clap::Parser;
use noclist::app;
use noclist::config::settings::LogFormat;
use noclist::utils::logging;
use noclist::utils::logging::LogLevel;
use noclist::ClientConfig;
use reqwest::Client;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
    #[arg(long, env = "LOG_FORMAT", value_enum)]
    log_format: Option<LogFormat>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // -------------------------------
    // 1. Make preparations
    //
    // read env
    // init logging (stderr only)
    // -------------------------------

    let args = Args::parse();
    logging::run(args.log_level, args.log_format);

    // -------------------------------
    // 2. Fixed endpoints and retry policy
    // -------------------------------

    let config = ClientConfig::default();
    let client = Client::new();

    // -------------------------------
    // 3. Token -> user ids -> stdout
    // -------------------------------

    info!("NOC list client starting...");
    let code = app::execute(&client, &config, &mut io::stdout().lock()).await;
    ExitCode::from(code)
}
