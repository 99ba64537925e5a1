//! chatuser - render chat users read from stdin.
//!
//! Each line is `<nick> <channel> [last_message_ms]`; see `chatuser::inspect`.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chatuser::config::Config;
use chatuser::inspect::inspect_line;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout only carries users
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chatuser=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    info!("Configuration loaded successfully");
    info!(
        "Output: {:?}, known bots: {}",
        config.output,
        config.known_bots.len()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut line_no = 0usize;
    let mut rendered = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        match inspect_line(&line, &config) {
            Ok(Some(out)) => {
                stdout.write_all(out.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                rendered += 1;
            }
            Ok(None) => {}
            Err(e) => warn!("Skipping line {}: {}", line_no, e),
        }
    }
    stdout.flush().await?;

    info!("Rendered {} users from {} lines", rendered, line_no);
    Ok(())
}
