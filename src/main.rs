use partnerboard::config::Config;
use partnerboard::error::Result;
use partnerboard::infrastructure::HttpLeaderboardClient;
use partnerboard::services::BoardService;
use std::sync::Arc;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    debug!("Using leaderboard backend at {}", config.args.api_base);

    let client = HttpLeaderboardClient::new(
        config.http_client.clone(),
        config.args.api_base.clone(),
        config.retry_policy(),
    );
    let mut service = BoardService::new(Arc::new(client), config.notice_ttl());

    let command = config.args.command.clone().unwrap_or_default();
    match service.execute(&command).await {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            error!("{}", e);
            Err(e)
        }
    }
}
