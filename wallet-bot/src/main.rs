//! wallet-bot binary: `run` starts the Telegram bot, `check` runs one filter pass from the terminal.

use anyhow::Result;
use clap::Parser;
use wallet_bot::{run_bot, run_check, BotConfig, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Check { wallets, mints } => {
            let qualifying = run_check(wallets, mints).await?;
            if qualifying.is_empty() {
                println!("No wallets interacted with all of the given tokens.");
            } else {
                for wallet in qualifying {
                    println!("{}", wallet);
                }
            }
            Ok(())
        }
    }
}
