//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wallet-bot")]
#[command(about = "Telegram bot that finds wallets which interacted with every listed token", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token overrides TELEGRAM_BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Check wallets once against a token list, without Telegram (HELIUS_API_KEY from env).
    Check {
        /// Wallet address; repeat for several wallets.
        #[arg(short, long = "wallet", required = true)]
        wallets: Vec<String>,
        /// Token mint the wallets must have transferred; repeat for several mints.
        #[arg(short, long = "mint")]
        mints: Vec<String>,
    },
}
