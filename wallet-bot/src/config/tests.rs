//! Config tests.

use crate::config::BotConfig;
use helius_transfers::HELIUS_API_BASE;
use serial_test::serial;
use std::env;

const VARS: &[&str] = &[
    "TELEGRAM_BOT_TOKEN",
    "BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "ALLOWED_USER_IDS",
    "HELIUS_API_KEY",
    "HELIUS_API_URL",
    "HELIUS_TIMEOUT_SECS",
];

fn reset_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    reset_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HELIUS_API_KEY", "helius_key");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram().telegram_api_url.is_none());
    assert_eq!(config.log_file(), "logs/wallet-bot.log");
    assert!(config.allowed_user_ids().is_empty());
    assert_eq!(config.helius().api_key, "helius_key");
    assert_eq!(config.helius().base_url, HELIUS_API_BASE);
    assert_eq!(config.helius().timeout_secs, 30);
    assert!(config.validate().is_ok());

    reset_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    reset_env();
    env::set_var("BOT_TOKEN", "legacy_token");
    env::set_var("HELIUS_API_KEY", "helius_key");
    env::set_var("HELIUS_API_URL", "http://127.0.0.1:9000/v0/addresses");
    env::set_var("LOG_FILE", "/tmp/wallet-bot-test.log");
    env::set_var("ALLOWED_USER_IDS", "100, 200,,300");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "legacy_token");
    assert_eq!(config.log_file(), "/tmp/wallet-bot-test.log");
    assert_eq!(config.allowed_user_ids(), &[100, 200, 300]);
    assert_eq!(config.helius().base_url, "http://127.0.0.1:9000/v0/addresses");

    reset_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    reset_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "env_token");
    env::set_var("HELIUS_API_KEY", "helius_key");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");

    reset_env();
}

#[test]
#[serial]
fn test_load_config_requires_both_secrets() {
    reset_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    assert!(BotConfig::load(None).is_err());

    reset_env();
    env::set_var("HELIUS_API_KEY", "helius_key");
    assert!(BotConfig::load(None).is_err());

    reset_env();
}

#[test]
#[serial]
fn test_load_config_rejects_bad_allowlist() {
    reset_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HELIUS_API_KEY", "helius_key");
    env::set_var("ALLOWED_USER_IDS", "100,alice");

    assert!(BotConfig::load(None).is_err());

    reset_env();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    reset_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "test_token");
    env::set_var("HELIUS_API_KEY", "helius_key");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    reset_env();
}
