//! End-to-end test of the assembled chain: real TelegramBotAdapter against a mock Telegram Bot API
//! and real HeliusTransfers against a mock Helius API, driven with core messages.
//!
//! teloxide request path format is `/bot<token>/<method>`. Mock guards are held until the test
//! ends, otherwise the server returns an empty body and JSON parsing fails.

mod common;

use std::sync::Arc;

use common::text_message;
use dbot_telegram::{TelegramBotAdapter, TelegramConfig};
use helius_transfers::{HeliusConfig, HeliusTransfers};
use mockito::Matcher;
use wallet_bot::conversation::replies;
use wallet_bot::{build_handler_chain, BotComponents, HandlerResponse};

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";
const TEST_HELIUS_KEY: &str = "test-helius-key";

async fn register_send_message_mock(
    server: &mut mockito::ServerGuard,
    expected_calls: usize,
) -> mockito::Mock {
    let send_message_path = format!("/bot{}/sendMessage", TEST_BOT_TOKEN);
    server
        .mock("POST", send_message_path.as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
            "ok": true,
            "result": {
                "message_id": 1,
                "date": 1706529600,
                "chat": {"id": 123, "type": "private"},
                "from": {"id": 123456789, "is_bot": true, "first_name": "WalletBot", "username": "walletbot"},
                "text": "ok"
            }
        }"#,
        )
        .expect(expected_calls)
        .create_async()
        .await
}

async fn register_transactions_mock(
    server: &mut mockito::ServerGuard,
    wallet: &str,
    status: usize,
    body: &str,
) -> mockito::Mock {
    server
        .mock("GET", format!("/v0/addresses/{}/transactions", wallet).as_str())
        .match_query(Matcher::UrlEncoded("api-key".into(), TEST_HELIUS_KEY.into()))
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .expect(1)
        .create_async()
        .await
}

fn build_components(telegram: &mockito::ServerGuard, helius: &mockito::ServerGuard) -> BotComponents {
    let mut telegram_config = TelegramConfig::with_token(TEST_BOT_TOKEN.to_string());
    telegram_config.telegram_api_url = Some(telegram.url());
    let teloxide_bot = telegram_config.build_bot().expect("mock Telegram url must parse");

    let helius_config = HeliusConfig::with_api_key(TEST_HELIUS_KEY)
        .with_base_url(format!("{}/v0/addresses", helius.url()));
    let fetcher = HeliusTransfers::new(helius_config).expect("Helius client must build");

    BotComponents::new(
        Arc::new(TelegramBotAdapter::new(teloxide_bot)),
        Arc::new(fetcher),
    )
}

/// **Test: W1 has TokA+TokB+TokC, W2 only TokA, W3's fetch fails; asking for TokA+TokB lists only W1.**
///
/// Four Telegram sends: wallet prompt, token prompt, wait notice, result. One Helius call per wallet.
#[tokio::test]
async fn test_conversation_end_to_end_with_mock_apis() {
    let mut telegram = mockito::Server::new_async().await;
    let mut helius = mockito::Server::new_async().await;

    let mock_send = register_send_message_mock(&mut telegram, 4).await;
    let mock_w1 = register_transactions_mock(
        &mut helius,
        "W1",
        200,
        r#"[
            {"signature": "1", "tokenTransfers": [{"mint": "TokA"}, {"mint": "TokC"}]},
            {"signature": "2", "tokenTransfers": [{"mint": "TokB"}]}
        ]"#,
    )
    .await;
    let mock_w2 = register_transactions_mock(
        &mut helius,
        "W2",
        200,
        r#"[{"signature": "3", "tokenTransfers": [{"mint": "TokA"}]}, {"signature": "4", "tokenTransfers": null}]"#,
    )
    .await;
    let mock_w3 =
        register_transactions_mock(&mut helius, "W3", 500, r#"{"error": "internal"}"#).await;

    let components = build_components(&telegram, &helius);
    let chain = build_handler_chain(&components, &[]);

    for text in ["/start", "W1\nW2\nW3"] {
        chain.handle(&text_message(123, 7, text)).await.expect("chain must succeed");
    }
    let response = chain
        .handle(&text_message(123, 7, "TokA\nTokB"))
        .await
        .expect("chain must succeed");

    assert_eq!(
        response,
        HandlerResponse::Reply(format!("{}\nW1", replies::RESULT_HEADER))
    );
    mock_send.assert_async().await;
    mock_w1.assert_async().await;
    mock_w2.assert_async().await;
    mock_w3.assert_async().await;
    assert!(components.sessions.is_empty().await);
}

/// **Test: cancelling before the token list never touches the Helius API.**
#[tokio::test]
async fn test_cancel_end_to_end_makes_no_api_calls() {
    let mut telegram = mockito::Server::new_async().await;
    let mut helius = mockito::Server::new_async().await;

    let mock_send = register_send_message_mock(&mut telegram, 3).await;
    let mock_helius = helius
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let components = build_components(&telegram, &helius);
    let chain = build_handler_chain(&components, &[]);

    for text in ["/start", "W1", "/cancel"] {
        chain.handle(&text_message(123, 7, text)).await.expect("chain must succeed");
    }

    mock_send.assert_async().await;
    mock_helius.assert_async().await;
}
