//! Live tests against a real Autopay environment.
//!
//! Skipped unless `AUTOPAY_TEST=on` and the `AUTOPAY_*` credential values
//! are set; see `config.rs` for the full list.

use std::env;

use log::warn;
use snapsign_autopay::{Autopay, DefaultCredentialProvider, Environment};
use snapsign_core::{Context, OsEnv, Result};
use snapsign_http_send_reqwest::ReqwestHttpSend;

fn init_client() -> Option<Autopay> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _ = dotenv::dotenv();

    if env::var("AUTOPAY_TEST").is_err() || env::var("AUTOPAY_TEST").unwrap() != "on" {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    Some(Autopay::new(
        ctx,
        DefaultCredentialProvider::new(),
        Environment::Alpha,
    ))
}

#[tokio::test]
async fn test_balance_inquiry() -> Result<()> {
    let client = match init_client() {
        Some(client) => client,
        None => {
            warn!("AUTOPAY_TEST is not set, skipped");
            return Ok(());
        }
    };

    let card_token =
        env::var("AUTOPAY_TEST_CARD_TOKEN").expect("env AUTOPAY_TEST_CARD_TOKEN must set");
    let reference_no = format!("live-{}", chrono::Utc::now().timestamp());

    let resp = client
        .balance_inquiry(&reference_no, 0.0, &card_token, "")
        .await?;
    assert!(resp.response_code().is_some());

    Ok(())
}
