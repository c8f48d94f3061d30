// src/dispatch.rs

use crate::api::PredictClient;
use crate::errors::ChatboxResult;
use crate::widget::Submission;
use log::{debug, warn};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Waits `delay`, then asks the endpoint for a reply to `text`.
pub async fn fetch_reply(client: &PredictClient, delay: Duration, text: &str) -> ChatboxResult<String> {
    if !delay.is_zero() {
        sleep(delay).await;
    }
    client.predict(text).await
}

/// Runs [`fetch_reply`] in the background and sends the outcome to the UI
/// loop. Submissions are independent: nothing is cancelled or de-duplicated.
pub fn schedule_reply(
    client: PredictClient,
    delay: Duration,
    submission: Submission,
    replies: mpsc::Sender<ChatboxResult<String>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        debug!("scheduling request in {}ms", delay.as_millis());
        let outcome = fetch_reply(&client, delay, &submission.text).await;
        if replies.send(outcome).await.is_err() {
            warn!("reply dropped, UI loop has exited");
        }
    })
}
