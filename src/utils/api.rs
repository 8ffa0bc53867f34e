//! Waitlist API client: one JSON POST with an abort-based timeout.

use std::future::Future;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web_sys::AbortController;

use crate::config::Config;
use crate::submit::Submission;

#[derive(Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistRequest {
    pub name: String,
    pub email: String,
    pub message: String,
    pub email_updates: bool,
}

impl From<&Submission> for WaitlistRequest {
    fn from(submission: &Submission) -> Self {
        Self {
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            email_updates: submission.email_updates,
        }
    }
}

#[derive(Deserialize, Debug)]
pub struct WaitlistResponse {
    /// A response without the flag counts as a failure.
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
    #[serde(rename = "submissionId")]
    pub submission_id: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, aborted request, or unparseable response body.
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("server rejected submission: {0}")]
    Rejected(String),
}

/// Runs `work` to completion and drops `deadline` only afterwards. The abort
/// timer cancels on drop, so the deadline stays armed across every await
/// inside `work` — a server that returns headers and then stalls the body
/// still gets aborted.
async fn disarm_after<T, D>(work: impl Future<Output = T>, deadline: D) -> T {
    let result = work.await;
    drop(deadline);
    result
}

/// POST the submission to the configured endpoint. The request carries an
/// abort signal armed to fire after `request_timeout_ms`; the timer covers
/// both the header and body reads and an abort surfaces as
/// [`ApiError::Network`] like any other transport failure.
pub async fn join_waitlist(
    config: &Config,
    request: &WaitlistRequest,
) -> Result<WaitlistResponse, ApiError> {
    let controller = AbortController::new().ok();
    let signal = controller.as_ref().map(AbortController::signal);
    let timeout_ms = config.request_timeout_ms;
    let abort_timer =
        controller.map(|controller| Timeout::new(timeout_ms, move || controller.abort()));

    let builder = Request::post(&config.api_base_url).abort_signal(signal.as_ref());
    disarm_after(
        async move {
            let response = builder.json(request)?.send().await?;
            if !response.ok() {
                return Err(ApiError::Status(response.status()));
            }
            let body: WaitlistResponse = response.json().await?;
            if !body.success {
                let reason = body
                    .error
                    .unwrap_or_else(|| "server reported failure".to_string());
                return Err(ApiError::Rejected(reason));
            }
            Ok(body)
        },
        abort_timer,
    )
    .await
}
