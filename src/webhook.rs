//! Webhook delivery of the rendered report.

use std::time::Duration;

use log::debug;

use crate::{error::ReportError, report::WebhookPayload};

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

/// POSTs the payload as JSON. Transport errors and non-success statuses are
/// both delivery errors; the caller decides whether to fall back to console.
pub fn deliver(url: &str, payload: &WebhookPayload) -> Result<(), ReportError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(DELIVERY_TIMEOUT)
        .build()
        .map_err(|err| ReportError::Delivery(err.to_string()))?;
    let response = client
        .post(url)
        .json(payload)
        .send()
        .map_err(|err| ReportError::Delivery(err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().unwrap_or_default();
        return Err(ReportError::Delivery(format!(
            "webhook responded with {status}: {body}"
        )));
    }
    debug!("Webhook accepted the report with {status}");
    Ok(())
}
