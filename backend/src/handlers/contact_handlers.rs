use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::mail::contact_email;
use crate::AppState;

/// One contact-form submission. Absent fields deserialize to empty strings so
/// they fall under the same "Missing required fields" answer as blank ones.
#[derive(Debug, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn has_missing_fields(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

/// `POST /api/sendEmail`. Validates the submission, composes the notification
/// email and hands it to the mailer exactly once. No retries; a failed send is
/// reported and the visitor can resubmit.
pub async fn send_email(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<serde_json::Value>)> {
    if submission.has_missing_fields() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Missing required fields"})),
        ));
    }

    let email = contact_email(
        &submission.name,
        &submission.email,
        &submission.subject,
        &submission.message,
    );

    match state.mailer.deliver(&email).await {
        Ok(()) => {
            info!(reply_to = %submission.email, "contact form submission relayed");
            Ok(Json(json!({"message": "Email sent successfully"})))
        }
        Err(e) => {
            // Provider detail stays in the server log; the client only learns
            // that delivery failed.
            error!("failed to relay contact form submission: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": "Error sending email",
                    "error": "mail transport failure",
                })),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, subject: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn complete_submission_passes_validation() {
        assert!(!submission("Ada", "ada@example.com", "Hi", "Hello").has_missing_fields());
    }

    #[test]
    fn any_empty_field_fails_validation() {
        assert!(submission("", "x@x.com", "s", "m").has_missing_fields());
        assert!(submission("n", "", "s", "m").has_missing_fields());
        assert!(submission("n", "x@x.com", "", "m").has_missing_fields());
        assert!(submission("n", "x@x.com", "s", "").has_missing_fields());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        assert!(submission("   ", "x@x.com", "s", "m").has_missing_fields());
    }

    #[test]
    fn absent_json_fields_deserialize_as_empty() {
        let parsed: ContactSubmission =
            serde_json::from_str(r#"{"email": "x@x.com"}"#).unwrap();
        assert!(parsed.has_missing_fields());
        assert_eq!(parsed.email, "x@x.com");
    }
}
