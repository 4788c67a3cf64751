// ✉️ Lead Submission - contact form validation and intake
//
// Nothing is persisted: a valid lead is logged and answered with a synthetic id.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

const MIN_PHONE_DIGITS: usize = 7;

// ============================================================================
// REQUEST / RESPONSE SHAPES
// ============================================================================

/// Raw contact form body. Every field is optional on the wire; `validate` decides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeadRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

/// A lead that passed validation, fields trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadReceipt {
    pub success: bool,
    pub message: String,
    pub lead_id: String,
    pub received_at: DateTime<Utc>,
}

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        FieldError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Error)]
pub enum LeadError {
    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Malformed request body: {0}")]
    Malformed(String),
}

impl LeadError {
    /// Field-level details; empty for a malformed body
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            LeadError::Validation(errors) => errors,
            LeadError::Malformed(_) => &[],
        }
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

// ============================================================================
// VALIDATION
// ============================================================================

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parse a JSON body into a request. Syntax or type errors become `Malformed`.
pub fn parse_request(body: &[u8]) -> Result<LeadRequest, LeadError> {
    serde_json::from_slice(body).map_err(|e| LeadError::Malformed(e.to_string()))
}

/// Check required fields and formats, collecting every problem at once
pub fn validate(request: &LeadRequest) -> Result<ValidLead, LeadError> {
    let mut errors = Vec::new();

    let name = present(&request.name);
    if name.is_none() {
        errors.push(FieldError::new("name", "Name is required"));
    }

    let email = present(&request.email);
    match &email {
        None => errors.push(FieldError::new("email", "Email is required")),
        Some(email) if !email_pattern().is_match(email) => {
            errors.push(FieldError::new("email", "Please enter a valid email address"))
        }
        Some(_) => {}
    }

    let phone = present(&request.phone);
    if let Some(phone) = &phone {
        let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
        if digits < MIN_PHONE_DIGITS {
            errors.push(FieldError::new("phone", "Please enter a valid phone number"));
        }
    }

    let message = present(&request.message);
    if message.is_none() {
        errors.push(FieldError::new("message", "Message is required"));
    }

    match (name, email, message) {
        (Some(name), Some(email), Some(message)) if errors.is_empty() => Ok(ValidLead {
            name,
            email,
            phone,
            message,
        }),
        _ => Err(LeadError::Validation(errors)),
    }
}

// ============================================================================
// SUBMISSION
// ============================================================================

/// Accept a validated lead. Logged only; the id is synthetic.
pub fn submit(lead: &ValidLead) -> LeadReceipt {
    let lead_id = uuid::Uuid::new_v4().to_string();
    log::info!(
        "lead {} received from {} <{}> (phone: {})",
        lead_id,
        lead.name,
        lead.email,
        lead.phone.as_deref().unwrap_or("none")
    );

    LeadReceipt {
        success: true,
        message: format!(
            "Thank you, {}. A member of our sales team will contact you shortly.",
            lead.name
        ),
        lead_id,
        received_at: Utc::now(),
    }
}

/// Generic user-facing message when submission fails, with a phone fallback
pub fn failure_message(sales_phone: &str) -> String {
    format!(
        "We couldn't send your message. Please try again or call us at {}.",
        sales_phone
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_request() -> LeadRequest {
        LeadRequest {
            name: Some("Jordan Reyes".to_string()),
            email: Some("jordan@example.com".to_string()),
            phone: Some("(702) 555-0199".to_string()),
            message: Some("Interested in a penthouse tour.".to_string()),
        }
    }

    fn fields(err: &LeadError) -> Vec<&str> {
        err.field_errors().iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn test_valid_request() {
        let lead = validate(&complete_request()).unwrap();
        assert_eq!(lead.name, "Jordan Reyes");
        assert_eq!(lead.phone.as_deref(), Some("(702) 555-0199"));
    }

    #[test]
    fn test_phone_is_optional() {
        let mut request = complete_request();
        request.phone = None;
        assert!(validate(&request).unwrap().phone.is_none());

        request.phone = Some("   ".to_string());
        assert!(validate(&request).unwrap().phone.is_none());
    }

    #[test]
    fn test_missing_fields_are_all_reported() {
        let err = validate(&LeadRequest::default()).unwrap_err();
        assert_eq!(fields(&err), vec!["name", "email", "message"]);
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut request = complete_request();
        request.name = Some("  ".to_string());
        let err = validate(&request).unwrap_err();
        assert_eq!(fields(&err), vec!["name"]);
    }

    #[test]
    fn test_malformed_email() {
        for bad in ["jordan", "jordan@", "jordan@example", "jo rdan@example.com"] {
            let mut request = complete_request();
            request.email = Some(bad.to_string());
            let err = validate(&request).unwrap_err();
            assert_eq!(fields(&err), vec!["email"], "accepted {}", bad);
        }
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut request = complete_request();
        request.phone = Some("555-01".to_string());
        let err = validate(&request).unwrap_err();
        assert_eq!(fields(&err), vec!["phone"]);
    }

    #[test]
    fn test_parse_request() {
        let request = parse_request(br#"{"name":"A","email":"a@b.co","message":"hi"}"#).unwrap();
        assert!(validate(&request).is_ok());

        assert!(matches!(parse_request(b"{not json"), Err(LeadError::Malformed(_))));
        assert!(matches!(parse_request(br#"{"name": 5}"#), Err(LeadError::Malformed(_))));
    }

    #[test]
    fn test_submit_returns_synthetic_id() {
        let lead = validate(&complete_request()).unwrap();
        let first = submit(&lead);
        let second = submit(&lead);

        assert!(first.success);
        assert!(uuid::Uuid::parse_str(&first.lead_id).is_ok());
        assert_ne!(first.lead_id, second.lead_id);
    }

    #[test]
    fn test_failure_message_includes_phone() {
        assert!(failure_message("(702) 555-0140").contains("(702) 555-0140"));
    }

    #[test]
    fn test_error_display() {
        let err = validate(&LeadRequest::default()).unwrap_err();
        assert!(err.to_string().starts_with("Validation failed: name: Name is required"));
    }
}
