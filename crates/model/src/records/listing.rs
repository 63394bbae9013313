use serde::{Deserialize, Serialize};

/// Job browser entry for a submitted job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub name: String,
    pub url: String,
    pub started: bool,
    pub finished: bool,
}

/// Outcome of a cancel request.
///
/// A cancel that never reached the service because the handle carries no
/// job id is a soft failure carried in the payload, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelOutcome {
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CancelOutcome {
    /// The terminate call was delivered to the service.
    pub fn delivered() -> Self {
        CancelOutcome {
            status: 0,
            message: None,
        }
    }

    /// The cancel was rejected locally, before reaching the service.
    pub fn rejected(message: impl Into<String>) -> Self {
        CancelOutcome {
            status: -1,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivered_outcome_has_no_message() {
        let outcome = CancelOutcome::delivered();
        assert_eq!(outcome.status, 0);
        assert!(outcome.message.is_none());
    }

    #[test]
    fn rejected_outcome_keeps_message() {
        let outcome = CancelOutcome::rejected("job was never submitted");
        assert_eq!(outcome.status, -1);
        assert_eq!(outcome.message.as_deref(), Some("job was never submitted"));
    }
}
