//! Homework records and verdict rendering.

use serde_json::Value;

use crate::error::PollError;

/// Human-readable verdicts for every known review status.
///
/// The review API uses a small fixed enumeration; anything outside it is a
/// contract violation, not a new status to pass through.
const VERDICTS: [(&str, &str); 3] = [
    ("approved", "Ревьюеру всё понравилось, работа зачтена!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Look up the verdict text for a status code.
pub fn verdict_for(status: &str) -> Option<&'static str> {
    VERDICTS
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, text)| *text)
}

/// One entry of the `homeworks` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: String,
    pub status: String,
}

impl HomeworkRecord {
    /// Build a record from one element of the `homeworks` array.
    ///
    /// # Errors
    ///
    /// Returns `PollError::MissingField` when `homework_name` is absent.
    /// A missing `status` is deferred to rendering, where it fails the
    /// verdict lookup like any other unknown code.
    pub fn from_value(value: &Value) -> Result<Self, PollError> {
        let homework_name = value
            .get("homework_name")
            .and_then(Value::as_str)
            .ok_or(PollError::MissingField("homework_name"))?;
        let status = value.get("status").and_then(Value::as_str).unwrap_or_default();
        Ok(Self {
            homework_name: homework_name.to_string(),
            status: status.to_string(),
        })
    }
}

/// Render the notification sentence for a record.
///
/// The template is part of the message contract and must not drift.
pub fn render_status(record: &HomeworkRecord) -> Result<String, PollError> {
    let verdict = verdict_for(&record.status)
        .ok_or_else(|| PollError::UnknownStatus(record.status.clone()))?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.homework_name, verdict
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_approved_template_exactly() {
        let record = HomeworkRecord {
            homework_name: "hw1".to_string(),
            status: "approved".to_string(),
        };
        assert_eq!(
            render_status(&record).unwrap(),
            "Изменился статус проверки работы \"hw1\". Ревьюеру всё понравилось, работа зачтена!"
        );
    }

    #[test]
    fn every_known_status_has_a_verdict() {
        for status in ["approved", "reviewing", "rejected"] {
            assert!(verdict_for(status).is_some(), "no verdict for {status}");
        }
    }

    #[test]
    fn unknown_status_is_an_error() {
        let record = HomeworkRecord {
            homework_name: "hw1".to_string(),
            status: "resubmitted".to_string(),
        };
        let err = render_status(&record).unwrap_err();
        assert!(matches!(err, PollError::UnknownStatus(s) if s == "resubmitted"));
    }

    #[test]
    fn record_requires_homework_name() {
        let err = HomeworkRecord::from_value(&json!({"status": "approved"})).unwrap_err();
        assert!(matches!(err, PollError::MissingField("homework_name")));
    }

    #[test]
    fn record_tolerates_missing_status_until_render() {
        let record = HomeworkRecord::from_value(&json!({"homework_name": "hw2"})).unwrap();
        assert_eq!(record.status, "");
        assert!(render_status(&record).is_err());
    }
}
