//! Status parsing: one homework record -> notification text.

use hwbot_core::error::{HwBotError, Result};

use crate::response::HomeworkRecord;
use crate::verdicts::verdict_for;

/// Build the status-change notification for one homework record.
///
/// Rejects records with a missing or empty name, a missing status, or a
/// status outside the verdict table. Only the first record of a response is
/// ever passed here; later records are never inspected.
pub fn parse_status(record: &HomeworkRecord) -> Result<String> {
    let name = match record.homework_name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(HwBotError::Field(
                "Не удалось извлечь название домашки.".into(),
            ));
        }
    };

    let status = record
        .status
        .as_deref()
        .ok_or_else(|| HwBotError::Field("Не удалось извлечь статус домашки".into()))?;

    let verdict = verdict_for(status)
        .ok_or_else(|| HwBotError::Field(format!("Некорректный статус домашки: {status}")))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {verdict}"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdicts::HOMEWORK_VERDICTS;

    fn record(name: Option<&str>, status: Option<&str>) -> HomeworkRecord {
        HomeworkRecord {
            homework_name: name.map(String::from),
            status: status.map(String::from),
        }
    }

    #[test]
    fn test_message_contains_name_and_exact_verdict() {
        for &(status, verdict) in HOMEWORK_VERDICTS {
            let message = parse_status(&record(Some("proj1"), Some(status))).unwrap();
            assert!(message.contains("проверки работы \"proj1\""));
            assert!(message.ends_with(verdict));
        }
    }

    #[test]
    fn test_approved_message_verbatim() {
        let message = parse_status(&record(Some("proj1"), Some("approved"))).unwrap();
        assert_eq!(
            message,
            "Изменился статус проверки работы \"proj1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn test_missing_name() {
        let err = parse_status(&record(None, Some("approved"))).unwrap_err();
        assert!(matches!(err, HwBotError::Field(_)));
        assert!(err.to_string().contains("название"));
    }

    #[test]
    fn test_empty_name() {
        let err = parse_status(&record(Some(""), Some("approved"))).unwrap_err();
        assert!(matches!(err, HwBotError::Field(_)));
    }

    #[test]
    fn test_missing_status() {
        let err = parse_status(&record(Some("proj1"), None)).unwrap_err();
        assert!(matches!(err, HwBotError::Field(_)));
        assert!(err.to_string().contains("статус"));
    }

    #[test]
    fn test_unknown_status_names_the_offender() {
        let err = parse_status(&record(Some("proj1"), Some("archived"))).unwrap_err();
        match err {
            HwBotError::Field(msg) => {
                assert!(msg.contains("Некорректный статус"));
                assert!(msg.contains("archived"));
            }
            other => panic!("expected Field, got {other:?}"),
        }
    }
}
