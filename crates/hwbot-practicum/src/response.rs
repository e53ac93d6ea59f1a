//! Response shape validation.
//!
//! Turns the untyped body returned by the client into a typed
//! [`ApiResponse`], enforcing the documented contract exactly once, at this
//! boundary. Individual homework records are deliberately NOT validated
//! here: the status parser inspects only the first record of a cycle, so
//! record-level problems must surface there and not earlier.

use serde::Deserialize;
use serde_json::Value;

use hwbot_core::error::{HwBotError, Result};

/// A validated homework-statuses response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// Server-confirmed watermark, epoch seconds. The loop's next cursor.
    pub current_date: i64,
    /// Homework records, most recent first.
    pub homeworks: Vec<HomeworkRecord>,
}

/// A lenient view of one homework object.
///
/// Fields stay optional: absence is a record-level problem that belongs to
/// the status parser, not a shape problem. All other response fields
/// (reviewer comment, lesson name, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    pub status: Option<String>,
}

impl HomeworkRecord {
    /// Build a record from a raw JSON value. Total: anything that is not an
    /// object with string fields simply yields empty fields.
    pub fn from_value(value: &Value) -> Self {
        Self {
            homework_name: value
                .get("homework_name")
                .and_then(Value::as_str)
                .map(String::from),
            status: value.get("status").and_then(Value::as_str).map(String::from),
        }
    }
}

/// Validate the raw response body against the documented shape.
///
/// The ladder mirrors the API documentation: the body must be an object
/// carrying an integer `current_date` and an array `homeworks`. Nothing
/// else is checked here.
pub fn validate(raw: &Value) -> Result<ApiResponse> {
    let object = raw.as_object().ok_or_else(|| {
        HwBotError::Shape(format!(
            "Ответ API не является словарем. Полученный тип данных: {}",
            json_type_name(raw)
        ))
    })?;

    let current_date = object
        .get("current_date")
        .ok_or_else(|| HwBotError::Shape("\"current_date\" отсутствует в ответе API.".into()))?;
    let current_date = current_date.as_i64().ok_or_else(|| {
        HwBotError::Shape(format!(
            "Содержимое \"current_date\" не является целым числом. Полученный тип данных: {}",
            json_type_name(current_date)
        ))
    })?;

    let homeworks = object
        .get("homeworks")
        .ok_or_else(|| HwBotError::Shape("\"homeworks\" отсутствует в ответе API.".into()))?;
    let homeworks = homeworks.as_array().ok_or_else(|| {
        HwBotError::Shape(format!(
            "Содержимое словаря \"homeworks\" не является списком. Полученный тип данных: {}",
            json_type_name(homeworks)
        ))
    })?;

    Ok(ApiResponse {
        current_date,
        homeworks: homeworks.iter().map(HomeworkRecord::from_value).collect(),
    })
}

/// JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
