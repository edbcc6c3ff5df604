// Request-body validation. Rules are declared on the body structs with garde;
// this module holds the shared custom rules and turns a garde report into the
// `{field: message}` map, keeping the first message per field.

use garde::{Report, Validate};

use crate::application::errors::{ApplicationError, FieldErrors};

pub const MUST_NOT_BE_BLANK: &str = "must not be blank";

/// Absent values are left to `required`.
pub fn not_blank(value: &Option<String>, _ctx: &()) -> garde::Result {
    match value {
        Some(text) if text.trim().is_empty() => Err(garde::Error::new(MUST_NOT_BE_BLANK)),
        _ => Ok(()),
    }
}

/// Field names are reported the way they appear on the wire (`item_id` → `itemId`).
pub fn field_errors(report: &Report) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for (path, error) in report.iter() {
        errors
            .entry(wire_name(&path.to_string()))
            .or_insert_with(|| error.to_string());
    }
    errors
}

pub fn validated<T>(body: T) -> Result<T, ApplicationError>
where
    T: Validate<Context = ()>,
{
    body.validate()
        .map_err(|report| ApplicationError::Validation(field_errors(&report)))?;
    Ok(body)
}

fn wire_name(path: &str) -> String {
    let mut parts = path.split('_');
    let mut name = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}
