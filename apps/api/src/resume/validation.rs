use serde_json::Value;

use crate::errors::AppError;

/// Required fields per resource type, in the order they are reported back
/// when missing.
pub const EXPERIENCE_FIELDS: &[&str] = &[
    "title",
    "company",
    "start_date",
    "end_date",
    "description",
    "logo",
];

pub const EDUCATION_FIELDS: &[&str] = &[
    "course",
    "school",
    "start_date",
    "end_date",
    "grade",
    "logo",
];

pub const SKILL_FIELDS: &[&str] = &["name", "proficiency", "logo"];

/// Checks that `payload` is a JSON object carrying every field in `required`,
/// each holding a string. Fields outside the schema are ignored.
///
/// Error messages are part of the wire contract:
/// - not an object: "Request data is not valid JSON"
/// - absent fields: "Missing fields: a, b, c" (schema order)
/// - non-string fields: "Some fields have incorrect type"
pub fn validate_payload(payload: &Value, required: &[&str]) -> Result<(), AppError> {
    let object = payload
        .as_object()
        .ok_or_else(|| AppError::Validation("Request data is not valid JSON".to_string()))?;

    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|field| !object.contains_key(*field))
        .collect();

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "Missing fields: {}",
            missing.join(", ")
        )));
    }

    if required.iter().any(|field| !object[*field].is_string()) {
        return Err(AppError::Validation(
            "Some fields have incorrect type".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(result: Result<(), AppError>) -> String {
        match result.unwrap_err() {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg,
        }
    }

    #[test]
    fn test_pass_full_skill_payload() {
        let payload = json!({"name": "Go", "proficiency": "3 Years", "logo": "go.png"});
        assert!(validate_payload(&payload, SKILL_FIELDS).is_ok());
    }

    #[test]
    fn test_pass_full_education_payload() {
        let payload = json!({
            "course": "Engineering",
            "school": "NYU",
            "start_date": "October 2022",
            "end_date": "August 2024",
            "grade": "86%",
            "logo": "example-logo.png"
        });
        assert!(validate_payload(&payload, EDUCATION_FIELDS).is_ok());
    }

    #[test]
    fn test_pass_full_experience_payload() {
        let payload = json!({
            "title": "Software Developer",
            "company": "A Cooler Company",
            "start_date": "October 2022",
            "end_date": "Present",
            "description": "Writing Rust Code",
            "logo": "example-logo.png"
        });
        assert!(validate_payload(&payload, EXPERIENCE_FIELDS).is_ok());
    }

    #[test]
    fn test_pass_extra_fields_ignored() {
        let payload = json!({
            "name": "Go",
            "proficiency": "3 Years",
            "logo": "go.png",
            "endorsements": 7
        });
        assert!(validate_payload(&payload, SKILL_FIELDS).is_ok());
    }

    #[test]
    fn test_fail_array_payload() {
        let payload = json!(["name", "proficiency"]);
        assert_eq!(
            message(validate_payload(&payload, SKILL_FIELDS)),
            "Request data is not valid JSON"
        );
    }

    #[test]
    fn test_fail_string_payload() {
        let payload = json!("not an object");
        assert_eq!(
            message(validate_payload(&payload, SKILL_FIELDS)),
            "Request data is not valid JSON"
        );
    }

    #[test]
    fn test_fail_null_payload() {
        assert_eq!(
            message(validate_payload(&Value::Null, SKILL_FIELDS)),
            "Request data is not valid JSON"
        );
    }

    #[test]
    fn test_fail_single_missing_field() {
        let payload = json!({"name": "Go", "proficiency": "3 Years"});
        assert_eq!(
            message(validate_payload(&payload, SKILL_FIELDS)),
            "Missing fields: logo"
        );
    }

    #[test]
    fn test_fail_missing_fields_reported_in_schema_order() {
        let payload = json!({"school": "NYU", "start_date": "2019", "end_date": "2022"});
        assert_eq!(
            message(validate_payload(&payload, EDUCATION_FIELDS)),
            "Missing fields: course, grade, logo"
        );
    }

    #[test]
    fn test_fail_empty_object_lists_all_fields() {
        let payload = json!({});
        assert_eq!(
            message(validate_payload(&payload, SKILL_FIELDS)),
            "Missing fields: name, proficiency, logo"
        );
    }

    #[test]
    fn test_fail_number_value() {
        let payload = json!({"name": "Go", "proficiency": 3, "logo": "go.png"});
        assert_eq!(
            message(validate_payload(&payload, SKILL_FIELDS)),
            "Some fields have incorrect type"
        );
    }

    #[test]
    fn test_fail_null_value() {
        let payload = json!({"name": "Go", "proficiency": null, "logo": "go.png"});
        assert_eq!(
            message(validate_payload(&payload, SKILL_FIELDS)),
            "Some fields have incorrect type"
        );
    }

    #[test]
    fn test_fail_nested_object_value() {
        let payload = json!({
            "name": "Go",
            "proficiency": {"years": 3},
            "logo": "go.png"
        });
        assert_eq!(
            message(validate_payload(&payload, SKILL_FIELDS)),
            "Some fields have incorrect type"
        );
    }

    #[test]
    fn test_missing_reported_before_type_check() {
        // A payload both missing a field and carrying a bad type reports the
        // missing field first.
        let payload = json!({"name": 42, "proficiency": "3 Years"});
        assert_eq!(
            message(validate_payload(&payload, SKILL_FIELDS)),
            "Missing fields: logo"
        );
    }
}
