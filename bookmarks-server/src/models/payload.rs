//! Raw request payload validation
//!
//! Payloads arrive as untyped JSON objects so that missing fields, nulls and
//! mistyped values can each be reported with their own message. Rules are
//! checked in a fixed order and the first violation wins:
//!
//! 1. `title`, `url`, `rating` present and non-null (create only)
//! 2. `title` length 3..=100
//! 3. `rating` numeric and within 1..=5
//!
//! Partial updates re-check every supplied field with the same rules.

use serde_json::{Map, Value};

use super::{BookmarkPatch, BookmarkTitle, NewBookmark, Rating, ValidationError};

/// Untyped JSON object as received from the client
pub type Payload = Map<String, Value>;

const REQUIRED_FIELDS: [&str; 3] = ["title", "url", "rating"];
const UPDATABLE_FIELDS: [&str; 4] = ["title", "url", "rating", "description"];

/// Validate a create payload into a [`NewBookmark`].
///
/// `description` is optional and defaults to the empty string.
pub fn validate_create(payload: &Payload) -> Result<NewBookmark, ValidationError> {
    let [title, url, rating] = REQUIRED_FIELDS.map(|field| {
        supplied(payload, field).ok_or(ValidationError::MissingField(field))
    });
    let (title, url, rating) = (title?, url?, rating?);

    let title = parse_title(title)?;
    let url = parse_url(url)?;
    let rating = Rating::from_json(rating)?;
    let description = match supplied(payload, "description") {
        Some(raw) => parse_text("description", raw)?,
        None => String::new(),
    };

    Ok(NewBookmark {
        title,
        url,
        rating,
        description,
    })
}

/// Validate a partial update payload into a [`BookmarkPatch`].
///
/// Absent and null fields are left out of the patch. At least one of the
/// updatable fields must carry a non-empty value: `""`, `0`, `false` and
/// `null` do not count.
pub fn validate_update(payload: &Payload) -> Result<BookmarkPatch, ValidationError> {
    if !UPDATABLE_FIELDS
        .iter()
        .any(|field| payload.get(*field).is_some_and(is_truthy))
    {
        return Err(ValidationError::EmptyUpdate);
    }

    Ok(BookmarkPatch {
        title: supplied(payload, "title").map(parse_title).transpose()?,
        url: supplied(payload, "url").map(parse_url).transpose()?,
        rating: supplied(payload, "rating")
            .map(Rating::from_json)
            .transpose()?,
        description: supplied(payload, "description")
            .map(|raw| parse_text("description", raw))
            .transpose()?,
    })
}

fn supplied<'a>(payload: &'a Payload, field: &str) -> Option<&'a Value> {
    payload.get(field).filter(|value| !value.is_null())
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn parse_text(field: &'static str, raw: &Value) -> Result<String, ValidationError> {
    raw.as_str()
        .map(str::to_owned)
        .ok_or(ValidationError::InvalidType { field })
}

fn parse_title(raw: &Value) -> Result<BookmarkTitle, ValidationError> {
    BookmarkTitle::new(&parse_text("title", raw)?)
}

fn parse_url(raw: &Value) -> Result<String, ValidationError> {
    let url = parse_text("url", raw)?;
    if url.trim().is_empty() {
        return Err(ValidationError::MissingField("url"));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn valid() -> Payload {
        payload(json!({
            "title": "test bookmark",
            "url": "booking.com",
            "rating": 5,
            "description": "test description"
        }))
    }

    #[test]
    fn create_accepts_valid_payload() {
        let new = validate_create(&valid()).unwrap();
        assert_eq!(new.title.as_str(), "test bookmark");
        assert_eq!(new.url, "booking.com");
        assert_eq!(new.rating.value(), 5.0);
        assert_eq!(new.description, "test description");
    }

    #[test]
    fn create_defaults_description() {
        let mut body = valid();
        body.remove("description");
        assert_eq!(validate_create(&body).unwrap().description, "");

        body.insert("description".into(), Value::Null);
        assert_eq!(validate_create(&body).unwrap().description, "");
    }

    #[test]
    fn create_reports_each_missing_field() {
        for field in REQUIRED_FIELDS {
            let mut body = valid();
            body.remove(field);
            assert_eq!(
                validate_create(&body).unwrap_err(),
                ValidationError::MissingField(field)
            );

            let mut body = valid();
            body.insert(field.into(), Value::Null);
            assert_eq!(
                validate_create(&body).unwrap_err(),
                ValidationError::MissingField(field)
            );
        }
    }

    #[test]
    fn create_reports_first_missing_field() {
        let body = payload(json!({ "rating": 3 }));
        assert_eq!(
            validate_create(&body).unwrap_err(),
            ValidationError::MissingField("title")
        );
    }

    #[test]
    fn create_treats_blank_url_as_missing() {
        let mut body = valid();
        body.insert("url".into(), json!("  "));
        assert_eq!(
            validate_create(&body).unwrap_err(),
            ValidationError::MissingField("url")
        );
    }

    #[test]
    fn create_checks_title_before_rating() {
        let mut body = valid();
        body.insert("title".into(), json!("hi"));
        body.insert("rating".into(), json!(9));
        assert_eq!(
            validate_create(&body).unwrap_err(),
            ValidationError::InvalidTitleLength
        );
    }

    #[test]
    fn create_rejects_bad_ratings() {
        for rating in [json!(7), json!(0), json!("A"), json!(-1), json!(5.01)] {
            let mut body = valid();
            body.insert("rating".into(), rating.clone());
            assert_eq!(
                validate_create(&body).unwrap_err(),
                ValidationError::InvalidRating,
                "{rating}"
            );
        }
    }

    #[test]
    fn create_rejects_non_string_text() {
        let mut body = valid();
        body.insert("title".into(), json!(12345));
        assert_eq!(
            validate_create(&body).unwrap_err(),
            ValidationError::InvalidType { field: "title" }
        );

        let mut body = valid();
        body.insert("description".into(), json!(["x"]));
        assert_eq!(
            validate_create(&body).unwrap_err(),
            ValidationError::InvalidType { field: "description" }
        );
    }

    #[test]
    fn update_requires_a_field() {
        assert_eq!(
            validate_update(&Payload::new()).unwrap_err(),
            ValidationError::EmptyUpdate
        );
        let body = payload(json!({ "title": null, "unrelated": "x", "id": 4 }));
        assert_eq!(
            validate_update(&body).unwrap_err(),
            ValidationError::EmptyUpdate
        );
    }

    #[test]
    fn update_keeps_only_supplied_fields() {
        let patch = validate_update(&payload(json!({ "rating": "3", "url": null }))).unwrap();
        assert_eq!(patch.rating.map(Rating::value), Some(3.0));
        assert!(patch.title.is_none());
        assert!(patch.url.is_none());
        assert!(patch.description.is_none());
    }

    #[test]
    fn update_revalidates_supplied_fields() {
        assert_eq!(
            validate_update(&payload(json!({ "title": "x" }))).unwrap_err(),
            ValidationError::InvalidTitleLength
        );
        assert_eq!(
            validate_update(&payload(json!({ "rating": 6 }))).unwrap_err(),
            ValidationError::InvalidRating
        );
        assert_eq!(
            validate_update(&payload(json!({ "url": " " }))).unwrap_err(),
            ValidationError::MissingField("url")
        );
    }

    #[test]
    fn update_ignores_empty_values() {
        for body in [
            json!({ "description": "" }),
            json!({ "title": "" }),
            json!({ "rating": 0 }),
            json!({ "url": false }),
            json!({ "title": "", "url": null, "rating": 0, "description": "" }),
        ] {
            assert_eq!(
                validate_update(&payload(body.clone())).unwrap_err(),
                ValidationError::EmptyUpdate,
                "{body}"
            );
        }
    }

    #[test]
    fn update_accepts_string_zero_rating_as_supplied() {
        // "0" is a non-empty string, so the rating rule applies
        assert_eq!(
            validate_update(&payload(json!({ "rating": "0" }))).unwrap_err(),
            ValidationError::InvalidRating
        );
    }
}
