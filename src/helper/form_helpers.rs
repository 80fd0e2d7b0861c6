use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use url::form_urlencoded;

/// Parses URL-encoded form data from bytes, handling potential UTF-8 errors gracefully.
pub fn parse_form(form_bytes: &web::Bytes) -> Result<HashMap<String, String>, HttpResponse> {
    let body = match String::from_utf8(form_bytes.to_vec()) {
        Ok(s) => s,
        Err(_) => return Err(HttpResponse::BadRequest().body("Invalid UTF-8 in request body.")),
    };
    Ok(form_urlencoded::parse(body.as_bytes()).into_owned().collect())
}

/// Splits a comma-separated tag field into trimmed, non-empty labels,
/// preserving the order they were typed in.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_split_trimmed_and_de_emptied() {
        assert_eq!(
            parse_tags("Web App,  IoT , ,Dashboard,"),
            vec!["Web App", "IoT", "Dashboard"]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ,").is_empty());
    }

    #[test]
    fn form_bodies_decode_into_a_map() {
        let bytes = web::Bytes::from_static(b"title=Hello%20World&link=https%3A%2F%2Fa.example");
        let parsed = parse_form(&bytes).unwrap();
        assert_eq!(parsed.get("title").map(String::as_str), Some("Hello World"));
        assert_eq!(
            parsed.get("link").map(String::as_str),
            Some("https://a.example")
        );
    }

    #[test]
    fn invalid_utf8_is_a_bad_request() {
        let bytes = web::Bytes::from_static(&[0xff, 0xfe, 0x61]);
        assert!(parse_form(&bytes).is_err());
    }
}
