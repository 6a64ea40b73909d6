use crate::api::middleware::require_auth::bearer_token;

use http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}

#[test]
fn test_bearer_token_extracted() {
    let headers = headers_with("Bearer abc.def.ghi");

    assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
}

#[test]
fn test_missing_header_yields_none() {
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}

#[test]
fn test_other_scheme_yields_none() {
    assert_eq!(bearer_token(&headers_with("Basic dXNlcjpwYXNz")), None);
}

#[test]
fn test_empty_bearer_yields_none() {
    assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    assert_eq!(bearer_token(&headers_with("Bearer    ")), None);
}

#[test]
fn test_scheme_is_case_insensitive() {
    assert_eq!(bearer_token(&headers_with("bearer abc.def.ghi")), Some("abc.def.ghi"));
    assert_eq!(bearer_token(&headers_with("BEARER abc.def.ghi")), Some("abc.def.ghi"));
}

#[test]
fn test_scheme_without_token_yields_none() {
    assert_eq!(bearer_token(&headers_with("Bearer")), None);
    assert_eq!(bearer_token(&headers_with("Bearerabc")), None);
}
