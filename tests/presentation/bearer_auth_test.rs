use axum::http::{HeaderMap, HeaderValue, header};

use vidscript::presentation::middleware::{AuthError, check_bearer};

fn headers_with(value: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
    headers
}

#[test]
fn given_matching_token_when_checking_then_accepts() {
    assert!(check_bearer(&headers_with("Bearer s3cret"), "s3cret").is_ok());
}

#[test]
fn given_empty_configured_key_when_checking_then_misconfigured_even_with_header() {
    let result = check_bearer(&headers_with("Bearer "), "");

    assert!(matches!(result, Err(AuthError::Misconfigured)));
}

#[test]
fn given_bad_headers_when_checking_then_unauthorized() {
    let cases = [
        "s3cret",
        "bearer s3cret",
        "Bearer  s3cret",
        "Bearer s3cret ",
        "Bearer other",
        "Basic s3cret",
    ];

    for value in cases {
        assert!(
            matches!(
                check_bearer(&headers_with(value), "s3cret"),
                Err(AuthError::Unauthorized)
            ),
            "header: {}",
            value
        );
    }
}

#[test]
fn given_missing_header_when_checking_then_unauthorized() {
    let result = check_bearer(&HeaderMap::new(), "s3cret");

    assert!(matches!(result, Err(AuthError::Unauthorized)));
}
