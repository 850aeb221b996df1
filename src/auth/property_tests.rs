//! Property-Based Tests for Auth Module
//!
//! Uses proptest to check API key extraction over generated header values.

use axum::http::{header, HeaderMap, HeaderValue};
use proptest::prelude::*;

use crate::auth::get_api_key;
use crate::error::AuthError;

// == Strategies ==
/// Generates non-empty keys of any header-safe characters except space
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[^ \\x00-\\x1f\\x7f]{1,64}".prop_map(|s| s)
}

/// Generates scheme tokens other than `ApiKey`
fn other_scheme_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,12}".prop_filter("must differ from ApiKey", |s| s != "ApiKey")
}

fn headers_with(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_bytes(value.as_bytes()).unwrap());
    headers
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // *For any* non-empty key without spaces, `ApiKey <key>` yields the key.
    #[test]
    fn prop_valid_header_yields_key(key in valid_key_strategy()) {
        let headers = headers_with(&format!("ApiKey {}", key));
        prop_assert_eq!(get_api_key(&headers), Ok(key));
    }

    // *For any* trailing segments, only the second segment is returned.
    #[test]
    fn prop_trailing_segments_ignored(
        key in valid_key_strategy(),
        rest in prop::collection::vec(valid_key_strategy(), 1..5),
    ) {
        let headers = headers_with(&format!("ApiKey {} {}", key, rest.join(" ")));
        prop_assert_eq!(get_api_key(&headers), Ok(key));
    }

    // *For any* other scheme, the header is malformed.
    #[test]
    fn prop_other_scheme_is_malformed(
        scheme in other_scheme_strategy(),
        key in valid_key_strategy(),
    ) {
        let headers = headers_with(&format!("{} {}", scheme, key));
        prop_assert_eq!(get_api_key(&headers), Err(AuthError::MalformedHeader));
    }

    // *For any* single token without a space, the header is malformed.
    #[test]
    fn prop_single_token_is_malformed(token in valid_key_strategy()) {
        let headers = headers_with(&token);
        prop_assert_eq!(get_api_key(&headers), Err(AuthError::MalformedHeader));
    }
}
