use axum::http::StatusCode;
use axum::response::IntoResponse;
use keystone_api::dto::{envelope, DataEnvelope};
use keystone_api::ApiError;
use keystone_domain::DomainError;

#[test]
fn test_envelope_wraps_under_data() {
    let json = serde_json::to_string(&envelope("hello").0).unwrap();
    assert_eq!(json, r#"{"data":"hello"}"#);
}

#[test]
fn test_envelope_wraps_structured_values() {
    let json = serde_json::to_value(DataEnvelope { data: vec![1, 2, 3] }).unwrap();
    assert_eq!(json, serde_json::json!({ "data": [1, 2, 3] }));
}

#[test]
fn test_unavailable_errors_map_to_503() {
    let response = ApiError(DomainError::CacheUnavailable("down".into())).into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let response = ApiError(DomainError::DatabaseUnavailable("down".into())).into_response();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn test_other_errors_map_to_500() {
    for err in [
        DomainError::DatabaseError("boom".into()),
        DomainError::CacheError("boom".into()),
        DomainError::CacheMiss("key".into()),
        DomainError::Serialization("bad".into()),
    ] {
        assert_eq!(
            ApiError::from(err).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
