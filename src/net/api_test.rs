use super::*;

#[test]
fn endpoint_is_the_public_random_user_api() {
    assert_eq!(
        RANDOM_USER_ENDPOINT,
        "https://random-data-api.com/api/users/random_user"
    );
}

#[test]
fn username_from_body_reads_the_username_field() {
    assert_eq!(
        username_from_body(r#"{"username":"quirky_badger"}"#),
        Some("quirky_badger".to_owned())
    );
}

#[test]
fn username_from_body_ignores_unknown_fields() {
    let body = r#"{"id":4133,"uid":"a1b2","first_name":"Quirky","username":"quirky_badger","employment":{"title":"Engineer"}}"#;
    assert_eq!(username_from_body(body), Some("quirky_badger".to_owned()));
}

#[test]
fn username_from_body_rejects_malformed_payloads() {
    assert_eq!(username_from_body("not json"), None);
    assert_eq!(username_from_body(r#"{"user":"x"}"#), None);
    assert_eq!(username_from_body(r#"{"username":42}"#), None);
}
