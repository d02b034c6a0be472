use std::str::FromStr;
use urlbuf::Url;

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_remove_password_keeps_user() {
    // Scenario: `http://u:p@h:8080/` loses only the password.
    let mut url = Url::from_str("http://u:p@h:8080/").unwrap();
    url.remove_password().unwrap();
    assert_eq!(url.as_str(), "http://u@h:8080/");
    assert_eq!(url.encoded_user(), Some("u"));
    assert_eq!(url.encoded_password(), None);
}

#[test]
fn test_remove_user_keeps_password() {
    // Scenario: the userinfo survives because the password still exists.
    let mut url = Url::from_str("http://u:p@h/").unwrap();
    url.remove_user().unwrap();
    assert_eq!(url.as_str(), "http://:p@h/");
    assert_eq!(url.encoded_user(), Some(""));
    assert_eq!(url.encoded_password(), Some("p"));
}

#[test]
fn test_remove_user_drops_bare_userinfo() {
    // Scenario: with no password the whole userinfo goes.
    let mut url = Url::from_str("http://u@h/").unwrap();
    url.remove_user().unwrap();
    assert_eq!(url.as_str(), "http://h/");
    assert!(!url.has_userinfo());
}

#[test]
fn test_remove_password_with_empty_user_drops_userinfo() {
    let mut url = Url::from_str("http://:p@h/").unwrap();
    url.remove_password().unwrap();
    assert_eq!(url.as_str(), "http://h/");
    assert!(!url.has_userinfo());
}

#[test]
fn test_set_user() {
    let mut url = Url::from_str("http://h/").unwrap();
    url.set_user("john.doe").unwrap();
    assert_eq!(url.as_str(), "http://john.doe@h/");

    url.set_user("jane").unwrap();
    assert_eq!(url.as_str(), "http://jane@h/");
}

#[test]
fn test_set_user_encodes() {
    let mut url = Url::from_str("http://h/").unwrap();
    url.set_user("a:b c").unwrap();
    assert_eq!(url.as_str(), "http://a%3Ab%20c@h/");
    assert_eq!(url.user(), Some("a:b c".to_string()));
}

#[test]
fn test_set_encoded_user_rejects_raw_colon() {
    let mut url = Url::from_str("http://h/").unwrap();
    assert!(url.set_encoded_user("a:b").is_err());
    assert!(url.set_encoded_user("a@b").is_err());
    assert!(url.set_encoded_user("a%3Ab").is_ok());
    assert_eq!(url.as_str(), "http://a%3Ab@h/");
}

#[test]
fn test_set_password_creates_empty_user() {
    let mut url = Url::from_str("http://h/").unwrap();
    url.set_password("secret").unwrap();
    assert_eq!(url.as_str(), "http://:secret@h/");
    assert_eq!(url.encoded_user(), Some(""));
    assert_eq!(url.encoded_password(), Some("secret"));
}

#[test]
fn test_set_password_keeps_user() {
    let mut url = Url::from_str("http://u@h/").unwrap();
    url.set_password("p w").unwrap();
    assert_eq!(url.as_str(), "http://u:p%20w@h/");
    assert_eq!(url.password(), Some("p w".to_string()));
}

#[test]
fn test_encoded_password_may_hold_colons() {
    let mut url = Url::from_str("http://u@h/").unwrap();
    url.set_encoded_password("a:b").unwrap();
    assert_eq!(url.as_str(), "http://u:a:b@h/");
    assert_eq!(url.encoded_password(), Some("a:b"));
}

#[test]
fn test_set_user_creates_authority() {
    let mut url = Url::default();
    url.set_user("u").unwrap();
    assert_eq!(url.as_str(), "//u@");
    assert!(url.has_authority());
    assert_eq!(url.encoded_host(), Some(""));
}

#[test]
fn test_userinfo_removal_is_idempotent() {
    let mut url = Url::from_str("http://h/").unwrap();
    url.remove_user().unwrap();
    url.remove_password().unwrap();
    assert_eq!(url.as_str(), "http://h/");
}
