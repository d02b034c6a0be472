use std::str::FromStr;
use urlbuf::{KnownScheme, Url};

mod common;
use common::normalize_and_compare;

// ------------------------------------------------------------------------------------------------
// API Tests
// ------------------------------------------------------------------------------------------------

#[test]
fn test_set_scheme() {
    let mut url = Url::from_str("//example.com/a").unwrap();
    url.set_scheme("http").unwrap();
    assert_eq!(url.as_str(), "http://example.com/a");
    assert_eq!(url.scheme(), Some("http"));

    url.set_scheme("coap+tcp").unwrap();
    assert_eq!(url.as_str(), "coap+tcp://example.com/a");
}

#[test]
fn test_set_scheme_rejects_bad_names() {
    let mut url = Url::from_str("//example.com/a").unwrap();
    for bad in ["", "9http", "ht tp", "ht_tp", "ht:tp"] {
        assert!(url.set_scheme(bad).is_err(), "{:?} should be rejected", bad);
    }
    assert_eq!(url.as_str(), "//example.com/a");
}

#[test]
fn test_set_scheme_on_absolute_path() {
    // Scenario: `/a/b/c` gains a scheme; the absolute path stays absolute.
    let mut url = Url::from_str("/a/b/c").unwrap();
    url.set_scheme("urn").unwrap();
    assert_eq!(url.as_str(), "urn:/a/b/c");
}

#[test]
fn test_remove_scheme() {
    let mut url = Url::from_str("http://h/a").unwrap();
    url.remove_scheme().unwrap();
    assert_eq!(url.as_str(), "//h/a");
    assert_eq!(url.scheme(), None);

    // Removing twice is a no-op.
    url.remove_scheme().unwrap();
    assert_eq!(url.as_str(), "//h/a");
}

#[test]
fn test_remove_scheme_guards_colon_segment() {
    // `a:b` without a scheme would itself read as a scheme, so removal
    // prepends a dot segment.
    let mut url = Url::from_str("urn:a:b/c").unwrap();
    url.remove_scheme().unwrap();
    assert_eq!(url.as_str(), "./a:b/c");
    assert_eq!(url.segment_count(), 3);

    // With the colon beyond the first segment no rewrite is needed.
    let mut url = Url::from_str("urn:a/b:c").unwrap();
    url.remove_scheme().unwrap();
    assert_eq!(url.as_str(), "a/b:c");
}

#[test]
fn test_scheme_id() {
    assert_eq!(
        Url::from_str("http://h/").unwrap().scheme_id(),
        KnownScheme::Http
    );
    assert_eq!(
        Url::from_str("HTTPS://h/").unwrap().scheme_id(),
        KnownScheme::Https
    );
    assert_eq!(
        Url::from_str("wss://h/").unwrap().scheme_id(),
        KnownScheme::Wss
    );
    assert_eq!(
        Url::from_str("urn:x").unwrap().scheme_id(),
        KnownScheme::Unknown
    );
    assert_eq!(Url::from_str("/a").unwrap().scheme_id(), KnownScheme::None);
}

#[test]
fn test_set_scheme_id() {
    let mut url = Url::from_str("//h/").unwrap();
    url.set_scheme_id(KnownScheme::Ftp).unwrap();
    assert_eq!(url.as_str(), "ftp://h/");
    assert_eq!(url.scheme_id(), KnownScheme::Ftp);

    // `None` behaves as removal.
    url.set_scheme_id(KnownScheme::None).unwrap();
    assert_eq!(url.as_str(), "//h/");
}

#[test]
fn test_scheme_case_insensitive_normalization() {
    normalize_and_compare("HTTP://h/", "http://h/");
    normalize_and_compare("hTtPs://h/a", "https://h/a");
}

#[test]
fn test_known_scheme_default_ports() {
    assert_eq!(KnownScheme::Http.default_port(), Some(80));
    assert_eq!(KnownScheme::Https.default_port(), Some(443));
    assert_eq!(KnownScheme::Ws.default_port(), Some(80));
    assert_eq!(KnownScheme::Wss.default_port(), Some(443));
    assert_eq!(KnownScheme::Ftp.default_port(), Some(21));
    assert_eq!(KnownScheme::File.default_port(), None);
}
