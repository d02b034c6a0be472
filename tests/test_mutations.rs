use pretty_assertions::{assert_eq, assert_ne};
use std::net::Ipv6Addr;
use std::str::FromStr;
use urlbuf::{error::ErrorKind, Url};

// ------------------------------------------------------------------------------------------------
// End-to-end scenarios
// ------------------------------------------------------------------------------------------------

#[test]
fn test_scenario_build_from_empty() {
    let mut url = Url::default();
    url.set_scheme("http").unwrap();
    url.set_host("example.com").unwrap();
    url.set_path("/a b").unwrap();
    url.set_query("x=1&y=2").unwrap();
    url.set_fragment("top").unwrap();
    assert_eq!(url.as_str(), "http://example.com/a%20b?x=1&y=2#top");
}

#[test]
fn test_scenario_remove_password() {
    let mut url = Url::from_str("http://u:p@h:8080/").unwrap();
    url.remove_password().unwrap();
    assert_eq!(url.as_str(), "http://u@h:8080/");
}

#[test]
fn test_scenario_remove_user_password_remains() {
    let mut url = Url::from_str("http://u:p@h/").unwrap();
    url.remove_user().unwrap();
    assert_eq!(url.as_str(), "http://:p@h/");
}

#[test]
fn test_scenario_remove_sole_user() {
    let mut url = Url::from_str("http://u@h/").unwrap();
    url.remove_user().unwrap();
    assert_eq!(url.as_str(), "http://h/");
}

#[test]
fn test_scenario_relative_gains_scheme() {
    let mut url = Url::from_str("/a/b/c").unwrap();
    url.set_scheme("urn").unwrap();
    assert_eq!(url.as_str(), "urn:/a/b/c");
}

#[test]
fn test_scenario_ipv6_host() {
    let mut url = Url::from_str("http://h/").unwrap();
    url.set_host_ipv6(Ipv6Addr::LOCALHOST).unwrap();
    assert_eq!(url.as_str(), "http://[::1]/");
}

#[test]
fn test_scenario_double_slash_path_rejected() {
    let mut url = Url::default();
    let err = url.set_encoded_path("//evil").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidPath(_)));
    assert_eq!(url.as_str(), "");
}

#[test]
fn test_scenario_zero_padded_port() {
    let mut url = Url::from_str("http://h/").unwrap();
    url.set_port("0080").unwrap();
    assert_eq!(url.as_str(), "http://h:0080/");
    assert_eq!(url.port_number(), Some(80));
}

#[test]
fn test_scenario_encoded_slash_single_segment() {
    let url = Url::from_str("http://h/p%2fq").unwrap();
    let segments: Vec<&str> = url.segments().collect();
    assert_eq!(segments, vec!["p%2fq"]);
}

#[test]
fn test_scenario_duplicate_query_keys() {
    let url = Url::from_str("http://h/?a=1&a=2&b=3").unwrap();
    assert_eq!(url.params().filter(|p| p.key == "a").count(), 2);
}

// ------------------------------------------------------------------------------------------------
// Cross-cutting properties
// ------------------------------------------------------------------------------------------------

#[test]
fn test_remove_set_remove_is_remove() {
    let source = "http://u:p@h:80/a?q#f";

    let mut left = Url::from_str(source).unwrap();
    left.remove_query().unwrap();
    left.set_query("z=9").unwrap();
    left.remove_query().unwrap();

    let mut right = Url::from_str(source).unwrap();
    right.remove_query().unwrap();

    assert_eq!(left, right);
    assert_eq!(left.as_str(), right.as_str());
}

#[test]
fn test_capacity_is_monotonic() {
    let mut url = Url::from_str("http://h/").unwrap();
    let mut last = url.capacity_in_bytes();
    for i in 0..32 {
        url.set_path(&format!("/segment/number/{}", i)).unwrap();
        let now = url.capacity_in_bytes();
        assert!(now >= last, "capacity shrank from {} to {}", last, now);
        last = now;
    }
    // Shrinking the value does not shrink the allocation.
    url.set_path("/").unwrap();
    assert!(url.capacity_in_bytes() >= last);
}

#[test]
fn test_clear_keeps_capacity() {
    let mut url = Url::from_str("http://example.com/a/long/path?with=query#frag").unwrap();
    let cap = url.capacity_in_bytes();
    url.clear();
    assert_eq!(url.as_str(), "");
    assert!(url.is_empty());
    assert!(url.capacity_in_bytes() >= cap);

    // The cleared container is fully usable.
    url.set_scheme("http").unwrap();
    url.set_host("h").unwrap();
    assert_eq!(url.as_str(), "http://h");
}

#[test]
fn test_reserve_grows_capacity_only() {
    let mut url = Url::from_str("http://h/").unwrap();
    let before = url.to_string();
    url.reserve(4096);
    assert!(url.capacity_in_bytes() >= 4096);
    assert_eq!(url.to_string(), before);
}

#[test]
fn test_clone_is_independent() {
    let mut original = Url::from_str("http://h/a").unwrap();
    let copy = original.clone();
    original.set_path("/changed").unwrap();
    assert_eq!(copy.as_str(), "http://h/a");
    assert_eq!(original.as_str(), "http://h/changed");
    assert_ne!(original, copy);
}

#[test]
fn test_equality_and_hash_are_byte_based() {
    use std::collections::HashSet;

    let a = Url::from_str("http://h/a").unwrap();
    let b = Url::from_str("http://h/a").unwrap();
    // Equivalent after normalization, but byte-distinct.
    let c = Url::from_str("HTTP://h/a").unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);

    let mut set = HashSet::new();
    set.insert(a);
    set.insert(b);
    set.insert(c);
    assert_eq!(set.len(), 2);
}

#[test]
fn test_interleaved_edits_hold_structure() {
    let mut url = Url::default();
    url.set_path("x").unwrap();
    url.set_scheme("s").unwrap();
    assert_eq!(url.as_str(), "s:x");

    url.remove_path().unwrap();
    url.set_host("h").unwrap();
    url.set_port_number(1).unwrap();
    url.set_fragment("f").unwrap();
    assert_eq!(url.as_str(), "s://h:1#f");

    url.remove_authority().unwrap();
    assert_eq!(url.as_str(), "s:#f");

    url.remove_scheme().unwrap();
    url.remove_fragment().unwrap();
    assert_eq!(url.as_str(), "");
}

#[test]
fn test_normalization_preserves_structure() {
    let mut url = Url::from_str("HTTP://User@EXample.COM:80/A%2fB?Q=%3a#F").unwrap();
    url.normalize();
    assert_eq!(url.as_str(), "http://User@example.com:80/A%2FB?Q=%3A#F");
    assert_eq!(url.encoded_user(), Some("User"));
    assert_eq!(url.port_number(), Some(80));
}
