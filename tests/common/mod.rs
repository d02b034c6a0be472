use std::str::FromStr;
use urlbuf::Url;

pub fn parse_success(url: &str) {
    println!("> parse_success({:?})", url);
    let result = Url::from_str(url);
    assert!(result.is_ok(), "{:?} should parse: {:?}", url, result.err());
    let parsed = result.unwrap();
    assert_eq!(parsed.as_str(), url);
}

pub fn parse_failure(url: &str) {
    println!("> parse_failure({:?})", url);
    let result = Url::from_str(url);
    assert!(result.is_err(), "{:?} should not parse", url);
}

pub fn parse_and_compare(url: &str, compare_to: &str) {
    println!("> parse_and_compare({:?} == {:?})", url, compare_to);
    let parsed = Url::from_str(url).unwrap();
    assert_eq!(parsed.as_str(), compare_to);
}

pub fn normalize_and_compare(url: &str, compare_to: &str) {
    println!("> normalize_and_compare({:?} == {:?})", url, compare_to);
    let mut parsed = Url::from_str(url).unwrap();
    parsed.normalize();
    assert_eq!(parsed.as_str(), compare_to);
}
