/*!
Known scheme names and scheme-string validation.

A fixed table maps the scheme names this crate recognizes (case-insensitive,
per RFC 3986 §6.2.3) to [`KnownScheme`](enum.KnownScheme.html) values;
anything else is carried as `Unknown` alongside the stored string.
*/

#![allow(clippy::module_name_repetitions)]

use crate::error::{Error, ErrorKind};
use regex::Regex;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The schemes with first-class support, plus the two sentinels: `None`
/// (the URL has no scheme) and `Unknown` (a valid scheme this table does
/// not recognize). `Unknown` can be observed via
/// [`Url::scheme_id`](../struct.Url.html#method.scheme_id) but must never
/// be passed to the enum setter.
///
/// # Example
///
/// ```rust
/// use urlbuf::KnownScheme;
///
/// assert_eq!(KnownScheme::from_name("HTTPS"), KnownScheme::Https);
/// assert_eq!(KnownScheme::from_name("gopher"), KnownScheme::Unknown);
/// assert_eq!(KnownScheme::Https.default_port(), Some(443));
/// ```
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KnownScheme {
    /// No scheme present.
    None,
    /// A syntactically valid scheme outside this table.
    Unknown,
    /// File Transfer Protocol, RFC 1738.
    Ftp,
    /// Local or network file systems, RFC 8089.
    File,
    /// HTTP resources, RFC 7230.
    Http,
    /// HTTP resources secured with TLS, RFC 7230.
    Https,
    /// WebSocket protocol, RFC 6455.
    Ws,
    /// WebSocket protocol over TLS, RFC 6455.
    Wss,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

lazy_static! {
    static ref RE_SCHEME: Regex = Regex::new("^[[:alpha:]][[:alnum:]+.-]*$").unwrap();
    static ref KNOWN_SCHEMES: HashMap<&'static str, KnownScheme> = {
        let mut table = HashMap::new();
        let _ = table.insert("ftp", KnownScheme::Ftp);
        let _ = table.insert("file", KnownScheme::File);
        let _ = table.insert("http", KnownScheme::Http);
        let _ = table.insert("https", KnownScheme::Https);
        let _ = table.insert("ws", KnownScheme::Ws);
        let _ = table.insert("wss", KnownScheme::Wss);
        table
    };
}

impl Default for KnownScheme {
    fn default() -> Self {
        KnownScheme::None
    }
}

impl Display for KnownScheme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for KnownScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_scheme_name(s) {
            Ok(Self::from_name(s))
        } else {
            Err(ErrorKind::InvalidScheme(s.to_string()).into())
        }
    }
}

impl KnownScheme {
    ///
    /// Look a scheme name up case-insensitively. The empty string maps to
    /// `None`, an unrecognized name to `Unknown`; no validation is
    /// performed here.
    ///
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() {
            return KnownScheme::None;
        }
        match KNOWN_SCHEMES.get(name.to_ascii_lowercase().as_str()) {
            Some(known) => *known,
            None => KnownScheme::Unknown,
        }
    }

    /// The canonical (lowercase) name; empty for the sentinels.
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownScheme::None | KnownScheme::Unknown => "",
            KnownScheme::Ftp => "ftp",
            KnownScheme::File => "file",
            KnownScheme::Http => "http",
            KnownScheme::Https => "https",
            KnownScheme::Ws => "ws",
            KnownScheme::Wss => "wss",
        }
    }

    ///
    /// Return the default port for this scheme, if it has one. `ws` and
    /// `wss` share the HTTP ports they handshake over.
    ///
    pub fn default_port(&self) -> Option<u16> {
        match self {
            KnownScheme::Ftp => Some(21),
            KnownScheme::Http | KnownScheme::Ws => Some(80),
            KnownScheme::Https | KnownScheme::Wss => Some(443),
            _ => None,
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub(crate) fn is_scheme_name(s: &str) -> bool {
    RE_SCHEME.is_match(s)
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_scheme_name() {
        assert!(is_scheme_name("http"));
        assert!(is_scheme_name("iris.beep"));
        assert!(is_scheme_name("z39.50r"));
        assert!(is_scheme_name("a"));

        assert!(!is_scheme_name(""));
        assert!(!is_scheme_name("1http"));
        assert!(!is_scheme_name("ht tp"));
        assert!(!is_scheme_name("ht_tp"));
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(KnownScheme::from_name("HTTP"), KnownScheme::Http);
        assert_eq!(KnownScheme::from_name("hTtPs"), KnownScheme::Https);
        assert_eq!(KnownScheme::from_name("WSS"), KnownScheme::Wss);
        assert_eq!(KnownScheme::from_name(""), KnownScheme::None);
        assert_eq!(KnownScheme::from_name("urn"), KnownScheme::Unknown);
    }

    #[test]
    fn test_from_str_validates() {
        assert!(KnownScheme::from_str("mailto").is_ok());
        assert!(KnownScheme::from_str("9p").is_err());
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(KnownScheme::Http.default_port(), Some(80));
        assert_eq!(KnownScheme::Wss.default_port(), Some(443));
        assert_eq!(KnownScheme::File.default_port(), None);
        assert_eq!(KnownScheme::None.default_port(), None);
    }
}
