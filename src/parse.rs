/*!
Internal grammar parsers.

Each function parses one RFC 3986 production over raw bytes and the
top-level `uri_reference` emits the component index table directly, so the
container can splice parsed offsets without a second pass.

From RFC 3986, appendix A. _Collected ABNF for URI_:

```text
URI-reference = URI / relative-ref
URI           = scheme ":" hier-part [ "?" query ] [ "#" fragment ]
relative-ref  = relative-part [ "?" query ] [ "#" fragment ]
hier-part     = "//" authority path-abempty
              / path-absolute / path-rootless / path-empty
authority     = [ userinfo "@" ] host [ ":" port ]
userinfo      = *( unreserved / pct-encoded / sub-delims / ":" )
host          = IP-literal / IPv4address / reg-name
port          = *DIGIT
```
*/

use crate::buffer::Table;
use crate::chars;
use crate::error::{ErrorKind, Result, ResultExt};
use crate::host::{self, HostType};
use crate::pct_encoding as pct;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

/// Sub-offsets of a parsed authority, relative to the start of its content
/// (the byte after `//`). `user_end` is where the user text stops,
/// `password_end` is one past the `@` (both zero when there is no
/// userinfo), `host_end` is where the host stops; anything after that is
/// the `:port`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AuthorityParts {
    pub(crate) user_end: usize,
    pub(crate) password_end: usize,
    pub(crate) host_end: usize,
    pub(crate) host_type: HostType,
    pub(crate) port_number: Option<u16>,
}

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

/// Parse a complete `URI-reference`, producing the component index table
/// for it.
pub(crate) fn uri_reference(s: &[u8]) -> Result<Table> {
    let mut table = Table::default();
    let total = s.len();
    let mut at = 0;
    let mut has_scheme = false;
    let mut has_authority = false;

    // A scheme is present iff a `:` appears before the first `/`, `?` or
    // `#`; path-noscheme forbids `:` in the first segment, so a candidate
    // that fails the scheme grammar is an error, not a relative reference.
    if let Some(delim) = s
        .iter()
        .position(|b| matches!(b, b':' | b'/' | b'?' | b'#'))
    {
        if s[delim] == b':' {
            scheme_name(&s[..delim])?;
            at = delim + 1;
            has_scheme = true;
        }
    }
    table.set_boundary(1, at);

    if s[at..].starts_with(b"//") {
        has_authority = true;
        let content = at + 2;
        let end = content
            + s[content..]
                .iter()
                .position(|b| matches!(b, b'/' | b'?' | b'#'))
                .unwrap_or(total - content);
        let parts = authority_content(&s[content..end])?;
        table.set_boundary(2, content + parts.user_end);
        table.set_boundary(3, content + parts.password_end);
        table.set_boundary(4, content + parts.host_end);
        table.set_boundary(5, end);
        table.host_type = parts.host_type;
        table.port_number = parts.port_number;
        at = end;
    } else {
        for index in 2..=5 {
            table.set_boundary(index, at);
        }
    }

    // Path runs to the first `?` or `#`.
    let path_end = at
        + s[at..]
            .iter()
            .position(|b| matches!(b, b'?' | b'#'))
            .unwrap_or(total - at);
    pct::validate(&s[at..path_end], &pct::PATH)
        .chain_err(|| ErrorKind::InvalidPath(host::lossy(&s[at..path_end])))?;
    if !path_context_ok(&s[at..path_end], has_scheme, has_authority) {
        bail!(ErrorKind::InvalidPath(host::lossy(&s[at..path_end])));
    }
    table.nseg = count_segments(&s[at..path_end]);
    table.set_boundary(6, path_end);
    at = path_end;

    if at < total && s[at] == b'?' {
        let end = at
            + 1
            + s[at + 1..]
                .iter()
                .position(|b| *b == b'#')
                .unwrap_or(total - at - 1);
        pct::validate(&s[at + 1..end], &pct::QUERY)
            .chain_err(|| ErrorKind::InvalidQuery(host::lossy(&s[at + 1..end])))?;
        table.nparam = count_params(&s[at + 1..end]);
        at = end;
    }
    table.set_boundary(7, at);

    if at < total && s[at] == b'#' {
        pct::validate(&s[at + 1..], &pct::FRAGMENT)
            .chain_err(|| ErrorKind::InvalidFragment(host::lossy(&s[at + 1..])))?;
    }
    table.set_boundary(8, total);

    log::trace!(
        "uri_reference() parsed {} bytes, {} segments, {} params",
        total,
        table.nseg,
        table.nparam
    );
    Ok(table)
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub(crate) fn scheme_name(name: &[u8]) -> Result<()> {
    let valid = !name.is_empty()
        && chars::is_alpha(name[0])
        && name[1..].iter().all(|b| chars::is_scheme_char(*b));
    if valid {
        Ok(())
    } else {
        Err(ErrorKind::InvalidScheme(host::lossy(name)).into())
    }
}

/// `authority = [ userinfo "@" ] host [ ":" port ]`, without the leading
/// `//`.
pub(crate) fn authority_content(s: &[u8]) -> Result<AuthorityParts> {
    let (user_end, password_end);
    let host_start;
    // A raw `@` is legal nowhere in an authority except as the userinfo
    // terminator, so the first one is the split point.
    match s.iter().position(|b| *b == b'@') {
        Some(terminator) => {
            let userinfo = &s[..terminator];
            let colon = userinfo.iter().position(|b| *b == b':');
            user_end = colon.unwrap_or(terminator);
            pct::validate(&s[..user_end], &pct::USER)
                .chain_err(|| ErrorKind::InvalidAuthority(host::lossy(s)))?;
            if let Some(colon) = colon {
                pct::validate(&s[colon + 1..terminator], &pct::PASSWORD)
                    .chain_err(|| ErrorKind::InvalidAuthority(host::lossy(s)))?;
            }
            password_end = terminator + 1;
            host_start = terminator + 1;
        }
        None => {
            user_end = 0;
            password_end = 0;
            host_start = 0;
        }
    }

    let host_end = if host_start < s.len() && s[host_start] == b'[' {
        match s[host_start..].iter().position(|b| *b == b']') {
            Some(bracket) => host_start + bracket + 1,
            None => bail!(ErrorKind::InvalidHost(host::lossy(&s[host_start..]))),
        }
    } else {
        host_start
            + s[host_start..]
                .iter()
                .position(|b| *b == b':')
                .unwrap_or(s.len() - host_start)
    };
    let host_type = host::classify(&s[host_start..host_end])?;

    let mut port_number = None;
    if host_end < s.len() {
        if s[host_end] != b':' {
            bail!(ErrorKind::InvalidAuthority(host::lossy(s)));
        }
        let digits = &s[host_end + 1..];
        if !digits.iter().all(|b| chars::is_digit(*b)) {
            bail!(ErrorKind::InvalidPort(host::lossy(digits)));
        }
        port_number = self::port_number(digits);
    }

    Ok(AuthorityParts {
        user_end,
        password_end,
        host_end,
        host_type,
        port_number,
    })
}

/// The numeric value of a port string, or `None` when the string is empty
/// or overflows sixteen bits. Leading zeros are accepted.
pub(crate) fn port_number(digits: &[u8]) -> Option<u16> {
    if digits.is_empty() {
        return None;
    }
    let mut value: u32 = 0;
    for b in digits {
        value = value * 10 + u32::from(b - b'0');
        if value > u32::from(u16::MAX) {
            return None;
        }
    }
    Some(value as u16)
}

/// `true` when `path` is legal in the given context: with an authority the
/// path must be abempty; without one it may not begin `//`; without a
/// scheme its first segment may not contain `:`.
pub(crate) fn path_context_ok(path: &[u8], has_scheme: bool, has_authority: bool) -> bool {
    if has_authority {
        path.is_empty() || path[0] == b'/'
    } else if path.starts_with(b"//") {
        false
    } else if !has_scheme && !path.is_empty() && path[0] != b'/' {
        !first_segment_has_colon(path)
    } else {
        true
    }
}

pub(crate) fn first_segment_has_colon(path: &[u8]) -> bool {
    let end = path
        .iter()
        .position(|b| *b == b'/')
        .unwrap_or_else(|| path.len());
    path[..end].contains(&b':')
}

/// Counts `/`-separated segments; a leading `/` is a delimiter, not a
/// segment, so `/` alone is one (empty) segment and the empty path is zero.
pub(crate) fn count_segments(path: &[u8]) -> usize {
    if path.is_empty() {
        return 0;
    }
    let slashes = path.iter().filter(|b| **b == b'/').count();
    if path[0] == b'/' {
        slashes
    } else {
        slashes + 1
    }
}

/// Counts `key[=value]` pairs in query content (no leading `?`); called
/// only when a query region exists, so empty content is one empty key.
pub(crate) fn count_params(query: &[u8]) -> usize {
    1 + query.iter().filter(|b| **b == b'&').count()
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
