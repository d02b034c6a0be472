/*!
The mutable URL container.

A [`Url`](struct.Url.html) owns one contiguous NUL-terminated buffer holding
a syntactically valid, percent-encoded URI reference, plus the component
index table delimiting its eight regions. Every setter follows the same
shape: validate (or encode) the input, decide the structural delimiters the
change requires, splice room into the buffer, write, and re-split the
affected offsets. A failed operation leaves the container byte-identical to
its pre-call state.
*/

use crate::buffer::{Buf, Id, Table, MAX_LENGTH};
use crate::error::{ErrorKind, Result};
use crate::host::{self, HostType};
use crate::iter::{PathSegments, QueryParams};
use crate::parse;
use crate::pct_encoding as pct;
use crate::scheme::{self, KnownScheme};
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::{self, FromStr};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// A mutable URL, stored as a single percent-encoded buffer. Components can
/// be read either in their encoded form (borrowed from the buffer, valid
/// until the next mutation) or decoded (allocated), and each can be set
/// from plain text (encoded for you) or from already-encoded input
/// (validated).
///
/// # Example
///
/// ```rust
/// use urlbuf::Url;
/// use std::str::FromStr;
///
/// let mut url = Url::from_str("http://www.example.com/forum/questions/?tag=networking").unwrap();
/// assert_eq!(url.scheme(), Some("http"));
/// assert_eq!(url.encoded_host(), Some("www.example.com"));
///
/// url.set_port_number(8080).unwrap();
/// url.set_fragment("top").unwrap();
/// assert_eq!(
///     url.as_str(),
///     "http://www.example.com:8080/forum/questions/?tag=networking#top",
/// );
/// ```
///
/// Building one up from nothing works the same way; plain setters
/// percent-encode whatever the component's character set disallows.
///
/// ```rust
/// use urlbuf::Url;
///
/// let mut url = Url::default();
/// url.set_scheme("http").unwrap();
/// url.set_host("example.com").unwrap();
/// url.set_path("/a b").unwrap();
/// assert_eq!(url.as_str(), "http://example.com/a%20b");
/// ```
///
#[derive(Clone, Debug, Default)]
pub struct Url {
    buf: Buf,
    table: Table,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for Url {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Url {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        let table = parse::uri_reference(s.as_bytes())?;
        Ok(Self {
            buf: Buf::from_bytes(s.as_bytes()),
            table,
        })
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.buf.as_bytes() == other.buf.as_bytes()
    }
}

impl Eq for Url {}

impl Hash for Url {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buf.as_bytes().hash(state);
    }
}

impl Url {
    // --------------------------------------------------------------------------------------------
    // Whole-value readers
    // --------------------------------------------------------------------------------------------

    /// The full encoded URL. Borrowed from the buffer; any mutation
    /// invalidates it.
    pub fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    /// The encoded length in bytes, excluding the terminating NUL.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// The allocated capacity. Monotonically non-decreasing across
    /// mutations other than `clear`.
    pub fn capacity_in_bytes(&self) -> usize {
        self.buf.capacity()
    }

    // --------------------------------------------------------------------------------------------
    // Scheme
    // --------------------------------------------------------------------------------------------

    pub fn has_scheme(&self) -> bool {
        self.table.len(Id::Scheme) > 0
    }

    /// The scheme name, without its trailing `:`.
    pub fn scheme(&self) -> Option<&str> {
        let region = self.region_str(Id::Scheme);
        if region.is_empty() {
            None
        } else {
            Some(&region[..region.len() - 1])
        }
    }

    /// The scheme looked up case-insensitively in the known-scheme table.
    pub fn scheme_id(&self) -> KnownScheme {
        match self.scheme() {
            None => KnownScheme::None,
            Some(name) => KnownScheme::from_name(name),
        }
    }

    /// Validate `name` against the scheme grammar and install it, with its
    /// trailing `:`.
    pub fn set_scheme(&mut self, name: &str) -> Result<()> {
        if !scheme::is_scheme_name(name) {
            bail!(ErrorKind::InvalidScheme(name.to_string()));
        }
        let at = self.resize(Id::Scheme, name.len() + 1)?;
        self.buf.write(at, name.as_bytes());
        self.buf.write(at + name.len(), b":");
        self.check_invariants();
        Ok(())
    }

    ///
    /// Install a known scheme without string validation. `KnownScheme::None`
    /// behaves as [`remove_scheme`](#method.remove_scheme).
    ///
    /// # Panics
    ///
    /// Passing `KnownScheme::Unknown` is a programming error and panics.
    ///
    pub fn set_scheme_id(&mut self, id: KnownScheme) -> Result<()> {
        match id {
            KnownScheme::Unknown => panic!("KnownScheme::Unknown cannot be installed"),
            KnownScheme::None => self.remove_scheme(),
            known => {
                let name = known.as_str();
                let at = self.resize(Id::Scheme, name.len() + 1)?;
                self.buf.write(at, name.as_bytes());
                self.buf.write(at + name.len(), b":");
                self.check_invariants();
                Ok(())
            }
        }
    }

    ///
    /// Drop the scheme. If the remaining relative path would start with a
    /// `:`-bearing segment, which reads as a scheme, a `./` segment is
    /// prepended to keep the reference unambiguous.
    ///
    pub fn remove_scheme(&mut self) -> Result<()> {
        if !self.has_scheme() {
            return Ok(());
        }
        let needs_dot = {
            let path = self.region(Id::Path);
            !self.has_authority()
                && !path.is_empty()
                && path[0] != b'/'
                && parse::first_segment_has_colon(path)
        };
        if needs_dot {
            let old = self.region(Id::Path).to_vec();
            let at = self.resize(Id::Path, old.len() + 2)?;
            self.buf.write(at, b"./");
            self.buf.write(at + 2, &old);
            self.table.nseg += 1;
        }
        let _ = self.resize(Id::Scheme, 0)?;
        self.check_invariants();
        Ok(())
    }

    // --------------------------------------------------------------------------------------------
    // Authority
    // --------------------------------------------------------------------------------------------

    /// `true` iff the buffer carries the `//` authority prefix.
    pub fn has_authority(&self) -> bool {
        self.table.len(Id::User) >= 2
    }

    /// The authority content, without its leading `//`.
    pub fn encoded_authority(&self) -> Option<&str> {
        if !self.has_authority() {
            return None;
        }
        let start = self.table.start(Id::User) + 2;
        let end = self.table.end(Id::Port);
        Some(self.str_between(start, end))
    }

    ///
    /// Replace the whole authority (userinfo, host, port) from one encoded
    /// string, e.g. `user:pass@host:8080`. Fails with `InvalidPath` when
    /// the current path is rootless, since a path must be empty or absolute
    /// once an authority is present.
    ///
    pub fn set_encoded_authority(&mut self, authority: &str) -> Result<()> {
        let path = self.region(Id::Path);
        if !path.is_empty() && path[0] != b'/' {
            bail!(ErrorKind::InvalidPath(host::lossy(path)));
        }
        let parts = parse::authority_content(authority.as_bytes())?;
        let at = self.resize_range(Id::User, Id::Port, authority.len() + 2)?;
        self.buf.write(at, b"//");
        self.buf.write(at + 2, authority.as_bytes());
        let content = at + 2;
        self.table.set_boundary(2, content + parts.user_end);
        self.table.set_boundary(3, content + parts.password_end);
        self.table.set_boundary(4, content + parts.host_end);
        self.table.host_type = parts.host_type;
        self.table.port_number = parts.port_number;
        self.check_invariants();
        Ok(())
    }

    ///
    /// Drop the authority entirely. A path beginning `//` gets a `/.`
    /// segment prepended so it cannot be re-read as an authority.
    ///
    pub fn remove_authority(&mut self) -> Result<()> {
        if !self.has_authority() {
            return Ok(());
        }
        if self.region(Id::Path).starts_with(b"//") {
            let old = self.region(Id::Path).to_vec();
            let at = self.resize(Id::Path, old.len() + 2)?;
            self.buf.write(at, b"/.");
            self.buf.write(at + 2, &old);
            self.table.nseg += 1;
        }
        let _ = self.resize_range(Id::User, Id::Port, 0)?;
        self.table.host_type = HostType::None;
        self.table.port_number = None;
        self.check_invariants();
        Ok(())
    }

    // --------------------------------------------------------------------------------------------
    // Userinfo
    // --------------------------------------------------------------------------------------------

    /// `true` iff the authority carries a userinfo terminator `@`.
    pub fn has_userinfo(&self) -> bool {
        self.table.len(Id::Password) > 0
    }

    /// The encoded user name; present (possibly empty) whenever userinfo
    /// is.
    pub fn encoded_user(&self) -> Option<&str> {
        if self.has_userinfo() {
            Some(&self.region_str(Id::User)[2..])
        } else {
            None
        }
    }

    /// The decoded user name.
    pub fn user(&self) -> Option<String> {
        self.encoded_user().map(|s| decoded(s.as_bytes(), &pct::USER))
    }

    pub fn has_password(&self) -> bool {
        self.region(Id::Password).first() == Some(&b':')
    }

    /// The encoded password, without its `:` and `@` delimiters.
    pub fn encoded_password(&self) -> Option<&str> {
        if self.has_password() {
            let region = self.region_str(Id::Password);
            Some(&region[1..region.len() - 1])
        } else {
            None
        }
    }

    /// The decoded password.
    pub fn password(&self) -> Option<String> {
        self.encoded_password()
            .map(|s| decoded(s.as_bytes(), &pct::PASSWORD))
    }

    /// Percent-encode `user` and install it, creating the authority and the
    /// userinfo terminator as needed.
    pub fn set_user(&mut self, user: &str) -> Result<()> {
        let encoded = pct::encode(user.as_bytes(), &pct::USER);
        self.install_user(&encoded)
    }

    /// As [`set_user`](#method.set_user) for already-encoded input; a raw
    /// `:` is rejected because it would read as the password separator.
    pub fn set_encoded_user(&mut self, user: &str) -> Result<()> {
        pct::validate(user.as_bytes(), &pct::USER)?;
        self.install_user(user)
    }

    ///
    /// Drop the user name. The userinfo (and its `@`) survives only if a
    /// password is present; compare `http://u:p@h/` → `http://:p@h/` with
    /// `http://u@h/` → `http://h/`.
    ///
    pub fn remove_user(&mut self) -> Result<()> {
        if !self.has_userinfo() {
            return Ok(());
        }
        if self.has_password() {
            let at = self.resize(Id::User, 2)?;
            self.buf.write(at, b"//");
        } else {
            let at = self.resize_range(Id::User, Id::Password, 2)?;
            self.buf.write(at, b"//");
        }
        self.check_invariants();
        Ok(())
    }

    /// Percent-encode `password` and install it; a missing user becomes the
    /// empty user name, as in `http://:secret@h/`.
    pub fn set_password(&mut self, password: &str) -> Result<()> {
        let encoded = pct::encode(password.as_bytes(), &pct::PASSWORD);
        self.install_password(&encoded)
    }

    /// As [`set_password`](#method.set_password) for already-encoded input.
    pub fn set_encoded_password(&mut self, password: &str) -> Result<()> {
        pct::validate(password.as_bytes(), &pct::PASSWORD)?;
        self.install_password(password)
    }

    ///
    /// Drop the password. The trailing `@` stays while a user name exists;
    /// with an empty user the whole userinfo goes.
    ///
    pub fn remove_password(&mut self) -> Result<()> {
        if !self.has_password() {
            return Ok(());
        }
        let keep_userinfo = self.encoded_user().map(|u| !u.is_empty()).unwrap_or(false);
        if keep_userinfo {
            let at = self.resize(Id::Password, 1)?;
            self.buf.write(at, b"@");
        } else {
            let _ = self.resize(Id::Password, 0)?;
        }
        self.check_invariants();
        Ok(())
    }

    // --------------------------------------------------------------------------------------------
    // Host
    // --------------------------------------------------------------------------------------------

    /// The encoded host; present (possibly empty) whenever the authority
    /// is.
    pub fn encoded_host(&self) -> Option<&str> {
        if self.has_authority() {
            Some(self.region_str(Id::Host))
        } else {
            None
        }
    }

    /// The decoded host. IP-literals carry no percent-encoding and are
    /// returned as stored.
    pub fn host(&self) -> Option<String> {
        self.encoded_host().map(|s| {
            if self.table.host_type == HostType::Name {
                decoded(s.as_bytes(), &pct::REG_NAME)
            } else {
                s.to_string()
            }
        })
    }

    pub fn host_type(&self) -> HostType {
        self.table.host_type
    }

    ///
    /// Install a host from plain text: input that matches the strict IPv4
    /// grammar is stored as an IPv4 address, anything else is
    /// percent-encoded as a registered name.
    ///
    pub fn set_host(&mut self, name: &str) -> Result<()> {
        if let Some(address) = host::parse_ipv4(name.as_bytes()) {
            return self.set_host_ipv4(address);
        }
        let encoded = pct::encode(name.as_bytes(), &pct::REG_NAME);
        self.install_host(&encoded, HostType::Name)
    }

    ///
    /// Install an already-encoded host, classified by shape: `[…]` is an
    /// IP-literal (IPv6 or IPvFuture), then IPv4 is tried, then reg-name
    /// validation.
    ///
    pub fn set_encoded_host(&mut self, name: &str) -> Result<()> {
        let kind = host::classify(name.as_bytes())?;
        self.install_host(name, kind)
    }

    pub fn set_host_ipv4(&mut self, address: Ipv4Addr) -> Result<()> {
        self.install_host(&address.to_string(), HostType::Ipv4)
    }

    /// Serialize `address` in brackets, e.g. `[::1]`.
    pub fn set_host_ipv6(&mut self, address: Ipv6Addr) -> Result<()> {
        self.install_host(&format!("[{}]", address), HostType::Ipv6)
    }

    // --------------------------------------------------------------------------------------------
    // Port
    // --------------------------------------------------------------------------------------------

    pub fn has_port(&self) -> bool {
        self.table.len(Id::Port) > 0
    }

    /// The port digits as stored, without the leading `:`. May be empty or
    /// carry leading zeros while [`port_number`](#method.port_number) still
    /// reports the parsed value.
    pub fn port(&self) -> Option<&str> {
        if self.has_port() {
            Some(&self.region_str(Id::Port)[1..])
        } else {
            None
        }
    }

    /// The numeric port, when the stored digits parse into sixteen bits.
    pub fn port_number(&self) -> Option<u16> {
        self.table.port_number
    }

    ///
    /// Install a port from its digit string, which may be empty. Digits
    /// that overflow a `u16` are stored verbatim with no numeric value.
    ///
    pub fn set_port(&mut self, digits: &str) -> Result<()> {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            bail!(ErrorKind::InvalidPort(digits.to_string()));
        }
        self.guard_growth(digits.len() + 3)?;
        self.ensure_authority()?;
        let at = self.resize(Id::Port, digits.len() + 1)?;
        self.buf.write(at, b":");
        self.buf.write(at + 1, digits.as_bytes());
        self.table.port_number = parse::port_number(digits.as_bytes());
        self.check_invariants();
        Ok(())
    }

    pub fn set_port_number(&mut self, port: u16) -> Result<()> {
        self.set_port(&port.to_string())
    }

    pub fn remove_port(&mut self) -> Result<()> {
        if !self.has_port() {
            return Ok(());
        }
        let _ = self.resize(Id::Port, 0)?;
        self.table.port_number = None;
        self.check_invariants();
        Ok(())
    }

    // --------------------------------------------------------------------------------------------
    // Path
    // --------------------------------------------------------------------------------------------

    /// The encoded path; always defined, possibly empty.
    pub fn encoded_path(&self) -> &str {
        self.region_str(Id::Path)
    }

    /// The decoded path.
    pub fn path(&self) -> String {
        decoded(self.region(Id::Path), &pct::PATH)
    }

    pub fn segment_count(&self) -> usize {
        self.table.nseg
    }

    /// Iterate the encoded path segments, front or back.
    pub fn segments(&self) -> PathSegments<'_> {
        PathSegments::new(self.region(Id::Path), self.table.nseg)
    }

    /// Percent-encode `path` (the `/` separators survive) and install it.
    pub fn set_path(&mut self, path: &str) -> Result<()> {
        let encoded = pct::encode(path.as_bytes(), &pct::PATH);
        self.install_path(&encoded)
    }

    ///
    /// Install an already-encoded path, subject to the context rules: with
    /// an authority the path must be empty or absolute; without one it may
    /// not begin `//`; without a scheme a first segment containing `:`
    /// gets a `./` prepended.
    ///
    pub fn set_encoded_path(&mut self, path: &str) -> Result<()> {
        pct::validate(path.as_bytes(), &pct::PATH)?;
        self.install_path(path)
    }

    pub fn remove_path(&mut self) -> Result<()> {
        let _ = self.resize(Id::Path, 0)?;
        self.table.nseg = 0;
        self.check_invariants();
        Ok(())
    }

    // --------------------------------------------------------------------------------------------
    // Query
    // --------------------------------------------------------------------------------------------

    pub fn has_query(&self) -> bool {
        self.table.len(Id::Query) > 0
    }

    /// The encoded query, without its leading `?`.
    pub fn encoded_query(&self) -> Option<&str> {
        if self.has_query() {
            Some(&self.region_str(Id::Query)[1..])
        } else {
            None
        }
    }

    /// The decoded query.
    pub fn query(&self) -> Option<String> {
        self.encoded_query()
            .map(|s| decoded(s.as_bytes(), &pct::QUERY))
    }

    pub fn param_count(&self) -> usize {
        self.table.nparam
    }

    /// Iterate the encoded `key[=value]` pairs.
    pub fn params(&self) -> QueryParams<'_> {
        let content: &[u8] = if self.has_query() {
            let region = self.region(Id::Query);
            &region[1..]
        } else {
            &[]
        };
        QueryParams::new(content, self.table.nparam)
    }

    /// Percent-encode `query` (`=`, `&` and friends survive) and install
    /// it behind a `?`.
    pub fn set_query(&mut self, query: &str) -> Result<()> {
        let encoded = pct::encode(query.as_bytes(), &pct::QUERY);
        self.install_query(&encoded)
    }

    /// As [`set_query`](#method.set_query) for already-encoded input.
    pub fn set_encoded_query(&mut self, query: &str) -> Result<()> {
        pct::validate(query.as_bytes(), &pct::QUERY)?;
        self.install_query(query)
    }

    /// As [`set_encoded_query`](#method.set_encoded_query), tolerating a
    /// leading `?` on the input.
    pub fn set_encoded_query_part(&mut self, query: &str) -> Result<()> {
        self.set_encoded_query(query.strip_prefix('?').unwrap_or(query))
    }

    ///
    /// Append one `key[=value]` pair, percent-encoding the key and value
    /// with their own character sets so an embedded `=` or `&` can never
    /// change the parameter structure.
    ///
    pub fn append_param(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        let mut pair = pct::encode(key.as_bytes(), &pct::QUERY_KEY);
        if let Some(value) = value {
            pair.push('=');
            pair.push_str(&pct::encode(value.as_bytes(), &pct::QUERY_VALUE));
        }
        let content = match self.encoded_query() {
            Some(existing) => {
                let mut content = existing.to_string();
                content.push('&');
                content.push_str(&pair);
                content
            }
            None => pair,
        };
        self.install_query(&content)
    }

    pub fn remove_query(&mut self) -> Result<()> {
        let _ = self.resize(Id::Query, 0)?;
        self.table.nparam = 0;
        self.check_invariants();
        Ok(())
    }

    // --------------------------------------------------------------------------------------------
    // Fragment
    // --------------------------------------------------------------------------------------------

    pub fn has_fragment(&self) -> bool {
        self.table.len(Id::Fragment) > 0
    }

    /// The encoded fragment, without its leading `#`.
    pub fn encoded_fragment(&self) -> Option<&str> {
        if self.has_fragment() {
            Some(&self.region_str(Id::Fragment)[1..])
        } else {
            None
        }
    }

    /// The decoded fragment.
    pub fn fragment(&self) -> Option<String> {
        self.encoded_fragment()
            .map(|s| decoded(s.as_bytes(), &pct::FRAGMENT))
    }

    /// Percent-encode `fragment` and install it behind a `#`.
    pub fn set_fragment(&mut self, fragment: &str) -> Result<()> {
        let encoded = pct::encode(fragment.as_bytes(), &pct::FRAGMENT);
        self.install_fragment(&encoded)
    }

    /// As [`set_fragment`](#method.set_fragment) for already-encoded input.
    pub fn set_encoded_fragment(&mut self, fragment: &str) -> Result<()> {
        pct::validate(fragment.as_bytes(), &pct::FRAGMENT)?;
        self.install_fragment(fragment)
    }

    /// As [`set_encoded_fragment`](#method.set_encoded_fragment),
    /// tolerating a leading `#` on the input.
    pub fn set_encoded_fragment_part(&mut self, fragment: &str) -> Result<()> {
        self.set_encoded_fragment(fragment.strip_prefix('#').unwrap_or(fragment))
    }

    pub fn remove_fragment(&mut self) -> Result<()> {
        let _ = self.resize(Id::Fragment, 0)?;
        self.check_invariants();
        Ok(())
    }

    // --------------------------------------------------------------------------------------------
    // Whole-value writers
    // --------------------------------------------------------------------------------------------

    /// Empty the URL, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.table.clear();
    }

    /// Grow capacity without changing the stored value.
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    ///
    /// Apply the normalizations of RFC 3986 §6.2.2 that do not change
    /// component structure: the scheme and any registered-name host fold to
    /// lowercase, percent-triplet hex digits fold to uppercase.
    ///
    /// # Example
    ///
    /// ```rust
    /// use urlbuf::Url;
    /// use std::str::FromStr;
    ///
    /// let mut url = Url::from_str("HTTP://EXample.com/%2fa%2Fb").unwrap();
    /// url.normalize();
    /// assert_eq!(url.as_str(), "http://example.com/%2Fa%2Fb");
    /// ```
    ///
    pub fn normalize(&mut self) {
        let (start, end) = (self.table.start(Id::Scheme), self.table.end(Id::Scheme));
        self.buf.slice_mut(start, end).make_ascii_lowercase();

        if self.table.host_type == HostType::Name {
            let (start, end) = (self.table.start(Id::Host), self.table.end(Id::Host));
            let region = self.buf.slice_mut(start, end);
            let mut at = 0;
            while at < region.len() {
                if region[at] == b'%' {
                    at += 3;
                } else {
                    region[at].make_ascii_lowercase();
                    at += 1;
                }
            }
        }

        let total = self.buf.len();
        let bytes = self.buf.slice_mut(0, total);
        let mut at = 0;
        while at < bytes.len() {
            if bytes[at] == b'%' && at + 2 < bytes.len() {
                bytes[at + 1].make_ascii_uppercase();
                bytes[at + 2].make_ascii_uppercase();
                at += 3;
            } else {
                at += 1;
            }
        }
        self.check_invariants();
    }

    // --------------------------------------------------------------------------------------------
    // Resize engine plumbing
    // --------------------------------------------------------------------------------------------

    fn region(&self, id: Id) -> &[u8] {
        self.buf.slice(self.table.start(id), self.table.end(id))
    }

    fn region_str(&self, id: Id) -> &str {
        self.str_between(self.table.start(id), self.table.end(id))
    }

    fn str_between(&self, start: usize, end: usize) -> &str {
        str::from_utf8(self.buf.slice(start, end)).expect("stored URL is ASCII")
    }

    /// Replace component `id`'s region with `new_len` writable bytes,
    /// returning where they start.
    fn resize(&mut self, id: Id, new_len: usize) -> Result<usize> {
        let start = self.table.start(id);
        self.buf.splice(start, self.table.end(id), new_len)?;
        self.table.splice(id, id, new_len);
        Ok(start)
    }

    /// Replace the span covering `first..=last` with `new_len` writable
    /// bytes; interior components collapse to empty until re-split.
    fn resize_range(&mut self, first: Id, last: Id, new_len: usize) -> Result<usize> {
        let start = self.table.start(first);
        self.buf.splice(start, self.table.end(last), new_len)?;
        self.table.splice(first, last, new_len);
        Ok(start)
    }

    /// Pre-flight a worst-case growth so multi-splice operations cannot
    /// fail halfway through.
    fn guard_growth(&self, delta: usize) -> Result<()> {
        let total = self.table.total().saturating_add(delta);
        if total > MAX_LENGTH {
            bail!(ErrorKind::TooLarge(total));
        }
        Ok(())
    }

    ///
    /// Make the `//` prefix (and empty host) exist. Fails with
    /// `InvalidPath` when the current path is rootless, since with an
    /// authority the path must be empty or absolute.
    ///
    fn ensure_authority(&mut self) -> Result<()> {
        if self.has_authority() {
            return Ok(());
        }
        let path = self.region(Id::Path);
        if !path.is_empty() && path[0] != b'/' {
            bail!(ErrorKind::InvalidPath(host::lossy(path)));
        }
        let at = self.resize_range(Id::User, Id::Port, 2)?;
        self.buf.write(at, b"//");
        self.table.host_type = HostType::Name;
        Ok(())
    }

    fn install_user(&mut self, encoded: &str) -> Result<()> {
        self.guard_growth(encoded.len() + 5)?;
        self.ensure_authority()?;
        if !self.has_userinfo() {
            let at = self.resize(Id::Password, 1)?;
            self.buf.write(at, b"@");
        }
        let at = self.resize(Id::User, encoded.len() + 2)?;
        self.buf.write(at, b"//");
        self.buf.write(at + 2, encoded.as_bytes());
        self.check_invariants();
        Ok(())
    }

    fn install_password(&mut self, encoded: &str) -> Result<()> {
        self.guard_growth(encoded.len() + 4)?;
        self.ensure_authority()?;
        let at = self.resize(Id::Password, encoded.len() + 2)?;
        self.buf.write(at, b":");
        self.buf.write(at + 1, encoded.as_bytes());
        self.buf.write(at + 1 + encoded.len(), b"@");
        self.check_invariants();
        Ok(())
    }

    fn install_host(&mut self, encoded: &str, kind: HostType) -> Result<()> {
        self.guard_growth(encoded.len() + 2)?;
        self.ensure_authority()?;
        let at = self.resize(Id::Host, encoded.len())?;
        self.buf.write(at, encoded.as_bytes());
        self.table.host_type = kind;
        self.check_invariants();
        Ok(())
    }

    fn install_path(&mut self, encoded: &str) -> Result<()> {
        let bytes = encoded.as_bytes();
        if self.has_authority() && !bytes.is_empty() && bytes[0] != b'/' {
            bail!(ErrorKind::InvalidPath(encoded.to_string()));
        }
        if !self.has_authority() && bytes.starts_with(b"//") {
            bail!(ErrorKind::InvalidPath(encoded.to_string()));
        }
        let dot = !self.has_authority()
            && !self.has_scheme()
            && !bytes.is_empty()
            && bytes[0] != b'/'
            && parse::first_segment_has_colon(bytes);
        let extra = if dot { 2 } else { 0 };
        let at = self.resize(Id::Path, bytes.len() + extra)?;
        if dot {
            self.buf.write(at, b"./");
        }
        self.buf.write(at + extra, bytes);
        let count = parse::count_segments(self.region(Id::Path));
        self.table.nseg = count;
        self.check_invariants();
        Ok(())
    }

    fn install_query(&mut self, encoded: &str) -> Result<()> {
        let at = self.resize(Id::Query, encoded.len() + 1)?;
        self.buf.write(at, b"?");
        self.buf.write(at + 1, encoded.as_bytes());
        self.table.nparam = parse::count_params(encoded.as_bytes());
        self.check_invariants();
        Ok(())
    }

    fn install_fragment(&mut self, encoded: &str) -> Result<()> {
        let at = self.resize(Id::Fragment, encoded.len() + 1)?;
        self.buf.write(at, b"#");
        self.buf.write(at + 1, encoded.as_bytes());
        self.check_invariants();
        Ok(())
    }

    /// Debug builds re-parse the buffer after every mutation and insist the
    /// stored table matches.
    fn check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            let reparsed = parse::uri_reference(self.buf.as_bytes())
                .expect("mutated URL no longer parses as a URI reference");
            debug_assert_eq!(reparsed, self.table, "index table out of sync with buffer");
        }
    }
}

// ------------------------------------------------------------------------------------------------
// Private Functions
// ------------------------------------------------------------------------------------------------

fn decoded(encoded: &[u8], set: &pct::PctSet) -> String {
    let raw = pct::decode(encoded, set).expect("stored component is valid for its set");
    String::from_utf8_lossy(&raw).into_owned()
}

// ------------------------------------------------------------------------------------------------
// Unit Tests
// ------------------------------------------------------------------------------------------------
