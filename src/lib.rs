/*!
This crate provides a mutable URL ([RFC 3986](https://tools.ietf.org/html/rfc3986))
container type.

A [`Url`] holds a syntactically valid, percent-encoded URI reference in one
contiguous NUL-terminated buffer together with an index of its component
offsets, and exposes fine-grained read/modify operations on each syntactic
component (scheme, userinfo, host, port, path, query, and fragment) while
keeping the stored string a valid URI reference through every mutation.

## Examples

A `Url` is usually parsed from a string:

```rust
use urlbuf::Url;
use std::str::FromStr;

let url = Url::from_str(
    "https://john.doe@www.example.com:123/forum/questions/?tag=networking&order=newest#top",
).unwrap();

assert_eq!(url.scheme(), Some("https"));
assert_eq!(url.encoded_user(), Some("john.doe"));
assert_eq!(url.encoded_host(), Some("www.example.com"));
assert_eq!(url.port_number(), Some(123));
```

Components are edited in place; the structural delimiters (`:`, `//`, `@`,
`?`, `#`) come and go with the components they mark:

```rust
use urlbuf::Url;
use std::str::FromStr;

let mut url = Url::from_str("http://u:p@h:8080/").unwrap();
url.remove_password().unwrap();
assert_eq!(url.as_str(), "http://u@h:8080/");
url.remove_user().unwrap();
assert_eq!(url.as_str(), "http://h:8080/");
```

Plain setters percent-encode for you; `set_encoded_*` setters validate
instead:

```rust
use urlbuf::Url;

let mut url = Url::default();
url.set_scheme("http").unwrap();
url.set_host("example.com").unwrap();
url.set_path("/a b").unwrap();
url.set_query("x=1&y=2").unwrap();
assert_eq!(url.as_str(), "http://example.com/a%20b?x=1&y=2");

assert!(url.set_encoded_path("/a b").is_err());
```
*/

#![warn(
    unknown_lints,
    // ---------- Stylistic
    absolute_paths_not_starting_with_crate,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    nonstandard_style, /* group */
    noop_method_call,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    // ---------- Future
    future_incompatible, /* group */
    rust_2021_compatibility, /* group */
    // ---------- Public
    missing_debug_implementations,
    // missing_docs,
    unreachable_pub,
    // ---------- Unsafe
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    // ---------- Unused
    unused, /* group */
)]
#![deny(
    // ---------- Public
    exported_private_dependencies,
    // ---------- Deprecated
    anonymous_parameters,
    bare_trait_objects,
    ellipsis_inclusive_range_patterns,
    // ---------- Unsafe
    deref_nullptr,
    drop_bounds,
    dyn_drop,
)]

#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate lazy_static;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

pub use crate::host::HostType;
pub use crate::iter::{Param, PathSegments, QueryParams};
pub use crate::scheme::KnownScheme;
pub use crate::url::Url;

#[cfg(feature = "builder")]
pub use crate::builder::UrlBuilder;

// ------------------------------------------------------------------------------------------------
// Modules
// ------------------------------------------------------------------------------------------------

pub mod error;

#[cfg(feature = "builder")]
pub mod builder;

mod buffer;
mod chars;
mod host;
mod iter;
mod parse;
mod pct_encoding;
mod scheme;
mod url;
