/*!
* Provides a builder experience for assembling [`Url`](../struct.Url.html)
* instances in a fluent style.
*
* # Example
*
* ```rust
* use urlbuf::builder::UrlBuilder;
* use urlbuf::{error::Result, Url};
* use std::convert::TryInto;
*
* fn make_example_url() -> Result<Url> {
*     let mut builder = UrlBuilder::default();
*     builder
*         .scheme("https")
*         .user("john.doe")
*         .host("www.example.com")
*         .port(123)
*         .path("/forum/questions/")
*         .query("tag=networking&order=newest")
*         .fragment("top");
*     (&mut builder).try_into()
* }
*
* assert_eq!(
*     make_example_url().unwrap().to_string(),
*     "https://john.doe@www.example.com:123/forum/questions/?tag=networking&order=newest#top",
* );
* ```
*/

#![allow(clippy::module_name_repetitions)]

use crate::error::{Error, Result};
use crate::url::Url;
use std::convert::TryFrom;
use std::net::{Ipv4Addr, Ipv6Addr};

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The builder type; collects plain-text components and applies them to a
/// fresh [`Url`](../struct.Url.html) in structural order on `try_into`.
///
#[derive(Debug, Default)]
pub struct UrlBuilder {
    scheme: Option<String>,
    user: Option<String>,
    password: Option<String>,
    host: Option<BuilderHost>,
    port: Option<u16>,
    path: Option<String>,
    query: Option<String>,
    fragment: Option<String>,
}

// ------------------------------------------------------------------------------------------------
// Private Types
// ------------------------------------------------------------------------------------------------

#[derive(Debug)]
enum BuilderHost {
    Plain(String),
    Encoded(String),
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl TryFrom<&mut UrlBuilder> for Url {
    type Error = Error;

    fn try_from(builder: &mut UrlBuilder) -> Result<Self> {
        let mut url = Url::default();

        if let Some(scheme) = &builder.scheme {
            url.set_scheme(scheme)?;
        }

        if let Some(host) = &builder.host {
            match host {
                BuilderHost::Plain(name) => url.set_host(name)?,
                BuilderHost::Encoded(name) => url.set_encoded_host(name)?,
                BuilderHost::Ipv4(address) => url.set_host_ipv4(*address)?,
                BuilderHost::Ipv6(address) => url.set_host_ipv6(*address)?,
            }
            if let Some(user) = &builder.user {
                url.set_user(user)?;
            }
            if let Some(password) = &builder.password {
                url.set_password(password)?;
            }
            if let Some(port) = builder.port {
                url.set_port_number(port)?;
            }
        }

        if let Some(path) = &builder.path {
            url.set_path(path)?;
        }

        if let Some(query) = &builder.query {
            url.set_query(query)?;
        }

        if let Some(fragment) = &builder.fragment {
            url.set_fragment(fragment)?;
        }

        Ok(url)
    }
}

impl UrlBuilder {
    /// Use the provided scheme for this URL.
    pub fn scheme(&mut self, scheme: &str) -> &mut Self {
        self.scheme = Some(scheme.to_string());
        self
    }

    /// Use the provided plain-text host for this URL's authority; IPv4
    /// shapes are detected, everything else is percent-encoded as a
    /// registered name.
    pub fn host(&mut self, host: &str) -> &mut Self {
        self.host = Some(BuilderHost::Plain(host.to_string()));
        self
    }

    /// Use the provided already-encoded host, including IP-literals such
    /// as `[::1]`.
    pub fn encoded_host(&mut self, host: &str) -> &mut Self {
        self.host = Some(BuilderHost::Encoded(host.to_string()));
        self
    }

    /// Use the provided IPv4 address as this URL's host.
    pub fn host_ipv4(&mut self, address: Ipv4Addr) -> &mut Self {
        self.host = Some(BuilderHost::Ipv4(address));
        self
    }

    /// Use the provided IPv6 address as this URL's host.
    pub fn host_ipv6(&mut self, address: Ipv6Addr) -> &mut Self {
        self.host = Some(BuilderHost::Ipv6(address));
        self
    }

    /// Use the provided port number for this URL's authority.
    pub fn port(&mut self, port: u16) -> &mut Self {
        self.port = Some(port);
        self
    }

    /// Use the provided user name for this URL's authority.
    pub fn user(&mut self, user: &str) -> &mut Self {
        self.user = Some(user.to_string());
        self
    }

    /// Use the provided password for this URL's authority.
    pub fn password(&mut self, password: &str) -> &mut Self {
        self.password = Some(password.to_string());
        self
    }

    /// Use the provided plain-text path for this URL.
    pub fn path(&mut self, path: &str) -> &mut Self {
        self.path = Some(path.to_string());
        self
    }

    /// Use the provided plain-text query for this URL.
    pub fn query(&mut self, query: &str) -> &mut Self {
        self.query = Some(query.to_string());
        self
    }

    /// Use the provided plain-text fragment for this URL.
    pub fn fragment(&mut self, fragment: &str) -> &mut Self {
        self.fragment = Some(fragment.to_string());
        self
    }
}
