//! Endpoint configuration for a fimagestore deployment.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::constants::{DEL_ACTION, GET_ACTION, PUT_ACTION};
use crate::error::StoreError;

/// URL scheme for talking to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http" => Ok(Scheme::Http),
            "https" => Ok(Scheme::Https),
            other => Err(StoreError::UnsupportedScheme(other.to_string())),
        }
    }
}

/// Immutable connection parameters for one fimagestore deployment.
///
/// The server context is normalised to a leading slash with no trailing
/// slash, and the three action paths are derived from it once at
/// construction. URI assembly downstream of a valid config is infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    scheme: Scheme,
    host: String,
    port: Option<u16>,
    context: String,
    get_path: String,
    put_path: String,
    del_path: String,
}

impl EndpointConfig {
    pub fn new(
        scheme: Scheme,
        host: impl Into<String>,
        port: Option<u16>,
        context: &str,
    ) -> Result<Self, StoreError> {
        let host = host.into();
        if host.is_empty() {
            return Err(StoreError::MissingHost);
        }

        let trimmed = context.trim_matches('/');
        let context = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };

        let get_path = format!("{}/{}", context, GET_ACTION);
        let put_path = format!("{}/{}", context, PUT_ACTION);
        let del_path = format!("{}/{}", context, DEL_ACTION);

        Ok(Self {
            scheme,
            host,
            port,
            context,
            get_path,
            put_path,
            del_path,
        })
    }

    /// Build a config from a base URL such as
    /// `https://files.example.org/imagestore`. The URL path becomes the
    /// server context; query and fragment are ignored.
    pub fn from_url(url: &Url) -> Result<Self, StoreError> {
        let scheme: Scheme = url.scheme().parse()?;
        let host = url.host_str().ok_or(StoreError::MissingHost)?;
        Self::new(scheme, host, url.port(), url.path())
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Normalised server context (leading slash, no trailing slash; empty
    /// when the store is mounted at the root).
    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn get_path(&self) -> &str {
        &self.get_path
    }

    pub fn put_path(&self) -> &str {
        &self.put_path
    }

    pub fn del_path(&self) -> &str {
        &self.del_path
    }

    /// Scheme, host, and port assembled into a root URL. Parsing through
    /// `Url` drops the port again when it equals the scheme default, so
    /// `https://host:443` renders without the port while `:8443` is kept.
    pub(crate) fn root_url(&self) -> Result<Url, StoreError> {
        let root = match self.port {
            Some(port) => format!("{}://{}:{}/", self.scheme.as_str(), self.host, port),
            None => format!("{}://{}/", self.scheme.as_str(), self.host),
        };
        Ok(Url::parse(&root)?)
    }
}
