//! Pluggable retrieval of schema documents named by an absolute URI.
//!
//! Grounded on `resolver::SchemaResolver`/`DefaultResolver`: a small trait so
//! callers can substitute an offline or pre-seeded loader, plus a default
//! implementation that understands `file://` always and `http(s)://` when the
//! `resolve-http` feature is enabled.
use serde_json::Value;
use std::fmt;
use url::Url;

/// Fetches and parses the schema document named by an absolute URI.
///
/// Implementors only need to handle the URI schemes they expect to see;
/// unsupported schemes should return an error, which the caller treats the
/// same as any other fetch failure (swallowed during eager graph-building,
/// surfaced as a [`crate::error::ValidationError`] only if a `$ref` actually
/// exercising that target is validated against).
pub trait SchemaLoader: fmt::Debug + Send + Sync {
    fn load(&self, uri: &Url) -> Result<Value, anyhow::Error>;
}

/// `file://` and, behind `resolve-http`, `http(s)://`.
#[derive(Debug, Default)]
pub struct DefaultLoader {
    _private: (),
}

impl DefaultLoader {
    pub fn new() -> Self {
        DefaultLoader { _private: () }
    }
}

impl SchemaLoader for DefaultLoader {
    fn load(&self, uri: &Url) -> Result<Value, anyhow::Error> {
        match uri.scheme() {
            "file" => {
                let path = uri
                    .to_file_path()
                    .map_err(|_| anyhow::anyhow!("not a valid file URI: {}", uri))?;
                let contents = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&contents)?)
            }
            #[cfg(feature = "resolve-http")]
            "http" | "https" => {
                let response = reqwest::blocking::get(uri.clone())?;
                Ok(response.json()?)
            }
            other => Err(anyhow::anyhow!("unsupported schema URI scheme: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_scheme_is_an_error() {
        let loader = DefaultLoader::new();
        let uri = Url::parse("ftp://example.com/schema.json").unwrap();
        assert!(loader.load(&uri).is_err());
    }
}
