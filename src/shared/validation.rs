//! Request Validation
//!
//! Explicit validation helpers used by the HTTP handlers. A [`Validator`]
//! accumulates [`FieldError`]s so a single response can report every bad
//! field at once; the free functions normalize user input (URLs, dates,
//! optional strings) before it reaches the database.

use chrono::{DateTime, NaiveDate};
use reqwest::Url;

use crate::shared::error::{FieldError, SharedError};

/// Accumulates field-level validation errors
///
/// # Example
///
/// ```rust
/// use campus_connect::shared::validation::Validator;
///
/// let mut v = Validator::new();
/// v.required("title", Some("Engineer"), "Title is required");
/// v.required("company", None, "Company is required");
/// assert!(v.finish().is_err());
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails when the value is missing or blank
    pub fn required(&mut self, field: &str, value: Option<&str>, msg: &str) -> &mut Self {
        if value.map(str::trim).unwrap_or_default().is_empty() {
            self.errors.push(FieldError::body(field, msg));
        }
        self
    }

    /// Fails when the value is missing (blank strings pass)
    pub fn exists(&mut self, field: &str, value: Option<&str>, msg: &str) -> &mut Self {
        if value.is_none() {
            self.errors.push(FieldError::body(field, msg));
        }
        self
    }

    /// Fails when the value is not a plausible email address
    pub fn email(&mut self, field: &str, value: Option<&str>, msg: &str) -> &mut Self {
        if !value.map(is_valid_email).unwrap_or(false) {
            self.errors.push(FieldError::body(field, msg));
        }
        self
    }

    /// Fails when the value is shorter than `min` characters
    pub fn min_len(&mut self, field: &str, value: Option<&str>, min: usize, msg: &str) -> &mut Self {
        if value.map(|v| v.chars().count()).unwrap_or(0) < min {
            self.errors.push(FieldError::body(field, msg));
        }
        self
    }

    /// Records an error produced elsewhere
    pub fn push(&mut self, error: FieldError) -> &mut Self {
        self.errors.push(error);
        self
    }

    /// `Ok(())` if no check failed, otherwise every collected error
    pub fn finish(self) -> Result<(), SharedError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SharedError::validation(self.errors))
        }
    }
}

/// Basic structural email check: `local@label.label`, no whitespace
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}

/// Normalize a website to a canonical HTTPS URL
///
/// - Adds `https://` when no scheme is given and upgrades `http` to `https`
/// - Strips a leading `www.` and the default port
/// - Removes `utm_*` query parameters and sorts the rest
/// - Drops the trailing slash
///
/// Returns `None` if the input cannot be parsed as an http(s) URL.
pub fn normalize_url(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let with_scheme = if let Some(rest) = raw.strip_prefix("//") {
        format!("https://{}", rest)
    } else if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    };

    let mut url = Url::parse(&with_scheme).ok()?;
    match url.scheme() {
        "https" => {}
        "http" => {
            let port = url.port();
            url.set_scheme("https").ok()?;
            if port == Some(80) {
                url.set_port(None).ok()?;
            }
        }
        _ => return None,
    }
    if url.port() == Some(443) {
        url.set_port(None).ok()?;
    }

    let host = url.host_str()?.to_string();
    if let Some(bare) = host.strip_prefix("www.") {
        if bare.contains('.') {
            url.set_host(Some(bare)).ok()?;
        }
    }

    if url.query().is_some() {
        let mut pairs: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !key.to_ascii_lowercase().starts_with("utm_"))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        pairs.sort();
        if pairs.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(pairs);
        }
    }

    let path = url.path().to_string();
    if path.len() > 1 && path.ends_with('/') {
        url.set_path(path.trim_end_matches('/'));
    }

    let mut normalized = url.to_string();
    if url.path() == "/" && url.query().is_none() && url.fragment().is_none() {
        normalized.pop();
    }
    Some(normalized)
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp into a calendar date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()))
}

/// Trim an optional string, mapping blank values to `None`
pub fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
