//! Placeholder substitution.
//!
//! Two template styles are supported, one per call:
//!
//! - positional: each `?` takes the next value, left to right;
//! - named: each `:name` takes the value stored under `name`.
//!
//! Substituted values are always escaped as list members, so an array bound
//! to a single placeholder expands to `a, b, c` (the shape `IN (?)` wants)
//! under every dialect.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::error::{EscapeError, Result};
use crate::escape::Escaper;
use crate::types::TypeRegistry;
use crate::value::Value;

/// Named markers: one or more colons, then an ASCII word.
static NAMED_PARAMETER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r":+([0-9A-Za-z_]+)").expect("named parameter pattern is valid")
});

/// Template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template<'a>(&'a str);

impl<'a> Template<'a> {
    /// Wraps template text.
    #[must_use]
    pub const fn new(sql: &'a str) -> Self {
        Self(sql)
    }

    /// Validates raw bytes as template text.
    ///
    /// # Errors
    ///
    /// Returns [`EscapeError::InvalidTemplate`] when the bytes are not UTF-8.
    pub fn from_bytes(bytes: &'a [u8]) -> Result<Self> {
        std::str::from_utf8(bytes)
            .map(Self)
            .map_err(|e| EscapeError::InvalidTemplate(e.to_string()))
    }

    /// Returns the template text.
    #[must_use]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }
}

impl<'a> From<&'a str> for Template<'a> {
    fn from(sql: &'a str) -> Self {
        Self(sql)
    }
}

/// A source of values for named placeholders.
pub trait NamedValues {
    /// Returns the value bound to `name`, if any.
    fn get_value(&self, name: &str) -> Option<&Value>;
}

impl<S: BuildHasher> NamedValues for HashMap<String, Value, S> {
    fn get_value(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl<S: BuildHasher> NamedValues for HashMap<&str, Value, S> {
    fn get_value(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl NamedValues for BTreeMap<String, Value> {
    fn get_value(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl NamedValues for BTreeMap<&str, Value> {
    fn get_value(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}

impl NamedValues for [(&str, Value)] {
    fn get_value(&self, name: &str) -> Option<&Value> {
        self.iter().find(|(key, _)| *key == name).map(|(_, value)| value)
    }
}

impl<const N: usize> NamedValues for [(&str, Value); N] {
    fn get_value(&self, name: &str) -> Option<&Value> {
        self.as_slice().get_value(name)
    }
}

impl<T: NamedValues + ?Sized> NamedValues for &T {
    fn get_value(&self, name: &str) -> Option<&Value> {
        (**self).get_value(name)
    }
}

impl<R: TypeRegistry> Escaper<R> {
    /// Replaces each `?` with the next value.
    ///
    /// Markers beyond the last value are left as they are; values beyond the
    /// last marker are ignored.
    ///
    /// # Errors
    ///
    /// Returns the first error from escaping a value.
    pub fn format<'a>(
        &self,
        template: impl Into<Template<'a>>,
        values: &[Value],
    ) -> Result<String> {
        let sql = template.into().as_str();
        let mut remaining = values.iter();
        let mut out = String::with_capacity(sql.len());
        for c in sql.chars() {
            if c != '?' {
                out.push(c);
                continue;
            }
            match remaining.next() {
                Some(value) => {
                    trace!(?value, "substituting positional parameter");
                    out.push_str(&self.escape_value(value, true)?);
                }
                None => out.push(c),
            }
        }
        Ok(out)
    }

    /// Replaces each `:name` with the value bound to `name`.
    ///
    /// Names starting with a digit are not markers. Under Postgres a marker
    /// starting with `::` is a cast and is left alone.
    ///
    /// # Errors
    ///
    /// - [`EscapeError::MissingNamedParameter`] when a name has no value.
    /// - The first error from escaping a value.
    pub fn format_named<'a, V>(
        &self,
        template: impl Into<Template<'a>>,
        values: &V,
    ) -> Result<String>
    where
        V: NamedValues + ?Sized,
    {
        let sql = template.into().as_str();
        let mut out = String::with_capacity(sql.len());
        let mut last = 0;
        for caps in NAMED_PARAMETER.captures_iter(sql) {
            let (Some(marker), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            out.push_str(&sql[last..marker.start()]);
            last = marker.end();

            let marker_text = marker.as_str();
            let name = name.as_str();
            let is_cast = self.dialect().has_cast_operator() && marker_text.starts_with("::");
            if is_cast || name.starts_with(|c: char| c.is_ascii_digit()) {
                out.push_str(marker_text);
                continue;
            }

            let value = values
                .get_value(name)
                .ok_or_else(|| EscapeError::MissingNamedParameter(marker_text.to_string()))?;
            trace!(name, ?value, "substituting named parameter");
            out.push_str(&self.escape_value(value, true)?);
        }
        out.push_str(&sql[last..]);
        Ok(out)
    }
}
