//! Value escaping.
//!
//! [`Escaper`] turns a [`Value`] into a literal that can be pasted into a
//! statement for one dialect. Scalars are rendered here; dates, blobs and
//! native arrays are delegated to the [`TypeRegistry`].

use crate::dialect::{BooleanStyle, Dialect, StringStyle};
use crate::error::{EscapeError, Result};
use crate::oracle;
use crate::timezone::TimeZone;
use crate::types::{DataTypes, DateOptions, TypeRegistry};
use crate::value::Value;

/// Renders values as SQL literals for a single dialect.
#[derive(Debug, Clone)]
pub struct Escaper<R = DataTypes> {
    dialect: Dialect,
    timezone: TimeZone,
    registry: R,
}

impl Escaper {
    /// Creates an escaper using the stock [`DataTypes`] registry and UTC.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self::with_registry(dialect, DataTypes::new())
    }
}

impl<R: TypeRegistry> Escaper<R> {
    /// Creates an escaper with a custom type registry.
    #[must_use]
    pub fn with_registry(dialect: Dialect, registry: R) -> Self {
        Self {
            dialect,
            timezone: TimeZone::utc(),
            registry,
        }
    }

    /// Sets the timezone dates are rendered in.
    #[must_use]
    pub const fn timezone(mut self, timezone: TimeZone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns the timezone.
    #[must_use]
    pub const fn time_zone(&self) -> TimeZone {
        self.timezone
    }

    /// Escapes a value outside of any list.
    ///
    /// # Errors
    ///
    /// See [`Escaper::escape_value`].
    pub fn escape(&self, value: &Value) -> Result<String> {
        self.escape_value(value, false)
    }

    /// Escapes a value.
    ///
    /// `in_list` is set when the caller is already rendering a comma list.
    /// It stops Postgres from turning an array into an `ARRAY[...]` literal.
    ///
    /// # Errors
    ///
    /// - [`EscapeError::InvalidValue`] for a non-finite float.
    /// - The Oracle raw function errors, for a string that looks like a
    ///   `TO_TIMESTAMP_TZ` / `TO_DATE` call but is not a valid one.
    pub fn escape_value(&self, value: &Value, in_list: bool) -> Result<String> {
        match value {
            Value::Null => Ok(String::from("NULL")),
            Value::Bool(b) => Ok(self.escape_bool(*b)),
            Value::Int(n) => Ok(n.to_string()),
            Value::BigInt(n) => Ok(n.to_string()),
            Value::Float(f) if f.is_finite() => Ok(f.to_string()),
            Value::Float(_) => Err(EscapeError::InvalidValue(format!("{value:?}"))),
            Value::Text(s) => self.escape_string(s),
            Value::Date(date) => {
                let options = DateOptions {
                    timezone: self.timezone,
                };
                Ok(self.registry.stringify_date(self.dialect, date, &options))
            }
            Value::Blob(bytes) => Ok(self
                .registry
                .stringify_blob(self.dialect, bytes)
                .unwrap_or_else(|| self.registry.stringify_blob_generic(bytes))),
            Value::Array(values) => {
                if self.dialect.supports_native_arrays() && !in_list {
                    let escape = |v: &Value| self.escape_value(v, in_list);
                    self.registry
                        .stringify_array(self.dialect, values, &escape)
                } else {
                    self.array_to_list(values, in_list)
                }
            }
        }
    }

    /// Renders a sequence as a comma list. Nested sequences are wrapped in
    /// parentheses, which is the row-list shape of a bulk `VALUES`.
    ///
    /// # Errors
    ///
    /// Returns the first error from escaping an element.
    pub fn array_to_list(&self, values: &[Value], in_list: bool) -> Result<String> {
        let mut sql = String::new();
        for (i, value) in values.iter().enumerate() {
            if i != 0 {
                sql.push_str(", ");
            }
            if let Value::Array(inner) = value {
                sql.push('(');
                sql.push_str(&self.array_to_list(inner, in_list)?);
                sql.push(')');
            } else {
                sql.push_str(&self.escape_value(value, true)?);
            }
        }
        Ok(sql)
    }

    fn escape_bool(&self, value: bool) -> String {
        match self.dialect.boolean_style() {
            BooleanStyle::Integer => u8::from(value).to_string(),
            BooleanStyle::Keyword => value.to_string(),
        }
    }

    fn escape_string(&self, value: &str) -> Result<String> {
        let body = match self.dialect.string_style() {
            StringStyle::QuoteDoubling { escape_nul } => {
                let doubled = value.replace('\'', "''");
                if escape_nul {
                    doubled.replace('\0', "\\0")
                } else {
                    doubled
                }
            }
            StringStyle::OracleRawFunction => {
                if oracle::is_raw_function_candidate(value) {
                    return oracle::validate_raw_function(value).map(String::from);
                }
                value.replace('\'', "''")
            }
            StringStyle::Backslash => backslash_escape(value),
        };

        let prefix = if self.dialect.unicode_prefix() { "N'" } else { "'" };
        Ok(format!("{prefix}{body}'"))
    }
}

/// Backslash-escapes control characters, quotes and backslash.
fn backslash_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\0' => escaped.push_str("\\0"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\u{8}' => escaped.push_str("\\b"),
            '\t' => escaped.push_str("\\t"),
            '\u{1a}' => escaped.push_str("\\Z"),
            '\\' | '\'' | '"' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
