//! # oxide-sqlstring
//!
//! Dialect-aware SQL literal escaping and placeholder substitution.
//!
//! This crate is the last step between application data and SQL text:
//! - [`escape`] renders one [`Value`] as a literal for a [`Dialect`]
//! - [`array_to_list`] renders a sequence as a (nested) comma list
//! - [`format`] fills `?` placeholders in order
//! - [`format_named_parameters`] fills `:name` placeholders from a map
//!
//! ## Example
//!
//! ```rust
//! use oxide_sqlstring::{Dialect, TimeZone, Value, format, format_named_parameters};
//!
//! let sql = format(
//!     "SELECT * FROM users WHERE name = ? AND active = ?",
//!     &Value::Array(vec!["O'Brien".into(), true.into()]),
//!     TimeZone::utc(),
//!     Dialect::Sqlite,
//! )
//! .unwrap();
//! assert_eq!(sql, "SELECT * FROM users WHERE name = 'O''Brien' AND active = 1");
//!
//! let sql = format_named_parameters(
//!     "SELECT :id::int",
//!     &[("id", Value::Int(7))],
//!     TimeZone::utc(),
//!     Dialect::Postgres,
//! )
//! .unwrap();
//! assert_eq!(sql, "SELECT 7::int");
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Quotes and (depending on the dialect) backslashes and control characters
//! in string values are escaped, so a value can never close its literal:
//!
//! ```rust
//! use oxide_sqlstring::{Dialect, TimeZone, Value, escape};
//!
//! let user_input = Value::from("'; DROP TABLE users; --");
//! let literal = escape(&user_input, TimeZone::utc(), Dialect::Mysql, false).unwrap();
//! assert_eq!(literal, r"'\'; DROP TABLE users; --'");
//! ```
//!
//! For a custom [`TypeRegistry`] or repeated use with the same settings,
//! build an [`Escaper`] instead of calling the free functions.

pub mod dialect;
pub mod error;
pub mod escape;
pub mod format;
#[cfg(feature = "json")]
pub mod json;
pub mod oracle;
pub mod timezone;
pub mod types;
pub mod value;

pub use dialect::Dialect;
pub use error::{EscapeError, Result};
pub use escape::Escaper;
pub use format::{NamedValues, Template};
pub use timezone::TimeZone;
pub use types::{DataTypes, DateOptions, TypeRegistry};
pub use value::{ToSqlValue, Value, array};

/// Escapes one value with the stock type registry.
///
/// # Errors
///
/// See [`Escaper::escape_value`].
pub fn escape(
    value: &Value,
    timezone: TimeZone,
    dialect: Dialect,
    in_list: bool,
) -> Result<String> {
    Escaper::new(dialect)
        .timezone(timezone)
        .escape_value(value, in_list)
}

/// Renders a sequence as a comma list with the stock type registry.
///
/// # Errors
///
/// Returns the first error from escaping an element.
pub fn array_to_list(
    values: &[Value],
    timezone: TimeZone,
    dialect: Dialect,
    in_list: bool,
) -> Result<String> {
    Escaper::new(dialect)
        .timezone(timezone)
        .array_to_list(values, in_list)
}

/// Fills `?` placeholders. An array supplies one value per placeholder; any
/// other value fills the first placeholder alone.
///
/// # Errors
///
/// Returns the first error from escaping a value.
pub fn format(
    template: &str,
    values: &Value,
    timezone: TimeZone,
    dialect: Dialect,
) -> Result<String> {
    Escaper::new(dialect)
        .timezone(timezone)
        .format(template, values.as_params())
}

/// Fills `:name` placeholders.
///
/// # Errors
///
/// Returns [`EscapeError::MissingNamedParameter`] for a name without a value,
/// or the first error from escaping a value.
pub fn format_named_parameters<V>(
    template: &str,
    values: &V,
    timezone: TimeZone,
    dialect: Dialect,
) -> Result<String>
where
    V: NamedValues + ?Sized,
{
    Escaper::new(dialect)
        .timezone(timezone)
        .format_named(template, values)
}
