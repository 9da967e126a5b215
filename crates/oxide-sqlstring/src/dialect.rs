//! SQL dialect support.
//!
//! Databases disagree on how literals are written: which quote character is
//! special, whether backslashes escape, how booleans look. Every escaping
//! decision in this crate is keyed on [`Dialect`], and each rule is a single
//! `match` below so a dialect can be audited in one place.

use std::fmt;

use tracing::warn;

/// The SQL engine whose literal conventions apply.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// PostgreSQL.
    Postgres,
    /// MySQL.
    Mysql,
    /// MariaDB.
    Mariadb,
    /// Microsoft SQL Server.
    Mssql,
    /// SQLite.
    Sqlite,
    /// Oracle Database.
    Oracle,
    /// Snowflake.
    Snowflake,
    /// IBM Db2.
    Db2,
    /// IBM i (Db2 for i).
    Ibmi,
    /// Any other engine. Uses the MySQL-style backslash rules.
    #[default]
    Generic,
}

/// How boolean values are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanStyle {
    /// `true` / `false`.
    Keyword,
    /// `1` / `0`.
    Integer,
}

/// How the body of a string literal is escaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringStyle {
    /// Double every single quote. `escape_nul` additionally rewrites NUL
    /// bytes as `\0`.
    QuoteDoubling {
        /// Whether NUL bytes are rewritten.
        escape_nul: bool,
    },
    /// Quote doubling, except that `TO_TIMESTAMP_TZ` / `TO_DATE` calls are
    /// validated and passed through raw.
    OracleRawFunction,
    /// Backslash escapes for control characters, quotes and backslash.
    Backslash,
}

impl Dialect {
    /// All known dialects.
    pub const ALL: [Self; 10] = [
        Self::Postgres,
        Self::Mysql,
        Self::Mariadb,
        Self::Mssql,
        Self::Sqlite,
        Self::Oracle,
        Self::Snowflake,
        Self::Db2,
        Self::Ibmi,
        Self::Generic,
    ];

    /// Returns the name of the dialect.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Mysql => "mysql",
            Self::Mariadb => "mariadb",
            Self::Mssql => "mssql",
            Self::Sqlite => "sqlite",
            Self::Oracle => "oracle",
            Self::Snowflake => "snowflake",
            Self::Db2 => "db2",
            Self::Ibmi => "ibmi",
            Self::Generic => "generic",
        }
    }

    /// Looks up a dialect by name.
    ///
    /// Matching is case-insensitive. Names this crate does not know fall
    /// through to [`Dialect::Generic`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Self::Postgres,
            "mysql" => Self::Mysql,
            "mariadb" => Self::Mariadb,
            "mssql" | "sqlserver" => Self::Mssql,
            "sqlite" => Self::Sqlite,
            "oracle" => Self::Oracle,
            "snowflake" => Self::Snowflake,
            "db2" => Self::Db2,
            "ibmi" => Self::Ibmi,
            "generic" => Self::Generic,
            other => {
                warn!(dialect = other, "unknown dialect, using generic escaping");
                Self::Generic
            }
        }
    }

    /// Returns how booleans are rendered.
    #[must_use]
    pub const fn boolean_style(self) -> BooleanStyle {
        match self {
            Self::Sqlite | Self::Mssql | Self::Oracle => BooleanStyle::Integer,
            _ => BooleanStyle::Keyword,
        }
    }

    /// Returns how string literal bodies are escaped.
    #[must_use]
    pub const fn string_style(self) -> StringStyle {
        match self {
            Self::Postgres => StringStyle::QuoteDoubling { escape_nul: true },
            Self::Sqlite | Self::Mssql | Self::Snowflake | Self::Db2 => {
                StringStyle::QuoteDoubling { escape_nul: false }
            }
            Self::Oracle => StringStyle::OracleRawFunction,
            Self::Mysql | Self::Mariadb | Self::Ibmi | Self::Generic => StringStyle::Backslash,
        }
    }

    /// Returns whether string literals carry the `N` (national character)
    /// prefix.
    #[must_use]
    pub const fn unicode_prefix(self) -> bool {
        matches!(self, Self::Mssql)
    }

    /// Returns whether the dialect has first-class array literals.
    #[must_use]
    pub const fn supports_native_arrays(self) -> bool {
        matches!(self, Self::Postgres)
    }

    /// Returns whether `::` is a type-cast operator rather than a named
    /// parameter prefix.
    #[must_use]
    pub const fn has_cast_operator(self) -> bool {
        matches!(self, Self::Postgres)
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&str> for Dialect {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
