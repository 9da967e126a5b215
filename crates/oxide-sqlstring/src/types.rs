//! Dialect type registry.
//!
//! Dates, blobs and native arrays are rendered by a [`TypeRegistry`], not by
//! the escaper itself. The escaper hands the registry a value and inserts
//! whatever literal comes back verbatim, so a registry implementation is
//! responsible for its own quoting.
//!
//! [`DataTypes`] is the stock registry.

use chrono::{DateTime, Utc};

use crate::dialect::Dialect;
use crate::error::Result;
use crate::timezone::TimeZone;
use crate::value::Value;

/// Options passed to date stringifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateOptions {
    /// Timezone the date is shown in.
    pub timezone: TimeZone,
}

/// Per-dialect stringifiers for the types the escaper does not render
/// itself.
pub trait TypeRegistry {
    /// Renders a date as a complete literal.
    fn stringify_date(&self, dialect: Dialect, date: &DateTime<Utc>, options: &DateOptions)
        -> String;

    /// Renders a blob with the dialect's own syntax, or `None` when the
    /// dialect has none and the generic form applies.
    fn stringify_blob(&self, dialect: Dialect, bytes: &[u8]) -> Option<String>;

    /// Renders a blob when the dialect has no syntax of its own.
    fn stringify_blob_generic(&self, bytes: &[u8]) -> String {
        format!("X'{}'", hex::encode_upper(bytes))
    }

    /// Renders a native array literal. Elements go through `escape`.
    ///
    /// # Errors
    ///
    /// Returns whatever `escape` returns for an element.
    fn stringify_array(
        &self,
        dialect: Dialect,
        values: &[Value],
        escape: &dyn Fn(&Value) -> Result<String>,
    ) -> Result<String>;
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for &T {
    fn stringify_date(
        &self,
        dialect: Dialect,
        date: &DateTime<Utc>,
        options: &DateOptions,
    ) -> String {
        (**self).stringify_date(dialect, date, options)
    }

    fn stringify_blob(&self, dialect: Dialect, bytes: &[u8]) -> Option<String> {
        (**self).stringify_blob(dialect, bytes)
    }

    fn stringify_blob_generic(&self, bytes: &[u8]) -> String {
        (**self).stringify_blob_generic(bytes)
    }

    fn stringify_array(
        &self,
        dialect: Dialect,
        values: &[Value],
        escape: &dyn Fn(&Value) -> Result<String>,
    ) -> Result<String> {
        (**self).stringify_array(dialect, values, escape)
    }
}

/// Date pattern with milliseconds and offset (`YYYY-MM-DD HH:mm:ss.SSS Z`).
pub const DATE_WITH_OFFSET: &str = "%Y-%m-%d %H:%M:%S%.3f %:z";

/// Date pattern with milliseconds and no offset (`YYYY-MM-DD HH:mm:ss.SSS`).
pub const DATE_WITHOUT_OFFSET: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Oracle format mask matching [`DATE_WITH_OFFSET`].
pub const ORACLE_TIMESTAMP_TZ_FORMAT: &str = "'YYYY-MM-DD HH24:MI:SS.FFTZH:TZM'";

/// The stock type registry.
#[derive(Debug, Default, Clone, Copy)]
pub struct DataTypes;

impl DataTypes {
    /// Creates the stock registry.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TypeRegistry for DataTypes {
    fn stringify_date(
        &self,
        dialect: Dialect,
        date: &DateTime<Utc>,
        options: &DateOptions,
    ) -> String {
        let local = date.with_timezone(&options.timezone.offset());
        match dialect {
            Dialect::Oracle => format!(
                "TO_TIMESTAMP_TZ('{}',{ORACLE_TIMESTAMP_TZ_FORMAT})",
                local.format(DATE_WITH_OFFSET)
            ),
            // Columns store wall-clock time in the session timezone.
            Dialect::Mysql
            | Dialect::Mariadb
            | Dialect::Snowflake
            | Dialect::Db2
            | Dialect::Ibmi => format!("'{}'", local.format(DATE_WITHOUT_OFFSET)),
            Dialect::Postgres | Dialect::Mssql | Dialect::Sqlite | Dialect::Generic => {
                format!("'{}'", local.format(DATE_WITH_OFFSET))
            }
        }
    }

    fn stringify_blob(&self, dialect: Dialect, bytes: &[u8]) -> Option<String> {
        match dialect {
            Dialect::Postgres => Some(format!("'\\x{}'", hex::encode(bytes))),
            Dialect::Mssql => Some(format!("0x{}", hex::encode_upper(bytes))),
            Dialect::Oracle => Some(format!("HEXTORAW('{}')", hex::encode_upper(bytes))),
            _ => None,
        }
    }

    fn stringify_array(
        &self,
        _dialect: Dialect,
        values: &[Value],
        escape: &dyn Fn(&Value) -> Result<String>,
    ) -> Result<String> {
        let elements = values.iter().map(escape).collect::<Result<Vec<_>>>()?;
        Ok(format!("ARRAY[{}]", elements.join(",")))
    }
}
