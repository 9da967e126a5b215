//! SQL values.
//!
//! [`Value`] is the closed set of shapes the escaper knows how to render.
//! Application types are brought into it through [`ToSqlValue`].

use chrono::{DateTime, Utc};

/// A value that can be rendered as a SQL literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Integer outside the `i64` range.
    BigInt(i128),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Point in time.
    Date(DateTime<Utc>),
    /// Binary blob value.
    Blob(Vec<u8>),
    /// Ordered sequence, possibly nested.
    Array(Vec<Value>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the positional parameters this value stands for.
    ///
    /// An array is its own elements; any other value is a one-element list.
    #[must_use]
    pub fn as_params(&self) -> &[Self] {
        match self {
            Self::Array(values) => values,
            other => std::slice::from_ref(other),
        }
    }
}

/// Trait for types that can be converted to SQL values.
pub trait ToSqlValue {
    /// Converts the value to a [`Value`].
    fn to_sql_value(self) -> Value;
}

impl ToSqlValue for Value {
    fn to_sql_value(self) -> Value {
        self
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(self) -> Value {
        Value::Bool(self)
    }
}

macro_rules! int_to_sql_value {
    ($($ty:ty),*) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> Value {
                    Value::Int(i64::from(self))
                }
            }
        )*
    };
}

int_to_sql_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToSqlValue for u64 {
    fn to_sql_value(self) -> Value {
        i64::try_from(self).map_or_else(|_| Value::BigInt(i128::from(self)), Value::Int)
    }
}

impl ToSqlValue for i128 {
    fn to_sql_value(self) -> Value {
        i64::try_from(self).map_or(Value::BigInt(self), Value::Int)
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(self) -> Value {
        Value::Float(self)
    }
}

impl ToSqlValue for f32 {
    fn to_sql_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl ToSqlValue for String {
    fn to_sql_value(self) -> Value {
        Value::Text(self)
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(self) -> Value {
        Value::Text(String::from(self))
    }
}

impl ToSqlValue for DateTime<Utc> {
    fn to_sql_value(self) -> Value {
        Value::Date(self)
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(self) -> Value {
        Value::Blob(self)
    }
}

impl ToSqlValue for &[u8] {
    fn to_sql_value(self) -> Value {
        Value::Blob(self.to_vec())
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> Value {
        match self {
            Some(v) => v.to_sql_value(),
            None => Value::Null,
        }
    }
}

macro_rules! from_to_sql_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    value.to_sql_value()
                }
            }
        )*
    };
}

from_to_sql_value!(
    bool,
    i8,
    i16,
    i32,
    i64,
    i128,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    String,
    &str,
    DateTime<Utc>,
    Vec<u8>,
    &[u8]
);

/// Builds a [`Value::Array`] from anything convertible.
///
/// `Vec<u8>` already means a blob, so lists go through this helper instead of
/// a blanket `Vec<T>` conversion.
#[must_use]
pub fn array<I, T>(items: I) -> Value
where
    I: IntoIterator<Item = T>,
    T: ToSqlValue,
{
    Value::Array(items.into_iter().map(ToSqlValue::to_sql_value).collect())
}
