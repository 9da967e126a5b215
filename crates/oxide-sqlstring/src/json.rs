//! Conversion from JSON.
//!
//! JSON has no date or binary type, so those travel as single-key objects:
//! `{"$date": "2020-01-02T03:04:05Z"}` and `{"$blob": "deadbeef"}`. Any other
//! object has no literal form.

use chrono::{DateTime, Utc};
use serde_json::Value as Json;

use crate::error::EscapeError;
use crate::value::Value;

impl TryFrom<Json> for Value {
    type Error = EscapeError;

    fn try_from(json: Json) -> Result<Self, Self::Error> {
        match json {
            Json::Null => Ok(Self::Null),
            Json::Bool(b) => Ok(Self::Bool(b)),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Self::Int(i))
                } else if let Some(u) = n.as_u64() {
                    Ok(Self::BigInt(i128::from(u)))
                } else {
                    n.as_f64()
                        .map(Self::Float)
                        .ok_or_else(|| EscapeError::InvalidValue(n.to_string()))
                }
            }
            Json::String(s) => Ok(Self::Text(s)),
            Json::Array(items) => items
                .into_iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Array),
            Json::Object(map) => {
                let invalid = || EscapeError::InvalidValue(Json::Object(map.clone()).to_string());
                if map.len() != 1 {
                    return Err(invalid());
                }
                match map.iter().next() {
                    Some((key, Json::String(text))) if key == "$date" => {
                        DateTime::parse_from_rfc3339(text)
                            .map(|date| Self::Date(date.with_timezone(&Utc)))
                            .map_err(|_| invalid())
                    }
                    Some((key, Json::String(text))) if key == "$blob" => {
                        hex::decode(text).map(Self::Blob).map_err(|_| invalid())
                    }
                    _ => Err(invalid()),
                }
            }
        }
    }
}
