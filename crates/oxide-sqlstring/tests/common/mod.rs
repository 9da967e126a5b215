#![allow(dead_code)]

use oxide_sqlstring::{Dialect, EscapeError, TimeZone, Value, escape};

pub fn utc() -> TimeZone {
    TimeZone::utc()
}

pub fn lit(value: impl Into<Value>, dialect: Dialect) -> String {
    let value = value.into();
    escape(&value, utc(), dialect, false)
        .unwrap_or_else(|e| panic!("Failed to escape {value:?} for {dialect}\nError: {e:?}"))
}

pub fn lit_err(value: impl Into<Value>, dialect: Dialect) -> EscapeError {
    let value = value.into();
    escape(&value, utc(), dialect, false)
        .expect_err(&format!("Expected escape error for {value:?} on {dialect}"))
}

/// Reads a quote-delimited literal body back, undoing the dialect's
/// escaping. Panics if an unescaped quote ends the literal before the last
/// character.
pub fn unquote(literal: &str, dialect: Dialect) -> String {
    let body = literal
        .strip_prefix('N')
        .filter(|_| dialect == Dialect::Mssql)
        .unwrap_or(literal);
    let body = body
        .strip_prefix('\'')
        .and_then(|b| b.strip_suffix('\''))
        .unwrap_or_else(|| panic!("Not a quoted literal: {literal}"));

    let mut out = String::new();
    let mut chars = body.chars().peekable();
    let backslash = matches!(
        dialect,
        Dialect::Mysql | Dialect::Mariadb | Dialect::Ibmi | Dialect::Generic
    );
    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                assert_eq!(
                    chars.next(),
                    Some('\''),
                    "Unescaped quote in {literal} for {dialect}"
                );
                assert!(!backslash, "Quote doubling in backslash dialect: {literal}");
                out.push('\'');
            }
            '\\' if backslash => {
                let escaped = chars
                    .next()
                    .unwrap_or_else(|| panic!("Dangling backslash in {literal}"));
                out.push(match escaped {
                    '0' => '\0',
                    'n' => '\n',
                    'r' => '\r',
                    'b' => '\u{8}',
                    't' => '\t',
                    'Z' => '\u{1a}',
                    other => other,
                });
            }
            '\\' if dialect == Dialect::Postgres && chars.peek() == Some(&'0') => {
                chars.next();
                out.push('\0');
            }
            other => out.push(other),
        }
    }
    out
}

/// Returns the SQL text outside single-quoted literals, or `None` when a
/// literal is left open.
pub fn outside_literals(sql: &str) -> Option<String> {
    let mut outside = String::new();
    let mut in_literal = false;
    for c in sql.chars() {
        if c == '\'' {
            in_literal = !in_literal;
        } else if !in_literal {
            outside.push(c);
        }
    }
    (!in_literal).then_some(outside)
}
