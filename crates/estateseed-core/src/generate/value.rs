use std::borrow::Cow;

use chrono::NaiveDate;

/// A generated value for a database column.
///
/// The `String` variant uses `Cow<'static, str>` so that values drawn from the
/// static catalogs (cities, statuses, categories, …) are held as zero-cost
/// `&'static str` borrows, while dynamically generated values (names, emails,
/// formatted addresses) are stored as owned `String`s. The full dataset runs
/// to six figures of rows, so this avoids a large pile of needless clones.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(Cow<'static, str>),
    Date(NaiveDate),
}

impl Value {
    /// Convert to a SQLite literal suitable for INSERT statements.
    ///
    /// Booleans render as 1/0, matching how the original store encoded them.
    pub fn to_sql_literal(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => {
                if *b {
                    "1".to_string()
                } else {
                    "0".to_string()
                }
            }
            Value::Int(i) => i.to_string(),
            Value::Float(f) => format!("{}", f),
            Value::String(s) => format!("'{}'", s.replace('\'', "''")),
            Value::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "{}", s),
            Value::Date(d) => write!(f, "{}", d),
        }
    }
}

impl From<Option<i64>> for Value {
    fn from(v: Option<i64>) -> Self {
        v.map_or(Value::Null, Value::Int)
    }
}

impl From<Option<f64>> for Value {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Value::Null, Value::Float)
    }
}

impl From<Option<NaiveDate>> for Value {
    fn from(v: Option<NaiveDate>) -> Self {
        v.map_or(Value::Null, Value::Date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_literals_escape_quotes() {
        let v = Value::String(Cow::Borrowed("Builder's Best"));
        assert_eq!(v.to_sql_literal(), "'Builder''s Best'");
    }

    #[test]
    fn date_literal_is_iso() {
        let d = NaiveDate::from_ymd_opt(2023, 4, 1).unwrap();
        assert_eq!(Value::Date(d).to_sql_literal(), "'2023-04-01'");
    }

    #[test]
    fn bools_render_as_integers() {
        assert_eq!(Value::Bool(true).to_sql_literal(), "1");
        assert_eq!(Value::Bool(false).to_sql_literal(), "0");
    }

    #[test]
    fn optional_columns_render_null() {
        assert_eq!(Value::from(None::<f64>).to_sql_literal(), "NULL");
        assert_eq!(Value::from(Some(42i64)).to_sql_literal(), "42");
    }
}
