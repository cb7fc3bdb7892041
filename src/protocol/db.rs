use serde::{Deserialize, Serialize};

/// A bind value for a database command.
///
/// This is the closed set of primitive types the sub-protocol can carry.
/// Untagged so the JSON form is the natural one: null, number, string, or an
/// array of bytes for blobs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Int(i64),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Double(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Blob(v)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}

/// One result row.
pub type Row = Vec<SqlValue>;

/// A database command. Wire names (`kind`, variant tags, field names) are
/// fixed by the engine's sub-protocol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DbRequest {
    Query {
        sql: String,
        args: Vec<SqlValue>,
        #[serde(default)]
        first_row_only: bool,
    },
    ExecuteMany {
        sql: String,
        args: Vec<Vec<SqlValue>>,
    },
    Begin,
    Commit,
    Rollback,
}

/// Reply to a database command: result rows, or null for commands that
/// produce none (transaction control, most writes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DbResponse {
    Rows(Vec<Row>),
    None,
}

impl DbResponse {
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            DbResponse::Rows(rows) => rows,
            DbResponse::None => Vec::new(),
        }
    }
}
