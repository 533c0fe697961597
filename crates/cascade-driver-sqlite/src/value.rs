use cascade_core::{
    stmt::{self, Value as CoreValue},
    Error, Result,
};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Converts this SQLite driver value into the core Cascade value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a Cascade value of type `ty`.
    ///
    /// SQLite columns are loosely typed, so text read into a numeric column
    /// goes through the same conversion as a query-string value.
    pub fn from_sql(row: &Row<'_>, index: usize, ty: stmt::Type) -> Result<Self> {
        let value: SqlValue = row.get(index).map_err(Error::driver_operation_failed)?;

        let core_value = match (value, ty) {
            (SqlValue::Null, _) => CoreValue::Null,
            (SqlValue::Integer(value), stmt::Type::Bool) => CoreValue::Bool(value != 0),
            (SqlValue::Integer(value), stmt::Type::I64) => CoreValue::I64(value),
            (SqlValue::Integer(value), stmt::Type::F64) => CoreValue::F64(value as f64),
            (SqlValue::Integer(value), stmt::Type::String) => CoreValue::String(value.to_string()),
            (SqlValue::Real(value), stmt::Type::F64) => CoreValue::F64(value),
            (SqlValue::Real(value), stmt::Type::String) => CoreValue::String(value.to_string()),
            (SqlValue::Real(value), _) => CoreValue::F64(value).cast(ty)?,
            (SqlValue::Text(value), _) => CoreValue::String(value).cast(ty)?,
            (SqlValue::Blob(_), ty) => {
                return Err(cascade_core::err!(
                    "cannot read blob column {index} as {}",
                    ty.name()
                ))
            }
        };

        Ok(Value(core_value))
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        use stmt::Value;

        match &self.0 {
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
