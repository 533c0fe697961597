use crate::stmt;

/// A statement to execute against a SQL database.
#[derive(Debug)]
pub struct QuerySql {
    /// The statement to execute
    pub stmt: stmt::Statement,

    /// Types of the returned columns, one per `returning` expression. `None`
    /// when the statement returns a row count.
    pub ret: Option<Vec<stmt::Type>>,
}
