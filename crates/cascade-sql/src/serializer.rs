#[macro_use]
mod fmt;
use fmt::ToSql;

mod alias;
use alias::TableAlias;

mod delim;
use delim::{Comma, Delimited};

mod ident;
use ident::Ident;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod expr;
mod name;
mod statement;
mod ty;
mod value;

use crate::stmt::Statement;

use cascade_core::schema::{ColumnId, Schema, TableId};

/// Serialize a statement to a SQL string
#[derive(Debug)]
pub struct Serializer<'a> {
    /// Schema against which the statement is to be serialized
    schema: &'a Schema,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer<'a>,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,

    /// Tables of each enclosing query's source, outermost first. A table's
    /// alias is `tbl_{depth}_{index}`.
    scopes: Vec<Vec<TableId>>,
}

impl<'a> Serializer<'a> {
    /// A serializer for the SQLite dialect.
    pub fn sqlite(schema: &'a Schema) -> Serializer<'a> {
        Serializer { schema }
    }

    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
            params,
            scopes: vec![],
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }

    fn table_name(&self, id: impl Into<TableId>) -> Ident<&'a str> {
        Ident(self.schema.table(id).name.as_str())
    }

    fn column_name(&self, id: impl Into<ColumnId>) -> Ident<&'a str> {
        Ident(self.schema.column(id).name.as_str())
    }
}

impl<T> Formatter<'_, T> {
    /// Nesting level of the query currently being serialized
    fn depth(&self) -> usize {
        self.scopes.len() - 1
    }
}
