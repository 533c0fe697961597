use super::{Params, ToSql};

use crate::stmt;

impl ToSql for stmt::Type {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = match self {
            stmt::Type::Bool => "BOOLEAN",
            stmt::Type::String => "TEXT",
            stmt::Type::I64 => "INTEGER",
            stmt::Type::F64 => "REAL",
        };

        fmt!(f, name);
    }
}
