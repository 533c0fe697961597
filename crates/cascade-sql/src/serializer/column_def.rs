use super::{Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let name = Ident(&self.name);

        // Auto increment is declared with the primary key by `CREATE TABLE`
        fmt!(f, name, " ", self.ty);

        if self.not_null {
            fmt!(f, " NOT NULL");
        }
    }
}
