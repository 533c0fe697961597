use super::{Comma, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}

impl ToSql for &stmt::ValueRecord {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let fields = Comma(self.fields.iter());
        fmt!(f, "(", fields, ")");
    }
}
