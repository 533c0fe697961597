use super::{Delimited, Ident, Params, ToSql};

use crate::stmt;

impl ToSql for &stmt::Name {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let parts = Delimited(self.0.iter().map(Ident), ".");
        fmt!(f, parts);
    }
}
