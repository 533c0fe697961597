use super::{Formatter, Params, ToSql};

/// Alias of the `index`-th table in the source of the query at `depth`.
pub(super) struct TableAlias(pub(super) usize, pub(super) usize);

impl ToSql for TableAlias {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "tbl_", self.0, "_", self.1);
    }
}
