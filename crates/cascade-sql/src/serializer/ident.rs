use super::{Formatter, Params, ToSql};

/// A quoted SQL identifier
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push('"');
        for c in self.0.as_ref().chars() {
            if c == '"' {
                f.dst.push('"');
            }
            f.dst.push(c);
        }
        f.dst.push('"');
    }
}
