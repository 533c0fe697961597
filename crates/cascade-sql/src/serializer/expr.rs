use super::{Comma, Delimited, Params, TableAlias, ToSql};

use crate::stmt;
use cascade_core::schema::ColumnId;

impl ToSql for &stmt::Expr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        use stmt::Expr::*;

        match self {
            And(expr) => {
                fmt!(f, Delimited(&expr.operands, " AND "));
            }
            BinaryOp(expr) => {
                fmt!(f, &*expr.lhs, " ", expr.op, " ", &*expr.rhs);
            }
            Column(expr_column) => {
                let depth = f.depth() - expr_column.nesting;
                let column_id = ColumnId {
                    table: f.scopes[depth][expr_column.table],
                    index: expr_column.column,
                };
                let column_name = f.serializer.column_name(column_id);

                fmt!(f, TableAlias(depth, expr_column.table), ".", column_name);
            }
            Exists(expr) => {
                let not = if expr.negated { "NOT " } else { "" };
                fmt!(f, not, "EXISTS (", &*expr.subquery, ")");
            }
            // An empty list matches nothing; `IN ()` is not valid SQL
            InList(expr) if expr.list.is_empty() => {
                fmt!(f, if expr.negated { "1 = 1" } else { "1 = 0" });
            }
            InList(expr) => {
                let op = if expr.negated { " NOT IN (" } else { " IN (" };
                fmt!(f, &*expr.expr, op, Comma(&expr.list), ")");
            }
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, &*expr.expr, " IS NOT NULL");
                } else {
                    fmt!(f, &*expr.expr, " IS NULL");
                }
            }
            Or(expr) => {
                fmt!(f, "(", Delimited(&expr.operands, " OR "), ")");
            }
            Value(expr) => expr.to_sql(f),
        }
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(
            f,
            match self {
                stmt::BinaryOp::Eq => "=",
                stmt::BinaryOp::Gt => ">",
                stmt::BinaryOp::Ge => ">=",
                stmt::BinaryOp::Lt => "<",
                stmt::BinaryOp::Le => "<=",
                stmt::BinaryOp::Ne => "<>",
            }
        );
    }
}
