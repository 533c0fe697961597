use super::{Comma, Ident, Params, TableAlias, ToSql};

use crate::stmt::{self, Statement};

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            Statement::CreateTable(stmt) => stmt.to_sql(f),
            Statement::DropTable(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Query(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = &self.0.columns;
        let primary_key = self.0.primary_key;

        // SQLite only auto increments a column declared inline as the
        // primary key
        let inline_pk = primary_key.is_some_and(|index| columns[index].auto_increment);

        for (index, column) in columns.iter().enumerate() {
            if index > 0 {
                fmt!(f, ", ");
            }

            fmt!(f, column);

            if inline_pk && primary_key == Some(index) {
                fmt!(f, " PRIMARY KEY AUTOINCREMENT");
            }
        }

        match primary_key {
            Some(index) if !inline_pk => {
                let name = Ident(&columns[index].name);
                fmt!(f, ", PRIMARY KEY (", name, ")");
            }
            _ => {}
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let columns = ColumnsWithConstraints(self);

        fmt!(f, "CREATE TABLE ", &self.name, " (", columns, ")");
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };

        fmt!(f, "DROP TABLE ", if_exists, &self.name);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let serializer = f.serializer;
        let table_name = serializer.table_name(self.table);
        let columns = Comma(
            self.columns
                .iter()
                .map(|column_id| serializer.column_name(*column_id)),
        );
        let rows = Comma(self.rows.iter());

        fmt!(f, "INSERT INTO ", table_name, " (", columns, ") VALUES ", rows);
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let tables = std::iter::once(self.source.table)
            .chain(self.source.joins.iter().map(|join| join.table))
            .collect();

        f.scopes.push(tables);

        fmt!(f, "SELECT ", &self.returning, " FROM ", &self.source);

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE ", filter);
        }

        if let Some(order_by) = &self.order_by {
            fmt!(f, " ORDER BY ", order_by);
        }

        fmt!(f, self.limit);

        f.scopes.pop();
    }
}

impl ToSql for &stmt::Source {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let depth = f.depth();
        let table_name = f.serializer.table_name(self.table);

        fmt!(f, table_name, " AS ", TableAlias(depth, 0));

        for (index, join) in self.joins.iter().enumerate() {
            let table_name = f.serializer.table_name(join.table);
            let alias = TableAlias(depth, index + 1);

            fmt!(f, " INNER JOIN ", table_name, " AS ", alias, " ON ", &join.on);
        }
    }
}

impl ToSql for &stmt::Returning {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Returning::Exprs(exprs) => fmt!(f, Comma(exprs)),
            stmt::Returning::One => fmt!(f, "1"),
        }
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, Comma(&self.exprs));
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, &self.expr, " ", self.order);
    }
}

impl ToSql for stmt::Direction {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Direction::Asc => fmt!(f, "ASC"),
            stmt::Direction::Desc => fmt!(f, "DESC"),
        }
    }
}

impl ToSql for stmt::Limit {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, " LIMIT ", self.limit);

        if let Some(offset) = self.offset {
            fmt!(f, " OFFSET ", offset);
        }
    }
}
