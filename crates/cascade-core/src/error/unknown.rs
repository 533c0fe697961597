use super::Error;

/// A name that does not resolve against the schema at query-build time.
#[derive(Debug)]
pub(super) enum UnknownItem {
    Table(Box<str>),
    Column { table: Box<str>, column: Box<str> },
    Relation { table: Box<str>, relation: Box<str> },
}

impl std::error::Error for UnknownItem {}

impl core::fmt::Display for UnknownItem {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            UnknownItem::Table(name) => write!(f, "unknown table `{name}`"),
            UnknownItem::Column { table, column } => {
                write!(f, "unknown column `{column}` on table `{table}`")
            }
            UnknownItem::Relation { table, relation } => {
                write!(f, "unknown relation `{relation}` on table `{table}`")
            }
        }
    }
}

impl Error {
    pub fn unknown_table(name: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownItem(UnknownItem::Table(
            name.into().into(),
        )))
    }

    pub fn unknown_column(table: impl Into<String>, column: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownItem(UnknownItem::Column {
            table: table.into().into(),
            column: column.into().into(),
        }))
    }

    pub fn unknown_relation(table: impl Into<String>, relation: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnknownItem(UnknownItem::Relation {
            table: table.into().into(),
            relation: relation.into().into(),
        }))
    }

    pub fn is_unknown_table(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::UnknownItem(UnknownItem::Table(_))
        )
    }

    pub fn is_unknown_column(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::UnknownItem(UnknownItem::Column { .. })
        )
    }

    pub fn is_unknown_relation(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::UnknownItem(UnknownItem::Relation { .. })
        )
    }
}
