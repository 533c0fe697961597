use cascade_core::{schema::Column, stmt::Type};

#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: Type,
    pub not_null: bool,
    pub auto_increment: bool,
}

impl ColumnDef {
    pub(crate) fn from_schema(column: &Column) -> ColumnDef {
        ColumnDef {
            name: column.name.clone(),
            ty: column.ty,
            // Primary keys are implicitly not null
            not_null: !column.nullable && !column.primary_key,
            auto_increment: column.auto_increment,
        }
    }
}
