/// The type of a column or of a projected expression, from Cascade's point of
/// view. Drivers map these onto their storage types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Bool,
    F64,
    I64,
    String,
}

impl Type {
    pub const fn is_numeric(self) -> bool {
        matches!(self, Type::F64 | Type::I64)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Type::Bool => "Bool",
            Type::F64 => "F64",
            Type::I64 => "I64",
            Type::String => "String",
        }
    }
}
