use crate::DependencyMeta;

/// How a parent filter's selection narrows a dependent filter's options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// A column of the options table equals the parent's value
    ForeignKey(String),

    /// A row related through the named relation has an `id` equal to the
    /// parent's value
    Relationship(String),
}

/// Links a dependent filter to the parent filter it is narrowed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Key of the parent filter
    pub parent: String,

    pub constraint: Constraint,
}

impl From<&Constraint> for DependencyMeta {
    fn from(value: &Constraint) -> Self {
        match value {
            Constraint::ForeignKey(column) => DependencyMeta::ForeignKey(column.clone()),
            Constraint::Relationship(name) => DependencyMeta::Relationship(name.clone()),
        }
    }
}
