use super::{Insert, Select};

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Insert(Insert),
    Query(Select),
}

impl Statement {
    pub fn is_query(&self) -> bool {
        matches!(self, Statement::Query(_))
    }

    pub fn as_query(&self) -> Option<&Select> {
        match self {
            Statement::Query(select) => Some(select),
            _ => None,
        }
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Query(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
