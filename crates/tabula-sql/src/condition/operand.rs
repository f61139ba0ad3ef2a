use super::Condition;

use tabula_core::stmt::Value;

/// One payload slot of a [`Condition`].
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A literal bound as a statement argument
    Value(Value),

    /// A column name. As a child of AND, OR or NOT it stands for
    /// `column = <current field value>`.
    Column(String),

    /// A nested condition
    Condition(Box<Condition>),

    /// SQL text emitted verbatim: a subquery or a custom fragment
    Raw(String),
}

impl Operand {
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_column(&self) -> Option<&str> {
        match self {
            Self::Column(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(sql) => Some(sql),
            _ => None,
        }
    }

    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Self::Condition(condition) => Some(condition),
            _ => None,
        }
    }
}

impl From<Condition> for Operand {
    fn from(condition: Condition) -> Self {
        Self::Condition(Box::new(condition))
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
