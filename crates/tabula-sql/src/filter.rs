use crate::Condition;

use tabula_core::stmt::Value;

/// The WHERE input of a statement.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Filter {
    /// No WHERE clause
    #[default]
    None,

    /// A condition tree
    Condition(Condition),

    /// A caller-written clause with its positional arguments. `"-"` and the
    /// empty string render no WHERE clause.
    Raw { clause: String, args: Vec<Value> },
}

impl Filter {
    pub fn raw<V: Into<Value>>(clause: impl Into<String>, args: impl IntoIterator<Item = V>) -> Self {
        Self::Raw {
            clause: clause.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if the filter renders no WHERE clause.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::None => true,
            Self::Condition(_) => false,
            Self::Raw { clause, .. } => is_blank(clause),
        }
    }

    /// Upper bound on the number of arguments the filter binds.
    pub fn value_num(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Condition(condition) => condition.value_num(),
            Self::Raw { args, .. } => args.len(),
        }
    }
}

pub(crate) fn is_blank(clause: &str) -> bool {
    let clause = clause.trim();
    clause.is_empty() || clause == "-"
}

impl From<Condition> for Filter {
    fn from(condition: Condition) -> Self {
        Self::Condition(condition)
    }
}

impl From<&str> for Filter {
    fn from(clause: &str) -> Self {
        Self::Raw {
            clause: clause.to_string(),
            args: vec![],
        }
    }
}

impl From<String> for Filter {
    fn from(clause: String) -> Self {
        Self::Raw {
            clause,
            args: vec![],
        }
    }
}

impl From<()> for Filter {
    fn from(_: ()) -> Self {
        Self::None
    }
}

impl From<Option<Condition>> for Filter {
    fn from(condition: Option<Condition>) -> Self {
        condition.map(Self::Condition).unwrap_or_default()
    }
}
