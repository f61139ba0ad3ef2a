//! Query predicates as an expression tree.
//!
//! Constructors only shape the tree. Operand types are checked when the
//! [`Serializer`](crate::Serializer) renders it.

mod kind;
pub use kind::ConditionKind;

mod operand;
pub use operand::Operand;

use tabula_core::stmt::Value;

/// An immutable predicate node.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub kind: ConditionKind,

    /// Column, subquery or sub-clause, depending on `kind`
    pub left: Option<Operand>,

    /// Compared value, list value or subquery, depending on `kind`
    pub right: Option<Operand>,

    /// Variadic payload: junction children, BETWEEN bounds, IN values,
    /// CUSTOM fragment and arguments, LIMIT values
    pub args: Vec<Operand>,
}

impl Condition {
    pub fn new(kind: ConditionKind) -> Self {
        Self {
            kind,
            left: None,
            right: None,
            args: vec![],
        }
    }

    fn binary(kind: ConditionKind, column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            left: Some(Operand::column(column)),
            right: Some(Operand::value(value)),
            ..Self::new(kind)
        }
    }

    fn junction<I>(kind: ConditionKind, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        Self {
            args: operands.into_iter().map(Into::into).collect(),
            ..Self::new(kind)
        }
    }

    /// Number of statement arguments the tree binds when rendered.
    ///
    /// Values count once each (a list value binds as one argument). Column
    /// operands count only as junction children, where they bind the field's
    /// current value. Raw SQL binds nothing.
    pub fn value_num(&self) -> usize {
        let junction = self.kind.is_junction();
        let count = |operand: &Operand| match operand {
            Operand::Value(_) => 1,
            Operand::Column(_) if junction => 1,
            Operand::Column(_) | Operand::Raw(_) => 0,
            Operand::Condition(condition) => condition.value_num(),
        };

        self.left.iter().map(count).sum::<usize>()
            + self.right.iter().map(count).sum::<usize>()
            + self.args.iter().map(count).sum::<usize>()
    }
}

pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    Condition::binary(ConditionKind::Eq, column, value)
}

pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    Condition::binary(ConditionKind::Ne, column, value)
}

pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    Condition::binary(ConditionKind::Gt, column, value)
}

pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    Condition::binary(ConditionKind::Lt, column, value)
}

pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    Condition::binary(ConditionKind::Gte, column, value)
}

pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Condition {
    Condition::binary(ConditionKind::Lte, column, value)
}

/// `column IN (?)`, with all of `values` bound as a single list argument.
pub fn in_list<V: Into<Value>>(
    column: impl Into<String>,
    values: impl IntoIterator<Item = V>,
) -> Condition {
    let list: Value = values.into_iter().map(Into::into).collect();
    Condition::binary(ConditionKind::In, column, list)
}

pub fn not_in<V: Into<Value>>(
    column: impl Into<String>,
    values: impl IntoIterator<Item = V>,
) -> Condition {
    let list: Value = values.into_iter().map(Into::into).collect();
    Condition::binary(ConditionKind::NotIn, column, list)
}

pub fn like(column: impl Into<String>, pattern: impl Into<Value>) -> Condition {
    Condition::binary(ConditionKind::Like, column, pattern)
}

pub fn not_like(column: impl Into<String>, pattern: impl Into<Value>) -> Condition {
    Condition::binary(ConditionKind::NotLike, column, pattern)
}

pub fn between(
    column: impl Into<String>,
    low: impl Into<Value>,
    high: impl Into<Value>,
) -> Condition {
    Condition {
        left: Some(Operand::column(column)),
        args: vec![Operand::value(low), Operand::value(high)],
        ..Condition::new(ConditionKind::Between)
    }
}

pub fn not_between(
    column: impl Into<String>,
    low: impl Into<Value>,
    high: impl Into<Value>,
) -> Condition {
    Condition {
        kind: ConditionKind::NotBetween,
        ..between(column, low, high)
    }
}

pub fn exists(subquery: impl Into<String>) -> Condition {
    Condition {
        left: Some(Operand::raw(subquery)),
        ..Condition::new(ConditionKind::Exists)
    }
}

pub fn not_exists(subquery: impl Into<String>) -> Condition {
    Condition {
        left: Some(Operand::raw(subquery)),
        ..Condition::new(ConditionKind::NotExists)
    }
}

pub fn in_subquery(column: impl Into<String>, subquery: impl Into<String>) -> Condition {
    Condition {
        left: Some(Operand::column(column)),
        right: Some(Operand::raw(subquery)),
        ..Condition::new(ConditionKind::InSubquery)
    }
}

pub fn not_in_subquery(column: impl Into<String>, subquery: impl Into<String>) -> Condition {
    Condition {
        kind: ConditionKind::NotInSubquery,
        ..in_subquery(column, subquery)
    }
}

/// `column IN (?, ?, ...)`, one argument per value.
pub fn in_values<V: Into<Value>>(
    column: impl Into<String>,
    values: impl IntoIterator<Item = V>,
) -> Condition {
    Condition {
        left: Some(Operand::column(column)),
        args: values.into_iter().map(Operand::value).collect(),
        ..Condition::new(ConditionKind::InValues)
    }
}

pub fn not_in_values<V: Into<Value>>(
    column: impl Into<String>,
    values: impl IntoIterator<Item = V>,
) -> Condition {
    Condition {
        kind: ConditionKind::NotInValues,
        ..in_values(column, values)
    }
}

pub fn limit(count: impl Into<Value>) -> Condition {
    Condition {
        args: vec![Operand::value(count)],
        ..Condition::new(ConditionKind::Limit)
    }
}

pub fn limit_offset(offset: impl Into<Value>, count: impl Into<Value>) -> Condition {
    Condition {
        args: vec![Operand::value(offset), Operand::value(count)],
        ..Condition::new(ConditionKind::Limit)
    }
}

/// A caller-written SQL fragment, emitted verbatim, followed by the
/// arguments its placeholders bind.
pub fn custom<V: Into<Value>>(sql: impl Into<String>, args: impl IntoIterator<Item = V>) -> Condition {
    Condition {
        args: std::iter::once(Operand::raw(sql))
            .chain(args.into_iter().map(Operand::value))
            .collect(),
        ..Condition::new(ConditionKind::Custom)
    }
}

pub fn and<I>(operands: I) -> Condition
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Condition::junction(ConditionKind::And, operands)
}

pub fn or<I>(operands: I) -> Condition
where
    I: IntoIterator,
    I::Item: Into<Operand>,
{
    Condition::junction(ConditionKind::Or, operands)
}

pub fn not(operand: impl Into<Operand>) -> Condition {
    Condition {
        left: Some(operand.into()),
        ..Condition::new(ConditionKind::Not)
    }
}

impl core::ops::BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        and([self, rhs])
    }
}

impl core::ops::BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        or([self, rhs])
    }
}

impl core::ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        not(self)
    }
}
