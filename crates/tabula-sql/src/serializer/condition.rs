use super::{raw, Comma, Flavor, Formatter, Param, ToSql};

use crate::{filter::is_blank, Condition, ConditionKind, Filter, Operand};

use tabula_core::{stmt::Value, Error, Result};

/// What remains of a condition tree once LIMIT is hoisted out of it.
enum Predicate<'a> {
    Whole(&'a Condition),
    And(Vec<&'a Operand>),
}

/// Splits a LIMIT node off the root, or off a direct child of a root AND.
fn hoist_limit(condition: &Condition) -> Result<(Option<Predicate<'_>>, Option<&Condition>)> {
    match condition.kind {
        ConditionKind::Limit => Ok((None, Some(condition))),
        ConditionKind::And => {
            let mut limit = None;
            let mut rest = vec![];

            for operand in &condition.args {
                match operand {
                    Operand::Condition(child) if child.kind == ConditionKind::Limit => {
                        if limit.replace(&**child).is_some() {
                            return Err(malformed(ConditionKind::Limit, "appears more than once"));
                        }
                    }
                    _ => rest.push(operand),
                }
            }

            if limit.is_none() {
                return Ok((Some(Predicate::Whole(condition)), None));
            }

            Ok(((!rest.is_empty()).then_some(Predicate::And(rest)), limit))
        }
        _ => Ok((Some(Predicate::Whole(condition)), None)),
    }
}

fn malformed(kind: ConditionKind, problem: &str) -> Error {
    Error::malformed_condition(format!("{kind} {problem}"))
}

fn left_column(condition: &Condition) -> Result<&str> {
    condition
        .left
        .as_ref()
        .and_then(Operand::as_column)
        .ok_or_else(|| malformed(condition.kind, "requires a column on the left"))
}

fn right_value(condition: &Condition) -> Result<&Value> {
    condition
        .right
        .as_ref()
        .and_then(Operand::as_value)
        .ok_or_else(|| malformed(condition.kind, "requires a value on the right"))
}

fn arg_values<'a>(condition: &Condition, args: &'a [Operand]) -> Result<Vec<&'a Value>> {
    args.iter()
        .map(|operand| {
            operand
                .as_value()
                .ok_or_else(|| malformed(condition.kind, "arguments must be values"))
        })
        .collect()
}

impl Formatter<'_> {
    /// Writes the filter. With `keyword`, a non-empty predicate is prefixed
    /// by ` WHERE `.
    pub(super) fn filter(&mut self, filter: &Filter, keyword: bool) -> Result<()> {
        match filter {
            Filter::None => Ok(()),
            Filter::Raw { clause, args } => {
                if is_blank(clause) {
                    return Ok(());
                }
                if keyword {
                    fmt!(self, " WHERE ");
                }
                self.raw(clause, args);
                Ok(())
            }
            Filter::Condition(condition) => {
                let (predicate, limit) = hoist_limit(condition)?;

                if let Some(predicate) = predicate {
                    if keyword {
                        fmt!(self, " WHERE ");
                    }
                    match predicate {
                        Predicate::Whole(condition) => self.condition(condition)?,
                        Predicate::And(operands) => {
                            self.junction(ConditionKind::And, operands, " AND ")?
                        }
                    }
                }

                if let Some(limit) = limit {
                    let lead = if self.dst.is_empty() { "" } else { " " };
                    self.limit(limit, lead)?;
                }

                Ok(())
            }
        }
    }

    fn condition(&mut self, condition: &Condition) -> Result<()> {
        use ConditionKind::*;

        match condition.kind {
            And => self.junction(And, &condition.args, " AND "),
            Or => self.junction(Or, &condition.args, " OR "),
            Not => {
                let operand = condition
                    .left
                    .as_ref()
                    .ok_or_else(|| malformed(Not, "requires an operand"))?;
                fmt!(self, "NOT (");
                self.clause(operand)?;
                fmt!(self, ")");
                Ok(())
            }
            Eq => self.binary(condition, "="),
            Ne => self.binary(condition, "<>"),
            Gt => self.binary(condition, ">"),
            Lt => self.binary(condition, "<"),
            Gte => self.binary(condition, ">="),
            Lte => self.binary(condition, "<="),
            Like => self.binary(condition, "LIKE"),
            NotLike => self.binary(condition, "NOT LIKE"),
            In => self.in_list(condition, "IN"),
            NotIn => self.in_list(condition, "NOT IN"),
            Between => self.between(condition, "BETWEEN"),
            NotBetween => self.between(condition, "NOT BETWEEN"),
            Exists => self.exists(condition, "EXISTS"),
            NotExists => self.exists(condition, "NOT EXISTS"),
            InSubquery => self.in_subquery(condition, "IN"),
            NotInSubquery => self.in_subquery(condition, "NOT IN"),
            InValues => self.in_values(condition, "IN"),
            NotInValues => self.in_values(condition, "NOT IN"),
            Limit => Err(malformed(
                Limit,
                "must be the filter root or a direct child of the root AND",
            )),
            Custom => self.custom(condition),
        }
    }

    fn junction<'c>(
        &mut self,
        kind: ConditionKind,
        operands: impl IntoIterator<Item = &'c Operand>,
        separator: &str,
    ) -> Result<()> {
        let mut s = "";
        let mut empty = true;

        for operand in operands {
            fmt!(self, s);
            self.clause(operand)?;
            s = separator;
            empty = false;
        }

        if empty {
            return Err(malformed(kind, "requires at least one operand"));
        }

        Ok(())
    }

    /// One child of AND, OR or NOT.
    fn clause(&mut self, operand: &Operand) -> Result<()> {
        match operand {
            Operand::Condition(condition) => self.condition(condition),
            Operand::Column(column) => {
                let value = self
                    .resolve
                    .and_then(|resolve| resolve.resolve(column))
                    .ok_or_else(|| {
                        Error::malformed_condition(format!("unknown column `{column}`"))
                    })?;
                fmt!(self, column, " = ", Param(&value));
                Ok(())
            }
            Operand::Raw(sql) => {
                self.raw(sql, core::iter::empty());
                Ok(())
            }
            Operand::Value(value) => Err(Error::malformed_condition(format!(
                "a bare {} value is not a clause",
                value.variant_name()
            ))),
        }
    }

    fn binary(&mut self, condition: &Condition, op: &str) -> Result<()> {
        let column = left_column(condition)?;
        let value = right_value(condition)?;
        fmt!(self, column, " ", op, " ", Param(value));
        Ok(())
    }

    fn in_list(&mut self, condition: &Condition, op: &str) -> Result<()> {
        let column = left_column(condition)?;
        let value = right_value(condition)?;
        fmt!(self, column, " ", op, " (", Param(value), ")");
        Ok(())
    }

    fn between(&mut self, condition: &Condition, op: &str) -> Result<()> {
        let column = left_column(condition)?;
        let bounds = arg_values(condition, &condition.args)?;
        let [low, high] = bounds[..] else {
            return Err(malformed(condition.kind, "requires exactly two bounds"));
        };
        fmt!(self, column, " ", op, " ", Param(low), " AND ", Param(high));
        Ok(())
    }

    fn exists(&mut self, condition: &Condition, op: &str) -> Result<()> {
        let subquery = condition
            .left
            .as_ref()
            .and_then(Operand::as_raw)
            .ok_or_else(|| malformed(condition.kind, "requires a subquery"))?;
        fmt!(self, op, " (", subquery, ")");
        Ok(())
    }

    fn in_subquery(&mut self, condition: &Condition, op: &str) -> Result<()> {
        let column = left_column(condition)?;
        let subquery = condition
            .right
            .as_ref()
            .and_then(Operand::as_raw)
            .ok_or_else(|| malformed(condition.kind, "requires a subquery on the right"))?;
        fmt!(self, column, " ", op, " (", subquery, ")");
        Ok(())
    }

    fn in_values(&mut self, condition: &Condition, op: &str) -> Result<()> {
        let column = left_column(condition)?;
        let values = arg_values(condition, &condition.args)?;
        if values.is_empty() {
            return Err(malformed(condition.kind, "requires at least one value"));
        }
        fmt!(self, column, " ", op, " (", Comma(values.into_iter().map(Param)), ")");
        Ok(())
    }

    fn custom(&mut self, condition: &Condition) -> Result<()> {
        let Some((fragment, args)) = condition.args.split_first() else {
            return Err(malformed(condition.kind, "requires a SQL fragment"));
        };
        let fragment = fragment
            .as_raw()
            .ok_or_else(|| malformed(condition.kind, "requires a SQL fragment"))?;
        let args = arg_values(condition, args)?;
        self.raw(fragment, args);
        Ok(())
    }

    fn limit(&mut self, condition: &Condition, lead: &str) -> Result<()> {
        let values = arg_values(condition, &condition.args)?;
        match values[..] {
            [] => {}
            [count] => fmt!(self, lead, "LIMIT ", Param(count)),
            [offset, count] => match self.flavor() {
                Flavor::Postgresql => {
                    fmt!(self, lead, "LIMIT ", Param(count), " OFFSET ", Param(offset))
                }
                Flavor::Mysql | Flavor::Sqlite => {
                    fmt!(self, lead, "LIMIT ", Param(offset), ", ", Param(count))
                }
            },
            _ => return Err(malformed(ConditionKind::Limit, "takes at most two values")),
        }
        Ok(())
    }

    /// Caller-written SQL followed by its arguments. Postgres `?`
    /// placeholders are renumbered to continue the statement's `$n`.
    fn raw<'v>(&mut self, sql: &str, args: impl IntoIterator<Item = &'v Value>) {
        match self.flavor() {
            Flavor::Postgresql => {
                let sql = raw::number_placeholders(sql, self.params.len());
                self.dst.push_str(&sql);
            }
            Flavor::Mysql | Flavor::Sqlite => self.dst.push_str(sql),
        }

        for arg in args {
            self.params.push(arg.clone());
        }
    }
}
