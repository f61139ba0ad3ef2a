use super::{Comma, Compiled, Flavor, Formatter, Ident, Param, Resolve, Serializer, ToSql};

use crate::Filter;

use tabula_core::{stmt::Value, Error, Result};

/// `"column" = ?` in a SET list
struct Assignment<'a>(&'a str, &'a Value);

impl ToSql for Assignment<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, Ident(self.0), " = ", Param(self.1));
    }
}

impl Serializer {
    /// Renders an INSERT of `values`. With `returning`, the statement hands
    /// back that column of the inserted row.
    pub fn insert(
        &self,
        table: &str,
        values: &[(&str, Value)],
        returning: Option<&str>,
    ) -> Compiled {
        let mut f = self.formatter(None, values.len());

        fmt!(&mut f, "INSERT INTO ", Ident(table));

        if values.is_empty() {
            match self.flavor {
                Flavor::Mysql => fmt!(&mut f, " () VALUES ()"),
                Flavor::Postgresql | Flavor::Sqlite => fmt!(&mut f, " DEFAULT VALUES"),
            }
        } else {
            let columns = Comma(values.iter().map(|(column, _)| Ident(*column)));
            let params = Comma(values.iter().map(|(_, value)| Param(value)));
            fmt!(&mut f, " (", columns, ") VALUES (", params, ")");
        }

        if let Some(column) = returning {
            fmt!(&mut f, " RETURNING ", Ident(column));
        }

        f.finish()
    }

    pub fn select(
        &self,
        table: &str,
        columns: &[&str],
        filter: &Filter,
        resolve: &dyn Resolve,
    ) -> Result<Compiled> {
        if columns.is_empty() {
            return Err(Error::invalid_argument(format!(
                "SELECT from `{table}` requires at least one column"
            )));
        }

        let mut f = self.formatter(Some(resolve), filter.value_num());
        let columns = Comma(columns.iter().map(Ident));
        fmt!(&mut f, "SELECT ", columns, " FROM ", Ident(table));
        f.filter(filter, true)?;
        Ok(f.finish())
    }

    /// Renders an UPDATE. Arguments of the SET list come first, followed by
    /// those of the filter.
    pub fn update(
        &self,
        table: &str,
        assignments: &[(&str, Value)],
        filter: &Filter,
        resolve: &dyn Resolve,
    ) -> Result<Compiled> {
        if assignments.is_empty() {
            return Err(Error::invalid_argument(format!(
                "UPDATE of `{table}` requires at least one assignment"
            )));
        }

        let mut f = self.formatter(Some(resolve), assignments.len() + filter.value_num());
        let set = Comma(
            assignments
                .iter()
                .map(|(column, value)| Assignment(column, value)),
        );
        fmt!(&mut f, "UPDATE ", Ident(table), " SET ", set);
        f.filter(filter, true)?;
        Ok(f.finish())
    }

    pub fn delete(&self, table: &str, filter: &Filter, resolve: &dyn Resolve) -> Result<Compiled> {
        let mut f = self.formatter(Some(resolve), filter.value_num());
        fmt!(&mut f, "DELETE FROM ", Ident(table));
        f.filter(filter, true)?;
        Ok(f.finish())
    }

    pub fn count(&self, table: &str, filter: &Filter, resolve: &dyn Resolve) -> Result<Compiled> {
        let mut f = self.formatter(Some(resolve), filter.value_num());
        fmt!(&mut f, "SELECT COUNT(*) FROM ", Ident(table));
        f.filter(filter, true)?;
        Ok(f.finish())
    }
}
