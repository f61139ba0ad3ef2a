use super::{Flavor, Formatter, ToSql};

/// A quoted identifier. Embedded quote characters are doubled.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let quote = f.flavor().quote();
        f.dst.push(quote);
        for c in self.0.as_ref().chars() {
            if c == quote {
                f.dst.push(quote);
            }
            f.dst.push(c);
        }
        f.dst.push(quote);
    }
}

impl Flavor {
    /// The identifier quote character.
    pub fn quote(self) -> char {
        match self {
            Flavor::Mysql => '`',
            Flavor::Postgresql | Flavor::Sqlite => '"',
        }
    }
}
