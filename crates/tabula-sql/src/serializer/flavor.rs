use super::Serializer;

use tabula_core::Error;

/// A supported SQL dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    Mysql,
    Postgresql,
    Sqlite,
}

impl Flavor {
    pub fn name(self) -> &'static str {
        match self {
            Flavor::Mysql => "mysql",
            Flavor::Postgresql => "postgresql",
            Flavor::Sqlite => "sqlite",
        }
    }

    pub fn is_postgresql(self) -> bool {
        matches!(self, Flavor::Postgresql)
    }
}

impl core::str::FromStr for Flavor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Ok(Flavor::Mysql),
            "postgres" | "postgresql" | "pg" | "pgsql" => Ok(Flavor::Postgresql),
            "sqlite" | "sqlite3" => Ok(Flavor::Sqlite),
            _ => Err(Error::invalid_dialect(s)),
        }
    }
}

impl core::fmt::Display for Flavor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serializer {
    pub fn mysql() -> Serializer {
        Serializer::new(Flavor::Mysql)
    }

    pub fn postgresql() -> Serializer {
        Serializer::new(Flavor::Postgresql)
    }

    pub fn sqlite() -> Serializer {
        Serializer::new(Flavor::Sqlite)
    }
}
