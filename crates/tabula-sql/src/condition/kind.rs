use tabula_core::Error;

/// The discriminant of a [`Condition`](super::Condition) node.
///
/// Each kind has a stable numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ConditionKind {
    Or = 1,
    And = 2,
    Not = 3,
    In = 4,
    NotIn = 5,
    Eq = 6,
    Ne = 7,
    Gt = 8,
    Lt = 9,
    Gte = 10,
    Lte = 11,
    Like = 12,
    NotLike = 13,
    Between = 14,
    NotBetween = 15,
    Exists = 16,
    NotExists = 17,
    InSubquery = 18,
    InValues = 19,
    NotInSubquery = 20,
    NotInValues = 21,
    Limit = 22,
    Custom = 23,
}

impl ConditionKind {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_junction(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Not)
    }
}

impl TryFrom<u8> for ConditionKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        use ConditionKind::*;

        Ok(match code {
            1 => Or,
            2 => And,
            3 => Not,
            4 => In,
            5 => NotIn,
            6 => Eq,
            7 => Ne,
            8 => Gt,
            9 => Lt,
            10 => Gte,
            11 => Lte,
            12 => Like,
            13 => NotLike,
            14 => Between,
            15 => NotBetween,
            16 => Exists,
            17 => NotExists,
            18 => InSubquery,
            19 => InValues,
            20 => NotInSubquery,
            21 => NotInValues,
            22 => Limit,
            23 => Custom,
            _ => return Err(Error::unknown_condition_kind(code)),
        })
    }
}

impl core::fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use ConditionKind::*;

        f.write_str(match self {
            Or => "OR",
            And => "AND",
            Not => "NOT",
            In => "IN",
            NotIn => "NOT IN",
            Eq => "EQ",
            Ne => "NE",
            Gt => "GT",
            Lt => "LT",
            Gte => "GTE",
            Lte => "LTE",
            Like => "LIKE",
            NotLike => "NOT LIKE",
            Between => "BETWEEN",
            NotBetween => "NOT BETWEEN",
            Exists => "EXISTS",
            NotExists => "NOT EXISTS",
            InSubquery => "IN (subquery)",
            InValues => "IN (values)",
            NotInSubquery => "NOT IN (subquery)",
            NotInValues => "NOT IN (values)",
            Limit => "LIMIT",
            Custom => "CUSTOM",
        })
    }
}
