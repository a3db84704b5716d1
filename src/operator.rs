use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::msg;

/// One of the six comparison operators understood by the downstream query
/// builder. An operator determines both its serialized name and the SQL
/// fragment it renders to, so the two can never drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Like,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::Equal,
        Operator::Greater,
        Operator::GreaterOrEqual,
        Operator::Less,
        Operator::LessOrEqual,
        Operator::Like,
    ];

    /// The operator's identifier. The camelCase spelling is a stable,
    /// serialized value that consumers match on.
    pub fn name(&self) -> &'static str {
        match self {
            Operator::Equal => "equal",
            Operator::Greater => "greater",
            Operator::GreaterOrEqual => "greaterOrEqual",
            Operator::Less => "less",
            Operator::LessOrEqual => "lessOrEqual",
            Operator::Like => "like",
        }
    }

    /// The SQL fragment for this operator, containing a single `?`
    /// placeholder. Fragments carry a leading space so they can be appended
    /// directly after a column reference.
    pub fn sql(&self) -> &'static str {
        match self {
            Operator::Equal => " = ?",
            Operator::Greater => " > ?",
            Operator::GreaterOrEqual => " >= ?",
            Operator::Less => " < ?",
            Operator::LessOrEqual => " <= ?",
            Operator::Like => " LIKE ?",
        }
    }

    /// Inverse of [`Operator::name`]. The lookup is exact, with no case
    /// folding.
    pub fn from_name(name: &str) -> Result<Operator, String> {
        Operator::ALL
            .into_iter()
            .find(|operator| operator.name() == name)
            .ok_or_else(|| msg::unknown_operator(name))
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::from_name(s)
    }
}

impl Serialize for Operator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Operator::from_name(&name).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn test_name_to_sql_mapping() {
        let pairs: Vec<(&str, &str)> = Operator::ALL
            .iter()
            .map(|operator| (operator.name(), operator.sql()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("equal", " = ?"),
                ("greater", " > ?"),
                ("greaterOrEqual", " >= ?"),
                ("less", " < ?"),
                ("lessOrEqual", " <= ?"),
                ("like", " LIKE ?"),
            ]
        );
    }

    #[test]
    fn test_mapping_is_bijective() {
        let names = Operator::ALL.iter().map(|operator| operator.name());
        let fragments = Operator::ALL.iter().map(|operator| operator.sql());
        assert_eq!(names.unique().count(), Operator::ALL.len());
        assert_eq!(fragments.unique().count(), Operator::ALL.len());
    }

    #[test]
    fn test_fragment_shape() {
        for operator in Operator::ALL {
            let sql = operator.sql();
            assert!(sql.starts_with(' '));
            assert!(sql.ends_with('?'));
            assert_eq!(sql.matches('?').count(), 1);
        }
    }

    #[test]
    fn test_from_name() {
        for operator in Operator::ALL {
            assert_eq!(Operator::from_name(operator.name()), Ok(operator));
        }
        assert!(Operator::from_name("notEqual").is_err());
        assert!(Operator::from_name("EQUAL").is_err());
        assert!(Operator::from_name("greater_or_equal").is_err());
        assert!(Operator::from_name("").is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Operator::GreaterOrEqual.to_string(), "greaterOrEqual");
        assert_eq!("lessOrEqual".parse::<Operator>(), Ok(Operator::LessOrEqual));
    }
}
