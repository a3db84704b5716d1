use serde::de;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::msg;
use crate::operator::Operator;

/// An operator tagged with the operand it compares against. The downstream
/// query builder reads the `{name, sql, value}` triple, appending `sql` after
/// a column reference and binding `value` to its `?` placeholder.
///
/// The fragment is not stored here; it is derived from `operator`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<T> {
    pub operator: Operator,
    pub value: T,
}

impl<T> Comparison<T> {
    pub fn new(operator: Operator, value: T) -> Comparison<T> {
        Comparison { operator, value }
    }

    /// The operator's serialized identifier.
    pub fn name(&self) -> &'static str {
        self.operator.name()
    }

    /// The SQL fragment, with one `?` placeholder for `value`.
    pub fn sql(&self) -> &'static str {
        self.operator.sql()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

pub fn equal<T>(value: T) -> Comparison<T> {
    Comparison::new(Operator::Equal, value)
}

pub fn greater<T>(value: T) -> Comparison<T> {
    Comparison::new(Operator::Greater, value)
}

pub fn greater_or_equal<T>(value: T) -> Comparison<T> {
    Comparison::new(Operator::GreaterOrEqual, value)
}

pub fn less<T>(value: T) -> Comparison<T> {
    Comparison::new(Operator::Less, value)
}

pub fn less_or_equal<T>(value: T) -> Comparison<T> {
    Comparison::new(Operator::LessOrEqual, value)
}

pub fn like<T>(value: T) -> Comparison<T> {
    Comparison::new(Operator::Like, value)
}

impl<T> Serialize for Comparison<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Comparison", 3)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("sql", self.sql())?;
        state.serialize_field("value", &self.value)?;
        state.end()
    }
}

impl<'de, T> Deserialize<'de> for Comparison<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Comparison<T>, D::Error>
    where
        D: Deserializer<'de>,
    {
        // The `sql` field is accepted on input for symmetry with serialized
        // output, but it must agree with the fragment implied by `name`.
        #[derive(Deserialize)]
        struct Raw<T> {
            name: String,
            #[serde(default)]
            sql: Option<String>,
            value: T,
        }

        let raw = Raw::<T>::deserialize(deserializer)?;
        let operator = Operator::from_name(&raw.name).map_err(de::Error::custom)?;
        if let Some(sql) = raw.sql {
            if sql != operator.sql() {
                return Err(de::Error::custom(msg::sql_mismatch(&raw.name, &sql)));
            }
        }
        Ok(Comparison::new(operator, raw.value))
    }
}
