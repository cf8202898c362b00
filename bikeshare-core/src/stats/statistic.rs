use serde::{Deserialize, Serialize};

/// a single report field. distinguishes a computed value from an empty input
/// collection and from a field whose source column does not exist.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "status", content = "value")]
pub enum Statistic<T> {
    Value(T),
    /// the collection held no values to compute this statistic from
    NoData,
    /// the dataset does not carry the column this statistic is built on
    NotApplicable,
}

impl<T> Statistic<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Statistic::Value(v),
            None => Statistic::NoData,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Statistic::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, Statistic::NoData)
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Statistic::NotApplicable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_states_are_distinct() {
        let value = serde_json::to_value(Statistic::Value(3)).unwrap();
        let no_data = serde_json::to_value(Statistic::<u32>::NoData).unwrap();
        let not_applicable = serde_json::to_value(Statistic::<u32>::NotApplicable).unwrap();
        assert_eq!(value, serde_json::json!({ "status": "value", "value": 3 }));
        assert_eq!(no_data, serde_json::json!({ "status": "no_data" }));
        assert_eq!(not_applicable, serde_json::json!({ "status": "not_applicable" }));
    }
}
