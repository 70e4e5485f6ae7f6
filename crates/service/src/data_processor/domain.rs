use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Candidate record as received on the wire. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProcessorInput {
    pub user_id: Option<i32>,
    pub dp_value: Option<i64>,
}

/// A record with both required fields present; the only shape that reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProcessor {
    pub user_id: i32,
    pub dp_value: i64,
}

impl DataProcessor {
    pub fn new(user_id: i32, dp_value: i64) -> Self { Self { user_id, dp_value } }

    /// Presence check for an optional candidate: the candidate itself and
    /// both of its fields must be present.
    pub fn from_candidate(candidate: Option<DataProcessorInput>) -> Result<Self, ServiceError> {
        candidate
            .ok_or_else(|| ServiceError::Validation("DataProcessor is required".into()))?
            .try_into()
    }
}

impl TryFrom<DataProcessorInput> for DataProcessor {
    type Error = ServiceError;

    fn try_from(input: DataProcessorInput) -> Result<Self, Self::Error> {
        let user_id = input.user_id.ok_or_else(|| ServiceError::missing_field("userId"))?;
        let dp_value = input.dp_value.ok_or_else(|| ServiceError::missing_field("dpValue"))?;
        Ok(Self { user_id, dp_value })
    }
}

impl From<models::data_processor::Model> for DataProcessor {
    fn from(m: models::data_processor::Model) -> Self {
        Self { user_id: m.user_id, dp_value: m.dp_value }
    }
}
