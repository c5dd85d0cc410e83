use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{EmbarkedPort, FamilyType, PassengerProfile, Sex};

/// Request to predict survival for one passenger
///
/// Field names match the original wire contract (capitalized, e.g. `Age`).
/// Enum-valued fields are rejected at deserialization time if they carry an
/// unknown value; the numeric ranges are checked by `validate()`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    #[validate(range(exclusive_min = 0.0, exclusive_max = 100.0))]
    #[serde(rename = "Age")]
    pub age: f64,
    #[validate(range(min = 1, max = 3))]
    #[serde(rename = "Pclass")]
    pub pclass: u8,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Embarked")]
    pub embarked: EmbarkedPort,
    #[serde(rename = "FamilyType")]
    pub family_type: FamilyType,
}

impl PredictRequest {
    /// Convert a validated request into the domain profile
    pub fn into_profile(self) -> PassengerProfile {
        PassengerProfile {
            age: self.age,
            pclass: self.pclass,
            sex: self.sex,
            embarked: self.embarked,
            family_type: self.family_type,
        }
    }
}
