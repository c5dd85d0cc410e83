use serde::{Deserialize, Serialize};

/// Passenger sex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Port of embarkation (Southampton, Queenstown, Cherbourg)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbarkedPort {
    S,
    Q,
    C,
}

/// Family size bucket, as grouped at training time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FamilyType {
    Alone,
    Medium,
    Large,
}

/// Validated passenger profile, constructed fresh per request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerProfile {
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "Pclass")]
    pub pclass: u8,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Embarked")]
    pub embarked: EmbarkedPort,
    #[serde(rename = "FamilyType")]
    pub family_type: FamilyType,
}

/// Feature column names in the exact order the model was fit on.
///
/// The model is positional: any reordering or renaming silently produces
/// wrong predictions, so this list is the single source of truth for the
/// schema shared by the feature builder and the artifact loader.
pub const FEATURE_NAMES: [&str; 12] = [
    "Age",
    "Fare",
    "Pclass_2",
    "Pclass_3",
    "Embarked_Q",
    "Embarked_S",
    "family_type_Large",
    "family_type_Medium",
    "Title_Miss",
    "Title_Mr",
    "Title_Mrs",
    "Title_Rare",
];

/// Numeric feature row matching the training-time column order
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub age: f64,
    pub fare: f64,
    pub pclass_2: f64,
    pub pclass_3: f64,
    pub embarked_q: f64,
    pub embarked_s: f64,
    pub family_type_large: f64,
    pub family_type_medium: f64,
    pub title_miss: f64,
    pub title_mr: f64,
    pub title_mrs: f64,
    pub title_rare: f64,
}

impl FeatureVector {
    /// Feature values in the same order as [`FEATURE_NAMES`]
    pub fn values(&self) -> [f64; 12] {
        [
            self.age,
            self.fare,
            self.pclass_2,
            self.pclass_3,
            self.embarked_q,
            self.embarked_s,
            self.family_type_large,
            self.family_type_medium,
            self.title_miss,
            self.title_mr,
            self.title_mrs,
            self.title_rare,
        ]
    }

    pub fn names() -> &'static [&'static str; 12] {
        &FEATURE_NAMES
    }
}

/// Outcome of one inference call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: u8,
    pub survival_probability: f64,
}
