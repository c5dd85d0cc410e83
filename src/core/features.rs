use crate::core::scaler::StandardScaler;
use crate::models::{EmbarkedPort, FamilyType, FeatureVector, PassengerProfile, Sex};

/// Estimate the fare from passenger class alone.
///
/// The API does not ask users for a fare; these are the mean fares per class
/// observed in the training data, frozen as constants. Any class outside
/// {1, 2} falls through to the third-class fare.
pub fn estimate_fare(pclass: u8) -> f64 {
    match pclass {
        1 => 84.0,
        2 => 20.0,
        _ => 13.0,
    }
}

/// Build the model's feature row from a passenger profile.
///
/// Encoding policy (fixed at training time, reproduced exactly):
/// - Pclass one-hot against baseline class 1
/// - Embarked one-hot against baseline C
/// - FamilyType one-hot against baseline alone
/// - Title derived from sex only: male => Mr, female => Miss. Mrs and Rare
///   are always 0. The training schema never produced them from this input,
///   so emitting them here would silently change predictions.
///
/// Only Age and the estimated Fare go through the scaler; the indicator
/// columns pass through unscaled.
pub fn build_features(profile: &PassengerProfile, scaler: &StandardScaler) -> FeatureVector {
    let estimated_fare = estimate_fare(profile.pclass);
    let (age, fare) = scaler.transform(profile.age, estimated_fare);

    FeatureVector {
        age,
        fare,
        pclass_2: indicator(profile.pclass == 2),
        pclass_3: indicator(profile.pclass == 3),
        embarked_q: indicator(profile.embarked == EmbarkedPort::Q),
        embarked_s: indicator(profile.embarked == EmbarkedPort::S),
        family_type_large: indicator(profile.family_type == FamilyType::Large),
        family_type_medium: indicator(profile.family_type == FamilyType::Medium),
        title_miss: indicator(profile.sex == Sex::Female),
        title_mr: indicator(profile.sex == Sex::Male),
        title_mrs: 0.0,
        title_rare: 0.0,
    }
}

#[inline]
fn indicator(condition: bool) -> f64 {
    if condition {
        1.0
    } else {
        0.0
    }
}
