// Unit tests for the Titanic survival prediction pipeline

use titanic_api::core::{build_features, estimate_fare, LogisticModel, StandardScaler};
use titanic_api::models::{
    EmbarkedPort, FamilyType, FeatureVector, PassengerProfile, Sex, FEATURE_NAMES,
};

fn identity_scaler() -> StandardScaler {
    StandardScaler::new([0.0, 0.0], [1.0, 1.0])
}

fn profile(
    age: f64,
    pclass: u8,
    sex: Sex,
    embarked: EmbarkedPort,
    family_type: FamilyType,
) -> PassengerProfile {
    PassengerProfile {
        age,
        pclass,
        sex,
        embarked,
        family_type,
    }
}

#[test]
fn test_fare_estimate_constants() {
    assert_eq!(estimate_fare(1), 84.0);
    assert_eq!(estimate_fare(2), 20.0);
    assert_eq!(estimate_fare(3), 13.0);
    assert_eq!(estimate_fare(0), 13.0);
    assert_eq!(estimate_fare(255), 13.0);
}

#[test]
fn test_feature_schema_order() {
    assert_eq!(
        FEATURE_NAMES,
        [
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
        ]
    );
    assert_eq!(FeatureVector::names(), &FEATURE_NAMES);
}

#[test]
fn test_values_follow_schema_order() {
    let features = FeatureVector {
        age: 0.0,
        fare: 1.0,
        pclass_2: 2.0,
        pclass_3: 3.0,
        embarked_q: 4.0,
        embarked_s: 5.0,
        family_type_large: 6.0,
        family_type_medium: 7.0,
        title_miss: 8.0,
        title_mr: 9.0,
        title_mrs: 10.0,
        title_rare: 11.0,
    };

    let values = features.values();
    for (i, value) in values.iter().enumerate() {
        assert_eq!(*value, i as f64);
    }
}

#[test]
fn test_encoding_third_class_male_from_southampton() {
    // {Age:25, Pclass:3, Sex:male, Embarked:S, FamilyType:alone}
    let features = build_features(
        &profile(25.0, 3, Sex::Male, EmbarkedPort::S, FamilyType::Alone),
        &identity_scaler(),
    );

    assert_eq!(features.age, 25.0);
    assert_eq!(features.fare, 13.0);
    assert_eq!(features.pclass_2, 0.0);
    assert_eq!(features.pclass_3, 1.0);
    assert_eq!(features.embarked_q, 0.0);
    assert_eq!(features.embarked_s, 1.0);
    assert_eq!(features.family_type_large, 0.0);
    assert_eq!(features.family_type_medium, 0.0);
    assert_eq!(features.title_miss, 0.0);
    assert_eq!(features.title_mr, 1.0);
    assert_eq!(features.title_mrs, 0.0);
    assert_eq!(features.title_rare, 0.0);
}

#[test]
fn test_encoding_first_class_girl_from_cherbourg() {
    // {Age:5, Pclass:1, Sex:female, Embarked:C, FamilyType:large}
    let features = build_features(
        &profile(5.0, 1, Sex::Female, EmbarkedPort::C, FamilyType::Large),
        &identity_scaler(),
    );

    assert_eq!(features.fare, 84.0);
    assert_eq!(features.pclass_2, 0.0);
    assert_eq!(features.pclass_3, 0.0);
    assert_eq!(features.embarked_q, 0.0);
    assert_eq!(features.embarked_s, 0.0);
    assert_eq!(features.family_type_large, 1.0);
    assert_eq!(features.family_type_medium, 0.0);
    assert_eq!(features.title_miss, 1.0);
    assert_eq!(features.title_mr, 0.0);
}

#[test]
fn test_one_hot_groups_are_exclusive() {
    let scaler = identity_scaler();

    for embarked in [EmbarkedPort::S, EmbarkedPort::Q, EmbarkedPort::C] {
        for family_type in [FamilyType::Alone, FamilyType::Medium, FamilyType::Large] {
            for sex in [Sex::Male, Sex::Female] {
                for pclass in [1, 2, 3] {
                    let features = build_features(
                        &profile(30.0, pclass, sex, embarked, family_type),
                        &scaler,
                    );

                    // At most one indicator per group is set
                    assert!(features.pclass_2 + features.pclass_3 <= 1.0);
                    assert!(features.embarked_q + features.embarked_s <= 1.0);
                    assert!(features.family_type_large + features.family_type_medium <= 1.0);

                    // Title is mutually exclusive and exhaustive over sex
                    assert_eq!(features.title_mr + features.title_miss, 1.0);
                    assert_eq!(features.title_mrs, 0.0);
                    assert_eq!(features.title_rare, 0.0);
                }
            }
        }
    }
}

#[test]
fn test_baseline_categories_emit_all_zeros() {
    let features = build_features(
        &profile(30.0, 1, Sex::Male, EmbarkedPort::C, FamilyType::Alone),
        &identity_scaler(),
    );

    assert_eq!(features.pclass_2, 0.0);
    assert_eq!(features.pclass_3, 0.0);
    assert_eq!(features.embarked_q, 0.0);
    assert_eq!(features.embarked_s, 0.0);
    assert_eq!(features.family_type_large, 0.0);
    assert_eq!(features.family_type_medium, 0.0);
}

#[test]
fn test_feature_builder_is_deterministic() {
    let scaler = StandardScaler::new([29.3642, 32.2042], [13.0194, 49.6934]);
    let passenger = profile(25.0, 3, Sex::Male, EmbarkedPort::S, FamilyType::Alone);

    let first = build_features(&passenger, &scaler);
    let second = build_features(&passenger, &scaler);
    assert_eq!(first, second);
}

#[test]
fn test_model_probability_bounds() {
    let model = LogisticModel::new(
        [
            -0.52, 0.15, -0.95, -2.05, -0.10, -0.45, -1.60, 0.25, 1.35, -1.45, 1.10, -0.32,
        ],
        1.20,
    );
    let scaler = StandardScaler::new([29.3642, 32.2042], [13.0194, 49.6934]);

    for age in [1.0, 25.0, 70.0, 99.0] {
        let features = build_features(
            &profile(age, 3, Sex::Female, EmbarkedPort::Q, FamilyType::Medium),
            &scaler,
        );
        let row = model.predict_probability(&features);

        assert!(row[0] >= 0.0 && row[0] <= 1.0);
        assert!(row[1] >= 0.0 && row[1] <= 1.0);
        assert!((row[0] + row[1] - 1.0).abs() < 1e-12);

        let label = model.predict(&features);
        assert_eq!(label == 1, row[1] >= 0.5);
    }
}
