/// Pre-fit standardization transform for the two numeric features.
///
/// Mean and scale were learned at training time and ship with the model
/// artifact; the indicator features are never scaled. Index 0 is Age,
/// index 1 is Fare.
#[derive(Debug, Clone)]
pub struct StandardScaler {
    mean: [f64; 2],
    scale: [f64; 2],
}

impl StandardScaler {
    pub fn new(mean: [f64; 2], scale: [f64; 2]) -> Self {
        Self { mean, scale }
    }

    /// Apply the training-time transform to raw Age and Fare values
    pub fn transform(&self, age: f64, fare: f64) -> (f64, f64) {
        (
            (age - self.mean[0]) / self.scale[0],
            (fare - self.mean[1]) / self.scale[1],
        )
    }
}
