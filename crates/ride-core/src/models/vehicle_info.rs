use serde::{Deserialize, Serialize};

/// Vehicle descriptor carried by driver identities and ride offers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleInfo {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub seats: i32,
}

impl VehicleInfo {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        seats: i32,
    ) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            seats,
        }
    }

    /// Short display form, e.g. "Toyota Camry".
    pub fn descriptor(&self) -> String {
        format!("{} {}", self.make, self.model)
    }
}
