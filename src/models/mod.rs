pub mod artifact;
pub mod regressor;
pub mod scaler;

pub use artifact::{encode_artifact, ModelArtifact, Predictor};
pub use regressor::{Regressor, RegressorParams};
pub use scaler::{Scaler, ScalerParams};

use crate::error::{AppError, AppResult};

fn check_vector(name: &str, values: &[f64], expected: usize) -> AppResult<()> {
    if values.len() != expected {
        return Err(AppError::artifact(format!(
            "{name} has len {}, expected {expected}",
            values.len()
        )));
    }
    if let Some(i) = values.iter().position(|v| !v.is_finite()) {
        return Err(AppError::artifact(format!("{name}[{i}] is not finite")));
    }
    Ok(())
}
