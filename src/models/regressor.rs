// Fitted regression models
use super::check_vector;
use crate::error::{AppError, AppResult};
use bincode::{Decode, Encode};
use candle::{Device, Tensor};
use candle_nn::{Linear, Module};
use serde::{Deserialize, Serialize};

/// Serialized form of a fitted regressor, as stored in the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegressorParams {
    /// `y = x · coef + intercept`
    Linear { coef: Vec<f64>, intercept: f64 },
}

impl RegressorParams {
    pub fn validate(&self, num_features: usize) -> AppResult<()> {
        match self {
            RegressorParams::Linear { coef, intercept } => {
                check_vector("model.coef", coef, num_features)?;
                if !intercept.is_finite() {
                    return Err(AppError::artifact("model.intercept is not finite"));
                }
            }
        }
        Ok(())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RegressorParams::Linear { .. } => "linear",
        }
    }
}

#[derive(Debug)]
pub struct Regressor {
    linear: Linear,
}

impl Regressor {
    pub fn from_params(params: &RegressorParams, device: &Device) -> AppResult<Self> {
        match params {
            RegressorParams::Linear { coef, intercept } => {
                // Linear expects weight as [out, in].
                let init = || -> candle::Result<Linear> {
                    let weight = Tensor::from_slice(coef, (1, coef.len()), device)?;
                    let bias = Tensor::new(&[*intercept], device)?;
                    Ok(Linear::new(weight, Some(bias)))
                };
                let linear = init().map_err(|e| {
                    AppError::artifact(format!("regressor tensor init failed: {e}"))
                })?;
                Ok(Self { linear })
            }
        }
    }

    /// Maps a scaled `[batch, features]` tensor to `[batch, 1]` predictions.
    pub fn predict(&self, scaled: &Tensor) -> AppResult<Tensor> {
        Ok(self.linear.forward(scaled)?)
    }
}
