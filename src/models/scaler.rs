// Fitted feature scalers
use super::check_vector;
use crate::error::{AppError, AppResult};
use bincode::{Decode, Encode};
use candle::{Device, Tensor};
use serde::{Deserialize, Serialize};

/// Serialized form of a fitted scaler, as stored in the artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Encode, Decode)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScalerParams {
    /// `x' = (x - mean) / scale`
    Standard { mean: Vec<f64>, scale: Vec<f64> },
    /// `x' = x * scale + min`
    MinMax { min: Vec<f64>, scale: Vec<f64> },
}

impl ScalerParams {
    pub fn validate(&self, num_features: usize) -> AppResult<()> {
        match self {
            ScalerParams::Standard { mean, scale } => {
                check_vector("scaler.mean", mean, num_features)?;
                check_vector("scaler.scale", scale, num_features)?;
                if let Some(i) = scale.iter().position(|s| *s == 0.0) {
                    return Err(AppError::artifact(format!("scaler.scale[{i}] is zero")));
                }
            }
            ScalerParams::MinMax { min, scale } => {
                check_vector("scaler.min", min, num_features)?;
                check_vector("scaler.scale", scale, num_features)?;
            }
        }
        Ok(())
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ScalerParams::Standard { .. } => "standard",
            ScalerParams::MinMax { .. } => "min_max",
        }
    }
}

/// Scaler with its parameters resident as tensors on the inference device.
#[derive(Debug)]
pub enum Scaler {
    Standard { mean: Tensor, scale: Tensor },
    MinMax { min: Tensor, scale: Tensor },
}

impl Scaler {
    pub fn from_params(params: &ScalerParams, device: &Device) -> AppResult<Self> {
        Ok(match params {
            ScalerParams::Standard { mean, scale } => Scaler::Standard {
                mean: feature_tensor(mean, device)?,
                scale: feature_tensor(scale, device)?,
            },
            ScalerParams::MinMax { min, scale } => Scaler::MinMax {
                min: feature_tensor(min, device)?,
                scale: feature_tensor(scale, device)?,
            },
        })
    }

    /// Transforms a `[batch, features]` tensor. The scaler is never refit.
    pub fn transform(&self, batch: &Tensor) -> AppResult<Tensor> {
        let scaled = match self {
            Scaler::Standard { mean, scale } => batch.broadcast_sub(mean)?.broadcast_div(scale)?,
            Scaler::MinMax { min, scale } => batch.broadcast_mul(scale)?.broadcast_add(min)?,
        };
        Ok(scaled)
    }
}

fn feature_tensor(values: &[f64], device: &Device) -> AppResult<Tensor> {
    Tensor::from_slice(values, values.len(), device)
        .map_err(|e| AppError::artifact(format!("scaler tensor init failed: {e}")))
}
