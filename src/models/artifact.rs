// Artifact loading and the scale + predict pipeline
use super::{Regressor, RegressorParams, Scaler, ScalerParams};
use crate::error::{AppError, AppResult};
use crate::form::{InputVector, NUM_FEATURES};
use candle::{Device, Tensor};
use std::path::Path;

/// Anything that can turn one input vector into one prediction.
///
/// Request handlers only see this trait, so tests can swap the loaded
/// artifact for a stub.
pub trait Predictor: Send + Sync {
    fn predict(&self, input: &InputVector) -> AppResult<f64>;
}

/// The fitted (scaler, model) pair. Immutable once built.
#[derive(Debug)]
pub struct ModelArtifact {
    scaler: Scaler,
    regressor: Regressor,
    device: Device,
    summary: String,
}

impl ModelArtifact {
    /// Reads and decodes the artifact at `path`. Any failure here is fatal
    /// for the server.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::artifact(format!("cannot read {}: {e}", path.display())))?;
        let artifact = Self::decode(&bytes)?;
        log::info!(
            "loaded artifact {} ({} bytes): {}",
            path.display(),
            bytes.len(),
            artifact.summary
        );
        Ok(artifact)
    }

    /// Decodes exactly one `(scaler, model)` pair; trailing bytes are rejected.
    pub fn decode(bytes: &[u8]) -> AppResult<Self> {
        let ((scaler, regressor), read): ((ScalerParams, RegressorParams), usize) =
            bincode::decode_from_slice(bytes, bincode::config::standard())
                .map_err(|e| AppError::artifact(format!("corrupt artifact: {e}")))?;
        if read != bytes.len() {
            return Err(AppError::artifact(format!(
                "{} trailing bytes after (scaler, model) pair",
                bytes.len() - read
            )));
        }
        Self::from_parts(&scaler, &regressor, Device::Cpu)
    }

    pub fn from_parts(
        scaler: &ScalerParams,
        regressor: &RegressorParams,
        device: Device,
    ) -> AppResult<Self> {
        scaler.validate(NUM_FEATURES)?;
        regressor.validate(NUM_FEATURES)?;
        Ok(Self {
            summary: format!(
                "{} scaler, {} model, {NUM_FEATURES} features",
                scaler.kind(),
                regressor.kind()
            ),
            scaler: Scaler::from_params(scaler, &device)?,
            regressor: Regressor::from_params(regressor, &device)?,
            device,
        })
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

impl Predictor for ModelArtifact {
    fn predict(&self, input: &InputVector) -> AppResult<f64> {
        // single-row batch
        let batch =
            Tensor::from_slice(input.values().as_slice(), (1, NUM_FEATURES), &self.device)?;
        let scaled = self.scaler.transform(&batch)?;
        let output = self.regressor.predict(&scaled)?;
        let value = output
            .flatten_all()?
            .to_vec1::<f64>()?
            .first()
            .copied()
            .ok_or_else(|| AppError::pipeline("model returned an empty batch"))?;
        if !value.is_finite() {
            return Err(AppError::pipeline(format!("model returned {value}")));
        }
        Ok(value)
    }
}

/// Serializes a (scaler, model) pair in the layout `ModelArtifact::decode` reads.
pub fn encode_artifact(scaler: &ScalerParams, regressor: &RegressorParams) -> AppResult<Vec<u8>> {
    bincode::encode_to_vec((scaler, regressor), bincode::config::standard())
        .map_err(|e| AppError::artifact(format!("cannot encode artifact: {e}")))
}
