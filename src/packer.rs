// Offline packing of fitted parameters into the server's artifact file
use crate::error::{AppError, AppResult};
use crate::models::{encode_artifact, ModelArtifact, RegressorParams, ScalerParams};
use candle::Device;
use serde::Deserialize;
use std::path::Path;

/// Already-fitted parameters exported by the offline training job.
#[derive(Debug, Deserialize)]
pub struct FittedParams {
    pub scaler: ScalerParams,
    pub model: RegressorParams,
}

/// Reads fitted parameters from JSON, runs the loader's checks on them and
/// writes the artifact. Nothing is written unless the checks pass.
pub fn pack(params_path: &Path, output: &Path) -> AppResult<usize> {
    let raw = std::fs::read_to_string(params_path)?;
    let params: FittedParams = serde_json::from_str(&raw).map_err(|e| {
        AppError::artifact(format!("cannot parse {}: {e}", params_path.display()))
    })?;

    let artifact = ModelArtifact::from_parts(&params.scaler, &params.model, Device::Cpu)?;
    log::info!("validated parameters: {}", artifact.summary());

    let bytes = encode_artifact(&params.scaler, &params.model)?;
    std::fs::write(output, &bytes)?;
    Ok(bytes.len())
}
