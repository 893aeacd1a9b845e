// Licensed under the Apache-2.0 license

use sha256_emu_crypto::KatError;
use sha256_emu_periph::Sha256StreamConfig;

mod model_emulated;
pub mod prelude;

pub use model_emulated::ModelEmulated;

pub type DefaultHwModel = ModelEmulated;

/// Parameters used when constructing a model.
#[derive(Clone, Copy, Debug)]
pub struct InitParams {
    /// Peripheral timing configuration
    pub config: Sha256StreamConfig,

    /// Run the SHA-256 known answer tests before handing out the model
    pub run_kat: bool,
}

impl Default for InitParams {
    fn default() -> Self {
        Self {
            config: Sha256StreamConfig::default(),
            run_kat: true,
        }
    }
}

#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("engine self test failed: {0}")]
    SelfTestFailed(#[from] KatError),
    #[error("condition not reached within {0} cycles")]
    Timeout(u64),
}

/// Create a model of the byte-stream SHA-256 engine.
pub fn new(params: InitParams) -> Result<DefaultHwModel, ModelError> {
    ModelEmulated::new(params)
}
