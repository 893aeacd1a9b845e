// Licensed under the Apache-2.0 license

pub use crate::model_emulated::ModelEmulated;
pub use crate::{DefaultHwModel, InitParams, ModelError};
pub use sha256_emu_periph::Sha256StreamConfig;
pub use sha256_stream_api::prelude::*;
