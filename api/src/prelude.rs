// Licensed under the Apache-2.0 license

pub use crate::ApiError;
pub use crate::HandshakePort;
pub use crate::DIGEST_BYTE_SIZE;
pub use sha256_emu_types::{PinsIn, PinsOut};
