//! Input to a registry call

use std::collections::BTreeMap;

use crate::error::Result;
use crate::otp::{OtpMode, OutputFormat};

/// Option key selecting the one-time-pad mode (`letters` or `xor`).
pub const MODE_OPTION: &str = "mode";
/// Option key selecting the XOR-mode encoding (`hex` or `base64`).
pub const FORMAT_OPTION: &str = "format";

/// Payload, key and variant-specific options for one `encrypt`/`decrypt` call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CipherRequest {
    pub payload: String,
    pub key: String,
    pub options: BTreeMap<String, String>,
}

impl CipherRequest {
    pub fn new(payload: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
            key: key.into(),
            options: BTreeMap::new(),
        }
    }

    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    pub fn option(&self, name: &str) -> Option<&str> {
        self.options.get(name).map(String::as_str)
    }

    /// The `mode` option, defaulting to letters.
    pub fn otp_mode(&self) -> Result<OtpMode> {
        self.option(MODE_OPTION)
            .map_or(Ok(OtpMode::default()), str::parse)
    }

    /// The `format` option, defaulting to hex.
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.option(FORMAT_OPTION)
            .map_or(Ok(OutputFormat::default()), str::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_defaults() {
        let request = CipherRequest::new("text", "key");
        assert_eq!(request.otp_mode().unwrap(), OtpMode::Letters);
        assert_eq!(request.output_format().unwrap(), OutputFormat::Hex);
    }

    #[test]
    fn test_options() {
        let request = CipherRequest::new("text", "key")
            .with_option(MODE_OPTION, "xor")
            .with_option(FORMAT_OPTION, "Base64");
        assert_eq!(request.otp_mode().unwrap(), OtpMode::Xor);
        assert_eq!(request.output_format().unwrap(), OutputFormat::Base64);

        let request = request.with_option(MODE_OPTION, "bits");
        assert!(matches!(
            request.otp_mode(),
            Err(CipherError::UnsupportedMode(_))
        ));
    }
}
