//! AWS Systems Manager Parameter Store.

use super::ParameterStore;
use crate::error::{TruncateError, TruncateResult};
use aws_sdk_ssm::Client;
use aws_sdk_ssm::error::DisplayErrorContext;
use tracing::warn;

/// Parameter store backed by SSM `GetParameter` with decryption enabled.
#[derive(Debug, Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a store from the shared AWS configuration.
    pub fn from_conf(config: &aws_config::SdkConfig) -> Self {
        Self::new(Client::new(config))
    }
}

impl ParameterStore for SsmParameterStore {
    async fn get_parameter(&self, name: &str) -> TruncateResult<String> {
        let output = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(true)
            .send()
            .await
            .map_err(|e| {
                let message = DisplayErrorContext(&e).to_string();
                warn!(parameter = %name, error = %message, "Parameter lookup failed");
                TruncateError::configuration(name, message)
            })?;

        output
            .parameter
            .and_then(|p| p.value)
            .ok_or_else(|| TruncateError::configuration(name, "parameter has no value"))
    }
}
