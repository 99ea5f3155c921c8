//! EmailJS REST implementation of [`EmailRelay`]

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::http_client::{create_relay_client, RelayClientConfig};
use super::relay::{EmailRelay, RelayResponse, TemplateParams};
use crate::utils::config::RelayConfig;
use crate::utils::debug::debug_print_module;
use crate::utils::error::RelayError;

const SEND_PATH: &str = "/api/v1.0/email/send";

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Clone)]
pub struct EmailJsClient {
    client: Client,
    endpoint: String,
    public_key: String,
}

impl EmailJsClient {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        if config.public_key.trim().is_empty() {
            return Err(RelayError::NotConfigured("public key is empty".to_string()));
        }

        let client = create_relay_client(RelayClientConfig::with_timeout(config.timeout()))?;
        Ok(Self::with_client(client, &config.api_url, &config.public_key))
    }

    pub fn with_client(client: Client, api_url: &str, public_key: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", api_url.trim_end_matches('/'), SEND_PATH),
            public_key: public_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailRelay for EmailJsClient {
    async fn send(
        &self,
        service_id: &str,
        template_id: &str,
        params: &TemplateParams,
    ) -> Result<RelayResponse, RelayError> {
        let body = SendRequest {
            service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        };

        debug_print_module(
            "RELAY",
            &format!("POST {} template={} ({} params)", self.endpoint, template_id, params.len()),
        );

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        debug_print_module("RELAY", &format!("status={} body={}", status, text));

        Ok(RelayResponse { status, text })
    }
}
