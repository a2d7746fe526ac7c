use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::CommandSink;
use crate::types::CommandRequest;

/// `CommandSink` posting JSON bodies to one endpoint.
pub struct HttpCommandSink {
    client: Client,
    name: String,
    url: String,
}

impl HttpCommandSink {
    pub fn new(client: Client, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CommandSink for HttpCommandSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn post(&self, request: CommandRequest) -> Result<Value> {
        let label = request
            .action_name()
            .map_or_else(|| self.url.clone(), |a| format!("{} ({a})", self.url));
        let builder = self.client.post(&self.url).json(&request.into_value());

        let (status, text) = HttpUtils::execute_request(builder, &self.name, "POST", &label).await?;
        HttpUtils::check_envelope(status, &text, &self.name)
    }

    async fn get(&self, params: &[(&str, &str)]) -> Result<Value> {
        let builder = self.client.get(&self.url).query(params);

        let (status, text) = HttpUtils::execute_request(builder, &self.name, "GET", &self.url).await?;
        HttpUtils::check_envelope(status, &text, &self.name)
    }
}
