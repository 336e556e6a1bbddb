use finanzas_core::endpoints::CHAT;
use finanzas_core::models::{ChatReply, ChatRequest};
use finanzas_core::ApiError;

use super::ApiClient;

impl ApiClient {
    pub async fn ask_assistant(&self, message: &str) -> Result<ChatReply, ApiError> {
        let body = ChatRequest {
            message: message.to_string(),
        };
        self.post(CHAT, &body).await
    }
}
