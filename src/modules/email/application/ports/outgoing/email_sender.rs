use async_trait::async_trait;

/// Outgoing mail seam; adapters decide the transport.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;
}
