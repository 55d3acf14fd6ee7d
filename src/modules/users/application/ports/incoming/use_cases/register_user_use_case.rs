use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::OnceLock;

use crate::users::application::ports::outgoing::UserResult;

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]{3,30}$").expect("valid username pattern"))
}

//
// ──────────────────────────────────────────────────────────
// Register User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    username: String,
    email: String,
    send_messages: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterUserCommandError {
    #[error("Username must be 3-30 characters of letters, digits or underscores")]
    InvalidUsername,

    #[error("Invalid email address")]
    InvalidEmail,
}

impl RegisterUserCommand {
    pub fn new(
        username: String,
        email: String,
        send_messages: bool,
    ) -> Result<Self, RegisterUserCommandError> {
        let username = username.trim();
        let email = email.trim();

        if !username_pattern().is_match(username) {
            return Err(RegisterUserCommandError::InvalidUsername);
        }

        if !EmailAddress::is_valid(email) {
            return Err(RegisterUserCommandError::InvalidEmail);
        }

        Ok(Self {
            username: username.to_string(),
            email: email.to_string(),
            send_messages,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn send_messages(&self) -> bool {
        self.send_messages
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegisterUserError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, command: RegisterUserCommand) -> Result<UserResult, RegisterUserError>;
}
