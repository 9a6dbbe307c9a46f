// Mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{
    BaseGenerativeAi, BaseIdentityProvider, IdentityError, NewProviderUser, ProviderUser,
};

// =============================================================================
// Mock Generative AI
// =============================================================================

/// Arguments captured from a structured generation call
#[derive(Debug, Clone)]
pub struct RecordedPrompt {
    pub system_prompt: String,
    pub user_prompt: String,
    pub schema: serde_json::Value,
}

pub struct MockGenerativeAi {
    responses: Arc<Mutex<Vec<Result<String, String>>>>,
    calls: Arc<Mutex<Vec<RecordedPrompt>>>,
}

impl MockGenerativeAi {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a raw text response to the queue
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Ok(response.into()));
        self
    }

    /// Add a JSON response to the queue (will be serialized)
    pub fn with_json_response<T: serde::Serialize>(self, data: &T) -> Self {
        let json = serde_json::to_string(data).expect("Failed to serialize mock response");
        self.responses.lock().unwrap().push(Ok(json));
        self
    }

    /// Add a failure to the queue
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(Err(message.into()));
        self
    }

    /// Get all prompts that were sent to the AI
    pub fn calls(&self) -> Vec<RecordedPrompt> {
        self.calls.lock().unwrap().clone()
    }

    /// Get the last prompt sent to the AI
    pub fn last_prompt(&self) -> Option<RecordedPrompt> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Check if a prompt containing the given text was sent
    pub fn was_called_with(&self, text: &str) -> bool {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.system_prompt.contains(text) || p.user_prompt.contains(text))
    }

    /// Get the number of times the AI was called
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockGenerativeAi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseGenerativeAi for MockGenerativeAi {
    async fn generate_structured(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        schema: serde_json::Value,
    ) -> anyhow::Result<String> {
        // Record the call
        self.calls.lock().unwrap().push(RecordedPrompt {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
            schema,
        });

        let mut responses = self.responses.lock().unwrap();
        if !responses.is_empty() {
            return match responses.remove(0) {
                Ok(response) => Ok(response),
                Err(message) => Err(anyhow::anyhow!(message)),
            };
        }

        // Default mock response; deserializes into either assistant contract
        // since unknown fields are ignored
        Ok(r#"{"answer":"Mock assistant answer","description":"Mock property description"}"#
            .to_string())
    }
}

// =============================================================================
// Mock Identity Provider
// =============================================================================

/// Arguments captured from an ensure_profile call
#[derive(Debug, Clone)]
pub struct RecordedProfileCall {
    pub user_id: String,
    pub email: Option<String>,
    pub display_name: String,
}

pub struct MockIdentityProvider {
    users: Arc<Mutex<Vec<ProviderUser>>>,
    calls: Arc<Mutex<Vec<String>>>,
    profile_calls: Arc<Mutex<Vec<RecordedProfileCall>>>,
    fail_upstream: bool,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            profile_calls: Arc::new(Mutex::new(Vec::new())),
            fail_upstream: false,
        }
    }

    /// Build an unconfirmed provider user for seeding the mock
    pub fn user(id: &str, email: &str) -> ProviderUser {
        ProviderUser {
            id: id.to_string(),
            email: Some(email.to_string()),
            email_confirmed_at: None,
            confirmed_at: None,
            created_at: Some(chrono::Utc::now().to_rfc3339()),
            last_sign_in_at: None,
            user_metadata: None,
        }
    }

    /// Add an existing user to the mock provider
    pub fn with_user(self, user: ProviderUser) -> Self {
        self.users.lock().unwrap().push(user);
        self
    }

    /// Make every operation fail the way an auth-service outage would
    pub fn with_upstream_failure(mut self) -> Self {
        self.fail_upstream = true;
        self
    }

    /// Get all operations that were invoked, as "operation email-or-id" strings
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Get all recorded ensure_profile calls
    pub fn profile_calls(&self) -> Vec<RecordedProfileCall> {
        self.profile_calls.lock().unwrap().clone()
    }

    /// Check if an operation was invoked
    pub fn was_called(&self, operation: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c.starts_with(operation))
    }

    fn fail_if_configured(&self, operation: &str) -> Result<(), IdentityError> {
        if self.fail_upstream {
            return Err(IdentityError::Upstream {
                operation: operation.to_string(),
                status: 500,
                body: "mock upstream failure".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseIdentityProvider for MockIdentityProvider {
    async fn create_user(&self, new_user: NewProviderUser) -> Result<ProviderUser, IdentityError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("create_user {}", new_user.email));
        self.fail_if_configured("admin create user")?;

        let now = chrono::Utc::now().to_rfc3339();
        let user = ProviderUser {
            id: uuid::Uuid::new_v4().to_string(),
            email: Some(new_user.email.clone()),
            email_confirmed_at: Some(now.clone()),
            confirmed_at: Some(now.clone()),
            created_at: Some(now),
            last_sign_in_at: None,
            user_metadata: Some(serde_json::json!({
                "display_name": new_user.display_name,
                "email": new_user.email,
                "phone": new_user.phone,
                "role": new_user.role,
            })),
        };

        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(
        &self,
        email: &str,
    ) -> Result<Option<ProviderUser>, IdentityError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("find_user_by_email {}", email));
        self.fail_if_configured("admin list users")?;

        let users = self.users.lock().unwrap();
        Ok(users
            .iter()
            .find(|u| {
                u.email
                    .as_deref()
                    .is_some_and(|e| e.eq_ignore_ascii_case(email))
            })
            .cloned())
    }

    async fn confirm_user(&self, user_id: &str) -> Result<ProviderUser, IdentityError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("confirm_user {}", user_id));
        self.fail_if_configured("admin patch user")?;

        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(IdentityError::UserNotFound)?;

        let now = chrono::Utc::now().to_rfc3339();
        user.email_confirmed_at = Some(now.clone());
        user.confirmed_at = Some(now);
        Ok(user.clone())
    }

    async fn ensure_profile(
        &self,
        user_id: &str,
        email: Option<&str>,
        display_name: &str,
    ) -> Result<(), IdentityError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("ensure_profile {}", user_id));
        self.fail_if_configured("create profile")?;

        self.profile_calls.lock().unwrap().push(RecordedProfileCall {
            user_id: user_id.to_string(),
            email: email.map(str::to_string),
            display_name: display_name.to_string(),
        });
        Ok(())
    }
}
