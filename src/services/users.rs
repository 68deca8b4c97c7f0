//! Profile and account settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::auth::password::{PasswordStrength, password_strength};
use super::{MessageResponse, ServiceContext, fixtures};
use crate::error::ServiceError;
use crate::executor::RequestDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    Organizer,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 80, message = "name must be 1-80 characters"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 7, max = 20, message = "phone must be 7-20 characters"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(url(message = "avatar must be a URL"))]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub sms_notifications: bool,
    pub marketing_emails: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePassword<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

#[derive(Debug, Clone)]
pub struct UserService {
    ctx: ServiceContext,
}

impl UserService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn profile(&self) -> Result<UserProfile, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::get("/users/me").mock(move || async move {
            latency.wait().await;
            Ok(fixtures::demo_user())
        });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn update_profile(&self, update: UpdateProfile) -> Result<UserProfile, ServiceError> {
        update.validate()?;
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::put("/users/me")
            .json(&update)?
            .mock(move || async move {
                latency.wait().await;
                let mut user = fixtures::demo_user();
                if let Some(name) = update.name {
                    user.name = name;
                }
                if let Some(phone) = update.phone {
                    user.phone = Some(phone);
                }
                if let Some(avatar) = update.avatar_url {
                    user.avatar_url = Some(avatar);
                }
                Ok(user)
            });
        self.ctx.executor.execute(descriptor).await
    }

    /// The new password must rate at least [`PasswordStrength::Fair`] and
    /// differ from the current one.
    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ServiceError> {
        if current_password.is_empty() {
            return Err(ServiceError::InvalidInput("current password is required".into()));
        }
        if current_password == new_password {
            return Err(ServiceError::InvalidInput(
                "new password must differ from the current one".into(),
            ));
        }
        if password_strength(new_password) < PasswordStrength::Fair {
            return Err(ServiceError::InvalidInput("new password is too weak".into()));
        }

        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::patch("/users/me/password")
            .json(&ChangePassword {
                current_password,
                new_password,
            })?
            .mock(move || async move {
                latency.wait().await;
                Ok(MessageResponse::new("Password updated"))
            });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn notification_settings(&self) -> Result<NotificationSettings, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::get("/users/me/settings").mock(move || async move {
            latency.wait().await;
            Ok(fixtures::notification_settings())
        });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn update_notification_settings(
        &self,
        settings: NotificationSettings,
    ) -> Result<NotificationSettings, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::put("/users/me/settings")
            .json(&settings)?
            .mock(move || async move {
                latency.wait().await;
                Ok(settings)
            });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn delete_account(&self) -> Result<MessageResponse, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::delete("/users/me").mock(move || async move {
            latency.wait().await;
            Ok(MessageResponse::new("Account deleted"))
        });
        self.ctx.executor.execute(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::mock_context;

    fn service() -> UserService {
        UserService::new(mock_context())
    }

    #[tokio::test]
    async fn update_profile_applies_only_given_fields() {
        let before = service().profile().await.unwrap();
        let after = service()
            .update_profile(UpdateProfile {
                name: Some("Sam Rivera".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(after.name, "Sam Rivera");
        assert_eq!(after.email, before.email);
        assert_eq!(after.phone, before.phone);
    }

    #[tokio::test]
    async fn update_profile_rejects_invalid_avatar() {
        let err = service()
            .update_profile(UpdateProfile {
                avatar_url: Some("not a url".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        match err {
            ServiceError::InvalidInput(msg) => assert!(msg.contains("avatar_url"), "{msg}"),
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn change_password_checks_strength_locally() {
        let svc = service();
        assert!(matches!(
            svc.change_password("old-Pass1", "abc").await,
            Err(ServiceError::InvalidInput(_))
        ));
        assert!(matches!(
            svc.change_password("same-Pass1", "same-Pass1").await,
            Err(ServiceError::InvalidInput(_))
        ));
        let ok = svc.change_password("old-Pass1", "N3w-Passw0rd!").await.unwrap();
        assert_eq!(ok.message, "Password updated");
    }

    #[tokio::test]
    async fn settings_round_trip_through_mock() {
        let svc = service();
        let mut settings = svc.notification_settings().await.unwrap();
        settings.marketing_emails = true;
        assert_eq!(svc.update_notification_settings(settings).await.unwrap(), settings);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Role::Admin).unwrap(), serde_json::json!("admin"));
    }
}
