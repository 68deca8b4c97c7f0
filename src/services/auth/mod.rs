//! Authentication: email/password, phone OTP, password recovery.

pub mod guard;
pub mod password;

pub use guard::{RouteAccess, route_access};
pub use password::{PasswordStrength, password_strength};

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::users::UserProfile;
use super::{MessageResponse, ServiceContext, fixtures};
use crate::defaults::mock as mock_defaults;
use crate::error::ServiceError;
use crate::executor::{RequestDescriptor, mock};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 80, message = "name must be 1-80 characters"))]
    pub name: String,
    #[validate(email(message = "invalid email address"))]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 7, max = 20, message = "phone must be 7-20 characters"))]
    pub phone: Option<String>,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
struct OtpRequest {
    #[validate(length(min = 7, max = 20, message = "phone must be 7-20 characters"))]
    phone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
struct OtpVerification {
    #[validate(length(min = 7, max = 20, message = "phone must be 7-20 characters"))]
    phone: String,
    #[validate(length(equal = 6, message = "code must be 6 digits"))]
    code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
struct ForgotPassword {
    #[validate(email(message = "invalid email address"))]
    email: String,
}

/// Token plus the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

fn mock_token(user: &UserProfile) -> String {
    format!("mock-{}", user.id.simple())
}

#[derive(Debug, Clone)]
pub struct AuthService {
    ctx: ServiceContext,
}

impl AuthService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<AuthSession, ServiceError> {
        let request = LoginRequest {
            email: email.into(),
            password: password.into(),
        };
        request.validate()?;

        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::post("/auth/login")
            .json(&request)?
            .mock(move || async move {
                latency.wait().await;
                let user = fixtures::user_for(&request.email);
                Ok(AuthSession {
                    token: mock_token(&user),
                    user,
                })
            });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn register(&self, request: RegisterRequest) -> Result<AuthSession, ServiceError> {
        request.validate()?;
        if password_strength(&request.password) < PasswordStrength::Fair {
            return Err(ServiceError::InvalidInput("password is too weak".into()));
        }

        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::post("/auth/register")
            .json(&request)?
            .mock(move || async move {
                latency.wait().await;
                let mut user = fixtures::user_for(&request.email);
                user.name = request.name;
                user.phone = request.phone;
                Ok(AuthSession {
                    token: mock_token(&user),
                    user,
                })
            });
        self.ctx.executor.execute(descriptor).await
    }

    /// Send a one-time code by SMS. Must complete before [`verify_otp`](Self::verify_otp).
    pub async fn send_otp(&self, phone: impl Into<String>) -> Result<MessageResponse, ServiceError> {
        let request = OtpRequest {
            phone: phone.into(),
        };
        request.validate()?;

        let descriptor = RequestDescriptor::post("/auth/otp/send")
            .json(&request)?
            .mock(|| mock::delayed(mock_defaults::OTP_SEND_LATENCY, MessageResponse::new("OTP sent")));
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn verify_otp(
        &self,
        phone: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<AuthSession, ServiceError> {
        let request = OtpVerification {
            phone: phone.into(),
            code: code.into(),
        };
        request.validate()?;

        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::post("/auth/otp/verify")
            .json(&request)?
            .mock(move || async move {
                latency.wait().await;
                if request.code != mock_defaults::OTP_CODE {
                    return Err(ServiceError::mock(400, "Invalid OTP"));
                }
                let mut user = fixtures::demo_user();
                user.phone = Some(request.phone);
                Ok(AuthSession {
                    token: mock_token(&user),
                    user,
                })
            });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn forgot_password(
        &self,
        email: impl Into<String>,
    ) -> Result<MessageResponse, ServiceError> {
        let request = ForgotPassword {
            email: email.into(),
        };
        request.validate()?;

        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::post("/auth/forgot-password")
            .json(&request)?
            .mock(move || async move {
                latency.wait().await;
                Ok(MessageResponse::new("Password reset link sent"))
            });
        self.ctx.executor.execute(descriptor).await
    }

    pub async fn logout(&self) -> Result<MessageResponse, ServiceError> {
        let latency = self.ctx.latency;
        let descriptor = RequestDescriptor::post("/auth/logout").mock(move || async move {
            latency.wait().await;
            Ok(MessageResponse::new("Logged out"))
        });
        self.ctx.executor.execute(descriptor).await
    }
}
