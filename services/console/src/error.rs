use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bizova_domain::account::AccountFieldError;

/// Console service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error("Email, password, first name, last name, and business name are required")]
    MissingRequiredFields,
    #[error("first name, last name, and business name are required")]
    MissingOnboardingFields,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("missing data")]
    MissingData,
    #[error("invalid status")]
    InvalidStatus,
    /// Gate rejection, message passed through verbatim.
    #[error("{0}")]
    IdentityCreation(String),
    #[error("Failed to create user account")]
    AccountCreationFailed,
    #[error("Failed to create business: {0}")]
    BusinessCreation(String),
    #[error("Failed to create profile: {0}")]
    ProfileCreation(String),
    /// Gate rejection on sign-out, message passed through verbatim.
    #[error("{0}")]
    SessionEnd(String),
    #[error("unauthorized")]
    Unauthorized,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("notification not found")]
    NotificationNotFound,
    #[error("blog post not found")]
    BlogPostNotFound,
    #[error("appointment not found")]
    AppointmentNotFound,
    #[error("portfolio item not found")]
    PortfolioItemNotFound,
    #[error("account already onboarded")]
    AlreadyOnboarded,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ConsoleError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            Self::MissingOnboardingFields => "MISSING_ONBOARDING_FIELDS",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::MissingData => "MISSING_DATA",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::IdentityCreation(_) => "IDENTITY_CREATION_FAILED",
            Self::AccountCreationFailed => "ACCOUNT_CREATION_FAILED",
            Self::BusinessCreation(_) => "BUSINESS_CREATION_FAILED",
            Self::ProfileCreation(_) => "PROFILE_CREATION_FAILED",
            Self::SessionEnd(_) => "SESSION_END_FAILED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::NotificationNotFound => "NOTIFICATION_NOT_FOUND",
            Self::BlogPostNotFound => "BLOG_POST_NOT_FOUND",
            Self::AppointmentNotFound => "APPOINTMENT_NOT_FOUND",
            Self::PortfolioItemNotFound => "PORTFOLIO_ITEM_NOT_FOUND",
            Self::AlreadyOnboarded => "ALREADY_ONBOARDED",
            Self::Internal(_) => "INTERNAL",
        }
    }

    /// Underlying cause as shown to the submitter when a store write fails.
    pub fn detail(&self) -> String {
        match self {
            Self::Internal(e) => e.root_cause().to_string(),
            other => other.to_string(),
        }
    }
}

impl From<AccountFieldError> for ConsoleError {
    fn from(e: AccountFieldError) -> Self {
        match e {
            AccountFieldError::MissingRequired => Self::MissingRequiredFields,
            AccountFieldError::MissingOnboarding => Self::MissingOnboardingFields,
            AccountFieldError::PasswordMismatch => Self::PasswordMismatch,
            AccountFieldError::PasswordTooShort => Self::PasswordTooShort,
        }
    }
}

/// Failure reported by the session gate.
#[derive(Debug, thiserror::Error)]
pub enum GateError {
    /// The gate answered and refused the request.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The gate could not be reached or answered with something unreadable.
    #[error("session gate unavailable")]
    Transport(#[from] anyhow::Error),
}

impl IntoResponse for ConsoleError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::MissingRequiredFields
            | Self::MissingOnboardingFields
            | Self::PasswordMismatch
            | Self::PasswordTooShort
            | Self::MissingData
            | Self::InvalidStatus => StatusCode::BAD_REQUEST,
            Self::IdentityCreation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::AccountCreationFailed | Self::SessionEnd(_) => StatusCode::BAD_GATEWAY,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::ProfileNotFound
            | Self::NotificationNotFound
            | Self::BlogPostNotFound
            | Self::AppointmentNotFound
            | Self::PortfolioItemNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyOnboarded => StatusCode::CONFLICT,
            Self::BusinessCreation(_) | Self::ProfileCreation(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            match &self {
                Self::Internal(e) => tracing::error!(error = %e, kind = "INTERNAL", "internal error"),
                other => tracing::error!(error = %other, kind = other.kind(), "request failed"),
            }
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
