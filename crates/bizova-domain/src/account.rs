//! Sign-up and onboarding field rules.
//!
//! These checks run before any I/O. The provisioning workflow only enforces
//! presence of the required fields; password confirmation and length belong to
//! the calling form.

/// Minimum password length accepted by the sign-up form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Reasons a sign-up submission is rejected before any write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountFieldError {
    #[error("Email, password, first name, last name, and business name are required")]
    MissingRequired,
    #[error("first name, last name, and business name are required")]
    MissingOnboarding,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Fields collected by the two-step sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpFields {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub business_name: String,
    pub business_email: Option<String>,
    pub business_phone: Option<String>,
    pub business_location: Option<String>,
}

impl SignUpFields {
    /// Presence check for the fields every write depends on.
    pub fn validate_required(&self) -> Result<(), AccountFieldError> {
        let required = [
            &self.email,
            &self.password,
            &self.first_name,
            &self.last_name,
            &self.business_name,
        ];
        if required.iter().any(|v| is_blank(v)) {
            return Err(AccountFieldError::MissingRequired);
        }
        Ok(())
    }

    /// Contact email stored on the business: the business email when given,
    /// otherwise the account email.
    pub fn business_contact_email(&self) -> String {
        non_empty(self.business_email.as_deref())
            .unwrap_or_else(|| self.email.trim().to_owned())
    }

    /// Split into the business half, which onboarding reuses on its own.
    pub fn business(&self) -> BusinessFields {
        BusinessFields {
            name: self.business_name.trim().to_owned(),
            email: Some(self.business_contact_email()),
            phone: non_empty(self.business_phone.as_deref()),
            location: non_empty(self.business_location.as_deref()),
        }
    }
}

/// Business columns written during provisioning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessFields {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Fields for finishing onboarding of an identity that has no profile yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingFields {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub business_name: String,
    pub business_email: Option<String>,
    pub business_phone: Option<String>,
    pub business_location: Option<String>,
}

impl OnboardingFields {
    pub fn validate_required(&self) -> Result<(), AccountFieldError> {
        if is_blank(&self.first_name) || is_blank(&self.last_name) || is_blank(&self.business_name)
        {
            return Err(AccountFieldError::MissingOnboarding);
        }
        Ok(())
    }

    /// Business columns, with the contact email falling back to `account_email`.
    pub fn business(&self, account_email: &str) -> BusinessFields {
        BusinessFields {
            name: self.business_name.trim().to_owned(),
            email: non_empty(self.business_email.as_deref())
                .or_else(|| non_empty(Some(account_email))),
            phone: non_empty(self.business_phone.as_deref()),
            location: non_empty(self.business_location.as_deref()),
        }
    }
}

/// Step-one checks of the sign-up form: personal fields present, password
/// confirmed and long enough.
pub fn check_personal_step(
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
    repeat_password: &str,
) -> Result<(), AccountFieldError> {
    if [first_name, last_name, email, password]
        .iter()
        .any(|v| is_blank(v))
    {
        return Err(AccountFieldError::MissingRequired);
    }
    check_password(password, repeat_password)
}

/// Confirmation must match exactly; length is counted in characters.
pub fn check_password(password: &str, repeat_password: &str) -> Result<(), AccountFieldError> {
    if password != repeat_password {
        return Err(AccountFieldError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AccountFieldError::PasswordTooShort);
    }
    Ok(())
}

/// Trimmed value, or `None` when absent or blank.
pub fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
