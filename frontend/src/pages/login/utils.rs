use crate::{
    api::{LoginRequest, UserIdentity},
    router::{ADMIN_PATH, HELP_PATH},
};

pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, String> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email address.".into());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address.".into());
    }
    if password.is_empty() {
        return Err("Please enter your password.".into());
    }
    Ok(LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Administrators land on the admin area, everyone else on help.
pub fn landing_path(user: &UserIdentity) -> &'static str {
    if user.role == "admin" {
        ADMIN_PATH
    } else {
        HELP_PATH
    }
}
