use std::env;

/// Account inserted into the store at startup with the `Admin` role.
#[derive(Clone)]
pub struct AdminConfig {
    pub email: String,
    pub password: String,
}

impl AdminConfig {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn from_env() -> Self {
        Self {
            email: env::var("CAKE_ADMIN_EMAIL").unwrap_or_else(|_| "admin@mail.com".to_string()),
            password: env::var("CAKE_ADMIN_PASSWORD")
                .unwrap_or_else(|_| "adminadmin".to_string()),
        }
    }
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
