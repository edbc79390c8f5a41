use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOutcome {
    pub success: bool,
    pub is_admin: bool,
    pub user_email: String,
    pub message: String,
}

pub struct AuthLogic;

impl AuthLogic {
    /// Exact comparison of the acting user with the configured admin.
    /// An empty user or an unset admin address never authenticates.
    pub fn authenticate(user_email: &str, cfg: &Config) -> AuthOutcome {
        let user = user_email.trim();
        let is_admin = !user.is_empty() && !cfg.admin_email.is_empty() && user == cfg.admin_email;

        debug!(user, admin = %cfg.admin_email, is_admin, "admin check");

        AuthOutcome {
            success: is_admin,
            is_admin,
            user_email: user.to_string(),
            message: if is_admin {
                "Admin authenticated".to_string()
            } else {
                "Access denied - admin privileges required".to_string()
            },
        }
    }

    pub fn require_admin(user_email: &str, cfg: &Config) -> AppResult<()> {
        if Self::authenticate(user_email, cfg).is_admin {
            Ok(())
        } else {
            Err(AppError::AccessDenied(user_email.trim().to_string()))
        }
    }
}
