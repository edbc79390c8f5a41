use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::auth::AuthLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    let json = matches!(cmd, Commands::Whoami { json: true });
    let outcome = AuthLogic::authenticate(user, cfg);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else if outcome.is_admin {
        success(format!("{} ({})", outcome.message, outcome.user_email));
    } else {
        warning(&outcome.message);
    }
    Ok(())
}
