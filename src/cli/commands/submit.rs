use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::notify::{Notifier, OutboxNotifier};
use crate::core::submit::{SubmissionForm, SubmitLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::format_hours;

/// Handle the public `submit` form.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit {
        name,
        email,
        start,
        end,
        gardens,
        hours,
        comments,
    } = cmd
    {
        let pool = super::open_store(cfg)?;

        let form = SubmissionForm {
            volunteer_name: name.clone(),
            email: email.clone(),
            start_date: start.clone(),
            end_date: end.clone(),
            gardens: gardens.clone(),
            hours: hours.clone(),
            comments: comments.clone(),
        };

        let outbox = OutboxNotifier::new(&pool.conn);
        let notifier: Option<&dyn Notifier> = if cfg.send_confirmations {
            Some(&outbox)
        } else {
            None
        };

        let receipt = SubmitLogic::submit(&pool, &form, notifier)?;

        success(&receipt.message);
        info(format!(
            "Entry #{}: {} h in {}",
            receipt.entry_id,
            format_hours(receipt.entry.hours),
            receipt.entry.gardens
        ));
    }
    Ok(())
}
