use crate::core::notify::{ConfirmationDetails, Notifier, compose_confirmation};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::store::append_entry;
use crate::errors::{AppError, AppResult};
use crate::models::entry::NewEntry;
use crate::utils::date::parse_date;
use crate::utils::{parse_hours, sanitize_input};
use tracing::warn;

/// Public form input, as typed by the volunteer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionForm {
    pub volunteer_name: String,
    pub email: String,
    pub start_date: String,
    pub end_date: Option<String>,
    pub gardens: Vec<String>,
    pub hours: String,
    pub comments: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub entry_id: i64,
    pub entry: NewEntry,
    pub notified: bool,
    pub message: String,
}

pub struct SubmitLogic;

impl SubmitLogic {
    /// Sanitize the form into an entry. Hours are read tolerantly (0 when
    /// unreadable); dates must be valid and the end date defaults to the
    /// start date.
    pub fn prepare(form: &SubmissionForm) -> AppResult<NewEntry> {
        let volunteer_name = sanitize_input(&form.volunteer_name);
        if volunteer_name.is_empty() {
            return Err(AppError::MissingField("volunteer name"));
        }

        let email = sanitize_input(&form.email);
        if email.is_empty() {
            return Err(AppError::MissingField("email"));
        }

        let start_date = parse_date(&form.start_date)
            .ok_or_else(|| AppError::InvalidDate(form.start_date.clone()))?;

        let end_date = match form.end_date.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?
            }
            _ => start_date,
        };

        let gardens = form
            .gardens
            .iter()
            .map(|g| sanitize_input(g))
            .filter(|g| !g.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(NewEntry {
            volunteer_name,
            email,
            start_date,
            end_date,
            gardens,
            hours: parse_hours(Some(form.hours.as_str())),
            comments: sanitize_input(form.comments.as_deref().unwrap_or_default()),
        })
    }

    /// Append the entry and send the confirmation. A failed confirmation is
    /// logged and does not undo the submission.
    pub fn submit(
        pool: &DbPool,
        form: &SubmissionForm,
        notifier: Option<&dyn Notifier>,
    ) -> AppResult<SubmitReceipt> {
        let entry = Self::prepare(form)?;
        let entry_id = append_entry(&pool.conn, &entry)?;

        ttlog_quiet(
            &pool.conn,
            "submit",
            &entry.volunteer_name,
            &format!(
                "{} h on {} ({})",
                entry.hours,
                entry.start_date.format("%Y-%m-%d"),
                entry.gardens
            ),
        );

        let notified = match notifier {
            Some(n) => Self::notify(pool, n, form, &entry),
            None => false,
        };

        let message = if notified {
            "Volunteer hours submitted successfully! A confirmation email has been sent."
        } else {
            "Volunteer hours submitted successfully!"
        };

        Ok(SubmitReceipt {
            entry_id,
            entry,
            notified,
            message: message.to_string(),
        })
    }

    fn notify(pool: &DbPool, notifier: &dyn Notifier, form: &SubmissionForm, entry: &NewEntry) -> bool {
        let start = form.start_date.trim();
        let message = compose_confirmation(&ConfirmationDetails {
            volunteer_name: &entry.volunteer_name,
            email: &entry.email,
            start_date: start,
            end_date: form.end_date.as_deref().map(str::trim),
            gardens: &entry.gardens,
            hours: entry.hours,
            comments: &entry.comments,
        });

        match notifier.send(&message) {
            Ok(()) => {
                ttlog_quiet(&pool.conn, "notify", &message.recipient, &message.subject);
                true
            }
            Err(e) => {
                warn!(recipient = %message.recipient, error = %e, "could not send confirmation");
                false
            }
        }
    }
}
