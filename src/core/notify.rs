//! Confirmation messages sent to volunteers after a submission.

use crate::errors::{AppError, AppResult};
use crate::utils::date::now_rfc3339;
use rusqlite::{Connection, params};

pub const CONFIRMATION_SUBJECT: &str = "Volunteer Hours Submission Confirmation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// What the volunteer submitted, as echoed back in the confirmation.
pub struct ConfirmationDetails<'a> {
    pub volunteer_name: &'a str,
    pub email: &'a str,
    pub start_date: &'a str,
    pub end_date: Option<&'a str>,
    pub gardens: &'a str,
    pub hours: f64,
    pub comments: &'a str,
}

pub fn compose_confirmation(d: &ConfirmationDetails<'_>) -> Confirmation {
    let dates = match d.end_date.filter(|e| !e.is_empty()) {
        Some(end) => format!("{} to {}", d.start_date, end),
        None => d.start_date.to_string(),
    };
    let comments = if d.comments.is_empty() {
        "None"
    } else {
        d.comments
    };

    let body = format!(
        "Dear {name},\n\n\
         Thank you for submitting your volunteer hours! Here are the details we received:\n\n\
         Date(s): {dates}\n\
         Garden(s): {gardens}\n\
         Hours: {hours}\n\
         Comments: {comments}\n\n\
         Your contribution is greatly appreciated!\n\n\
         Best regards,\n\
         Volunteer Coordination Team\n",
        name = d.volunteer_name,
        gardens = d.gardens,
        hours = d.hours,
    );

    Confirmation {
        recipient: d.email.to_string(),
        subject: CONFIRMATION_SUBJECT.to_string(),
        body,
    }
}

/// Delivery channel for confirmations.
pub trait Notifier {
    fn send(&self, message: &Confirmation) -> AppResult<()>;
}

/// Queues confirmations in the `outbox` table for an external mailer.
pub struct OutboxNotifier<'a> {
    conn: &'a Connection,
}

impl<'a> OutboxNotifier<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl Notifier for OutboxNotifier<'_> {
    fn send(&self, message: &Confirmation) -> AppResult<()> {
        if message.recipient.trim().is_empty() {
            return Err(AppError::Notify("no recipient address".to_string()));
        }

        self.conn
            .execute(
                "INSERT INTO outbox (created_at, recipient, subject, body)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    now_rfc3339(),
                    message.recipient,
                    message.subject,
                    message.body
                ],
            )
            .map_err(|e| AppError::Notify(e.to_string()))?;
        Ok(())
    }
}

/// Drops every message. Used when confirmations are disabled.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn send(&self, _message: &Confirmation) -> AppResult<()> {
        Ok(())
    }
}

pub fn load_outbox(conn: &Connection) -> AppResult<Vec<Confirmation>> {
    let mut stmt =
        conn.prepare_cached("SELECT recipient, subject, body FROM outbox ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Confirmation {
            recipient: row.get(0)?,
            subject: row.get(1)?,
            body: row.get(2)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
