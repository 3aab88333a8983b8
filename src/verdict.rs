//! Fixed review-status → verdict table and the status formatter.

use crate::api::Homework;
use crate::error::PollError;

/// Known review statuses and their human-readable verdicts. Static for
/// the process lifetime.
fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Render the notification text for one homework record. Pure and
/// deterministic; fails only when the status is outside the table.
pub fn parse_status(homework: &Homework) -> Result<String, PollError> {
    let verdict = verdict_for(&homework.status)
        .ok_or_else(|| PollError::UnknownStatus(homework.status.clone()))?;
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework.homework_name, verdict
    ))
}
