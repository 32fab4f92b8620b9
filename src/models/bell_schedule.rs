use serde::{Deserialize, Serialize};

/// A school's daily bell times, as stored in the schedule file.
///
/// Every field is an `HH:MM` 24-hour string. The periods are expected to be
/// ordered and non-overlapping:
/// `begin < rec_start <= rec_end < lunch_start <= lunch_end < dismiss`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BellSchedule {
    pub begin: String,
    pub rec_start: String,
    pub rec_end: String,
    pub lunch_start: String,
    pub lunch_end: String,
    pub dismiss: String,
}

impl BellSchedule {
    pub fn new(
        begin: &str,
        rec_start: &str,
        rec_end: &str,
        lunch_start: &str,
        lunch_end: &str,
        dismiss: &str,
    ) -> Self {
        Self {
            begin: begin.to_string(),
            rec_start: rec_start.to_string(),
            rec_end: rec_end.to_string(),
            lunch_start: lunch_start.to_string(),
            lunch_end: lunch_end.to_string(),
            dismiss: dismiss.to_string(),
        }
    }

    /// Recess window as a (start, end) pair.
    pub fn recess(&self) -> (&str, &str) {
        (&self.rec_start, &self.rec_end)
    }

    /// Lunch window as a (start, end) pair.
    pub fn lunch(&self) -> (&str, &str) {
        (&self.lunch_start, &self.lunch_end)
    }
}
