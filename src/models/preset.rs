use super::bell_schedule::BellSchedule;
use clap::ValueEnum;

/// Common assignment shapes, derived from a school's bell times.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Instructional start to dismissal
    FullDay,
    /// Instructional start to the beginning of lunch
    AmOnly,
    /// End of lunch to dismissal
    PmOnly,
}

impl Preset {
    /// Start/end pair this preset selects for the given school.
    pub fn times<'a>(&self, school: &'a BellSchedule) -> (&'a str, &'a str) {
        match self {
            Preset::FullDay => (&school.begin, &school.dismiss),
            Preset::AmOnly => (&school.begin, &school.lunch_start),
            Preset::PmOnly => (&school.lunch_end, &school.dismiss),
        }
    }
}
