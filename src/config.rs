use crate::error::ScheduleError;
use serde::{Deserialize, Serialize};

/// The complete input for one timetable run. All fields are required; there
/// are no hidden defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableConfig {
    pub departments: Vec<String>,
    pub semesters: Vec<String>,
    pub divisions: Vec<String>,
    pub subjects: Vec<String>,
    pub teachers: Vec<String>,
    pub rooms: Vec<String>,
    pub days: Vec<String>,
    pub slots_per_day: usize,
    /// Candidate teachers sampled per class instance.
    pub teachers_per_class: usize,
    /// Candidate rooms sampled per division group.
    pub rooms_per_division: usize,
    pub seed: u64,
    pub time_limit_seconds: f64,
}

impl TimetableConfig {
    /// Number of timepoints in the week; every division group must fill
    /// exactly this many class instances.
    pub fn timepoints_per_week(&self) -> usize {
        self.days.len() * self.slots_per_day
    }

    /// Fail-fast validation of counts before any expansion or sampling.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let non_empty: [(&str, usize); 7] = [
            ("departments", self.departments.len()),
            ("semesters", self.semesters.len()),
            ("divisions", self.divisions.len()),
            ("subjects", self.subjects.len()),
            ("teachers", self.teachers.len()),
            ("rooms", self.rooms.len()),
            ("days", self.days.len()),
        ];
        for (name, len) in non_empty {
            if len == 0 {
                return Err(ScheduleError::Configuration(format!(
                    "{name} list must not be empty"
                )));
            }
        }
        if self.slots_per_day == 0 {
            return Err(ScheduleError::Configuration(
                "slotsPerDay must be at least 1".to_owned(),
            ));
        }
        if self.teachers_per_class == 0 {
            return Err(ScheduleError::Configuration(
                "teachersPerClass must be at least 1".to_owned(),
            ));
        }
        if self.rooms_per_division == 0 {
            return Err(ScheduleError::Configuration(
                "roomsPerDivision must be at least 1".to_owned(),
            ));
        }
        if !(self.time_limit_seconds > 0.0) {
            return Err(ScheduleError::Configuration(
                "timeLimitSeconds must be positive".to_owned(),
            ));
        }
        Ok(())
    }

    /// Loads a configuration from a JSON file. Unreadable files and
    /// malformed JSON surface through the configuration error family
    /// instead of panicking.
    pub fn from_json_file(path: &str) -> Result<Self, ScheduleError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ScheduleError::Configuration(format!("cannot read {path}: {e}")))?;
        serde_json::from_str(&raw)
            .map_err(|e| ScheduleError::Configuration(format!("cannot parse {path}: {e}")))
    }

    /// A representative institution: 8 division groups, a 30-slot week,
    /// bounded eligibility pools. Used by the demo run and as documentation
    /// of the expected input shape.
    pub fn demo() -> Self {
        Self {
            departments: vec!["CSE".to_owned(), "ECE".to_owned()],
            semesters: vec!["SEM1".to_owned(), "SEM2".to_owned()],
            divisions: vec!["D1".to_owned(), "D2".to_owned()],
            subjects: (1..=6).map(|s| format!("S{s}")).collect(),
            teachers: (1..=20).map(|t| format!("T{t}")).collect(),
            rooms: (1..=10).map(|r| format!("R{r}")).collect(),
            days: ["Mon", "Tue", "Wed", "Thu", "Fri"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            slots_per_day: 6,
            teachers_per_class: 3,
            rooms_per_division: 4,
            seed: 42,
            time_limit_seconds: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScheduleError;

    #[test]
    fn demo_config_is_valid() {
        let config = TimetableConfig::demo();
        config.validate().unwrap();
        assert_eq!(config.timepoints_per_week(), 30);
    }

    #[test]
    fn empty_subject_list_is_rejected() {
        let mut config = TimetableConfig::demo();
        config.subjects.clear();
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::Configuration(_))
        ));
    }

    #[test]
    fn zero_slots_per_day_is_rejected() {
        let mut config = TimetableConfig::demo();
        config.slots_per_day = 0;
        assert!(matches!(
            config.validate(),
            Err(ScheduleError::Configuration(_))
        ));
    }

    #[test]
    fn missing_config_file_is_a_configuration_error() {
        assert!(matches!(
            TimetableConfig::from_json_file("/nonexistent/timetable.json"),
            Err(ScheduleError::Configuration(_))
        ));
    }

    #[test]
    fn malformed_config_json_is_a_configuration_error() {
        let path = std::env::temp_dir().join("timetable_config_malformed.json");
        std::fs::write(&path, "{\"departments\": [").unwrap();
        let result = TimetableConfig::from_json_file(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ScheduleError::Configuration(_))));
    }

    #[test]
    fn config_round_trips_through_camel_case_json() {
        let config = TimetableConfig::demo();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"slotsPerDay\":6"));
        assert!(json.contains("\"teachersPerClass\":3"));
        let back: TimetableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rooms, config.rooms);
        assert_eq!(back.seed, config.seed);
    }
}
