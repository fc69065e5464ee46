use crate::config::TimetableConfig;
use crate::data::{Catalog, ClassInstance, DivisionGroup};
use crate::error::ScheduleError;
use log::info;

/// Expands the configured catalog into concrete class instances.
///
/// Every (department, semester, division) group receives exactly
/// `days * slots_per_day` instances, distributed across subjects as evenly
/// as possible: with `total = days * slots_per_day`, the first
/// `total % subjects` subjects (in configuration order) occur
/// `total / subjects + 1` times, the rest `total / subjects` times.
/// Supply therefore exactly matches the demand of the completeness
/// constraints; a necessary precondition for feasibility, not a sufficient
/// one.
pub fn expand(config: &TimetableConfig) -> Result<Catalog, ScheduleError> {
    if config.subjects.is_empty() {
        return Err(ScheduleError::Configuration(
            "cannot distribute the week over zero subjects".to_owned(),
        ));
    }

    let total = config.timepoints_per_week();
    let base = total / config.subjects.len();
    let extra = total % config.subjects.len();

    let mut groups = Vec::new();
    let mut classes = Vec::new();
    for department in &config.departments {
        for semester in &config.semesters {
            for division in &config.divisions {
                let group = groups.len();
                groups.push(DivisionGroup {
                    department: department.clone(),
                    semester: semester.clone(),
                    division: division.clone(),
                });
                for subject in 0..config.subjects.len() {
                    let repeats = base + usize::from(subject < extra);
                    for repeat in 0..repeats {
                        classes.push(ClassInstance {
                            group,
                            subject,
                            repeat,
                        });
                    }
                }
            }
        }
    }

    info!(
        "Expanded catalog into {} class instances across {} division groups ({} timepoints/week)",
        classes.len(),
        groups.len(),
        total
    );
    Ok(Catalog { groups, classes })
}
