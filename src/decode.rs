use crate::config::TimetableConfig;
use crate::data::{
    Catalog, ClassAssignment, DivisionTimetable, ScheduledClass, VarKey,
};
use crate::error::ScheduleError;
use crate::pools::EligibilityPools;
use good_lp::Variable;
use itertools::Itertools;
use std::collections::HashMap;

/// Reconstructs one assignment per class instance from the engine's truth
/// values.
///
/// Truth values are read through the injected `value` function (anything
/// above 0.9 counts as true), so the decoder needs no live solver. The
/// exactly-once constraint guarantees a unique true variable per class; zero
/// or multiple true variables mean the engine and the model disagree, which
/// is surfaced as an error rather than silently picking one.
pub fn decode_assignments(
    variables: &HashMap<VarKey, Variable>,
    catalog: &Catalog,
    pools: &EligibilityPools,
    value: impl Fn(Variable) -> f64,
) -> Result<Vec<ClassAssignment>, ScheduleError> {
    let mut chosen: Vec<Vec<VarKey>> = vec![Vec::new(); catalog.classes.len()];
    for (key, var) in variables {
        if value(*var) > 0.9 {
            chosen[key.class].push(*key);
        }
    }

    let mut assignments = Vec::with_capacity(catalog.classes.len());
    for (class, keys) in chosen.iter().enumerate() {
        let key = match keys.as_slice() {
            [key] => key,
            _ => {
                return Err(ScheduleError::InconsistentSolution(format!(
                    "expected exactly one scheduled variable for class {class}, found {}",
                    keys.len()
                )));
            }
        };
        let group = catalog.classes[class].group;
        assignments.push(ClassAssignment {
            class,
            teacher: pools.class_teachers[class][key.teacher_pick],
            room: pools.group_rooms[group][key.room_pick],
            day: key.day,
            slot: key.slot,
        });
    }
    assignments.sort_by_key(|a| a.class);
    Ok(assignments)
}

/// Groups decoded assignments into one weekly grid per division group.
///
/// A doubly occupied cell violates the completeness constraint and is
/// reported as an inconsistency; under a consistent solution every cell is
/// filled.
pub fn build_grids(
    config: &TimetableConfig,
    catalog: &Catalog,
    assignments: &[ClassAssignment],
) -> Result<Vec<DivisionTimetable>, ScheduleError> {
    let per_group: HashMap<usize, Vec<&ClassAssignment>> = assignments
        .iter()
        .map(|a| (catalog.classes[a.class].group, a))
        .into_group_map();

    let mut divisions = Vec::with_capacity(catalog.groups.len());
    for (group_id, group) in catalog.groups.iter().enumerate() {
        let mut grid: Vec<Vec<Option<ScheduledClass>>> =
            vec![vec![None; config.slots_per_day]; config.days.len()];
        for assignment in per_group.get(&group_id).into_iter().flatten() {
            let cell = &mut grid[assignment.day][assignment.slot];
            if cell.is_some() {
                return Err(ScheduleError::InconsistentSolution(format!(
                    "two classes scheduled for {} - {} - {} on day {} slot {}",
                    group.department, group.semester, group.division, assignment.day, assignment.slot
                )));
            }
            let instance = &catalog.classes[assignment.class];
            *cell = Some(ScheduledClass {
                subject: config.subjects[instance.subject].clone(),
                teacher: config.teachers[assignment.teacher].clone(),
                room: config.rooms[assignment.room].clone(),
            });
        }
        divisions.push(DivisionTimetable {
            department: group.department.clone(),
            semester: group.semester.clone(),
            division: group.division.clone(),
            grid,
        });
    }
    Ok(divisions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model;
    use crate::pools;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::collections::HashSet;

    fn tiny_config() -> TimetableConfig {
        TimetableConfig {
            departments: vec!["CSE".to_owned()],
            semesters: vec!["SEM1".to_owned()],
            divisions: vec!["D1".to_owned()],
            subjects: vec!["S1".to_owned(), "S2".to_owned()],
            teachers: vec!["T1".to_owned(), "T2".to_owned()],
            rooms: vec!["R1".to_owned(), "R2".to_owned()],
            days: vec!["Mon".to_owned(), "Tue".to_owned()],
            slots_per_day: 2,
            teachers_per_class: 2,
            rooms_per_division: 2,
            seed: 7,
            time_limit_seconds: 10.0,
        }
    }

    struct Fixture {
        config: TimetableConfig,
        catalog: Catalog,
        pools: EligibilityPools,
        model: model::TimetableModel,
    }

    fn fixture() -> Fixture {
        let config = tiny_config();
        let catalog = catalog::expand(&config).unwrap();
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let pools = pools::generate(&config, &catalog, &mut rng).unwrap();
        let model = model::build(&config, &catalog, &pools);
        Fixture {
            config,
            catalog,
            pools,
            model,
        }
    }

    // marks exactly the given keys true
    fn truth_fn(
        variables: &HashMap<VarKey, Variable>,
        truthy: &HashSet<VarKey>,
    ) -> impl Fn(Variable) -> f64 + use<> {
        let true_vars: HashSet<Variable> = variables
            .iter()
            .filter(|(key, _)| truthy.contains(key))
            .map(|(_, var)| *var)
            .collect();
        move |var| if true_vars.contains(&var) { 1.0 } else { 0.0 }
    }

    // class i meets at timepoint i with its first candidates
    fn one_per_timepoint() -> HashSet<VarKey> {
        (0..4)
            .map(|class| VarKey {
                class,
                teacher_pick: 0,
                room_pick: 0,
                day: class / 2,
                slot: class % 2,
            })
            .collect()
    }

    #[test]
    fn decodes_a_unique_assignment_per_class() {
        let f = fixture();
        let value = truth_fn(&f.model.variables, &one_per_timepoint());
        let assignments =
            decode_assignments(&f.model.variables, &f.catalog, &f.pools, value).unwrap();

        assert_eq!(assignments.len(), 4);
        for (class, assignment) in assignments.iter().enumerate() {
            assert_eq!(assignment.class, class);
            assert_eq!(assignment.teacher, f.pools.class_teachers[class][0]);
            assert_eq!(assignment.room, f.pools.group_rooms[0][0]);
            assert_eq!((assignment.day, assignment.slot), (class / 2, class % 2));
        }
    }

    #[test]
    fn zero_true_variables_is_inconsistent() {
        let f = fixture();
        let mut truthy = one_per_timepoint();
        truthy.retain(|key| key.class != 3);
        let value = truth_fn(&f.model.variables, &truthy);
        assert!(matches!(
            decode_assignments(&f.model.variables, &f.catalog, &f.pools, value),
            Err(ScheduleError::InconsistentSolution(_))
        ));
    }

    #[test]
    fn multiple_true_variables_is_inconsistent() {
        let f = fixture();
        let mut truthy = one_per_timepoint();
        truthy.insert(VarKey {
            class: 0,
            teacher_pick: 1,
            room_pick: 1,
            day: 1,
            slot: 1,
        });
        let value = truth_fn(&f.model.variables, &truthy);
        assert!(matches!(
            decode_assignments(&f.model.variables, &f.catalog, &f.pools, value),
            Err(ScheduleError::InconsistentSolution(_))
        ));
    }

    #[test]
    fn grids_are_filled_from_assignments() {
        let f = fixture();
        let value = truth_fn(&f.model.variables, &one_per_timepoint());
        let assignments =
            decode_assignments(&f.model.variables, &f.catalog, &f.pools, value).unwrap();
        let divisions = build_grids(&f.config, &f.catalog, &assignments).unwrap();

        assert_eq!(divisions.len(), 1);
        let grid = &divisions[0].grid;
        assert!(grid.iter().flatten().all(Option::is_some));
        // classes 0 and 1 are both S1 repeats, 2 and 3 are S2 repeats
        assert_eq!(grid[0][0].as_ref().unwrap().subject, "S1");
        assert_eq!(grid[1][0].as_ref().unwrap().subject, "S2");
    }

    #[test]
    fn doubly_occupied_cell_is_inconsistent() {
        let f = fixture();
        let value = truth_fn(&f.model.variables, &one_per_timepoint());
        let mut assignments =
            decode_assignments(&f.model.variables, &f.catalog, &f.pools, value).unwrap();
        assignments[1].day = assignments[0].day;
        assignments[1].slot = assignments[0].slot;
        assert!(matches!(
            build_grids(&f.config, &f.catalog, &assignments),
            Err(ScheduleError::InconsistentSolution(_))
        ));
    }
}
