use crate::config::TimetableConfig;
use crate::data::{Catalog, GroupSlotKey, RoomSlotKey, TeacherSlotKey, VarKey};
use crate::pools::EligibilityPools;
use good_lp::{Constraint, Expression, ProblemVariables, Variable, constraint, variable};
use log::{info, trace};
use std::collections::HashMap;

/// The encoded problem instance: the variable space plus the four constraint
/// families, ready to hand to the solving engine.
pub struct TimetableModel {
    pub problem: ProblemVariables,
    /// Sparse decision-variable space keyed by the 5-part composite key.
    pub variables: HashMap<VarKey, Variable>,
    pub constraints: Vec<Constraint>,
}

/// Builds the feasibility model.
///
/// One binary variable exists per (class, teacher candidate, room candidate,
/// day, slot) combination; a variable set true means "this class meets at
/// this timepoint with this teacher in this room". Constraint families:
///
/// 1. each class instance is scheduled exactly once;
/// 2. each (group, timepoint) hosts exactly one class — with (1) this is a
///    bijection between a group's classes and its timepoints;
/// 3. each (teacher, timepoint) is used at most once;
/// 4. each (room, timepoint) is used at most once.
pub fn build(
    config: &TimetableConfig,
    catalog: &Catalog,
    pools: &EligibilityPools,
) -> TimetableModel {
    let mut problem = ProblemVariables::new();

    // x_ctrds = 1 iff class c meets with teacher candidate t in room
    //           candidate r on day d at slot s
    let mut keys = Vec::new();
    for (class, instance) in catalog.classes.iter().enumerate() {
        let teacher_count = pools.class_teachers[class].len();
        let room_count = pools.group_rooms[instance.group].len();
        for teacher_pick in 0..teacher_count {
            for room_pick in 0..room_count {
                for day in 0..config.days.len() {
                    for slot in 0..config.slots_per_day {
                        keys.push(VarKey {
                            class,
                            teacher_pick,
                            room_pick,
                            day,
                            slot,
                        });
                    }
                }
            }
        }
    }
    let handles = problem.add_vector(variable().binary(), keys.len());
    trace!(
        "Declared {} decision variables for {} class instances",
        keys.len(),
        catalog.classes.len()
    );

    // single assembly pass: fan every variable out into the per-class,
    // per-(group, timepoint), per-(teacher, timepoint) and
    // per-(room, timepoint) accumulators
    let mut per_class: Vec<Vec<Variable>> = vec![Vec::new(); catalog.classes.len()];
    let mut per_group_slot: HashMap<GroupSlotKey, Vec<Variable>> = HashMap::new();
    let mut per_teacher_slot: HashMap<TeacherSlotKey, Vec<Variable>> = HashMap::new();
    let mut per_room_slot: HashMap<RoomSlotKey, Vec<Variable>> = HashMap::new();
    for (key, var) in keys.iter().zip(handles.iter().copied()) {
        let instance = &catalog.classes[key.class];
        per_class[key.class].push(var);
        per_group_slot
            .entry(GroupSlotKey {
                group: instance.group,
                day: key.day,
                slot: key.slot,
            })
            .or_default()
            .push(var);
        per_teacher_slot
            .entry(TeacherSlotKey {
                teacher: pools.class_teachers[key.class][key.teacher_pick],
                day: key.day,
                slot: key.slot,
            })
            .or_default()
            .push(var);
        per_room_slot
            .entry(RoomSlotKey {
                room: pools.group_rooms[instance.group][key.room_pick],
                day: key.day,
                slot: key.slot,
            })
            .or_default()
            .push(var);
    }

    let mut constraints = Vec::new();

    // 1) each class instance scheduled exactly once
    for vars in &per_class {
        let scheduled_once: Expression = vars.iter().copied().sum();
        constraints.push(constraint!(scheduled_once == 1));
    }

    // 2) each (group, timepoint) hosts exactly one class
    for group in 0..catalog.groups.len() {
        for day in 0..config.days.len() {
            for slot in 0..config.slots_per_day {
                let occupied: Expression = per_group_slot
                    .get(&GroupSlotKey { group, day, slot })
                    .into_iter()
                    .flatten()
                    .copied()
                    .sum();
                constraints.push(constraint!(occupied == 1));
            }
        }
    }

    // 3) no teacher clash: at most one class per (teacher, timepoint)
    for teacher in 0..config.teachers.len() {
        for day in 0..config.days.len() {
            for slot in 0..config.slots_per_day {
                let busy: Expression = per_teacher_slot
                    .get(&TeacherSlotKey { teacher, day, slot })
                    .into_iter()
                    .flatten()
                    .copied()
                    .sum();
                constraints.push(constraint!(busy <= 1));
            }
        }
    }

    // 4) no room clash: at most one class per (room, timepoint)
    for room in 0..config.rooms.len() {
        for day in 0..config.days.len() {
            for slot in 0..config.slots_per_day {
                let occupied: Expression = per_room_slot
                    .get(&RoomSlotKey { room, day, slot })
                    .into_iter()
                    .flatten()
                    .copied()
                    .sum();
                constraints.push(constraint!(occupied <= 1));
            }
        }
    }

    info!(
        "Model has {} variables and {} constraints",
        keys.len(),
        constraints.len()
    );
    TimetableModel {
        problem,
        variables: keys.into_iter().zip(handles).collect(),
        constraints,
    }
}
