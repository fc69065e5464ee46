use serde::{Deserialize, Serialize};

// Type aliases for clarity; all ids are dense indices into the
// corresponding configuration or catalog lists.
pub type SubjectId = usize;
pub type TeacherId = usize;
pub type RoomId = usize;
pub type GroupId = usize;
pub type ClassId = usize;

/// One (department, semester, division) triple. Groups are enumerated
/// dept x sem x div in configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionGroup {
    pub department: String,
    pub semester: String,
    pub division: String,
}

/// One concrete weekly occurrence of a subject for a division group.
/// `repeat` distinguishes multiple occurrences of the same subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInstance {
    pub group: GroupId,
    pub subject: SubjectId,
    pub repeat: usize,
}

/// The expanded catalog: every group owns exactly `days * slots_per_day`
/// class instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub groups: Vec<DivisionGroup>,
    pub classes: Vec<ClassInstance>,
}

/// Key of one binary decision variable. `teacher_pick` and `room_pick` are
/// positions in the class's eligibility pools, not global ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarKey {
    pub class: ClassId,
    pub teacher_pick: usize,
    pub room_pick: usize,
    pub day: usize,
    pub slot: usize,
}

// Composite accumulator keys for the clash and completeness constraint
// families. One entry per key collects every variable that would occupy
// the keyed resource at the keyed timepoint.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupSlotKey {
    pub group: GroupId,
    pub day: usize,
    pub slot: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TeacherSlotKey {
    pub teacher: TeacherId,
    pub day: usize,
    pub slot: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomSlotKey {
    pub room: RoomId,
    pub day: usize,
    pub slot: usize,
}

/// One decoded solution row: the unique (teacher, room, day, slot) the engine
/// chose for a class instance. Written once by the decoder, immutable after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassAssignment {
    pub class: ClassId,
    pub teacher: TeacherId,
    pub room: RoomId,
    pub day: usize,
    pub slot: usize,
}

/// A filled grid cell with names resolved back from ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledClass {
    pub subject: String,
    pub teacher: String,
    pub room: String,
}

/// The weekly grid for one division group, indexed `[day][slot]`.
/// Empty cells cannot occur in a consistent solution; the renderer still
/// prints a marker for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionTimetable {
    pub department: String,
    pub semester: String,
    pub division: String,
    pub grid: Vec<Vec<Option<ScheduledClass>>>,
}

/// The solved artifact: raw assignments plus one grid per division group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    pub assignments: Vec<ClassAssignment>,
    pub divisions: Vec<DivisionTimetable>,
}
