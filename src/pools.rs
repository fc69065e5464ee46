use crate::config::TimetableConfig;
use crate::data::{Catalog, RoomId, TeacherId};
use crate::error::ScheduleError;
use log::info;
use rand::Rng;

/// The sampled eligibility pools for one run. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibilityPools {
    /// Candidate teachers per class instance, indexed by `ClassId`.
    pub class_teachers: Vec<Vec<TeacherId>>,
    /// Candidate rooms per division group, shared by all of the group's
    /// class instances, indexed by `GroupId`.
    pub group_rooms: Vec<Vec<RoomId>>,
}

/// Samples the eligibility pools from an injected random source.
///
/// All teacher sets are drawn first (in catalog order), then all room sets
/// (in group order). The enumeration order is part of the reproducibility
/// contract: it fixes how the shared random stream is consumed, so the same
/// seed always yields the same pools.
pub fn generate<R: Rng>(
    config: &TimetableConfig,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<EligibilityPools, ScheduleError> {
    if config.teachers_per_class > config.teachers.len() {
        return Err(ScheduleError::PoolExhausted {
            kind: "teacher",
            requested: config.teachers_per_class,
            available: config.teachers.len(),
        });
    }
    if config.rooms_per_division > config.rooms.len() {
        return Err(ScheduleError::PoolExhausted {
            kind: "room",
            requested: config.rooms_per_division,
            available: config.rooms.len(),
        });
    }

    let class_teachers: Vec<Vec<TeacherId>> = catalog
        .classes
        .iter()
        .map(|_| sample_ids(rng, config.teachers.len(), config.teachers_per_class))
        .collect();
    let group_rooms: Vec<Vec<RoomId>> = catalog
        .groups
        .iter()
        .map(|_| sample_ids(rng, config.rooms.len(), config.rooms_per_division))
        .collect();

    info!(
        "Sampled {} candidate teachers per class and {} candidate rooms per division group",
        config.teachers_per_class, config.rooms_per_division
    );
    Ok(EligibilityPools {
        class_teachers,
        group_rooms,
    })
}

// Without-replacement sample of `amount` indices out of `0..len`, in
// selection order. Callers have already checked `amount <= len`.
fn sample_ids<R: Rng>(rng: &mut R, len: usize, amount: usize) -> Vec<usize> {
    rand::seq::index::sample(rng, len, amount).into_iter().collect()
}
