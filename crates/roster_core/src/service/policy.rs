//! Pluggable identity and department-assignment policies.
//!
//! Random department ids are not checked against existing rows. With 9×10^8
//! possible values a collision is unlikely but possible, and a colliding
//! `save` overwrites the department already holding that id. Swap in
//! `SequentialDepartmentIds` where that matters.

use crate::model::department::DepartmentId;
use rand::Rng;
use std::sync::atomic::{AtomicI64, Ordering};

pub const ENGINEERING: &str = "Engineering";
pub const HUMAN_RESOURCES: &str = "Human Resources";
pub const ACCOUNTING: &str = "Accounting";
pub const COMPUTER_SCIENCE: &str = "Computer Science";

/// Closed set the fallback assignment picks from.
pub const FALLBACK_DEPARTMENTS: [&str; 4] =
    [ENGINEERING, HUMAN_RESOURCES, ACCOUNTING, COMPUTER_SCIENCE];

const RANDOM_ID_BASE: DepartmentId = 1_000_000_000;
const RANDOM_ID_SPAN: DepartmentId = 900_000_000;

/// Source of ids for new departments.
pub trait DepartmentIdGenerator {
    fn next_id(&self) -> DepartmentId;
}

/// Uniform ids in `1_000_000_000..1_900_000_000`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDepartmentIds;

impl DepartmentIdGenerator for RandomDepartmentIds {
    fn next_id(&self) -> DepartmentId {
        RANDOM_ID_BASE + rand::thread_rng().gen_range(0..RANDOM_ID_SPAN)
    }
}

/// Monotonic ids starting at a caller-chosen value.
#[derive(Debug)]
pub struct SequentialDepartmentIds {
    next: AtomicI64,
}

impl SequentialDepartmentIds {
    pub fn starting_at(first: DepartmentId) -> Self {
        Self {
            next: AtomicI64::new(first),
        }
    }
}

impl DepartmentIdGenerator for SequentialDepartmentIds {
    fn next_id(&self) -> DepartmentId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Chooses the department name for employees created without a resolvable
/// department.
pub trait DepartmentPicker {
    fn pick(&self) -> &'static str;
}

/// Uniform choice over `FALLBACK_DEPARTMENTS`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomDepartmentPicker;

impl DepartmentPicker for RandomDepartmentPicker {
    fn pick(&self) -> &'static str {
        pick_fallback_department(&mut rand::thread_rng())
    }
}

impl<F> DepartmentPicker for F
where
    F: Fn() -> &'static str,
{
    fn pick(&self) -> &'static str {
        self()
    }
}

pub fn pick_fallback_department(rng: &mut impl Rng) -> &'static str {
    FALLBACK_DEPARTMENTS[rng.gen_range(0..FALLBACK_DEPARTMENTS.len())]
}

/// Code for a department created by fallback assignment:
/// `"Human Resources"` → `"HUMAN_RESOURCES"`.
pub fn fallback_department_code(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::{
        fallback_department_code, pick_fallback_department, DepartmentIdGenerator,
        RandomDepartmentIds, SequentialDepartmentIds, FALLBACK_DEPARTMENTS,
    };
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn random_ids_stay_in_the_large_range() {
        let ids = RandomDepartmentIds;
        for _ in 0..1_000 {
            let id = ids.next_id();
            assert!((1_000_000_000..1_900_000_000).contains(&id));
        }
    }

    #[test]
    fn sequential_ids_increment() {
        let ids = SequentialDepartmentIds::starting_at(10);
        assert_eq!(ids.next_id(), 10);
        assert_eq!(ids.next_id(), 11);
    }

    #[test]
    fn picker_covers_the_whole_closed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let picked: HashSet<_> = (0..200).map(|_| pick_fallback_department(&mut rng)).collect();
        assert_eq!(picked.len(), FALLBACK_DEPARTMENTS.len());
        assert!(picked.iter().all(|name| FALLBACK_DEPARTMENTS.contains(name)));
    }

    #[test]
    fn fallback_codes_are_upper_snake_case() {
        assert_eq!(fallback_department_code("Human Resources"), "HUMAN_RESOURCES");
        assert_eq!(fallback_department_code("Accounting"), "ACCOUNTING");
    }
}
