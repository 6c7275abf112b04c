//! Compact set of group memberships.

use serde::{Deserialize, Serialize};

use crate::enums::Group;

/// Bitset over [`Group`]. An entity's membership decides friend or foe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupSet(u8);

impl GroupSet {
    pub const EMPTY: GroupSet = GroupSet(0);

    pub fn of(groups: &[Group]) -> Self {
        let mut set = Self::EMPTY;
        for &group in groups {
            set.insert(group);
        }
        set
    }

    pub fn insert(&mut self, group: Group) {
        self.0 |= group.bit();
    }

    pub fn remove(&mut self, group: Group) {
        self.0 &= !group.bit();
    }

    pub fn contains(&self, group: Group) -> bool {
        self.0 & group.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// No group in common.
    pub fn is_disjoint(&self, other: &GroupSet) -> bool {
        self.0 & other.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Group> + '_ {
        Group::ALL.into_iter().filter(|g| self.contains(*g))
    }
}
