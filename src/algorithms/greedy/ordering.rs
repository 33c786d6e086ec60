//! Participant ordering and pair selection.

use crate::registry::{PersonIdx, PersonRegistry};

/// Two distinct participants travelling together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub first: PersonIdx,
    pub second: PersonIdx,
}

impl Pair {
    pub fn members(&self) -> [PersonIdx; 2] {
        [self.first, self.second]
    }

    /// Both still need at least two days, so a two-day trip fits.
    pub fn wants_consecutive(&self, registry: &PersonRegistry) -> bool {
        registry.remaining(self.first) >= 2 && registry.remaining(self.second) >= 2
    }
}

/// Outcome of picking the next people to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nobody needs trips any more.
    Satisfied,
    /// Exactly one person still needs trips.
    Lone(PersonIdx),
    /// The two people with the most remaining days.
    Pair(Pair),
}

/// Picks the two neediest participants.
///
/// The sort is stable, so `order` decides between equal remaining counts.
pub fn select_pair(registry: &PersonRegistry, order: &[PersonIdx]) -> Selection {
    let mut needy: Vec<PersonIdx> = order
        .iter()
        .copied()
        .filter(|&p| registry.remaining(p) > 0)
        .collect();
    needy.sort_by(|a, b| registry.remaining(*b).cmp(&registry.remaining(*a)));

    match needy.as_slice() {
        [] => Selection::Satisfied,
        [only] => Selection::Lone(*only),
        [first, second, ..] => Selection::Pair(Pair {
            first: *first,
            second: *second,
        }),
    }
}

/// Reorders `order` by descending target, keeping input order on ties.
pub fn sort_by_target(registry: &PersonRegistry, order: &mut [PersonIdx]) {
    order.sort_by(|a, b| registry.target(*b).cmp(&registry.target(*a)));
}
