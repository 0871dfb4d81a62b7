//! Staged issuance schedule.
//!
//! Frozen consensus data: each populated slot pairs a cumulative block
//! height threshold with the unit price charged once that height is
//! reached. Interpreting the table against a height is up to the caller.

/// Capacity of the schedule tables
pub const MAX_STAGES: usize = 10;
/// Number of populated slots
pub const STAGES: usize = 7;

pub const ISSUE_BLOCK: [i32; MAX_STAGES] = [
    1000, 739125, 985500, 1231875, 1478250, 9358687, 9358688, 0, 0,
    0,
];
pub const ISSUE_PRICE: [i32; MAX_STAGES] =
    [22000, 0, 2, 4, 6, 8, 4, 0, 0, 0];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IssueStage {
    /// block height threshold
    pub block: i32,
    /// a price of 0 means the stage charges nothing
    pub price: i32,
}

// populated stage at `index`, if any
pub fn stage(index: usize) -> Option<IssueStage> {
    if index >= STAGES {
        return None;
    }

    Some(IssueStage {
        block: ISSUE_BLOCK[index],
        price: ISSUE_PRICE[index],
    })
}

pub fn stages() -> impl Iterator<Item = IssueStage> {
    ISSUE_BLOCK[..STAGES]
        .iter()
        .zip(&ISSUE_PRICE[..STAGES])
        .map(|(&block, &price)| IssueStage { block, price })
}
