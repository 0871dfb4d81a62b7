//! Amounts, the consensus money range, the staged issuance schedule
//! and fee rates.

pub mod amount;
pub mod error;
pub mod fee_rate;
pub mod issuance;
pub mod serialize;

pub use amount::{
    format_amount, money_range, Amount, CENT, COIN, CURRENCY_UNIT,
    MAX_MONEY,
};
pub use error::{CoinError, Result};
pub use fee_rate::FeeRate;
pub use issuance::{
    IssueStage, ISSUE_BLOCK, ISSUE_PRICE, MAX_STAGES, STAGES,
};
pub use serialize::Encodable;
