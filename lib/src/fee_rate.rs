//! Fee rate in amount units per 1000 bytes.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::io::{Read, Write};
use std::ops::{Add, AddAssign};

use crate::amount::{format_amount, Amount, CURRENCY_UNIT};
use crate::error::Result;
use crate::serialize::Encodable;

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[serde(transparent)]
pub struct FeeRate(Amount);

impl FeeRate {
    pub const ZERO: FeeRate = FeeRate(0);

    pub fn new(per_k: Amount) -> Self {
        FeeRate(per_k)
    }

    /// Rate equivalent to paying `fee_paid` for `bytes` bytes.
    ///
    /// Truncates toward zero. Zero bytes gives a zero rate.
    pub fn from_paid(fee_paid: Amount, bytes: usize) -> Self {
        if bytes == 0 {
            return FeeRate::ZERO;
        }

        // widened so any usize size is accepted
        let per_k = i128::from(fee_paid) * 1000 / bytes as i128;
        FeeRate(per_k as Amount)
    }

    pub fn per_k(&self) -> Amount {
        self.0
    }

    /// Fee for `bytes` bytes, truncated toward zero.
    ///
    /// A nonzero rate over a nonzero size never rounds down to a zero
    /// fee: the result is then one unit with the sign of the rate.
    pub fn fee(&self, bytes: usize) -> Amount {
        let fee =
            (i128::from(self.0) * bytes as i128 / 1000) as Amount;

        if fee == 0 && bytes != 0 {
            return self.0.signum();
        }

        fee
    }

    pub fn fee_per_k(&self) -> Amount {
        self.fee(1000)
    }
}

impl AddAssign for FeeRate {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Add for FeeRate {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl fmt::Display for FeeRate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}/kB", format_amount(self.0), CURRENCY_UNIT)
    }
}

// the rate is the only field on the wire
impl Encodable for FeeRate {
    fn encode<O: Write>(&self, writer: O) -> Result<()> {
        bincode::serialize_into(writer, &self.0)?;
        Ok(())
    }

    fn decode<I: Read>(reader: I) -> Result<Self> {
        let per_k: Amount = bincode::deserialize_from(reader)
            .map_err(|e| {
                tracing::debug!("failed to decode fee rate: {}", e);
                e
            })?;
        tracing::trace!(per_k, "decoded fee rate");

        Ok(FeeRate(per_k))
    }
}
