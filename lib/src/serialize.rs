//! Consensus wire encoding.
//!
//! Values relayed between nodes use the bincode fixed-int layout:
//! integers are written at full width, little endian, two's complement.
//! An `i64` therefore always takes exactly 8 bytes.

use std::io::{Read, Write};

use crate::error::{CoinError, Result};

pub trait Encodable
where
    Self: Sized,
{
    fn encode<O: Write>(&self, writer: O) -> Result<()>;
    fn decode<I: Read>(reader: I) -> Result<Self>;

    fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.encode(&mut bytes)?;

        Ok(bytes)
    }

    // decode a value that must span the whole buffer
    fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut rest = data;
        let value = Self::decode(&mut rest)?;
        if !rest.is_empty() {
            return Err(CoinError::TrailingBytes {
                extra: rest.len(),
            });
        }

        Ok(value)
    }
}
