use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::domain::error::DomainError;

const PREFIX: &str = "Epoch{";
const SUFFIX: &str = "}";
const PARTITION_ID_FIELD: &str = "partitionId=";
const EPOCH_FIELD: &str = "epoch=";

/// A partition paired with its leader epoch, as carried by offsets-for-leader-epoch requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Epoch {
    partition_id: i32,
    epoch: i32,
}

impl Epoch {
    pub const fn new(partition_id: i32, epoch: i32) -> Self {
        Self {
            partition_id,
            epoch,
        }
    }

    pub fn partition_id(&self) -> i32 {
        self.partition_id
    }

    pub fn epoch(&self) -> i32 {
        self.epoch
    }

    /// `31 * partition_id + epoch`, wrapping on overflow.
    pub fn hash_code(&self) -> i32 {
        self.partition_id.wrapping_mul(31).wrapping_add(self.epoch)
    }
}

impl Hash for Epoch {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Epoch{{partitionId={}, epoch={}}}",
            self.partition_id, self.epoch
        )
    }
}

impl FromStr for Epoch {
    type Err = DomainError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_suffix(SUFFIX))
            .ok_or_else(|| DomainError::InvalidEpoch(s.to_string()))?;

        let (partition_id, epoch) = body
            .split_once(", ")
            .ok_or_else(|| DomainError::InvalidEpoch(s.to_string()))?;

        Ok(Self {
            partition_id: parse_field(partition_id, PARTITION_ID_FIELD)?,
            epoch: parse_field(epoch, EPOCH_FIELD)?,
        })
    }
}

fn parse_field(field: &str, name: &str) -> std::result::Result<i32, DomainError> {
    field
        .strip_prefix(name)
        .ok_or_else(|| DomainError::InvalidEpoch(format!("missing field {}", name)))?
        .parse::<i32>()
        .map_err(|e| DomainError::InvalidEpoch(format!("{}: {}", field, e)))
}

impl From<(i32, i32)> for Epoch {
    fn from((partition_id, epoch): (i32, i32)) -> Self {
        Self::new(partition_id, epoch)
    }
}

impl From<Epoch> for (i32, i32) {
    fn from(epoch: Epoch) -> Self {
        (epoch.partition_id, epoch.epoch)
    }
}
