use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PanelError, PanelResult};

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Host-assigned receive timestamp used to order message deliveries.
///
/// Ordering is lexicographic on `(sec, nsec)`, which matches chronological
/// order because `nsec` is always below one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "ReceiptTimeRepr")]
pub struct ReceiptTime {
    sec: u32,
    nsec: u32,
}

#[derive(Deserialize)]
struct ReceiptTimeRepr {
    sec: u32,
    nsec: u32,
}

impl TryFrom<ReceiptTimeRepr> for ReceiptTime {
    type Error = PanelError;

    fn try_from(repr: ReceiptTimeRepr) -> PanelResult<Self> {
        Self::new(repr.sec, repr.nsec)
    }
}

impl ReceiptTime {
    pub fn new(sec: u32, nsec: u32) -> PanelResult<Self> {
        if nsec >= NANOS_PER_SEC {
            return Err(PanelError::InvalidData(format!(
                "receipt time nsec must be < {NANOS_PER_SEC}, got {nsec}"
            )));
        }
        Ok(Self { sec, nsec })
    }

    #[must_use]
    pub const fn from_secs(sec: u32) -> Self {
        Self { sec, nsec: 0 }
    }

    pub fn from_datetime(time: DateTime<Utc>) -> PanelResult<Self> {
        let sec = u32::try_from(time.timestamp()).map_err(|_| {
            PanelError::InvalidData(format!("receipt time {time} is outside the u32 epoch range"))
        })?;
        Self::new(sec, time.timestamp_subsec_nanos().min(NANOS_PER_SEC - 1))
    }

    #[must_use]
    pub const fn sec(self) -> u32 {
        self.sec
    }

    #[must_use]
    pub const fn nsec(self) -> u32 {
        self.nsec
    }

    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.sec), self.nsec)
    }
}
