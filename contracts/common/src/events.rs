//! Protocol Events for FundMe
//!
//! Events are emitted during contract execution and can be indexed
//! off-chain for building UIs, analytics, and notifications.

use crate::types::Address;
use crate::Vec;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Event types for indexing and filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[borsh(use_discriminant = true)]
#[repr(u8)]
pub enum EventType {
    // Ledger Events (0x01 - 0x1F)
    Funded = 0x01,
    LedgerSwept = 0x02,

    // Feed Events (0x60 - 0x7F)
    AnswerUpdated = 0x60,
    FeedOperatorChanged = 0x61,
}

/// Main event enum containing all possible protocol events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub enum FundMeEvent {
    // ============ Ledger Events ============

    /// Emitted when a deposit is admitted
    Funded {
        funder: Address,
        /// Native base units attached to the call
        amount: u128,
        /// Reference-currency value used for the admission check
        usd_value: u128,
        /// Funder's cumulative contribution after this deposit
        total_contribution: u128,
        /// Funder count after this deposit
        funder_count: u64,
        block_height: u64,
    },

    /// Emitted when the owner sweeps the custodied balance
    LedgerSwept {
        owner: Address,
        /// Native base units transferred to the owner
        amount: u128,
        /// Number of funder records cleared
        funders_cleared: u64,
        block_height: u64,
    },

    // ============ Feed Events ============

    /// Emitted when the feed answer is updated
    AnswerUpdated {
        old_answer: i64,
        new_answer: i64,
        block_height: u64,
    },

    /// Emitted when the feed operator changes
    FeedOperatorChanged {
        old_operator: Address,
        new_operator: Address,
        block_height: u64,
    },
}

impl FundMeEvent {
    /// Get the event type for filtering
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Funded { .. } => EventType::Funded,
            Self::LedgerSwept { .. } => EventType::LedgerSwept,
            Self::AnswerUpdated { .. } => EventType::AnswerUpdated,
            Self::FeedOperatorChanged { .. } => EventType::FeedOperatorChanged,
        }
    }

    /// Get the block height when the event occurred
    pub fn block_height(&self) -> u64 {
        match self {
            Self::Funded { block_height, .. } => *block_height,
            Self::LedgerSwept { block_height, .. } => *block_height,
            Self::AnswerUpdated { block_height, .. } => *block_height,
            Self::FeedOperatorChanged { block_height, .. } => *block_height,
        }
    }

    /// Serialize event to bytes for storage/transmission
    pub fn to_bytes(&self) -> Vec<u8> {
        borsh::to_vec(self).unwrap_or_default()
    }

    /// Deserialize event from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        borsh::from_slice(bytes).ok()
    }
}

/// Event log for collecting multiple events during execution
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<FundMeEvent>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Emit an event (add to log)
    pub fn emit(&mut self, event: FundMeEvent) {
        self.events.push(event);
    }

    /// Get all events
    pub fn events(&self) -> &[FundMeEvent] {
        &self.events
    }

    /// Take ownership of all events
    pub fn into_events(self) -> Vec<FundMeEvent> {
        self.events
    }

    /// Filter events by type
    pub fn filter_by_type(&self, event_type: EventType) -> Vec<&FundMeEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Number of events emitted
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no events were emitted
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn funded(n: u8, block_height: u64) -> FundMeEvent {
        FundMeEvent::Funded {
            funder: [n; 32],
            amount: 1_000_000_000_000_000_000,
            usd_value: 2_000_000_000_000_000_000_000,
            total_contribution: 1_000_000_000_000_000_000,
            funder_count: 1,
            block_height,
        }
    }

    #[test]
    fn test_event_round_trip() {
        let event = funded(7, 42);
        let bytes = event.to_bytes();
        let parsed = FundMeEvent::from_bytes(&bytes).unwrap();
        assert_eq!(parsed, event);
        assert_eq!(parsed.event_type(), EventType::Funded);
        assert_eq!(parsed.block_height(), 42);
    }

    #[test]
    fn test_event_log_filtering() {
        let mut log = EventLog::new();
        log.emit(funded(1, 10));
        log.emit(FundMeEvent::LedgerSwept {
            owner: [9; 32],
            amount: 5,
            funders_cleared: 1,
            block_height: 11,
        });
        log.emit(funded(2, 12));

        assert_eq!(log.len(), 3);
        assert_eq!(log.filter_by_type(EventType::Funded).len(), 2);
        assert_eq!(log.filter_by_type(EventType::LedgerSwept).len(), 1);
        assert!(log.filter_by_type(EventType::AnswerUpdated).is_empty());
    }
}
