//! Price Feed Contract
//!
//! Read adapter over the external reference-currency price source used by
//! the funding ledger. The ledger only ever consumes `latest_round`; the
//! write side exists for the substitute feed deployed in local
//! environments, where a trusted operator publishes answers.
//!
//! The read contract is pure: it never mutates state, and it fails closed
//! (`OracleUnavailable`) rather than reporting a zero price when the feed
//! is inactive or its data is unusable. Answer age is surfaced through
//! `is_stale` but does not gate reads; consumers see the latest round the
//! feed has, however old.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use fundme_common::{
    check,
    constants::feed::{DEFAULT_DECIMALS, INITIAL_ANSWER, MAX_ANSWER_AGE_BLOCKS},
    errors::{FundMeError, FundMeResult},
    events::{EventLog, FundMeEvent},
    types::{Address, FeedAction, PriceQuote},
};

// ============ Feed State ============

/// Price feed contract state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct FeedState {
    /// Latest published answer, scaled by `10^decimals`
    pub answer: i64,
    /// Decimal precision of the answer; fixed per feed, reported to readers
    pub decimals: u8,
    /// Block of the latest answer
    pub updated_at_block: u64,
    /// Authorized publisher
    pub operator: Address,
    /// Admin (can change the operator)
    pub admin: Address,
    /// Whether the feed is serving data
    pub is_active: bool,
}

impl FeedState {
    /// Create a new feed with its initial round
    pub fn new(
        admin: Address,
        operator: Address,
        decimals: u8,
        initial_answer: i64,
        block_height: u64,
    ) -> Self {
        Self {
            answer: initial_answer,
            decimals,
            updated_at_block: block_height,
            operator,
            admin,
            is_active: true,
        }
    }

    /// Substitute feed for local environments, preloaded with the default
    /// precision and initial answer
    pub fn mock(admin: Address, operator: Address) -> Self {
        Self::new(admin, operator, DEFAULT_DECIMALS, INITIAL_ANSWER, 0)
    }

    /// Whether the latest answer is older than the freshness window
    pub fn is_stale(&self, current_block: u64) -> bool {
        current_block.saturating_sub(self.updated_at_block) > MAX_ANSWER_AGE_BLOCKS
    }
}

// ============ Read Contract ============

/// Latest round of the feed.
///
/// Side-effect-free. The returned quote carries the feed's own decimal
/// precision; downstream conversion must use it rather than assuming one.
///
/// # Errors
/// `OracleUnavailable` if the feed is inactive or reports a non-positive
/// answer. Callers must abort their enclosing operation on this error, not
/// substitute a zero price.
pub fn latest_round(state: &FeedState) -> FundMeResult<PriceQuote> {
    if !state.is_active {
        return Err(FundMeError::OracleUnavailable {
            reason: "feed inactive",
        });
    }
    if state.answer <= 0 {
        return Err(FundMeError::OracleUnavailable {
            reason: "non-positive answer",
        });
    }
    Ok(PriceQuote::new(state.answer, state.decimals))
}

// ============ Validation Context ============

/// Context for validating feed write operations
pub struct FeedContext {
    /// Current feed state
    pub state: FeedState,
    /// Updated feed state
    pub new_state: FeedState,
    /// Signer address
    pub signer: Address,
    /// Current block height
    pub block_height: u64,
    /// Event log
    pub events: EventLog,
}

// ============ Validation Functions ============

/// Main validation entry point for the write side
pub fn validate(ctx: &mut FeedContext, action: &FeedAction) -> FundMeResult<()> {
    match action {
        FeedAction::Initialize {
            admin,
            operator,
            decimals,
            initial_answer,
        } => validate_initialize(ctx, admin, operator, *decimals, *initial_answer),
        FeedAction::UpdateAnswer { answer } => validate_update_answer(ctx, *answer),
        FeedAction::SetOperator { operator } => validate_set_operator(ctx, operator),
    }
}

/// Validate first-time creation of the feed
fn validate_initialize(
    ctx: &mut FeedContext,
    admin: &Address,
    operator: &Address,
    decimals: u8,
    initial_answer: i64,
) -> FundMeResult<()> {
    check!(initial_answer > 0, FundMeError::ZeroAmount);

    let out = &ctx.new_state;
    check!(out.admin == *admin, FundMeError::InvalidStateTransition);
    check!(out.operator == *operator, FundMeError::InvalidStateTransition);
    check!(out.decimals == decimals, FundMeError::InvalidStateTransition);
    check!(out.answer == initial_answer, FundMeError::InvalidStateTransition);
    check!(out.is_active, FundMeError::InvalidStateTransition);

    Ok(())
}

/// Validate an answer update
fn validate_update_answer(ctx: &mut FeedContext, new_answer: i64) -> FundMeResult<()> {
    // 1. Only the operator can publish
    if ctx.signer != ctx.state.operator {
        return Err(FundMeError::Unauthorized {
            expected: ctx.state.operator,
            actual: ctx.signer,
        });
    }

    // 2. Feed must be active
    if !ctx.state.is_active {
        return Err(FundMeError::OracleUnavailable {
            reason: "feed inactive",
        });
    }

    // 3. Answer must be positive
    check!(new_answer > 0, FundMeError::ZeroAmount);

    // 4. Precision is fixed for the lifetime of the feed
    check!(
        ctx.new_state.decimals == ctx.state.decimals,
        FundMeError::InvalidStateTransition
    );

    // 5. Verify new state
    check!(
        ctx.new_state.answer == new_answer,
        FundMeError::InvalidStateTransition
    );
    check!(
        ctx.new_state.updated_at_block == ctx.block_height,
        FundMeError::InvalidStateTransition
    );

    // 6. Emit event
    let old_answer = ctx.state.answer;
    ctx.events.emit(FundMeEvent::AnswerUpdated {
        old_answer,
        new_answer,
        block_height: ctx.block_height,
    });

    Ok(())
}

/// Validate an operator change
fn validate_set_operator(ctx: &mut FeedContext, new_operator: &Address) -> FundMeResult<()> {
    // 1. Only the admin can change the operator
    if ctx.signer != ctx.state.admin {
        return Err(FundMeError::Unauthorized {
            expected: ctx.state.admin,
            actual: ctx.signer,
        });
    }

    // 2. New operator must be different
    check!(
        *new_operator != ctx.state.operator,
        FundMeError::InvalidStateTransition
    );

    // 3. Verify new state
    check!(
        ctx.new_state.operator == *new_operator,
        FundMeError::InvalidStateTransition
    );

    // 4. Emit event
    ctx.events.emit(FundMeEvent::FeedOperatorChanged {
        old_operator: ctx.state.operator,
        new_operator: *new_operator,
        block_height: ctx.block_height,
    });

    Ok(())
}

// ============ Tests ============
