use anchor_lang::prelude::*;

// =============================================================================
// USER LIFECYCLE EVENTS
// =============================================================================

/// Event emitted when a new user record is created
#[event]
pub struct UserCreated {
    /// User record address
    pub user: Pubkey,
    /// Record owner (the creating signer)
    pub owner: Pubkey,
    /// Numeric identifier the record address was derived from
    pub id: u32,
}

/// Event emitted when a user record is renamed
#[event]
pub struct UserRenamed {
    /// User record address
    pub user: Pubkey,
    /// Record owner
    pub owner: Pubkey,
    /// Numeric identifier
    pub id: u32,
    /// New display name
    pub name: String,
}

/// Event emitted when a user record is closed
#[event]
pub struct UserRemoved {
    /// User record address
    pub user: Pubkey,
    /// Record owner receiving the refund
    pub owner: Pubkey,
    /// Numeric identifier
    pub id: u32,
    /// Lamports returned to the owner by closing the record
    pub refund: u64,
}

// =============================================================================
// BALANCE EVENTS
// =============================================================================

/// Event emitted when points move between two records
#[event]
pub struct PointsTransferred {
    /// Record debited
    pub sender: Pubkey,
    /// Record credited
    pub receiver: Pubkey,
    /// Points moved
    pub amount: u16,
    /// Sender balance after the debit
    pub sender_points: u16,
    /// Receiver balance after the credit
    pub receiver_points: u16,
}
