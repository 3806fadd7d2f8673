use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    // ===== Permission Errors =====
    #[msg("Unauthorized: caller is not the record owner")]
    Unauthorized,

    #[msg("Sender and receiver resolve to the same record")]
    DuplicateAccount,

    // ===== Balance Errors =====
    #[msg("Not enough points to cover the transfer")]
    NotEnoughPoints,

    #[msg("Points balance would overflow")]
    IntegerOverflow,

    // ===== Parameter Errors =====
    #[msg("Name exceeds the maximum length")]
    NameTooLong,
}
