use anchor_lang::prelude::*;

use crate::constants::MAX_NAME_LEN;

#[account]
pub struct User {
    /// Numeric identifier; seed of the record's derived address
    pub id: u32,

    /// The only identity allowed to mutate or close this record
    pub owner: Pubkey,

    /// Display name, at most MAX_NAME_LEN bytes
    pub name: String,

    /// Points balance
    pub points: u16,

    /// bump seed
    pub bump: u8,
}

impl User {
    pub const SIZE: usize = 8 + // discriminator
        4 + // id
        32 + // owner
        4 + MAX_NAME_LEN + // name (length prefix + bytes)
        2 + // points
        1; // bump

    /// Whether `key` is the record's registered owner
    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    /// Add points to the balance, rejecting any result above u16::MAX
    pub fn credit(&mut self, amount: u16) -> Result<()> {
        self.points = self
            .points
            .checked_add(amount)
            .ok_or(error!(crate::errors::RegistryError::IntegerOverflow))?;

        Ok(())
    }

    /// Remove points from the balance, rejecting any result below zero
    pub fn debit(&mut self, amount: u16) -> Result<()> {
        self.points = self
            .points
            .checked_sub(amount)
            .ok_or(error!(crate::errors::RegistryError::NotEnoughPoints))?;

        Ok(())
    }
}
