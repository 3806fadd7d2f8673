use anchor_lang::prelude::*;

use crate::constants::USER_SEED;
use crate::errors::RegistryError;
use crate::events::UserRemoved;
use crate::state::User;

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct RemoveUser<'info> {
    /// Record owner; must sign and receives the rent refund
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Record being closed; lamports return to the owner and the data is
    /// zeroed so the address cannot be re-read as a live record
    #[account(
        mut,
        close = owner,
        seeds = [USER_SEED, id.to_le_bytes().as_ref()],
        bump = user.bump,
        constraint = user.is_owner(&owner.key()) @ RegistryError::Unauthorized,
    )]
    pub user: Account<'info, User>,
}

pub fn remove_user(ctx: Context<RemoveUser>, id: u32) -> Result<()> {
    let user = &ctx.accounts.user;
    let refund = user.to_account_info().lamports();

    emit!(UserRemoved {
        user: user.key(),
        owner: user.owner,
        id,
        refund,
    });

    msg!(
        "User {} removed, {} lamports refunded to {}",
        id,
        refund,
        user.owner
    );

    Ok(())
}
