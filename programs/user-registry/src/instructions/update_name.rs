use anchor_lang::prelude::*;

use crate::constants::USER_SEED;
use crate::errors::RegistryError;
use crate::events::UserRenamed;
use crate::state::User;
use crate::utils::validate_name;

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct UpdateName<'info> {
    /// Record owner; must sign the rename
    pub owner: Signer<'info>,

    /// Record being renamed
    #[account(
        mut,
        seeds = [USER_SEED, id.to_le_bytes().as_ref()],
        bump = user.bump,
        constraint = user.is_owner(&owner.key()) @ RegistryError::Unauthorized,
    )]
    pub user: Account<'info, User>,
}

pub fn update_name(ctx: Context<UpdateName>, id: u32, name: String) -> Result<()> {
    validate_name(&name)?;

    let user = &mut ctx.accounts.user;
    user.name = name;

    emit!(UserRenamed {
        user: user.key(),
        owner: user.owner,
        id,
        name: user.name.clone(),
    });

    msg!("User {} renamed", id);

    Ok(())
}
