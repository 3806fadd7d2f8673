use anchor_lang::prelude::*;

use crate::constants::USER_SEED;
use crate::events::UserCreated;
use crate::state::User;

#[derive(Accounts)]
#[instruction(id: u32)]
pub struct CreateUser<'info> {
    /// Signer funding the record; becomes its owner
    #[account(mut)]
    pub owner: Signer<'info>,

    /// User record, allocated at the address derived from `id`
    #[account(
        init,
        payer = owner,
        space = User::SIZE,
        seeds = [USER_SEED, id.to_le_bytes().as_ref()],
        bump,
    )]
    pub user: Account<'info, User>,

    pub system_program: Program<'info, System>,
}

pub fn create_user(ctx: Context<CreateUser>, id: u32) -> Result<()> {
    let user = &mut ctx.accounts.user;

    user.id = id;
    user.owner = ctx.accounts.owner.key();
    user.name = String::new();
    user.points = 0;
    user.bump = ctx.bumps.user;

    emit!(UserCreated {
        user: user.key(),
        owner: user.owner,
        id,
    });

    msg!("User {} registered by {}", id, user.owner);

    Ok(())
}
