#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("8VDB3xR9wrBMjGHQmFE4yu2aqpL6HoBAes6cC873RK7W");

#[program]
pub mod user_registry {
    use super::*;

    /// Register a new user record at the address derived from `id`
    pub fn create_user(ctx: Context<CreateUser>, id: u32) -> Result<()> {
        instructions::create_user(ctx, id)
    }

    /// Move points from the caller's record to another record
    pub fn transfer_points(
        ctx: Context<TransferPoints>,
        id_sender: u32,
        id_receiver: u32,
        amount: u16,
    ) -> Result<()> {
        instructions::transfer_points(ctx, id_sender, id_receiver, amount)
    }

    /// Change the display name on the caller's record
    pub fn update_name(ctx: Context<UpdateName>, id: u32, name: String) -> Result<()> {
        instructions::update_name(ctx, id, name)
    }

    /// Close a user record and refund its rent to the owner
    pub fn remove_user(ctx: Context<RemoveUser>, id: u32) -> Result<()> {
        instructions::remove_user(ctx, id)
    }
}
