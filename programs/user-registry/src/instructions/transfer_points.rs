use anchor_lang::prelude::*;

use crate::constants::USER_SEED;
use crate::errors::RegistryError;
use crate::events::PointsTransferred;
use crate::state::User;

#[derive(Accounts)]
#[instruction(id_sender: u32, id_receiver: u32)]
pub struct TransferPoints<'info> {
    /// Owner of the sender record; must sign the debit
    pub owner: Signer<'info>,

    /// Record being debited
    #[account(
        mut,
        seeds = [USER_SEED, id_sender.to_le_bytes().as_ref()],
        bump = sender.bump,
        constraint = sender.is_owner(&owner.key()) @ RegistryError::Unauthorized,
    )]
    pub sender: Account<'info, User>,

    /// Record being credited
    #[account(
        mut,
        seeds = [USER_SEED, id_receiver.to_le_bytes().as_ref()],
        bump = receiver.bump,
        constraint = receiver.key() != sender.key() @ RegistryError::DuplicateAccount,
    )]
    pub receiver: Account<'info, User>,
}

pub fn transfer_points(
    ctx: Context<TransferPoints>,
    id_sender: u32,
    id_receiver: u32,
    amount: u16,
) -> Result<()> {
    let sender = &mut ctx.accounts.sender;
    let receiver = &mut ctx.accounts.receiver;

    // Debit first; if the credit fails the whole transaction aborts and
    // neither balance reaches the store.
    sender.debit(amount)?;
    receiver.credit(amount)?;

    emit!(PointsTransferred {
        sender: sender.key(),
        receiver: receiver.key(),
        amount,
        sender_points: sender.points,
        receiver_points: receiver.points,
    });

    msg!(
        "Transferred {} points from user {} to user {}",
        amount,
        id_sender,
        id_receiver
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u32, points: u16) -> User {
        User {
            id,
            owner: Pubkey::new_unique(),
            name: String::new(),
            points,
            bump: 255,
        }
    }

    #[test]
    fn moves_points_between_records() {
        let mut sender = user(1, 1000);
        let mut receiver = user(2, 400);

        sender.debit(250).unwrap();
        receiver.credit(250).unwrap();

        assert_eq!(sender.points, 750);
        assert_eq!(receiver.points, 650);
    }

    #[test]
    fn failed_credit_leaves_receiver_untouched() {
        let mut sender = user(1, 1000);
        let mut receiver = user(2, 65000);

        sender.debit(1000).unwrap();
        assert!(receiver.credit(1000).is_err());

        // The receiver never changed; the sender debit is discarded with the
        // transaction when the handler propagates the error.
        assert_eq!(receiver.points, 65000);
    }

    #[test]
    fn zero_amount_is_a_no_op_transfer() {
        let mut sender = user(1, 10);
        let mut receiver = user(2, 20);

        sender.debit(0).unwrap();
        receiver.credit(0).unwrap();

        assert_eq!(sender.points, 10);
        assert_eq!(receiver.points, 20);
    }
}
