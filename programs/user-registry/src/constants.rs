// ===== Seeds =====
pub const USER_SEED: &[u8] = b"user";

// ===== Record Limits =====
/// Maximum byte length of a user name
pub const MAX_NAME_LEN: usize = 10;
