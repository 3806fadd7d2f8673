pub mod create_user;
pub mod remove_user;
pub mod transfer_points;
pub mod update_name;

pub use create_user::*;
pub use remove_user::*;
pub use transfer_points::*;
pub use update_name::*;
