pub mod aggregate;

pub use aggregate::{ChangePasswordDto, UserProfile};
