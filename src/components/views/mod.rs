mod home;
mod not_found;

pub use home::*;
pub use not_found::*;
