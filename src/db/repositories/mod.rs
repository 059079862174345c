pub mod local_storage;
pub mod profiles;

pub use profiles::PROFILE_KEY;
