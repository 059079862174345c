mod session;

pub use session::{ChatSession, WELCOME_MESSAGE};
