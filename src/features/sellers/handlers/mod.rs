pub mod sign_up_handler;

pub use sign_up_handler::{__path_sign_up, sign_up};
