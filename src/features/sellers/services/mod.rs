mod sign_up_service;

pub use sign_up_service::{SignUpOutcome, SignUpService};
