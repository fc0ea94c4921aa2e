mod credential_handler;

pub use credential_handler::{__path_verify_credential, verify_credential};
