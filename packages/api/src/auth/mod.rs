//! Credential hashing and session-bound authentication state.

mod password;
mod session;

pub use password::{hash_password, verify_password};
pub use session::{
    current_user, sign_in, sign_out, CurrentUser, SESSION_USER_ID_KEY, SESSION_USER_ROLE_KEY,
};
