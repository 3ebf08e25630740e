//! Dashboard backend API: endpoint client and wire types.

pub mod backend;
pub mod wire;

pub use backend::{
    ApiReply, BackendClient, CHECK_CREDENTIALS_PATH, DELETE_CREDENTIALS_PATH, HEALTH_PATH,
    SAVE_CREDENTIALS_PATH, VALIDATE_CREDENTIALS_PATH,
};
