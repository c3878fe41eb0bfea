mod errors;
mod repository;
mod types;

pub use errors::UserError;
pub use repository::UserRepository;
pub use types::{NewUser, User};
