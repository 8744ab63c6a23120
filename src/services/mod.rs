pub mod categories;
pub mod companies;
pub mod feedback;
pub mod passwords;
pub mod replies;
pub mod statuses;
pub mod tokens;
pub mod users;

pub use passwords::{HmacPasswordHasher, PasswordHasher};
pub use tokens::TokenService;
