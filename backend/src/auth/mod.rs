//! Authentication building blocks: token issuance/validation, password
//! hashing, and request extraction.

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, TokenService};
pub use middleware::AuthUser;
pub use password::PasswordService;
