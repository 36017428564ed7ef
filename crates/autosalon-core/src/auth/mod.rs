//! Token and password primitives. Both are used as black boxes:
//! HS256 JWTs via `jsonwebtoken`, password hashes via `bcrypt`.

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenIssuer};
pub use password::{hash_password, verify_password};
