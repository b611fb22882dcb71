//! # Shop Security
//! 
//! Security utilities: JWT, password hashing, upload inspection, text sanitising.

pub mod jwt;
pub mod password;
pub mod upload;
pub mod sanitize;

pub use jwt::{Claims, JwtError, JwtService};
pub use password::{PasswordError, PasswordService};
pub use upload::{inspect_image, InspectedImage, UploadError};
pub use sanitize::sanitize_text;
