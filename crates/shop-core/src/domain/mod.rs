//! # Shop Core - Domain Module
//! 
//! Domain entities for the shopfront.

pub mod user;
pub mod product;
pub mod contact_message;
pub mod identity;

pub use user::{User, UserChanges};
pub use product::{NewProduct, Product, ProductChanges};
pub use contact_message::{ContactMessage, NewContactMessage};
pub use identity::Identity;
