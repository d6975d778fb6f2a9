//! Business logic services for the cafe stock tracker

pub mod auth;
pub mod catalog;
pub mod inventory;
pub mod purchasing;
pub mod supplier;
pub mod user;

pub use auth::AuthService;
pub use catalog::CatalogService;
pub use inventory::InventoryService;
pub use purchasing::PurchasingService;
pub use supplier::SupplierService;
pub use user::UserService;
