//! Business services
//!
//! Thin pass-throughs between routes and repositories: they translate
//! records to DTOs via the mapper and absent ids to `NotFound`, and carry
//! no other logic.

pub mod auth;
pub mod diet;
pub mod meal;
pub mod patient;
pub mod product;
pub mod product_category;

pub use auth::AuthService;
pub use diet::DietService;
pub use meal::MealService;
pub use patient::PatientService;
pub use product::ProductService;
pub use product_category::ProductCategoryService;
