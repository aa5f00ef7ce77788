//! Database repositories
//!
//! Provides the data access layer. Repositories return `Option`/`bool`
//! for absent ids rather than erroring; only unexpected store failures
//! propagate as errors.

pub mod diet;
pub mod meal;
pub mod patient;
pub mod product;
pub mod product_category;
pub mod user;

pub use diet::{DietGraph, DietRecord, DietRepository, DietWithPatient};
pub use meal::{MealInput, MealRecord, MealRepository};
pub use patient::{PatientField, PatientInput, PatientRecord, PatientRepository, WeightRecord};
pub use product::{ProductInput, ProductRecord, ProductRepository, ProductWithCategoryRecord};
pub use product_category::{ProductCategoryRecord, ProductCategoryRepository};
pub use user::{UserRecord, UserRepository};
