// BookLearn - Core Library
//
// Request/response schemas shared by the API client and its callers.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
