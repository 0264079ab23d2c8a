pub mod cache_operations;
pub mod constants;
pub mod data_backend;
pub mod data_types;
pub mod errors;
pub mod meal_printer;
pub mod shared_main;
