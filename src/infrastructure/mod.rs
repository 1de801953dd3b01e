pub mod cart;
pub mod catalog;
pub mod models;
pub mod order_number;
pub mod order_repo;
