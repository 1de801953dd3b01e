pub mod catalog;
pub mod errors;
pub mod line;
pub mod order;
pub mod ports;
pub mod validation;
