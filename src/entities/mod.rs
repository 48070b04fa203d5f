pub mod order;
pub mod seed;
pub mod validation;
