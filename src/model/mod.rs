pub mod cart;
pub mod drone;
pub mod order;
pub mod review;
pub mod user;
pub mod write_result;
