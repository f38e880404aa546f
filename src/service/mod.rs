pub mod cart_service;
pub mod drone_service;
pub mod order_service;
pub mod review_service;
pub mod user_service;
