pub mod cart_router;
pub mod drone_router;
pub mod order_router;
pub mod review_router;
pub mod user_router;
