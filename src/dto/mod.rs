pub mod drone_dto;
pub mod order_dto;
