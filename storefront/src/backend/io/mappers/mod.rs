pub mod order_mapper;
