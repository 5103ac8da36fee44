mod freight_forwarder_dto;

pub use freight_forwarder_dto::*;
