pub mod freight_forwarders;
pub mod ratings;
pub mod reviews;
