mod freight_forwarder_handler;

pub use freight_forwarder_handler::*;
