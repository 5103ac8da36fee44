mod freight_forwarder;

pub use freight_forwarder::FreightForwarder;
