mod freight_forwarder_service;

pub use freight_forwarder_service::FreightForwarderService;
