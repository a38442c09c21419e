//! Ports — interfaces implemented by infrastructure adapters

pub mod completion_gateway;
