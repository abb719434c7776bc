pub mod gateway;
pub mod policy;
