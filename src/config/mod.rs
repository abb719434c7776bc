//! Configuration modules for the Classgate gateway.
//!
//! Each submodule covers one aspect of configuration, loaded once at process
//! start from environment variables:
//!
//! - [`auth`]: session token signing and cookie configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection pool for the user directory

pub mod auth;
pub mod cors;
pub mod database;
