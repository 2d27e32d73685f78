//! Data contracts shared between the console frontend and the server web API.

pub mod domain;
