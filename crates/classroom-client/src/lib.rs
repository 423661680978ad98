#![doc = include_str!("../README.md")]

mod client;
mod error;
mod types;

pub use client::ClassroomClient;
pub use error::ClientError;
pub use types::*;
