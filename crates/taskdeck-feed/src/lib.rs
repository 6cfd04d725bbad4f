/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public blog feed client crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod client;
pub mod error;
pub mod posts;
pub mod types;

pub use client::{ClientConfig, FeedClient};
pub use error::{FeedError, Result};
pub use types::BlogPost;
