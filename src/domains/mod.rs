//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: the routable tools and the query router
//! - **prompts**: instruction templates sent to the language model

pub mod prompts;
pub mod tools;
