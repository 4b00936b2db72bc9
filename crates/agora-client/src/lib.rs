//! Client for the Agora REST backend.
//!
//! The backend speaks JSON under a versioned base path and wraps every
//! response in the same envelope; see [`ApiResponse`]. The client holds an
//! explicit [`Session`] for the bearer token instead of ambient global
//! state.

mod client;
mod dto;
mod envelope;
mod session;

pub use client::{ApiClient, ClientError};
pub use dto::{AuthPayload, GraphDto, LinkDto, NodeDto, SearchResults, UserDto};
pub use envelope::{ApiResponse, ErrorBody, Meta, Pagination};
pub use session::Session;
