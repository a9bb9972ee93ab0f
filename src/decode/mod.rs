//! Response decoder module
//!
//! Supports: the `news`, `post` and `posts` envelopes
//!
//! # Overview
//!
//! The decode module parses GraphQL response bodies into an explicit
//! [`Envelope`] sum type. Unknown aliases, extra root fields, `null`
//! collections and missing item lists are rejected rather than coerced.

mod decoders;
mod types;

pub use decoders::{decode_envelope, EnvelopeDecoder};
pub use types::{Envelope, EnvelopeAlias, GraphQlError, GraphQlResponse};

#[cfg(test)]
mod tests;
