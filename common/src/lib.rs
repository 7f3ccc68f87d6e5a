//! Types and rules shared by the `backend` server and the `frontend` app.
//!
//! Everything here compiles for both the native server and the wasm client, so
//! the listing filter, the form schema, and the image URL handling behave the
//! same on either side of the wire.

pub mod filter;
pub mod images;
pub mod model;
pub mod requests;
pub mod upload;
pub mod validation;
