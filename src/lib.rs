//! folio: the data layer of a personal technical blog front-end.
//!
//! The crate owns two cooperating pieces:
//!
//! - [`store::ContentStore`]: the canonical in-memory snapshot of posts,
//!   categories and tags, bulk-fetched once and replaced wholesale on
//!   refresh.
//! - [`view`]: per-page derivation over that snapshot (pagination, search,
//!   category filtering) with a network fallback whenever the cached window
//!   is not enough.
//!
//! The HTTP API itself is an external collaborator reached through
//! [`api::ApiClient`]; its wire shapes live in the `folio-api-types` crate,
//! re-exported here as [`types`].

pub mod api;
pub mod config;
pub mod domain;
pub mod store;
pub mod telemetry;
pub mod view;

pub use folio_api_types as types;
