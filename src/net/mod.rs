//! Networking module for outbound HTTP lookups.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the one REST call this surface makes, the random
//! username suggestion. The product's room backend is a separate
//! service; no call here ever reaches it.

pub mod api;
