//! Entity proxies over the property store.
//!
//! # Responsibility
//! - Represent one element, isotope, or ion as a cheap façade object.
//! - Materialize attributes lazily through the data access layer and
//!   memoize them for the proxy's lifetime.
//!
//! # Invariants
//! - Construction loads nothing beyond the canonical key and display name.
//! - Each attribute is fetched at most once per proxy instance.
//! - Equality and ordering are defined by canonical key only.

pub mod element;
pub mod ion;
pub mod isotope;
