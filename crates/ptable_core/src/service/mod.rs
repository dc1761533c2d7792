//! Service façade over the property store.
//!
//! # Responsibility
//! - Own the read-only store handle with an explicit lifecycle.
//! - Offer the use-case level query surface to external consumers.
//!
//! # See also
//! - `resolve` for the identifier disambiguation rules.

pub mod periodic_table;
