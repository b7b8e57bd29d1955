//! Guarded browser access.
//!
//! ERROR HANDLING
//! ==============
//! Every function here tolerates a missing or restricted browser API by
//! degrading: reads come back absent, writes become no-ops, and missing
//! elements are skipped. Nothing in this module panics or surfaces an error;
//! the worst case is an incorrect but non-crashing default theme. Bodies are
//! gated on the `hydrate` feature with inert stubs on the server side.

pub mod control;
pub mod media;
pub mod storage;
pub mod surface;
