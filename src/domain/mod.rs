// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust types shared by every other layer.
// No Burn types and no file I/O in here.

pub mod error;

// Lat/lon locations and their feature encodings
pub mod location;

pub mod mode;

// Per-stage architecture description
pub mod summary;
