// ============================================================
// Layer 6 — Infrastructure
// ============================================================

/// JSON persistence of the network hyper-parameters
pub mod config_store;
