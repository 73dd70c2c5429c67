// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: no tensor math, no printing.

// Build the network and run one forward pass over a random batch
pub mod inspect_use_case;
