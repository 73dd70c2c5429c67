// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// All Burn-specific code lives here.
//
//   model.rs    — ResLayer and SdmNet, plus the Forward trait
//
//                 loc_feats ─▶ Linear ─▶ BatchNorm ─▶ ReLU
//                           ─▶ ResLayer ×4 ─▶ Linear ─▶ logits
//
//   features.rs — numeric rows / encoded locations → [N, W] tensors

/// SDMNet architecture
pub mod model;

pub mod features;
