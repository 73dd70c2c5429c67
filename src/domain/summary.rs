// ============================================================
// Layer 3 — Architecture Summary
// ============================================================
// A framework-free description of one network stage, used to
// print the architecture and to check the width invariant.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageSummary {
    pub name:       String,
    pub in_width:   usize,
    pub out_width:  usize,
    pub num_params: usize,
}

impl StageSummary {
    pub fn new(name: impl Into<String>, in_width: usize, out_width: usize, num_params: usize) -> Self {
        Self { name: name.into(), in_width, out_width, num_params }
    }
}

impl fmt::Display for StageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<12} {:>6} -> {:<6} {:>10} params",
            self.name, self.in_width, self.out_width, self.num_params
        )
    }
}

/// True when every stage's output width feeds the next stage's input width.
pub fn widths_chain(stages: &[StageSummary]) -> bool {
    stages.windows(2).all(|w| w[0].out_width == w[1].in_width)
}

pub fn total_params(stages: &[StageSummary]) -> usize {
    stages.iter().map(|s| s.num_params).sum()
}
