// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Builds an SDMNet, feeds it one batch of encoded locations and
// reports what came out:
//
//   Step 1: Resolve network config     (Layer 6 - infra, or CLI values)
//   Step 2: Check input width          (encoding width == in_features)
//   Step 3: Build the network          (Layer 5 - ml)
//   Step 4: Sample + encode locations  (Layer 3 - domain, Layer 5 - ml)
//   Step 5: Forward pass in the chosen mode
//
// The backend is a type parameter. Training mode runs on the
// autodiff backend; evaluation mode runs on `model.valid()`.

use anyhow::{bail, Result};
use burn::{module::AutodiffModule, prelude::*, tensor::backend::AutodiffBackend};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::domain::{
    location::{LocEncoding, Location},
    mode::Mode,
    summary::{total_params, widths_chain, StageSummary},
};
use crate::infra::config_store::ConfigStore;
use crate::ml::{
    features::encode_locations,
    model::{Forward, SdmNetConfig},
};

/// Where the network hyper-parameters come from.
#[derive(Debug, Clone)]
pub enum NetSource {
    /// A directory previously written by `init-config`
    Stored(String),
    Inline(SdmNetConfig),
}

#[derive(Debug, Clone)]
pub struct InspectConfig {
    pub net:        NetSource,
    pub batch_size: usize,
    pub mode:       Mode,
    pub encoding:   LocEncoding,
    pub seed:       u64,
}

#[derive(Debug, Clone)]
pub struct InspectReport {
    pub stages:       Vec<StageSummary>,
    pub total_params: usize,
    pub input_dims:   [usize; 2],
    pub output_dims:  [usize; 2],
    pub mean_logit:   f64,
    /// Evaluation mode only: did a second identical call reproduce the output?
    pub repeatable:   Option<bool>,
}

pub struct InspectUseCase {
    config: InspectConfig,
}

impl InspectUseCase {
    pub fn new(config: InspectConfig) -> Self {
        Self { config }
    }

    pub fn execute<B: AutodiffBackend>(&self, device: &B::Device) -> Result<InspectReport> {
        let cfg = &self.config;
        if cfg.batch_size == 0 {
            bail!("batch size must be at least 1");
        }
        // Batch statistics of a single sample have zero variance
        if cfg.mode == Mode::Train && cfg.batch_size < 2 {
            bail!("training mode needs a batch of at least 2 samples for batch norm, got {}", cfg.batch_size);
        }

        // ── Step 1: Resolve network config ───────────────────────────────────
        let net_cfg = match &cfg.net {
            NetSource::Stored(dir) => ConfigStore::new(dir.as_str()).load()?,
            NetSource::Inline(c)   => c.clone(),
        };

        // ── Step 2: Encoded width must match the projection input ─────────────
        let width = cfg.encoding.num_features();
        if net_cfg.in_features != width {
            bail!(
                "{:?} encoding yields {} features but the network expects in_features={}",
                cfg.encoding, width, net_cfg.in_features
            );
        }

        // ── Step 3: Build the network ─────────────────────────────────────────
        let model = net_cfg.init::<B>(device)?;
        let stages = model.summary();
        debug_assert!(widths_chain(&stages));
        let total_params = total_params(&stages);
        tracing::info!(
            "SDMNet ready: {} stages, {} parameters",
            stages.len(), total_params
        );

        // ── Step 4: Sample locations ──────────────────────────────────────────
        let locations = sample_locations(cfg.batch_size, cfg.seed)?;

        // ── Step 5: Forward pass ──────────────────────────────────────────────
        let (input_dims, logits, repeatable) = match cfg.mode {
            Mode::Train => {
                let feats = encode_locations::<B>(&locations, cfg.encoding, device)?;
                let input_dims = feats.dims();
                let logits = run_batch(&model, feats);
                (input_dims, logits.inner(), None)
            }
            Mode::Eval => {
                let model = model.valid();
                let feats = encode_locations::<B::InnerBackend>(&locations, cfg.encoding, device)?;
                let input_dims = feats.dims();
                let first  = run_batch(&model, feats.clone());
                let second = run_batch(&model, feats);
                let same   = first.clone().into_data() == second.into_data();
                (input_dims, first, Some(same))
            }
        };

        let output_dims = logits.dims();
        let mean_logit: f64 = logits.mean().into_scalar().elem::<f64>();
        tracing::debug!("Forward pass {:?} -> {:?}, mean logit {:.4}", input_dims, output_dims, mean_logit);

        Ok(InspectReport { stages, total_params, input_dims, output_dims, mean_logit, repeatable })
    }
}

/// One forward call through any single-method computation module.
pub fn run_batch<B: Backend, M: Forward<B>>(model: &M, feats: Tensor<B, 2>) -> Tensor<B, 2> {
    model.forward(feats)
}

/// Uniformly random locations, reproducible for a given seed.
pub fn sample_locations(n: usize, seed: u64) -> Result<Vec<Location>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let lat = rng.gen_range(-90.0..=90.0);
            let lon = rng.gen_range(-180.0..=180.0);
            Ok(Location::new(lat, lon)?)
        })
        .collect()
}
