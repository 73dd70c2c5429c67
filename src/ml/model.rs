use burn::{
    nn::{
        BatchNorm, BatchNormConfig,
        Dropout, DropoutConfig,
        Linear, LinearConfig,
        Relu,
    },
    prelude::*,
};

use crate::domain::error::SdmError;
use crate::domain::summary::StageSummary;

/// Number of residual blocks stacked after the input projection.
pub const NUM_RES_LAYERS: usize = 4;

/// Anything exposing a single batched forward computation `[B, in] -> [B, out]`.
pub trait Forward<B: Backend> {
    fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2>;
}

// ─── Residual Block ───────────────────────────────────────────────────────────

#[derive(Config, Debug)]
pub struct ResLayerConfig {
    pub l_size: usize,
    #[config(default = 0.5)]
    pub dropout: f64,
}

impl ResLayerConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> ResLayer<B> {
        ResLayer {
            w1:       LinearConfig::new(self.l_size, self.l_size).init(device),
            w2:       LinearConfig::new(self.l_size, self.l_size).init(device),
            nonlin1:  Relu::new(),
            nonlin2:  Relu::new(),
            dropout1: DropoutConfig::new(self.dropout).init(),
        }
    }
}

/// Two-layer MLP with an additive skip connection: `x + f(x)`.
#[derive(Module, Debug)]
pub struct ResLayer<B: Backend> {
    pub w1:       Linear<B>,
    pub w2:       Linear<B>,
    pub nonlin1:  Relu,
    pub nonlin2:  Relu,
    pub dropout1: Dropout,
}

impl<B: Backend> ResLayer<B> {
    /// x: [batch, l_size] → [batch, l_size]
    pub fn forward(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let y = self.residual(x.clone());
        x + y
    }

    /// The transformed branch f(x) without the skip connection.
    ///
    /// On an autodiff backend each call draws its own dropout mask, so
    /// `forward(x) - x == residual(x)` only holds in evaluation mode.
    pub fn residual(&self, x: Tensor<B, 2>) -> Tensor<B, 2> {
        let y = self.w1.forward(x);
        let y = self.nonlin1.forward(y);
        let y = self.dropout1.forward(y);
        let y = self.w2.forward(y);
        self.nonlin2.forward(y)
    }

    pub fn width(&self) -> usize {
        // Burn stores linear weights as [d_input, d_output]
        self.w1.weight.dims()[0]
    }
}

impl<B: Backend> Forward<B> for ResLayer<B> {
    fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        ResLayer::forward(self, input)
    }
}

// ─── Classifier Network ───────────────────────────────────────────────────────

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize.
#[derive(Config, Debug, PartialEq)]
pub struct SdmNetConfig {
    pub in_features: usize,
    pub num_classes: usize,
    pub num_filts:   usize,
    #[config(default = 0.5)]
    pub dropout: f64,
    #[config(default = 1e-5)]
    pub norm_epsilon: f64,
    #[config(default = 0.1)]
    pub norm_momentum: f64,
}

impl SdmNetConfig {
    pub fn validate(&self) -> Result<(), SdmError> {
        for (field, width) in [
            ("in_features", self.in_features),
            ("num_classes", self.num_classes),
            ("num_filts",   self.num_filts),
        ] {
            if width == 0 {
                return Err(SdmError::invalid_config(field, "must be greater than zero"));
            }
        }
        if !(0.0..1.0).contains(&self.dropout) {
            return Err(SdmError::invalid_config(
                "dropout",
                format!("must be in [0, 1), got {}", self.dropout),
            ));
        }
        if !(self.norm_epsilon > 0.0) {
            return Err(SdmError::invalid_config("norm_epsilon", "must be positive"));
        }
        if !(0.0..=1.0).contains(&self.norm_momentum) {
            return Err(SdmError::invalid_config("norm_momentum", "must be in [0, 1]"));
        }
        Ok(())
    }

    pub fn init<B: Backend>(&self, device: &B::Device) -> Result<SdmNet<B>, SdmError> {
        self.validate()?;

        let proj = LinearConfig::new(self.in_features, self.num_filts).init(device);
        let norm = BatchNormConfig::new(self.num_filts)
            .with_epsilon(self.norm_epsilon)
            .with_momentum(self.norm_momentum)
            .init(device);
        let res_cfg = ResLayerConfig::new(self.num_filts).with_dropout(self.dropout);
        let res_layers: Vec<ResLayer<B>> = (0..NUM_RES_LAYERS)
            .map(|_| res_cfg.init(device))
            .collect();
        let class_emb = LinearConfig::new(self.num_filts, self.num_classes).init(device);

        tracing::debug!(
            "SDMNet initialised: {} -> {} x{} -> {}",
            self.in_features, self.num_filts, NUM_RES_LAYERS, self.num_classes
        );

        Ok(SdmNet { proj, norm, act: Relu::new(), res_layers, class_emb })
    }
}

#[derive(Module, Debug)]
pub struct SdmNet<B: Backend> {
    pub proj:       Linear<B>,
    pub norm:       BatchNorm<B>,
    pub act:        Relu,
    pub res_layers: Vec<ResLayer<B>>,
    pub class_emb:  Linear<B>,
}

impl<B: Backend> SdmNet<B> {
    /// loc_feats: [batch, in_features] → prior logits: [batch, num_classes]
    pub fn forward(&self, loc_feats: Tensor<B, 2>) -> Tensor<B, 2> {
        let loc_emb = self.embed(loc_feats);
        self.class_emb.forward(loc_emb)
    }

    /// Integer-valued features are cast to float before the forward pass.
    pub fn forward_int(&self, loc_feats: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        self.forward(loc_feats.float())
    }

    /// Location embedding: [batch, in_features] → [batch, num_filts]
    pub fn embed(&self, loc_feats: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.proj.forward(loc_feats);
        let x = self.norm.forward(x);
        let x = self.act.forward(x);
        self.res_layers.iter().fold(x, |x, layer| layer.forward(x))
    }

    pub fn in_features(&self) -> usize { self.proj.weight.dims()[0] }

    pub fn num_filts(&self) -> usize { self.proj.weight.dims()[1] }

    pub fn num_classes(&self) -> usize { self.class_emb.weight.dims()[1] }

    /// One entry per stage, in forward order.
    pub fn summary(&self) -> Vec<StageSummary> {
        let filts = self.num_filts();
        let mut stages = vec![StageSummary::new(
            "proj",
            self.in_features(),
            filts,
            // BatchNorm learns gamma and beta only; running mean/var are buffers
            self.proj.num_params() + 2 * filts,
        )];
        stages.extend(self.res_layers.iter().enumerate().map(|(i, layer)| {
            StageSummary::new(format!("res{}", i + 1), layer.width(), layer.width(), layer.num_params())
        }));
        stages.push(StageSummary::new(
            "class_emb",
            self.class_emb.weight.dims()[0],
            self.num_classes(),
            self.class_emb.num_params(),
        ));
        stages
    }
}

impl<B: Backend> Forward<B> for SdmNet<B> {
    fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        SdmNet::forward(self, input)
    }
}
