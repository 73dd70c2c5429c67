// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Three subcommands:
//   init-config — write an SDMNet config JSON
//   inspect     — build the network and run one forward pass
//   encode      — print the feature vector for one location

use clap::{Args, Subcommand, ValueEnum};

use crate::application::inspect_use_case::{InspectConfig, NetSource};
use crate::domain::{location::LocEncoding, mode::Mode};
use crate::ml::model::SdmNetConfig;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a network config to <dir>/sdmnet_config.json
    InitConfig(InitConfigArgs),

    /// Build SDMNet and push a batch of random locations through it
    Inspect(InspectArgs),

    /// Encode a latitude/longitude pair into network input features
    Encode(EncodeArgs),
}

/// Network shape flags shared by `init-config` and `inspect`
#[derive(Args, Debug, Clone)]
pub struct NetArgs {
    /// Width of the input feature vector (defaults to the encoding width)
    #[arg(long)]
    pub in_features: Option<usize>,

    /// Number of output classes
    #[arg(long, default_value_t = 1000)]
    pub num_classes: usize,

    /// Hidden width of the projection and every residual block
    #[arg(long, default_value_t = 256)]
    pub num_filts: usize,

    /// Dropout probability inside each residual block (training mode only)
    #[arg(long, default_value_t = 0.5)]
    pub dropout: f64,
}

impl NetArgs {
    pub fn to_config(&self, encoding: LocEncoding) -> SdmNetConfig {
        SdmNetConfig::new(
            self.in_features.unwrap_or_else(|| encoding.num_features()),
            self.num_classes,
            self.num_filts,
        )
        .with_dropout(self.dropout)
    }
}

#[derive(Args, Debug)]
pub struct InitConfigArgs {
    #[command(flatten)]
    pub net: NetArgs,

    /// Location encoding the network will be fed with
    #[arg(long, value_enum, default_value_t = EncodingArg::Wrap)]
    pub encoding: EncodingArg,

    /// Directory the config file is written to
    #[arg(long, default_value = "configs")]
    pub dir: String,
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Load the network config from this directory instead of the flags below
    #[arg(long)]
    pub config_dir: Option<String>,

    #[command(flatten)]
    pub net: NetArgs,

    /// Number of random locations in the batch
    #[arg(long, default_value_t = 8)]
    pub batch_size: usize,

    #[arg(long, value_enum, default_value_t = ModeArg::Eval)]
    pub mode: ModeArg,

    #[arg(long, value_enum, default_value_t = EncodingArg::Wrap)]
    pub encoding: EncodingArg,

    /// Seed for the random location batch
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    #[arg(long, value_enum, default_value_t = BackendArg::Cpu)]
    pub backend: BackendArg,
}

impl From<InspectArgs> for InspectConfig {
    fn from(a: InspectArgs) -> Self {
        let encoding: LocEncoding = a.encoding.into();
        let net = match a.config_dir {
            Some(dir) => NetSource::Stored(dir),
            None      => NetSource::Inline(a.net.to_config(encoding)),
        };
        InspectConfig {
            net,
            batch_size: a.batch_size,
            mode:       a.mode.into(),
            encoding,
            seed:       a.seed,
        }
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    #[arg(long, value_enum, default_value_t = EncodingArg::Wrap)]
    pub encoding: EncodingArg,
}

// ─── Value enums ──────────────────────────────────────────────────────────────
// clap-facing mirrors of the domain enums; the domain layer never sees clap.

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    Train,
    Eval,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Train => Mode::Train,
            ModeArg::Eval  => Mode::Eval,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingArg {
    Wrap,
    Raw,
}

impl From<EncodingArg> for LocEncoding {
    fn from(e: EncodingArg) -> Self {
        match e {
            EncodingArg::Wrap => LocEncoding::Wrap,
            EncodingArg::Raw  => LocEncoding::Raw,
        }
    }
}

/// Tensor backend: `cpu` is ndarray, `gpu` is wgpu
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendArg {
    Cpu,
    Gpu,
}
