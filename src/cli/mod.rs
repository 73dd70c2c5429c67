// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes each subcommand to the
// layer that does the work. Printing to stdout happens here only.

pub mod commands;

use anyhow::Result;
use burn::backend::{
    wgpu::WgpuDevice,
    Autodiff, NdArray, Wgpu,
};
use clap::Parser;
use commands::{BackendArg, Commands, EncodeArgs, InitConfigArgs, InspectArgs};

use crate::application::inspect_use_case::{InspectConfig, InspectReport, InspectUseCase};
use crate::domain::location::Location;
use crate::infra::config_store::ConfigStore;

#[derive(Parser, Debug)]
#[command(
    name = "sdm-net",
    version,
    about = "Residual MLP geographic class prior (SDMNet)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::InitConfig(args) => run_init_config(args),
            Commands::Inspect(args)    => run_inspect(args),
            Commands::Encode(args)     => run_encode(args),
        }
    }
}

fn run_init_config(args: InitConfigArgs) -> Result<()> {
    let cfg = args.net.to_config(args.encoding.into());
    cfg.validate()?;
    let path = ConfigStore::new(args.dir.as_str()).save(&cfg)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let backend = args.backend;
    let use_case = InspectUseCase::new(InspectConfig::from(args));

    let report = match backend {
        BackendArg::Cpu => use_case.execute::<Autodiff<NdArray>>(&Default::default())?,
        BackendArg::Gpu => {
            let device = WgpuDevice::default();
            tracing::info!("Using WGPU device: {:?}", device);
            use_case.execute::<Autodiff<Wgpu>>(&device)?
        }
    };

    print_report(&report);
    Ok(())
}

fn run_encode(args: EncodeArgs) -> Result<()> {
    let loc = Location::new(args.lat, args.lon)?;
    let feats = loc.encode(args.encoding.into());
    let joined: Vec<String> = feats.iter().map(|v| format!("{v:.6}")).collect();
    println!("{}", joined.join(","));
    Ok(())
}

fn print_report(report: &InspectReport) {
    println!("Stages:");
    for stage in &report.stages {
        println!("  {stage}");
    }
    println!("Total parameters: {}", report.total_params);
    println!("Input  {:?} -> logits {:?}", report.input_dims, report.output_dims);
    println!("Mean logit: {:.6}", report.mean_logit);
    if let Some(repeatable) = report.repeatable {
        println!("Repeated eval call identical: {repeatable}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::inspect_use_case::NetSource;
    use crate::domain::{location::LocEncoding, mode::Mode};

    #[test]
    fn test_inspect_defaults() {
        let cli = Cli::try_parse_from(["sdm-net", "inspect"]).unwrap();
        let Commands::Inspect(args) = cli.command else { panic!("expected inspect") };
        assert_eq!(args.backend, BackendArg::Cpu);

        let cfg = InspectConfig::from(args);
        assert_eq!(cfg.mode, Mode::Eval);
        assert_eq!(cfg.encoding, LocEncoding::Wrap);
        match cfg.net {
            NetSource::Inline(net) => {
                assert_eq!((net.in_features, net.num_classes, net.num_filts), (4, 1000, 256));
            }
            NetSource::Stored(_) => panic!("expected inline config"),
        }
    }

    #[test]
    fn test_raw_encoding_sets_in_features() {
        let cli = Cli::try_parse_from([
            "sdm-net", "inspect", "--encoding", "raw", "--mode", "train", "--num-classes", "5",
        ])
        .unwrap();
        let Commands::Inspect(args) = cli.command else { panic!("expected inspect") };
        let cfg = InspectConfig::from(args);
        assert_eq!(cfg.mode, Mode::Train);
        let NetSource::Inline(net) = cfg.net else { panic!("expected inline config") };
        assert_eq!((net.in_features, net.num_classes), (2, 5));
    }

    #[test]
    fn test_config_dir_takes_precedence() {
        let cli = Cli::try_parse_from(["sdm-net", "inspect", "--config-dir", "cfg"]).unwrap();
        let Commands::Inspect(args) = cli.command else { panic!("expected inspect") };
        assert!(matches!(InspectConfig::from(args).net, NetSource::Stored(d) if d == "cfg"));
    }

    #[test]
    fn test_encode_accepts_negative_coordinates() {
        let cli = Cli::try_parse_from(["sdm-net", "encode", "--lat", "-33.9", "--lon", "-70.6"]).unwrap();
        let Commands::Encode(args) = cli.command else { panic!("expected encode") };
        assert_eq!((args.lat, args.lon), (-33.9, -70.6));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(Cli::try_parse_from(["sdm-net", "inspect", "--backend", "tpu"]).is_err());
    }
}
