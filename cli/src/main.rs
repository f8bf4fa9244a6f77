//! Veil CLI - demo driver for the dual-lock grid.
//!
//! # Flow
//!
//! ```text
//! main() -> parse args -> load config -> solve hidden grid
//!                                             |
//!                                             v
//!            time layers -> compose -> (shield, reality)
//!                                             |
//!                 +---------------------------+--------------------+
//!                 v                           v                    v
//!          trapdoor probe            random single-cell      coherence scan
//!          (candidate set)           tamper of a copy        (mismatch list)
//! ```
//!
//! Tables go to stdout; tracing diagnostics go to stderr so the two never
//! interleave. `--json` swaps the tables for one machine-readable report.

mod config;
mod render;
mod report;

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result, bail, ensure};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use veil_core::{compose, invert, solve, time_layers, verify};
use veil_types::{Coord, Residue};

use crate::config::DemoConfig;
use crate::render::matrix_table;
use crate::report::{AttackReport, DemoReport, ProbeReport};

const USAGE: &str = "\
veil - dual-lock grid demo: build a hidden grid, expose its composite,
inject a tamper, and detect it.

USAGE:
    veil [OPTIONS]

OPTIONS:
    --config <PATH>    Read demo parameters from a TOML file
                       (default: veil.toml in the working directory, if present)
    --anchor <R,C,V>   Secret anchor: zero-based row and col in 0..=6, value in 1..=49
    --center <V>       Value pinned at the grid center (default: 1)
    --phase <N>        Time-layer phase shift, any integer
    --probe <R,C>      Cell used for the trapdoor demonstration (default: 2,2)
    --json             Emit a JSON report on stdout instead of console tables
    -h, --help         Print this help
";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    anchor: Option<(u8, u8, u8)>,
    center: Option<u8>,
    phase: Option<i64>,
    probe: Option<(u8, u8)>,
    json: bool,
    help: bool,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    while let Some(arg) = argv.next() {
        match arg.as_str() {
            "--config" => {
                args.config = Some(PathBuf::from(take_value(&mut argv, "--config")?));
            }
            "--anchor" => {
                args.anchor = Some(parse_anchor(&take_value(&mut argv, "--anchor")?)?);
            }
            "--center" => {
                let raw = take_value(&mut argv, "--center")?;
                args.center = Some(raw.parse().context("--center expects a value in 1..=49")?);
            }
            "--phase" => {
                let raw = take_value(&mut argv, "--phase")?;
                args.phase = Some(raw.parse().context("--phase expects an integer")?);
            }
            "--probe" => {
                args.probe = Some(parse_probe(&take_value(&mut argv, "--probe")?)?);
            }
            "--json" => args.json = true,
            "-h" | "--help" => args.help = true,
            other => bail!("unrecognized argument: {other} (try --help)"),
        }
    }
    Ok(args)
}

fn take_value(argv: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    argv.next()
        .with_context(|| format!("{flag} expects a value"))
}

fn parse_anchor(raw: &str) -> Result<(u8, u8, u8)> {
    let parts: Vec<&str> = raw.split(',').collect();
    ensure!(parts.len() == 3, "--anchor expects R,C,V");
    Ok((
        parts[0].trim().parse().context("anchor row")?,
        parts[1].trim().parse().context("anchor col")?,
        parts[2].trim().parse().context("anchor value")?,
    ))
}

fn parse_probe(raw: &str) -> Result<(u8, u8)> {
    let parts: Vec<&str> = raw.split(',').collect();
    ensure!(parts.len() == 2, "--probe expects R,C");
    Ok((
        parts[0].trim().parse().context("probe row")?,
        parts[1].trim().parse().context("probe col")?,
    ))
}

fn apply_overrides(config: &mut DemoConfig, args: &Args) {
    if let Some((row, col, value)) = args.anchor {
        config.anchor_row = row;
        config.anchor_col = col;
        config.anchor_value = value;
    }
    if let Some(center) = args.center {
        config.center_value = center;
    }
    if let Some(phase) = args.phase {
        config.phase_shift = phase;
    }
    if let Some((row, col)) = args.probe {
        config.probe_row = row;
        config.probe_col = col;
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("VEIL_LOG")
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let args = parse_args(env::args().skip(1))?;
    if args.help {
        print!("{USAGE}");
        return Ok(());
    }

    init_tracing();

    let mut config = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::load_default()?,
    };
    apply_overrides(&mut config, &args);

    let spec = config.anchor_spec()?;
    let probe = config.probe()?;

    // The creation: hidden grid, time layers, public composite.
    let space = solve(&spec).context("anchor parameters admit no grid")?;
    let (layer_a, layer_b) = time_layers(config.phase_shift);
    let (shield, reality) = compose(&space, &layer_a, &layer_b);
    info!(phase_shift = config.phase_shift, "composite built");

    // The trapdoor: what an observer at the probe cell can narrow down to.
    let observed = reality.get(probe);
    let known_shield = shield.get(probe);
    let candidates = invert(observed, known_shield);

    // The attack: bump one random cell of a copy by a nonzero delta.
    let target = Coord::new(rand::random_range(0..7), rand::random_range(0..7))?;
    let delta: u8 = rand::random_range(1..=8);
    let mut compromised = reality;
    compromised.set(
        target,
        Residue::reduce(i64::from(reality.get(target).get()) + i64::from(delta)),
    );

    // The defense: full coherence scan of the tampered copy.
    let mismatches = verify(&space, &shield, &compromised);
    let detected = !mismatches.is_empty();

    if args.json {
        let report = DemoReport {
            phase_shift: config.phase_shift,
            shield,
            reality,
            probe: ProbeReport {
                at: probe,
                observed,
                shield: known_shield,
                candidates,
            },
            attack: AttackReport {
                at: target,
                delta,
                compromised,
            },
            mismatches,
            detected,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== VEIL DUAL-LOCK DEMO ===");
    println!(
        "[setup] secret anchor: {} = {} (center pinned to {})",
        spec.anchor(),
        spec.value(),
        spec.center_value()
    );
    println!();
    print!(
        "{}",
        matrix_table("REALITY MATRIX (public view)", |at| reality.get(at).get(), None)
    );

    println!();
    println!("--- trapdoor demonstration at {probe} ---");
    println!("observed reality: {observed}");
    println!("known shield:     {known_shield}");
    let listed: Vec<String> = candidates.iter().map(ToString::to_string).collect();
    println!("possible hidden values: [{}]", listed.join(", "));
    println!("actual hidden value (anchor holders only): {}", space.get(probe));
    println!("-> {} candidates; observation alone cannot decide", listed.len());

    println!();
    println!("--- injecting noise at {target} (delta {delta}) ---");
    print!(
        "{}",
        matrix_table(
            "COMPROMISED REALITY MATRIX",
            |at| compromised.get(at).get(),
            Some(target),
        )
    );

    println!();
    println!("--- coherence scan ---");
    for mismatch in &mismatches {
        println!(
            "incoherence at {}: expected {}, observed {}",
            mismatch.at, mismatch.expected, mismatch.observed
        );
    }
    if detected {
        println!("tamper detected; grid integrity scan complete");
    } else {
        println!("no deviation found");
    }

    Ok(())
}
