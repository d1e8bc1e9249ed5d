use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "explainer", version)]
struct Cli {
    /// Log engine diagnostics to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the scene schedule of an outline.
    Schedule(ScheduleArgs),
    /// Dump the visual tree of a single frame as JSON.
    Frame(FrameArgs),
    /// Print one fingerprint per frame for a range.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Input outline JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Composition config JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Emit JSON instead of a table.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    input: InputArgs,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); defaults to the end of the timeline.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Render chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Schedule(args) => cmd_schedule(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn load(input: &InputArgs) -> anyhow::Result<(explainer::Outline, explainer::CompositionConfig)> {
    let outline = explainer::Outline::from_path(&input.in_path)
        .with_context(|| format!("load outline '{}'", input.in_path.display()))?;
    let config = match &input.config {
        Some(path) => explainer::CompositionConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => explainer::CompositionConfig::default(),
    };
    Ok((outline, config))
}

fn cmd_schedule(args: ScheduleArgs) -> anyhow::Result<()> {
    let (outline, config) = load(&args.input)?;
    let composer = explainer::Composer::new(&outline, config)?;
    let timeline = composer.timeline();

    let mut out = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, timeline).context("write schedule json")?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} ({} frames @ {} fps)",
        outline.title,
        timeline.total_frames(),
        timeline.fps().as_f64()
    )?;
    for slot in timeline.slots() {
        let title = outline
            .scenes
            .get(slot.position)
            .map_or("", |s| s.title.as_str());
        writeln!(
            out,
            "{:>3}  [{:>5}, {:>5})  {:<28} {:<10} {}{}",
            slot.position,
            slot.range.start.0,
            slot.range.end.0,
            slot.variant.to_string(),
            slot.transition.as_str(),
            title,
            slot.audio
                .as_ref()
                .map(|cue| format!("  audio={}", cue.source))
                .unwrap_or_default(),
        )?;
    }
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (outline, config) = load(&args.input)?;
    let composer = explainer::Composer::new(&outline, config)?;
    let tree = composer.render_frame(explainer::FrameIndex(args.frame))?;

    match &args.out {
        Some(path) => {
            write_json(path, &tree)?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &tree).context("write frame json")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let (outline, config) = load(&args.input)?;
    let composer = explainer::Composer::new(&outline, config)?;
    let end = args.end.unwrap_or(composer.timeline().total_frames());
    let range = explainer::FrameRange::new(
        explainer::FrameIndex(args.start),
        explainer::FrameIndex(end),
    )?;
    let threading = explainer::RenderThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let fingerprints = composer.fingerprints(range, &threading)?;
    let mut out = std::io::stdout().lock();
    for (i, fp) in fingerprints.iter().enumerate() {
        writeln!(out, "{}\t{fp}", args.start + i as u64)?;
    }
    Ok(())
}

fn write_json(path: &Path, value: &impl serde::Serialize) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(std::io::BufWriter::new(file), value)
        .with_context(|| format!("write json '{}'", path.display()))?;
    Ok(())
}
