use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "scrollcue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the era (and backdrop theme) for a scroll progress value.
    Classify(ClassifyArgs),
    /// Replay a scroll trace against a stage and print one JSON frame per line.
    Simulate(SimulateArgs),
    /// Render an era backdrop preview as a PNG.
    Backdrop(BackdropArgs),
}

#[derive(Parser, Debug)]
struct ClassifyArgs {
    /// Scroll progress; clamped to [0, 1].
    #[arg(allow_hyphen_values = true)]
    progress: f64,

    /// Coordinator config JSON (era bands).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input trace JSON.
    #[arg(long)]
    trace: PathBuf,

    /// Stage JSON. Defaults to the built-in landing page.
    #[arg(long)]
    stage: Option<PathBuf>,

    /// Coordinator config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write frames here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum EraArg {
    Early,
    Mid,
    Late,
}

#[derive(Parser, Debug)]
struct BackdropArgs {
    #[arg(long, value_enum)]
    era: EraArg,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Classify(args) => cmd_classify(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Backdrop(args) => cmd_backdrop(args),
    }
}

fn read_to_string(path: &PathBuf, what: &str) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {what} '{}'", path.display()))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<scrollcue::CoordinatorConfig> {
    let Some(path) = path else {
        return Ok(scrollcue::CoordinatorConfig::default());
    };
    let json = read_to_string(path, "config")?;
    scrollcue::CoordinatorConfig::from_json(&json)
        .with_context(|| format!("parse config '{}'", path.display()))
}

fn cmd_classify(args: ClassifyArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let era = cfg.eras.classify(args.progress);
    let line = serde_json::json!({
        "progress": args.progress,
        "era": era,
        "theme": era.theme(),
    });
    println!("{line}");
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let trace_json = read_to_string(&args.trace, "trace")?;
    let trace = scrollcue::ScrollTrace::from_json(&trace_json)
        .with_context(|| format!("parse trace '{}'", args.trace.display()))?;
    let stage = match &args.stage {
        Some(path) => {
            let json = read_to_string(path, "stage")?;
            scrollcue::Stage::from_json(&json)
                .with_context(|| format!("parse stage '{}'", path.display()))?
        }
        None => scrollcue::landing_page()?,
    };

    let frames = scrollcue::simulate(stage, &trace, cfg)?;

    let mut sink: Box<dyn std::io::Write> = match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let file = std::fs::File::create(path)
                .with_context(|| format!("create '{}'", path.display()))?;
            Box::new(std::io::BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };
    for frame in &frames {
        serde_json::to_writer(&mut sink, frame)?;
        sink.write_all(b"\n")?;
    }
    sink.flush()?;

    if let Some(path) = &args.out {
        eprintln!("wrote {} frames to {}", frames.len(), path.display());
    }
    Ok(())
}

fn cmd_backdrop(args: BackdropArgs) -> anyhow::Result<()> {
    let era = match args.era {
        EraArg::Early => scrollcue::Era::Early,
        EraArg::Mid => scrollcue::Era::Mid,
        EraArg::Late => scrollcue::Era::Late,
    };
    let img = era.theme().backdrop().render(args.width, args.height)?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(&args.out, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
