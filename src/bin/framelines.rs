use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "framelines", version)]
struct Cli {
    /// Enable debug logging (`RUST_LOG` overrides the level when set).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an overlay to a PNG file.
    Render(RenderArgs),
    /// Run a request body through the HTTP contract and print the JSON response.
    Handle(HandleArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Request JSON (`width`, `height`, `show_thirds`, `strokes`).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Override the request width.
    #[arg(long)]
    width: Option<u32>,

    /// Override the request height.
    #[arg(long)]
    height: Option<u32>,

    /// Skip the rule-of-thirds grid.
    #[arg(long)]
    no_thirds: bool,

    /// Size the overlay to match this image (only its header is read).
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Overlay config JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Also write the overlay descriptor JSON here.
    #[arg(long)]
    descriptor: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct HandleArgs {
    /// Request method.
    #[arg(long, default_value = "POST")]
    method: String,

    /// Request body file; stdin when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Overlay config JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Handle(args) => cmd_handle(args),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<framelines::OverlayConfig> {
    match path {
        Some(p) => Ok(framelines::OverlayConfig::from_json_file(p)?),
        None => Ok(framelines::OverlayConfig::default()),
    }
}

fn read_request_json(path: &Path) -> anyhow::Result<framelines::RenderRequest> {
    let f = File::open(path).with_context(|| format!("open request '{}'", path.display()))?;
    let req: framelines::RenderRequest = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse request JSON '{}'", path.display()))?;
    Ok(req)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;

    let mut req = match &args.in_path {
        Some(p) => read_request_json(p)?,
        None => framelines::RenderRequest::default(),
    };
    if let Some(reference) = &args.reference {
        let dims = framelines::probe_dimensions_path(reference)?;
        tracing::debug!(width = dims.0, height = dims.1, "reference image size");
        req = req.with_reference_size(dims);
    }
    if let Some(w) = args.width {
        req.width = Some(f64::from(w));
    }
    if let Some(h) = args.height {
        req.height = Some(f64::from(h));
    }
    if args.no_thirds {
        req = req.with_thirds(false);
    }

    let out = framelines::render(&req, &config)?;
    framelines::write_png(&out.canvas, &args.out)?;

    if let Some(path) = &args.descriptor {
        let json = serde_json::to_string_pretty(&out.descriptor)
            .context("serialize overlay descriptor")?;
        std::fs::write(path, json)
            .with_context(|| format!("write descriptor '{}'", path.display()))?;
    }

    eprintln!(
        "wrote {} ({}x{}, {} lines)",
        args.out.display(),
        out.descriptor.width,
        out.descriptor.height,
        out.stats.lines_drawn
    );
    Ok(())
}

fn cmd_handle(args: HandleArgs) -> anyhow::Result<()> {
    let config = load_config(args.config.as_deref())?;

    let body = match &args.in_path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("read request body '{}'", p.display()))?,
        None => {
            let mut s = String::new();
            std::io::stdin()
                .read_to_string(&mut s)
                .context("read request body from stdin")?;
            s
        }
    };

    let resp = framelines::handle(&args.method, &body, &config);
    println!("{}", resp.body_json()?);
    if resp.status != 200 {
        anyhow::bail!("request failed with status {}", resp.status);
    }
    Ok(())
}
