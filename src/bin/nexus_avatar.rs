use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "nexus-avatar", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an avatar portrait as a PNG.
    Avatar(AvatarArgs),
    /// Render a crest badge as a PNG.
    Crest(CrestArgs),
}

#[derive(Parser, Debug)]
struct AvatarArgs {
    /// Input avatar config JSON; omit to render the default avatar.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Canvas side length in pixels.
    #[arg(long, default_value_t = 400)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct CrestArgs {
    /// Display name the crest is derived from.
    #[arg(long)]
    name: String,

    /// Optional avatar config JSON to borrow colors and species from.
    #[arg(long = "config")]
    config_path: Option<PathBuf>,

    /// Optional font file for the username label; without it the label is
    /// skipped.
    #[arg(long = "label-font")]
    label_font: Option<PathBuf>,

    /// Canvas side length in pixels.
    #[arg(long, default_value_t = 200)]
    size: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Avatar(args) => cmd_avatar(args),
        Command::Crest(args) => cmd_crest(args),
    }
}

fn read_config(path: Option<&Path>) -> anyhow::Result<Option<nexus_avatar::AvatarConfig>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let config = nexus_avatar::AvatarConfig::from_path(path)
        .with_context(|| format!("read avatar config '{}'", path.display()))?;
    config.validate()?;
    Ok(Some(config))
}

fn cmd_avatar(args: AvatarArgs) -> anyhow::Result<()> {
    let config = read_config(args.config_path.as_deref())?.unwrap_or_default();
    let frame = nexus_avatar::render_avatar(&config, args.size)?;
    write_png(&args.out, &frame)
}

fn cmd_crest(args: CrestArgs) -> anyhow::Result<()> {
    let config = read_config(args.config_path.as_deref())?;

    let font_bytes = match &args.label_font {
        Some(path) => Some(
            std::fs::read(path)
                .with_context(|| format!("read label font '{}'", path.display()))?,
        ),
        None => None,
    };
    let opts = nexus_avatar::CrestOptions {
        label_font: font_bytes.as_deref(),
    };

    let frame = nexus_avatar::render_crest(&args.name, config.as_ref(), args.size, &opts)?;
    write_png(&args.out, &frame)
}

fn write_png(out: &Path, frame: &nexus_avatar::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
