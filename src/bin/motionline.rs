use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use motionline::{
    Animation, AnimationBuilder, AnimationOpts, Color, Position, SimpleBuilder, Tick,
};

#[derive(Parser, Debug)]
#[command(name = "motionline", version)]
struct Cli {
    /// Log timeline edits to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the textual description of the resulting animation.
    Describe(DescribeArgs),
    /// Print total length, global start time and per-shape motion counts.
    Summary(ScriptArgs),
    /// Print the interpolated pose of every visible shape at one tick, as JSON.
    Sample(SampleArgs),
}

#[derive(Parser, Debug)]
struct ScriptArgs {
    /// Input script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct DescribeArgs {
    #[command(flatten)]
    script: ScriptArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    #[command(flatten)]
    script: ScriptArgs,

    /// Tick to sample.
    #[arg(long, allow_hyphen_values = true)]
    tick: Tick,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, serde::Deserialize)]
struct Script {
    #[serde(default)]
    opts: AnimationOpts,
    ops: Vec<Op>,
}

#[derive(Clone, Copy, Debug, serde::Deserialize)]
struct Pose {
    t: Tick,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    r: i32,
    g: i32,
    b: i32,
}

#[derive(Debug, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Op {
    Bounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    Declare {
        name: String,
        #[serde(rename = "type")]
        type_tag: String,
    },
    Motion {
        name: String,
        from: Pose,
        to: Pose,
    },
    Keyframe {
        name: String,
        at: Pose,
    },
    Delete {
        name: String,
        start: Tick,
    },
    Color {
        name: String,
        start: Tick,
        r: i32,
        g: i32,
        b: i32,
    },
    Position {
        name: String,
        start: Tick,
        x: i32,
        y: i32,
    },
    Size {
        name: String,
        start: Tick,
        width: i32,
        height: i32,
    },
    AnchorStart {
        name: String,
        start: Tick,
        new_end: Tick,
    },
    AnchorEnd {
        name: String,
        end: Tick,
        new_start: Tick,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Describe(args) => cmd_describe(args),
        Command::Summary(args) => cmd_summary(args),
        Command::Sample(args) => cmd_sample(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_script(path: &Path) -> anyhow::Result<Script> {
    let f = File::open(path).with_context(|| format!("open script '{}'", path.display()))?;
    let r = BufReader::new(f);
    let script: Script = serde_json::from_reader(r).with_context(|| "parse script JSON")?;
    Ok(script)
}

fn run_script(script: Script) -> anyhow::Result<Animation> {
    let mut b = SimpleBuilder::with_opts(script.opts);
    for (i, op) in script.ops.into_iter().enumerate() {
        apply(&mut b, op).with_context(|| format!("script op #{i}"))?;
    }
    Ok(b.build())
}

fn apply(b: &mut SimpleBuilder, op: Op) -> anyhow::Result<()> {
    match op {
        Op::Bounds {
            x,
            y,
            width,
            height,
        } => {
            b.set_bounds(x, y, width, height);
        }
        Op::Declare { name, type_tag } => {
            b.declare_shape(&name, &type_tag)?;
        }
        Op::Motion { name, from, to } => {
            b.add_motion(
                &name, from.t, from.x, from.y, from.w, from.h, from.r, from.g, from.b, to.t, to.x,
                to.y, to.w, to.h, to.r, to.g, to.b,
            )?;
        }
        Op::Keyframe { name, at } => {
            b.add_keyframe(&name, at.t, at.x, at.y, at.w, at.h, at.r, at.g, at.b)?;
        }
        Op::Delete { name, start } => {
            b.model_mut().delete_motion(&name, start)?;
        }
        Op::Color {
            name,
            start,
            r,
            g,
            b: blue,
        } => {
            b.model_mut()
                .change_color(&name, start, Color::new(r, g, blue)?)?;
        }
        Op::Position { name, start, x, y } => {
            b.model_mut()
                .change_position(&name, start, Position::new(x, y))?;
        }
        Op::Size {
            name,
            start,
            width,
            height,
        } => {
            b.model_mut().change_size(&name, start, width, height)?;
        }
        Op::AnchorStart {
            name,
            start,
            new_end,
        } => {
            b.model_mut()
                .change_speed_anchor_start_point(&name, start, new_end)?;
        }
        Op::AnchorEnd {
            name,
            end,
            new_start,
        } => {
            b.model_mut()
                .change_speed_anchor_end_point(&name, end, new_start)?;
        }
    }
    Ok(())
}

fn cmd_describe(args: DescribeArgs) -> anyhow::Result<()> {
    let anim = run_script(read_script(&args.script.in_path)?)?;
    match args.format {
        Format::Text => print!("{}", anim.describe()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&anim.to_json_value()?)?),
    }
    Ok(())
}

fn cmd_summary(args: ScriptArgs) -> anyhow::Result<()> {
    let anim = run_script(read_script(&args.in_path)?)?;
    println!("total_length {}", anim.total_length());
    println!("global_start_time {}", anim.global_start_time());
    let animated = anim.query();
    for (name, motions) in &animated {
        println!("shape {name} motions {}", motions.len());
    }
    for (name, _) in anim.registry().iter() {
        if !animated.contains_key(name) {
            println!("shape {name} motions 0");
        }
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let anim = run_script(read_script(&args.script.in_path)?)?;
    let mut frame = serde_json::Map::new();
    for (name, shape) in anim.frame_at(args.tick) {
        frame.insert(name, serde_json::to_value(shape)?);
    }
    println!("{}", serde_json::to_string_pretty(&frame)?);
    Ok(())
}
