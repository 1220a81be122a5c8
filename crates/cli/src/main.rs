use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use planar::api::{FillRule, GeomCfg, MAX_RAY_MARGIN};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod commands;
mod provenance;
mod scene;

use provenance::{write_sidecar, Payload};
use scene::Scene;

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Run planar geometry operations on JSON scenes")]
struct Cmd {
    /// Write the JSON result here (plus a provenance sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Rule {
    EvenOdd,
    NonZero,
}

impl From<Rule> for FillRule {
    fn from(r: Rule) -> Self {
        match r {
            Rule::EvenOdd => FillRule::EvenOdd,
            Rule::NonZero => FillRule::NonZeroWinding,
        }
    }
}

#[derive(clap::Args)]
struct Query {
    #[arg(long, value_enum, default_value_t = Rule::EvenOdd)]
    rule: Rule,
    /// Distance of the containment ray's end point past the bounding box (1..=2^30)
    #[arg(
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(i64).range(1..=MAX_RAY_MARGIN)
    )]
    ray_margin: i64,
}

impl Query {
    fn cfg(&self) -> GeomCfg {
        GeomCfg {
            ray_margin: self.ray_margin,
            ..GeomCfg::default()
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Normalize and classify every polygon (simple, convex, area, bbox)
    Classify {
        #[arg(long)]
        input: PathBuf,
    },
    /// Test the scene points against polygon 0
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        query: Query,
    },
    /// Clip the scene segments against convex polygon 0
    Clip {
        #[arg(long)]
        input: PathBuf,
    },
    /// Intersect polygon 0 with polygon 1
    Intersect {
        #[arg(long)]
        input: PathBuf,
    },
    /// Count the pixels of polygon 0 filled by a rule
    Fill {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        query: Query,
    },
    /// Print versions and, given a scene, every applicable result
    Report {
        #[arg(long)]
        input: Option<PathBuf>,
        #[command(flatten)]
        query: Query,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let out = cmd.out.as_deref();
    match cmd.action {
        Action::Classify { input } => {
            let scene = load(&input, "classify")?;
            emit(out, "classify", &input, None, &commands::classify(&scene)?)
        }
        Action::Contains { input, query } => {
            let scene = load(&input, "contains")?;
            let res = commands::contains(&scene, query.rule.into(), query.cfg())?;
            emit(out, "contains", &input, Some(&query), &res)
        }
        Action::Clip { input } => {
            let scene = load(&input, "clip")?;
            emit(out, "clip", &input, None, &commands::clip(&scene)?)
        }
        Action::Intersect { input } => {
            let scene = load(&input, "intersect")?;
            emit(out, "intersect", &input, None, &commands::intersect(&scene)?)
        }
        Action::Fill { input, query } => {
            let scene = load(&input, "fill")?;
            let res = commands::fill(&scene, query.rule.into(), query.cfg())?;
            emit(out, "fill", &input, Some(&query), &res)
        }
        Action::Report { input, query } => {
            let scene = match &input {
                Some(path) => load(path, "report")?,
                None => Scene::default(),
            };
            let rev = provenance::current_git_rev();
            let res = commands::report(&scene, query.rule.into(), query.cfg(), rev)?;
            let input = input.unwrap_or_default();
            emit(out, "report", &input, Some(&query), &res)
        }
    }
}

fn load(input: &Path, command: &str) -> Result<Scene> {
    let scene = Scene::load(input)?;
    tracing::info!(
        command,
        input = %input.display(),
        polygons = scene.polygons.len(),
        segments = scene.segments.len(),
        points = scene.points.len(),
        "scene"
    );
    Ok(scene)
}

/// Print `value` as pretty JSON, or write it to `out` with a provenance sidecar.
fn emit<T: Serialize>(
    out: Option<&Path>,
    command: &'static str,
    input: &Path,
    query: Option<&Query>,
    value: &T,
) -> Result<()> {
    let body = serde_json::to_vec_pretty(value)?;
    let Some(out) = out else {
        println!("{}", String::from_utf8_lossy(&body));
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out, &body).with_context(|| format!("writing {}", out.display()))?;
    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "rule": query.map(|q| format!("{:?}", FillRule::from(q.rule))),
        "ray_margin": query.map(|q| q.ray_margin),
    });
    let sidecar = write_sidecar(out, Payload::new(command, params))?;
    tracing::info!(command, out = %out.display(), sidecar = %sidecar.display(), "wrote");
    Ok(())
}
