use agora_client::ApiClient;
use agora_core::{DebateId, GraphSource, SourceError, stars};
use agora_graph::{ForceSimulation, GraphArena, SimulationParams, Vec2, build_scene, kind_color, to_svg};
use agora_store::{DebateFilter, Store};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

const SVG_WIDTH: f32 = 1200.0;
const SVG_HEIGHT: f32 = 800.0;

#[derive(Parser, Debug)]
#[command(author, version, about = "Browse and lay out Agora debate graphs", long_about = None)]
struct Args {
    /// Path to a SQLite debate database. Defaults to the seeded in-memory set.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Insert the sample debates into the database before running.
    #[arg(long)]
    seed: bool,

    /// Base URL of a REST backend (e.g. http://localhost:5000/api/v1) to
    /// load graphs from instead of the local store.
    #[arg(long)]
    api: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List debates
    List {
        /// Only show debates in this category
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one debate's summary and arguments
    Show { id: String },
    /// Run the force layout to convergence and export the positions
    Layout {
        id: String,
        /// Stop even if the simulation has not cooled by then
        #[arg(long, default_value_t = 1_000)]
        max_ticks: usize,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Write here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Format {
    Json,
    Svg,
}

#[derive(Serialize)]
struct LayoutNode<'a> {
    id: &'a str,
    label: &'a str,
    kind: &'a str,
    author: &'a str,
    x: f32,
    y: f32,
    val: f32,
    rating: f32,
    color: String,
}

#[derive(Serialize)]
struct LayoutEdge<'a> {
    source: &'a str,
    target: &'a str,
    relation: &'a str,
}

#[derive(Serialize)]
struct LayoutSnapshot<'a> {
    debate_id: &'a str,
    ticks: usize,
    converged: bool,
    nodes: Vec<LayoutNode<'a>>,
    edges: Vec<LayoutEdge<'a>>,
}

fn open_store(args: &Args) -> Result<Store> {
    match &args.db {
        Some(path) => {
            let store =
                Store::open(path).with_context(|| format!("opening database {}", path.display()))?;
            if args.seed {
                store.seed().context("seeding sample debates")?;
            }
            Ok(store)
        }
        None => Store::seeded_in_memory().context("opening seeded in-memory store"),
    }
}

fn load_graph(args: &Args, id: &DebateId) -> Result<agora_core::DebateGraph> {
    let result = match &args.api {
        Some(base_url) => ApiClient::new(base_url.clone()).load_graph(id),
        None => open_store(args)?.load_graph(id),
    };
    match result {
        Ok(graph) => Ok(graph),
        Err(SourceError::NotFound(id)) => bail!("debate {id} not found"),
        Err(SourceError::Unavailable(reason)) => bail!("could not load debate {id}: {reason}"),
    }
}

fn cmd_list(args: &Args, category: Option<String>) -> Result<()> {
    let mut stats = None;
    let debates: Vec<_> = match &args.api {
        Some(base_url) => ApiClient::new(base_url.clone())
            .debates()
            .context("listing debates from API")?
            .into_iter()
            .filter(|d| {
                category
                    .as_deref()
                    .is_none_or(|c| d.category.eq_ignore_ascii_case(c))
            })
            .collect(),
        None => {
            let store = open_store(args)?;
            let filter = DebateFilter {
                category,
                query: None,
            };
            stats = Some(store.stats()?);
            store.list_debates(&filter)?
        }
    };

    if debates.is_empty() {
        println!("No debates.");
        return Ok(());
    }
    println!("{:<4} {:<8} {:<12} TITLE", "ID", "STATUS", "CATEGORY");
    for debate in &debates {
        println!(
            "{:<4} {:<8} {:<12} {} (@{})",
            debate.id,
            debate.status.as_str(),
            debate.category,
            debate.title,
            debate.creator,
        );
    }
    if let Some(stats) = stats {
        println!(
            "\n{} debates, {} arguments, {} relations",
            stats.debate_count, stats.argument_count, stats.relation_count
        );
    }
    Ok(())
}

fn cmd_show(args: &Args, id: String) -> Result<()> {
    let id = DebateId::new(id);
    if args.api.is_none() {
        let store = open_store(args)?;
        if let Some(summary) = store.get_debate(&id)? {
            println!("{} [{}] — @{}", summary.title, summary.category, summary.creator);
            println!(
                "{} arguments · {} participants · last active {}\n",
                summary.argument_count, summary.participant_count, summary.last_active
            );
        }
    }

    let graph = load_graph(args, &id)?;
    for node in &graph.nodes {
        println!(
            "[{:<10}] {}  — @{}  {} ({:.1})",
            node.kind.as_str(),
            node.label,
            node.author,
            stars(node.rating),
            node.rating,
        );
    }
    println!();
    for edge in &graph.edges {
        println!("{} --{}--> {}", edge.source, edge.relation.as_str(), edge.target);
    }
    Ok(())
}

fn cmd_layout(
    args: &Args,
    id: String,
    max_ticks: usize,
    format: Format,
    out: Option<PathBuf>,
) -> Result<()> {
    let id = DebateId::new(id);
    let graph = load_graph(args, &id)?;

    // Lay the graph out around the SVG canvas center; the JSON consumer can
    // re-center however it likes.
    let center = Vec2::new(SVG_WIDTH / 2.0, SVG_HEIGHT / 2.0);
    let mut arena = GraphArena::build(&graph, center, 150.0);
    let mut sim = ForceSimulation::new(center, SimulationParams::default());
    let ticks = sim.run_to_rest(&mut arena, max_ticks);

    let rendered = match format {
        Format::Svg => to_svg(&build_scene(&arena), SVG_WIDTH, SVG_HEIGHT),
        Format::Json => {
            let nodes = arena
                .nodes()
                .iter()
                .map(|node| LayoutNode {
                    id: &node.id.0,
                    label: &node.label,
                    kind: node.kind.as_str(),
                    author: &node.author,
                    x: node.pos.x,
                    y: node.pos.y,
                    val: node.val,
                    rating: node.rating,
                    color: kind_color(node.kind).to_hex(),
                })
                .collect();
            let edges = arena
                .edges()
                .iter()
                .map(|edge| LayoutEdge {
                    source: &edge.source.0,
                    target: &edge.target.0,
                    relation: edge.relation.as_str(),
                })
                .collect();
            let snapshot = LayoutSnapshot {
                debate_id: &graph.debate_id.0,
                ticks,
                converged: ticks < max_ticks,
                nodes,
                edges,
            };
            serde_json::to_string_pretty(&snapshot)?
        }
    };

    match out {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    match args.command {
        Command::List { ref category } => {
            let category = category.clone();
            cmd_list(&args, category)
        }
        Command::Show { ref id } => {
            let id = id.clone();
            cmd_show(&args, id)
        }
        Command::Layout {
            ref id,
            max_ticks,
            format,
            ref out,
        } => {
            let id = id.clone();
            let out = out.clone();
            cmd_layout(&args, id, max_ticks, format, out)
        }
    }
}
