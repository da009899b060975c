use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, eyre};
use graph_lists::{Graph, Vertex, generate, parse, render};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::app::App;

mod app;
mod menu;

/// Minimum spanning trees, shortest paths and traversals over a weighted
/// undirected graph.
#[derive(Parser, Debug)]
#[command(name = "graph_lists", version)]
struct Cli {
    /// Graph file: a `<V> <E>` header followed by E lines of `u v w`
    file: Option<PathBuf>,

    /// Source vertex for Prim, Dijkstra and the traversals (1-based)
    #[arg(short, long)]
    source: Option<Vertex>,

    /// Print every report to stdout instead of starting the terminal UI
    #[arg(long)]
    plain: bool,

    /// Generate a random connected graph with this many vertices
    #[arg(long, value_name = "V", conflicts_with = "file")]
    random: Option<usize>,

    /// Edges added on top of the random spanning tree
    #[arg(long, default_value_t = 0)]
    extra_edges: usize,

    /// Largest weight drawn for random edges
    #[arg(long, default_value_t = 9)]
    max_weight: u64,

    /// Seed for the random graph
    #[arg(long, requires = "random")]
    seed: Option<u64>,

    /// Write logs here (the terminal UI discards them otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(&cli)?;

    let graph = load(&cli)?;
    let source = match cli.source {
        Some(s) => s,
        None => prompt("Enter the source vertex: ")?
            .parse()
            .wrap_err("source vertex must be a positive integer")?,
    };
    graph.check_source(source)?;

    if cli.plain {
        return print_reports(&graph, source);
    }

    let mut terminal = ratatui::init();
    let result = App::new(graph, source).run(&mut terminal);
    ratatui::restore();
    result
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .wrap_err_with(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.plain {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn load(cli: &Cli) -> Result<Graph> {
    if let Some(vertices) = cli.random {
        let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
        info!(seed, vertices, extra_edges = cli.extra_edges, "generating random graph");
        let mut rng = StdRng::seed_from_u64(seed);
        let graph =
            generate::random_connected(&mut rng, vertices, cli.extra_edges, cli.max_weight)?;
        return Ok(graph);
    }

    let path = match &cli.file {
        Some(path) => path.clone(),
        None => PathBuf::from(prompt("Enter the source graph file: ")?),
    };
    let graph = parse::load_graph(&path)?;
    Ok(graph)
}

fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        return Err(eyre!("no answer given"));
    }
    Ok(answer.to_string())
}

fn print_reports(graph: &Graph, source: Vertex) -> Result<()> {
    let sections = [
        render::adjacency(graph),
        render::prim(&graph.prim(source)?),
        render::kruskal(&graph.kruskal()),
        render::dijkstra(&graph.dijkstra(source)?),
        render::dfs(&graph.dfs(source)?),
        render::bfs(&graph.bfs(source)?),
    ];
    let mut out = io::stdout().lock();
    for section in sections {
        for line in section {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
