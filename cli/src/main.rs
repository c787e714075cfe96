//! Campaign Network CLI: structural metrics for donation networks
//!
//! Reads vertex and edge tables as JSON lines and prints the metrics report.

mod input;

use anyhow::{Context, Result};
use campaign_network::{
    analyze, EngineConfig, Graph, MetricsError, MissingEndpointPolicy, NetworkReport,
    ParallelEdges, PathWeighting, SamplingStrategy, Traversal,
};
use clap::{Args, Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campaign-network", version, about = "Campaign donation network metrics")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Missing {
    Drop,
    Materialize,
    Reject,
}

impl From<Missing> for MissingEndpointPolicy {
    fn from(m: Missing) -> Self {
        match m {
            Missing::Drop => MissingEndpointPolicy::Drop,
            Missing::Materialize => MissingEndpointPolicy::Materialize,
            Missing::Reject => MissingEndpointPolicy::Reject,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Sampling {
    Bernoulli,
    Exact,
}

impl From<Sampling> for SamplingStrategy {
    fn from(s: Sampling) -> Self {
        match s {
            Sampling::Bernoulli => SamplingStrategy::Bernoulli,
            Sampling::Exact => SamplingStrategy::Exact,
        }
    }
}

#[derive(Args)]
struct Tables {
    /// Vertex table (JSON lines)
    #[arg(long)]
    vertices: PathBuf,

    /// Edge table (JSON lines)
    #[arg(long)]
    edges: PathBuf,

    /// Edges with an endpoint missing from the vertex table
    #[arg(long)]
    missing: Option<Missing>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute assortativity, clustering and average shortest path
    Analyze {
        #[command(flatten)]
        tables: Tables,

        /// YAML engine config; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Maximum number of landmarks
        #[arg(long)]
        landmarks: Option<usize>,

        /// Seed for landmark sampling
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long)]
        sampling: Option<Sampling>,

        /// Use donation amounts as path lengths
        #[arg(long)]
        weighted: bool,

        /// Follow donor -> recipient direction in path searches
        #[arg(long)]
        directed: bool,

        /// Count parallel donations in assortativity
        #[arg(long)]
        multiplicity: bool,

        /// Overall time budget in seconds
        #[arg(long)]
        deadline_secs: Option<u64>,
    },
    /// Vertex, edge and degree summary
    Stats {
        #[command(flatten)]
        tables: Tables,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            tables,
            config,
            landmarks,
            seed,
            sampling,
            weighted,
            directed,
            multiplicity,
            deadline_secs,
        } => {
            let overrides = Overrides {
                missing: tables.missing,
                landmarks,
                seed,
                sampling,
                weighted,
                directed,
                multiplicity,
                deadline_secs,
            };
            run_analyze(&tables, config, overrides, &cli.format)
        }
        Commands::Stats { tables } => run_stats(&tables, &cli.format),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

struct Overrides {
    missing: Option<Missing>,
    landmarks: Option<usize>,
    seed: Option<u64>,
    sampling: Option<Sampling>,
    weighted: bool,
    directed: bool,
    multiplicity: bool,
    deadline_secs: Option<u64>,
}

impl Overrides {
    fn apply(self, config: &mut EngineConfig) {
        if let Some(m) = self.missing {
            config.missing_endpoints = m.into();
        }
        let landmarks = &mut config.metrics.landmarks;
        if let Some(n) = self.landmarks {
            landmarks.max_landmarks = n;
        }
        if self.seed.is_some() {
            landmarks.seed = self.seed;
        }
        if let Some(s) = self.sampling {
            landmarks.sampling = s.into();
        }
        if self.weighted {
            landmarks.weighting = PathWeighting::Weight;
        }
        if self.directed {
            landmarks.traversal = Traversal::Directed;
        }
        if self.multiplicity {
            config.metrics.parallel_edges = ParallelEdges::Multiplicity;
        }
        if let Some(secs) = self.deadline_secs {
            config.metrics.deadline_ms = Some(secs.saturating_mul(1000));
        }
    }
}

fn run_analyze(
    tables: &Tables,
    config_path: Option<PathBuf>,
    overrides: Overrides,
    format: &OutputFormat,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => EngineConfig::load(&path)?,
        None => EngineConfig::default(),
    };
    overrides.apply(&mut config);

    let graph = input::load_graph(&tables.vertices, &tables.edges, config.missing_endpoints)?;
    let report = analyze(&graph, &config.metrics);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.to_json())?);
        }
        OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

fn print_report(report: &NetworkReport) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value", "Detail"]);

    let (value, detail) = cells(&report.assortativity, |r| (format!("{:.6}", r), String::new()));
    table.add_row(vec!["assortativity".to_string(), value, detail]);

    let (value, detail) =
        cells(&report.average_clustering_coefficient, |c| (format!("{:.6}", c), String::new()));
    table.add_row(vec!["average clustering coefficient".to_string(), value, detail]);

    let (value, detail) = cells(&report.average_shortest_path, |p| {
        (
            format!("{:.6}", p.average),
            format!("{} landmarks, {} pairs", p.landmarks, p.pairs),
        )
    });
    table.add_row(vec!["average shortest path".to_string(), value, detail]);

    println!("{}", table);
    println!(
        "{} vertices, {} edges ({} dropped) in {:.2?}",
        report.vertex_count, report.edge_count, report.dropped_edges, report.elapsed
    );
}

fn cells<T>(
    result: &Result<T, MetricsError>,
    ok: impl FnOnce(&T) -> (String, String),
) -> (String, String) {
    match result {
        Ok(v) => ok(v),
        Err(MetricsError::UndefinedMetric { reason, .. }) => ("undefined".to_string(), reason.clone()),
        Err(MetricsError::ResourceExhaustion { reason, .. }) => ("aborted".to_string(), reason.clone()),
    }
}

fn run_stats(tables: &Tables, format: &OutputFormat) -> Result<()> {
    let policy: MissingEndpointPolicy = tables.missing.map(Into::into).unwrap_or_default();
    let graph = input::load_graph(&tables.vertices, &tables.edges, policy)?;
    let stats = GraphStats::of(&graph);

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "vertices": stats.vertices,
                "edges": stats.edges,
                "undirected_edges": stats.undirected_edges,
                "dropped_edges": stats.dropped_edges,
                "materialized_vertices": stats.materialized_vertices,
                "max_degree": stats.max_degree,
                "mean_degree": stats.mean_degree,
                "isolated_vertices": stats.isolated,
            });
            println!("{}", serde_json::to_string_pretty(&json).context("serializing stats")?);
        }
        OutputFormat::Table => {
            println!("Vertices:            {}", stats.vertices);
            println!("Edges:               {}", stats.edges);
            println!("Undirected edges:    {}", stats.undirected_edges);
            println!("Dropped edges:       {}", stats.dropped_edges);
            println!("Materialized:        {}", stats.materialized_vertices);
            println!("Max degree:          {}", stats.max_degree);
            println!("Mean degree:         {:.3}", stats.mean_degree);
            println!("Isolated vertices:   {}", stats.isolated);
        }
    }

    Ok(())
}

struct GraphStats {
    vertices: usize,
    edges: usize,
    undirected_edges: usize,
    dropped_edges: usize,
    materialized_vertices: usize,
    max_degree: usize,
    mean_degree: f64,
    isolated: usize,
}

impl GraphStats {
    fn of(graph: &Graph) -> Self {
        let degrees = graph.degree_index();
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            undirected_edges: graph.undirected_edge_count(),
            dropped_edges: graph.dropped_edge_count(),
            materialized_vertices: graph.materialized_vertex_count(),
            max_degree: degrees.max_degree(),
            mean_degree: degrees.mean_degree(),
            isolated: (0..degrees.node_count()).filter(|&v| degrees.degree(v) == 0).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaign_network::{Edge, Vertex};

    #[test]
    fn test_overrides_take_precedence() {
        let mut config = EngineConfig::from_yaml_str(
            "metrics:\n  landmarks:\n    seed: 1\n    max_landmarks: 10\n",
        )
        .unwrap();

        Overrides {
            missing: Some(Missing::Reject),
            landmarks: None,
            seed: Some(99),
            sampling: Some(Sampling::Exact),
            weighted: true,
            directed: false,
            multiplicity: true,
            deadline_secs: Some(2),
        }
        .apply(&mut config);

        assert_eq!(config.missing_endpoints, MissingEndpointPolicy::Reject);
        assert_eq!(config.metrics.landmarks.max_landmarks, 10);
        assert_eq!(config.metrics.landmarks.seed, Some(99));
        assert_eq!(config.metrics.landmarks.sampling, SamplingStrategy::Exact);
        assert_eq!(config.metrics.landmarks.weighting, PathWeighting::Weight);
        assert_eq!(config.metrics.landmarks.traversal, Traversal::Undirected);
        assert_eq!(config.metrics.parallel_edges, ParallelEdges::Multiplicity);
        assert_eq!(config.metrics.deadline_ms, Some(2000));
    }

    #[test]
    fn test_graph_stats() {
        let graph = Graph::build(
            ["a", "b", "c", "d"].map(Vertex::new),
            vec![Edge::new("a", "b", 1.0), Edge::new("b", "a", 1.0), Edge::new("b", "c", 1.0)],
        )
        .unwrap();

        let stats = GraphStats::of(&graph);
        assert_eq!(stats.edges, 3);
        assert_eq!(stats.undirected_edges, 2);
        assert_eq!(stats.max_degree, 2);
        assert_eq!(stats.isolated, 1);
        assert!((stats.mean_degree - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_undefined_metric_cell() {
        let err: Result<f64, MetricsError> =
            Err(MetricsError::undefined(campaign_network::Metric::Assortativity, "zero variance"));
        let (value, detail) = cells(&err, |r| (r.to_string(), String::new()));
        assert_eq!(value, "undefined");
        assert_eq!(detail, "zero variance");
    }

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
