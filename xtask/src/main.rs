use adjacency::{DirectedWeightedGraph, Distance, UndirectedGraph, WeightedEdge};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "adjacency workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the sample graphs and print what each operation returns
    Demo {
        /// Which graph to walk through
        #[arg(value_enum, default_value_t = Which::Both)]
        graph: Which,

        /// Emit one JSON document instead of text
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run the criterion benchmarks
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Also enable the `parallel` feature
        #[arg(long, default_value_t = false)]
        parallel: bool,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Which {
    Directed,
    Undirected,
    Both,
}

const DIRECTED_EDGES: [(usize, usize, i64); 7] = [
    (0, 1, 10),
    (4, 0, 12),
    (1, 4, 15),
    (4, 3, 3),
    (3, 1, 5),
    (2, 1, 23),
    (3, 2, 7),
];

const UNDIRECTED_EDGES: [&str; 11] = [
    "AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG",
];

const UNDIRECTED_EDITS: [&str; 22] = [
    "add QH", "remove FG", "remove GQ", "remove HQ", "remove AE", "remove CA", "remove EB",
    "remove CE", "remove DE", "remove BC", "add EA", "add EF", "add GQ", "add AC", "add DQ",
    "add EG", "add QH", "remove CD", "remove BD", "remove QG", "add FG", "remove GE",
];

#[derive(Serialize)]
struct Traversal<V> {
    start: V,
    dfs: Vec<V>,
    bfs: Vec<V>,
}

#[derive(Serialize)]
struct DirectedReport {
    rendering: String,
    edges: Vec<WeightedEdge<i64>>,
    traversals: Vec<Traversal<usize>>,
    has_cycle: bool,
    dijkstra: Vec<Vec<Distance<i64>>>,
    dijkstra_without_4_3: Vec<Vec<Distance<i64>>>,
}

#[derive(Serialize)]
struct Edit {
    edit: String,
    components: usize,
    has_cycle: bool,
}

#[derive(Serialize)]
struct UndirectedReport {
    rendering: String,
    edges: Vec<(String, String)>,
    traversals: Vec<Traversal<String>>,
    components: usize,
    edits: Vec<Edit>,
}

#[derive(Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    directed: Option<DirectedReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    undirected: Option<UndirectedReport>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { graph, json } => {
            let report = Report {
                directed: (graph != Which::Undirected).then(directed_demo),
                undirected: (graph != Which::Directed)
                    .then(undirected_demo)
                    .transpose()?,
            };
            if json {
                let out = serde_json::to_string_pretty(&report).context("serializing report")?;
                println!("{out}");
            } else {
                print_report(&report);
            }
        }
        Commands::Bench { quick, parallel } => run_benchmarks(quick, parallel)?,
    }

    Ok(())
}

fn directed_demo() -> DirectedReport {
    let mut g = DirectedWeightedGraph::from_edges(DIRECTED_EDGES);
    let rendering = g.to_string();
    let edges = g.get_edges();
    let traversals = g
        .get_vertices()
        .into_iter()
        .map(|start| Traversal {
            start,
            dfs: g.dfs(start, None),
            bfs: g.bfs(start, None),
        })
        .collect();
    let has_cycle = g.has_cycle();
    let dijkstra = g.all_pairs_dijkstra();
    g.remove_edge(4, 3);

    DirectedReport {
        rendering,
        edges,
        traversals,
        has_cycle,
        dijkstra,
        dijkstra_without_4_3: g.all_pairs_dijkstra(),
    }
}

fn split_edge(edge: &str) -> Result<(&str, &str)> {
    if edge.len() != 2 || !edge.is_ascii() {
        bail!("edge {edge:?} is not two ASCII labels");
    }
    Ok(edge.split_at(1))
}

fn undirected_demo() -> Result<UndirectedReport> {
    let mut g = UndirectedGraph::<String>::new();
    for edge in UNDIRECTED_EDGES {
        let (u, v) = split_edge(edge)?;
        g.add_edge(u, v);
    }
    let rendering = g.to_string();
    let edges = g.get_edges();
    let components = g.count_connected_components();
    let traversals = g
        .get_vertices()
        .into_iter()
        .map(|start| Traversal {
            dfs: g.dfs(&start, None),
            bfs: g.bfs(&start, None),
            start,
        })
        .collect();

    let mut edits = Vec::with_capacity(UNDIRECTED_EDITS.len());
    for edit in UNDIRECTED_EDITS {
        let Some((command, edge)) = edit.split_once(' ') else {
            bail!("malformed edit {edit:?}");
        };
        let (u, v) = split_edge(edge)?;
        match command {
            "add" => g.add_edge(u, v),
            "remove" => g.remove_edge(u, v),
            other => bail!("unknown edit command {other:?}"),
        }
        edits.push(Edit {
            edit: edit.to_string(),
            components: g.count_connected_components(),
            has_cycle: g.has_cycle(),
        });
    }

    Ok(UndirectedReport {
        rendering,
        edges,
        traversals,
        components,
        edits,
    })
}

fn join<T: ToString>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

fn print_report(report: &Report) {
    if let Some(d) = &report.directed {
        println!("{}", d.rendering);
        let edges: Vec<_> = d.edges.iter().map(|e| (e.src, e.dst, e.weight)).collect();
        println!("edges: {edges:?}");
        for t in &d.traversals {
            println!("{}: DFS [{}]  BFS [{}]", t.start, join(&t.dfs), join(&t.bfs));
        }
        println!("has cycle: {}", d.has_cycle);
        for (src, row) in d.dijkstra.iter().enumerate() {
            println!("dijkstra({src}) = [{}]", join(row));
        }
        println!("\nafter removing 4 -> 3:");
        for (src, row) in d.dijkstra_without_4_3.iter().enumerate() {
            println!("dijkstra({src}) = [{}]", join(row));
        }
        println!();
    }
    if let Some(u) = &report.undirected {
        println!("{}", u.rendering);
        println!("edges: {:?}", u.edges);
        println!("components: {}", u.components);
        for t in &u.traversals {
            println!("{}: DFS [{}]  BFS [{}]", t.start, join(&t.dfs), join(&t.bfs));
        }
        for e in &u.edits {
            println!(
                "{:<10} components={} cycle={}",
                e.edit, e.components, e.has_cycle
            );
        }
    }
}

fn run_benchmarks(quick: bool, parallel: bool) -> Result<()> {
    println!("Running graph benchmarks...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "-p", "adjacency", "--bench", "graph_benchmark"]);
    if parallel {
        cmd.args(["--features", "parallel"]);
    }

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd.status().context("Failed to run cargo bench")?;
    if !status.success() {
        bail!("Benchmarks failed");
    }
    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}
