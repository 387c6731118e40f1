//! Example that builds the six-person friends graph and queries each
//! person's direct friends through the depth-first scan.
//!
//! Usage:
//!   cargo run --example friends
//!   cargo run --example friends -- Dave
//!   cargo run --example friends -- --show-graph

use std::process;

use clap::Parser;
use deepfirst::UndirectedGraph;

/// Build the demo friends graph and print who is friends with whom.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Person to query (omit to query everyone)
    person: Option<String>,

    /// Also print the raw adjacency lists
    #[arg(long)]
    show_graph: bool,
}

fn main() {
    let args = Args::parse();
    let graph = build_graph();

    if args.show_graph {
        print!("{graph}");
        println!();
    }

    let people: Vec<String> = match args.person {
        Some(person) => vec![person],
        None => ["John", "Bill", "Kim", "Maria", "Dave"]
            .iter()
            .map(|p| p.to_string())
            .collect(),
    };

    for person in people {
        match graph.depth_first_traversal(&person) {
            Ok(friends) => println!("{person}'s friends: {}", friends.join(", ")),
            Err(err) => {
                eprintln!("{err}");
                process::exit(1);
            }
        }
    }
}

fn build_graph() -> UndirectedGraph {
    let mut graph = UndirectedGraph::new();
    for person in ["John", "Bill", "Tony", "Kim", "Maria", "Dave"] {
        graph.add_vertex(person);
    }
    let edges = [
        ("John", "Tony"),
        ("Bill", "Dave"),
        ("Kim", "Maria"),
        ("Tony", "Dave"),
        ("Dave", "Maria"),
        ("Kim", "Bill"),
        ("Dave", "John"),
    ];
    for (a, b) in edges {
        if let Err(err) = graph.add_edge(a, b) {
            eprintln!("Failed to add edge {a}-{b}: {err}");
            process::exit(1);
        }
    }
    graph
}
