//! Example that builds a search tree from the unique characters of a
//! string and times the six traversal variants against each other.
//!
//! Usage:
//!   cargo run --example traversal_timing
//!   cargo run --example traversal_timing -- "some other text" --show-visits

use clap::Parser;
use deepfirst::BinaryTree;
use deepfirst::tracing_support::{dump_method_timings, info_span, init_tracing};

const DEFAULT_TEXT: &str = "qwertyuioplkjhgfdsazxcvbnmasdl;fkjas;dlf";

/// Time recursive and stack-based tree traversals over the same tree.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Text whose unique characters populate the tree
    text: Option<String>,

    /// Print each traversal's visited keys
    #[arg(long)]
    show_visits: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();
    let text = args.text.unwrap_or_else(|| DEFAULT_TEXT.to_string());
    let tree = BinaryTree::from_text(&text);

    let mut runs: Vec<(&str, Vec<char>)> = Vec::new();

    {
        let _span = info_span!("pre_order").entered();
        let visited = tree.pre_order().into_iter().copied().collect();
        runs.push(("pre_order", visited));
    }
    {
        let _span = info_span!("in_order").entered();
        let visited = tree.in_order().into_iter().copied().collect();
        runs.push(("in_order", visited));
    }
    {
        let _span = info_span!("post_order").entered();
        let visited = tree.post_order().into_iter().copied().collect();
        runs.push(("post_order", visited));
    }
    {
        let _span = info_span!("pre_order_iter").entered();
        let visited = tree.pre_order_iter().copied().collect();
        runs.push(("pre_order_iter", visited));
    }
    {
        let _span = info_span!("in_order_iter").entered();
        let visited = tree.in_order_iter().copied().collect();
        runs.push(("in_order_iter", visited));
    }
    {
        let _span = info_span!("post_order_iter").entered();
        let visited = tree.post_order_iter().copied().collect();
        runs.push(("post_order_iter", visited));
    }

    if args.show_visits {
        for (name, visited) in &runs {
            let keys: String = visited.iter().collect();
            println!("{name}: {keys}");
        }
    }

    dump_method_timings();
}
