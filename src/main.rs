use std::fmt::Display;

use clap::{Parser, Subcommand};
use log::info;
use ordered_tree::stats::{self, Sampling, StatsError};
use ordered_tree::OrderedTree;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(name = "ordered-tree")]
#[command(about = "Exercises an unbalanced binary search tree")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert and delete a fixed set of integers and strings, printing the tree along the way
    Demo,
    /// Build many random trees and report the spread of their depths
    Stats {
        #[arg(long, default_value = "1000")]
        trees: usize,

        /// Random draws inserted into each tree
        #[arg(long, default_value = "20")]
        values: usize,

        /// Values are drawn from 0 up to (not including) this
        #[arg(long, default_value = "100")]
        max_value: u32,

        /// Seed for the random draws. A fresh one is picked and logged when absent
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<(), StatsError> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Demo => {
            walk_through(
                "INTEGER TREE",
                [5, 3, 7, 2, 4, 6, 8, 1, 9, 10, 11],
                &[10, 7, 5],
            );
            println!();
            walk_through(
                "STRING TREE",
                ["E", "B", "G", "A", "C", "F", "H", "D", "I", "J", "K"],
                &["E", "G"],
            );
        }
        Command::Stats {
            trees,
            values,
            max_value,
            seed,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            info!("sampling with seed {}", seed);

            let sampling = Sampling {
                trees,
                values_per_tree: values,
                max_value,
            };
            let depths = stats::sample_depths(&sampling, &mut StdRng::seed_from_u64(seed))?;
            println!("{}", depths);
        }
    }

    Ok(())
}

/// Builds a tree from `values`, then deletes each of `deletes` printing the in-order traversal
/// after every step.
fn walk_through<T, I>(title: &str, values: I, deletes: &[T])
where
    T: Ord + Display,
    I: IntoIterator<Item = T>,
{
    println!("{}", "=".repeat(10));
    println!("{}", title);
    println!("{}", "=".repeat(10));

    let mut tree: OrderedTree<T> = values.into_iter().collect();
    println!("{}", tree.diagram());
    println!("Inorder traversal of the given tree");
    println!("{}", in_order_line(&tree));
    println!("Depth: {}", tree.depth());

    for value in deletes {
        println!();
        println!("Delete {}", value);
        tree.delete(value);
        println!("Inorder traversal of the modified tree");
        println!("{}", in_order_line(&tree));
    }
}

fn in_order_line<T: Display>(tree: &OrderedTree<T>) -> String {
    tree.in_order()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
