use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use libtrie::trie::{build_trie_from_file, TrieNode, WordListConfig};

/// Build plain and compressed tries from a word list and query them.
#[derive(Debug, Parser)]
#[command(name = "libtrie", version, about)]
struct Cli {
    /// Word list with one word per line, sorted
    wordlist: PathBuf,

    /// Skip empty lines instead of reading them as the empty word
    #[arg(long)]
    skip_blank: bool,

    /// Skip lines starting with '#'
    #[arg(long)]
    skip_comments: bool,

    /// Print the edges of a trie
    #[arg(long, value_enum)]
    print: Option<Form>,

    /// Words to look up in both tries
    #[arg(short, long = "query", value_name = "WORD")]
    queries: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Form {
    Plain,
    Compressed,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = WordListConfig {
        skip_blank: cli.skip_blank,
        skip_comments: cli.skip_comments,
    };

    let plain = build_trie_from_file(&cli.wordlist, &config)
        .with_context(|| format!("could not build trie from {}", cli.wordlist.display()))?;
    report("plain", &plain);
    if cli.print == Some(Form::Plain) {
        print!("{}", plain.listing());
    }

    let compressed = plain.clone().compress();
    report("compressed", &compressed);
    if cli.print == Some(Form::Compressed) {
        print!("{}", compressed.listing());
    }

    for word in &cli.queries {
        let in_plain = plain.contains_plain(word);
        let in_compressed = compressed.contains_compressed(word);
        println!("{word}: plain={in_plain} compressed={in_compressed}");
    }
    Ok(())
}

fn report(form: &str, trie: &TrieNode<char>) {
    let nodes = trie.node_count();
    let terminals = trie.terminal_count();
    info!(form, nodes, terminals, "built trie");
    println!("{form}: {nodes} nodes, {terminals} terminal nodes");
}
