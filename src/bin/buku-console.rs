//! Buku Console - interactive book manager
//!
//! Keeps its own in-memory catalog, seeded with the sample books.

use std::io;

use tracing_subscriber::EnvFilter;

use buku_server::{console::Console, BookCatalog};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(BookCatalog::with_sample_books(), stdin.lock(), stdout.lock());
    console.run()?;

    Ok(())
}
