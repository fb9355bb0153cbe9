use anyhow::{Context, Result};
use table_store::{print_rows, Row, TableStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

const TABLE: &str = "coords";

fn main() -> Result<()> {
    init_tracing();

    info!("creating in-memory database");
    let mut store = TableStore::open_in_memory().context("failed to open in-memory database")?;

    info!("testing connection");
    let echoed = store.probe("test").context("connection probe failed")?;
    info!(%echoed, "connection ok");

    info!(table = TABLE, "creating plot table");
    for row in [Row::new(1, 2), Row::new(2, 4)] {
        store
            .insert(TABLE, row)
            .with_context(|| format!("failed to insert {row} into {TABLE}"))?;
    }

    let rows = store
        .fetch_all(TABLE)
        .with_context(|| format!("failed to read {TABLE}"))?;
    print_rows(&rows).context("failed to print rows")?;

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
