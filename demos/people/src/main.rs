use clap::Parser;
use people::{EmotionalState, PeopleService};
use rowbind::Db;
use tracing_subscriber::EnvFilter;

/// Creates one person and prints it.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Database to connect to
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite::memory:")]
    database_url: String,

    /// Name of the person to create
    #[arg(long, default_value = "Elizabeth")]
    name: String,

    /// One of sad, happy or neutral
    #[arg(long, default_value = "sad")]
    state: EmotionalState,
}

fn main() -> rowbind::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let db = Db::builder()
        .init_sql(people::SCHEMA)
        .connect(&args.database_url)?;

    let people = PeopleService::new(db)?;

    let person = people.create(&args.name, args.state)?;
    println!("{person}");

    Ok(())
}
