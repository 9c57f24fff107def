use rowbind::Db;

/// Opens a fresh in-memory database, running `schema` on it first.
pub fn setup_db(schema: &str) -> Db {
    init_tracing();

    Db::builder()
        .init_sql(schema)
        .connect("sqlite::memory:")
        .expect("failed to open in-memory database")
}

/// A `PeopleService` over an empty `PEOPLE` table.
pub fn setup_people() -> people::PeopleService {
    people::PeopleService::new(setup_db(people::SCHEMA)).expect("failed to build PeopleService")
}

/// Routes `tracing` output through the test harness; set `RUST_LOG=debug` to
/// see mapped columns and executed SQL.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
