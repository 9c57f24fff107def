use pretty_assertions::assert_eq;
use rowbind::{params, Db, Driver, Row, RowExt, Value};
use rowbind_driver_sqlite::Sqlite;
use tests::setup_db;

fn count(db: &Db, table: &str) -> i64 {
    db.query_one(
        &format!("select count(*) as n from {table}"),
        &[],
        &|row: &dyn Row, _: usize| row.get_as::<i64>("n"),
    )
    .unwrap()
}

#[test]
fn connect_by_url() {
    let db = Db::builder().connect("sqlite::memory:").unwrap();
    assert_eq!(db.driver().url(), "sqlite::memory:");
}

#[test]
fn connect_rejects_unknown_scheme() {
    let err = Db::builder()
        .connect("postgresql://localhost/people")
        .unwrap_err();
    assert!(err.is_invalid_connection_url(), "err={err}");

    let err = Db::builder().connect("not a url").unwrap_err();
    assert!(err.is_invalid_connection_url(), "err={err}");
}

#[test]
fn build_with_explicit_driver() {
    let db = Db::builder()
        .init_sql("create table t (v integer)")
        .init_sql("insert into t values (1), (2)")
        .build(Sqlite::in_memory())
        .unwrap();

    assert_eq!(count(&db, "t"), 2);
}

#[test]
fn file_database_persists_between_handles() {
    let path = std::env::temp_dir().join(format!("rowbind-db-test-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    {
        let db = Db::builder()
            .init_sql("create table t (v text)")
            .build(Sqlite::open(&path))
            .unwrap();
        db.execute("insert into t values (?)", &params!["kept"]).unwrap();
    }

    let url = format!("sqlite:{}", path.display());
    let db = Db::builder().connect(&url).unwrap();
    assert_eq!(count(&db, "t"), 1);

    drop(db);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn execute_reports_changed_rows() {
    let db = setup_db("create table t (v integer); insert into t values (1), (2), (3);");

    let changed = db
        .execute("update t set v = v + 10 where v > ?", &params![1])
        .unwrap();
    assert_eq!(changed, 2);
}

#[test]
fn insert_returning_key() {
    let db = setup_db("create table t (id integer primary key autoincrement, v text)");

    let key = db
        .insert_returning_key("insert into t(v) values (?)", &params!["a"], "id")
        .unwrap();
    assert_eq!(key, Some(Value::I64(1)));

    let key = db
        .insert_returning_key("insert into t(v) values (?)", &params!["b"], "ID")
        .unwrap();
    assert_eq!(key, Some(Value::I64(2)));
}

#[test]
fn null_and_optional_params() {
    let db = setup_db("create table t (v text)");

    db.execute("insert into t values (?)", &params![None::<String>])
        .unwrap();
    db.execute("insert into t values (?)", &params![Some("x")])
        .unwrap();

    let values = db
        .query("select v from t order by v", &[], &|row: &dyn Row, _: usize| {
            row.get_as::<Option<String>>("v")
        })
        .unwrap();
    assert_eq!(values, [None, Some("x".to_string())]);
}

#[test]
fn bad_sql_is_driver_error() {
    let db = setup_db("");

    let err = db.execute("insert into missing values (1)", &[]).unwrap_err();
    assert!(err.is_driver_operation_failed(), "err={err}");
}

#[test]
fn connection_is_usable_after_mapping_error() {
    let db = setup_db("create table t (v integer); insert into t values (1), (2);");

    let err = db
        .query("select v from t", &[], &|row: &dyn Row, row_num: usize| {
            if row_num == 1 {
                rowbind::bail!("stop at row {row_num}");
            }
            row.get_as::<i64>("v")
        })
        .unwrap_err();
    assert_eq!(err.to_string(), "stop at row 1");

    assert_eq!(count(&db, "t"), 2);
}
