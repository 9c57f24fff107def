use people::{EmotionalState, Person};
use pretty_assertions::assert_eq;
use rowbind::{params, Record, RecordMapper, Row, RowExt};
use tests::setup_db;

#[derive(Debug, PartialEq, Record)]
struct Tagged {
    id: i64,
    #[column("full_name")]
    name: String,
    nickname: Option<String>,
    state: EmotionalState,
}

#[derive(Debug, PartialEq, Record)]
struct Flagged {
    flag: bool,
}

#[derive(Debug, Record)]
struct Clashing {
    user_id: i64,
    #[column("userId")]
    other: i64,
}

#[test]
fn column_names_match_case_and_underscore_insensitively() {
    let db = setup_db("");
    let mapper = RecordMapper::<Person>::new().unwrap();

    for column in ["emotional_state", "EmotionalState", "EMOTIONAL_STATE", "emotionalstate"] {
        let sql = format!("select 1 as ID, 'Ann' as Name, -1 as {column}");
        let person = db.query_one(&sql, &[], &mapper).unwrap();

        assert_eq!(person.emotional_state(), -1, "column={column}");
        assert_eq!(person.id(), Some(1));
        assert_eq!(person.name(), "Ann");
    }
}

#[test]
fn extra_columns_are_ignored() {
    let db = setup_db("");
    let mapper = RecordMapper::<Person>::new().unwrap();

    let person = db
        .query_one(
            "select 'noise' as extra, 3 as id, 'Bo' as name, 0 as emotional_state, x'00' as raw",
            &[],
            &mapper,
        )
        .unwrap();

    assert_eq!(person.id(), Some(3));
    assert_eq!(person.emotional_state(), 0);
}

#[test]
fn missing_nullable_column_loads_as_none() {
    let db = setup_db("");
    let mapper = RecordMapper::<Person>::new().unwrap();

    let person = db
        .query_one("select 'Cy' as name, 1 as emotional_state", &[], &mapper)
        .unwrap();

    assert_eq!(person, Person::new("Cy", EmotionalState::Happy));
}

#[test]
fn null_column_loads_as_none() {
    let db = setup_db("");
    let mapper = RecordMapper::<Person>::new().unwrap();

    let person = db
        .query_one(
            "select null as id, 'Cy' as name, 1 as emotional_state",
            &[],
            &mapper,
        )
        .unwrap();

    assert_eq!(person.id(), None);
}

#[test]
fn missing_required_column_is_mapping_failure() {
    let db = setup_db("");
    let mapper = RecordMapper::<Person>::new().unwrap();

    let err = db
        .query_one("select 1 as id, 'Dee' as name", &[], &mapper)
        .unwrap_err();

    assert!(err.is_mapping_failed(), "err={err}");
    assert!(err.root().is_type_conversion());
    assert_eq!(
        err.to_string(),
        "mapping failed: row 0 of Person: field `emotional_state`: cannot convert Null to i32"
    );
}

#[test]
fn uncoercible_value_is_mapping_failure() {
    let db = setup_db("");
    let mapper = RecordMapper::<Person>::new().unwrap();

    for sql in [
        "select 1 as id, 'Eve' as name, 'grumpy' as emotional_state",
        "select 1 as id, 'Eve' as name, 3000000000 as emotional_state",
        "select 1 as id, 'Eve' as name, 1.5 as emotional_state",
    ] {
        let err = db.query_one(sql, &[], &mapper).unwrap_err();
        assert!(err.is_mapping_failed(), "sql={sql}; err={err}");
    }
}

#[test]
fn failure_reports_row_number() {
    let db = setup_db("");
    let mapper = RecordMapper::<Person>::new().unwrap();

    let err = db
        .query(
            "select 1 as id, 'a' as name, 0 as emotional_state
             union all select 2, 'b', null",
            &[],
            &mapper,
        )
        .unwrap_err();

    assert!(err.is_mapping_failed());
    assert!(err.to_string().starts_with("mapping failed: row 1 of Person"), "err={err}");
}

#[test]
fn numeric_text_is_coerced() {
    let db = setup_db("");
    let mapper = RecordMapper::<Person>::new().unwrap();

    let person = db
        .query_one(
            "select '12' as id, 'Fay' as name, ' -1 ' as emotional_state",
            &[],
            &mapper,
        )
        .unwrap();

    assert_eq!(person.id(), Some(12));
    assert_eq!(person.emotional_state(), -1);
}

#[test]
fn column_override_and_enum_fields() {
    let db = setup_db("");
    let mapper = RecordMapper::<Tagged>::new().unwrap();

    let tagged = db
        .query_one(
            "select 4 as id, 'Gus' as FULL_NAME, 'Bob' as name, 1 as state",
            &[],
            &mapper,
        )
        .unwrap();

    assert_eq!(
        tagged,
        Tagged {
            id: 4,
            name: "Gus".to_string(),
            nickname: None,
            state: EmotionalState::Happy,
        }
    );
    assert_eq!(mapper.position("name"), None);
    assert_eq!(mapper.position("full_name"), Some(1));

    let err = db
        .query_one(
            "select 4 as id, 'Gus' as full_name, 9 as state",
            &[],
            &mapper,
        )
        .unwrap_err();
    assert!(err.is_mapping_failed());
    assert!(err.root().is_unknown_discriminant());
}

#[test]
fn two_columns_for_one_field_fail_the_row() {
    let db = setup_db(
        "create table a (id integer, name text, emotional_state integer);
         create table b (id integer);
         insert into a values (1, 'a', 0);
         insert into b values (2);",
    );
    let mapper = RecordMapper::<Person>::new().unwrap();

    let err = db
        .query_one("select 1 as id, 2 as ID, 'a' as name, 0 as emotional_state", &[], &mapper)
        .unwrap_err();
    assert!(err.is_mapping_failed(), "err={err}");
    assert!(err.root().is_invalid_record_shape());

    let err = db
        .query_one("select * from a join b", &[], &mapper)
        .unwrap_err();
    assert!(err.is_mapping_failed(), "err={err}");
    assert!(err.to_string().contains("both bind field `id`"), "err={err}");
}

#[test]
fn bool_fields_accept_only_flag_values() {
    let db = setup_db("");
    let mapper = RecordMapper::<Flagged>::new().unwrap();

    for (sql, flag) in [
        ("select 1 as flag", true),
        ("select 0 as flag", false),
        ("select 'True' as flag", true),
        ("select 'FALSE' as flag", false),
    ] {
        let flagged = db.query_one(sql, &[], &mapper).unwrap();
        assert_eq!(flagged, Flagged { flag }, "sql={sql}");
    }

    for sql in ["select 2 as flag", "select -7 as flag", "select 'maybe' as flag"] {
        let err = db.query_one(sql, &[], &mapper).unwrap_err();
        assert!(err.is_mapping_failed(), "sql={sql}; err={err}");
        assert!(err.root().is_type_conversion(), "sql={sql}; err={err}");
    }
}

#[test]
fn clashing_field_names_are_rejected_up_front() {
    let err = RecordMapper::<Clashing>::new().unwrap_err();
    assert!(err.is_invalid_record_shape(), "err={err}");
}

#[test]
fn query_maps_every_row_in_order() {
    let db = setup_db(people::SCHEMA);
    for (name, state) in [("a", -1), ("b", 0), ("c", 1)] {
        db.execute(
            "insert into PEOPLE(name, emotional_state) values (?, ?)",
            &params![name, state],
        )
        .unwrap();
    }

    let mapper = RecordMapper::<Person>::new().unwrap();
    let everyone = db
        .query("select * from PEOPLE order by id", &[], &mapper)
        .unwrap();

    let names: Vec<_> = everyone.iter().map(Person::name).collect();
    assert_eq!(names, ["a", "b", "c"]);

    let nobody = db
        .query("select * from PEOPLE where id > ?", &params![100], &mapper)
        .unwrap();
    assert!(nobody.is_empty());
}

#[test]
fn query_one_counts_rows() {
    let db = setup_db("");
    let mapper = RecordMapper::<Person>::new().unwrap();

    let err = db
        .query_one(
            "select 1 as id, 'a' as name, 0 as emotional_state where 0",
            &[],
            &mapper,
        )
        .unwrap_err();
    assert!(err.is_record_not_found());

    let err = db
        .query_one(
            "select 1 as id, 'a' as name, 0 as emotional_state
             union all select 2, 'b', 0
             union all select 3, 'c', 0",
            &[],
            &mapper,
        )
        .unwrap_err();
    assert!(err.is_too_many_records());
    assert_eq!(err.to_string(), "too many records: expected 1 record, found 3");
}

#[test]
fn hand_written_mapper() {
    let db = setup_db("");

    let map_person = |row: &dyn Row, row_num: usize| -> rowbind::Result<(usize, i64, String)> {
        Ok((row_num, row.get_as("ID")?, row.get_as("name")?))
    };

    let rows = db
        .query(
            "select 1 as id, 'a' as name union all select 2, 'b'",
            &[],
            &map_person,
        )
        .unwrap();

    assert_eq!(rows, [(0, 1, "a".to_string()), (1, 2, "b".to_string())]);

    let err = db
        .query_one("select 1 as id", &[], &map_person)
        .unwrap_err();
    assert_eq!(err.to_string(), "no column named `name` in result set");
}

#[test]
fn mapper_is_shared_across_threads() {
    let mapper = RecordMapper::<Person>::new().unwrap();

    std::thread::scope(|scope| {
        for id in 1..=4i64 {
            let mapper = &mapper;
            scope.spawn(move || {
                let db = setup_db("");
                let person = db
                    .query_one(
                        "select ? as id, 'T' as name, 0 as emotional_state",
                        &params![id],
                        mapper,
                    )
                    .unwrap();
                assert_eq!(person.id(), Some(id));
            });
        }
    });
}
