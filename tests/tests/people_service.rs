use people::{EmotionalState, Person};
use pretty_assertions::assert_eq;
use tests::{setup_db, setup_people};

#[test]
fn create_on_empty_table_assigns_first_id() {
    let people = setup_people();

    let elizabeth = people.create("Elizabeth", EmotionalState::Sad).unwrap();

    assert_eq!(elizabeth.id(), Some(1));
    assert_eq!(elizabeth.name(), "Elizabeth");
    assert_eq!(elizabeth.emotional_state(), -1);
    assert_eq!(
        elizabeth.to_string(),
        "Person[id=1, name=Elizabeth, emotionalState=-1]"
    );
}

#[test]
fn create_then_find_by_id_returns_equal_person() {
    let people = setup_people();

    for (name, state) in [
        ("Elizabeth", EmotionalState::Sad),
        ("Jane", EmotionalState::Happy),
        ("", EmotionalState::Neutral),
        ("Zoë O'Brien", EmotionalState::Happy),
    ] {
        let created = people.create(name, state).unwrap();
        let id = created.id().expect("created person has an id");

        let found = people.find_by_id(id).unwrap();
        assert_eq!(found, created);
        assert_eq!(found.state().unwrap(), state);
    }
}

#[test]
fn ids_increase_with_each_create() {
    let people = setup_people();

    let first = people.create("A", EmotionalState::Happy).unwrap();
    let second = people.create("B", EmotionalState::Neutral).unwrap();

    assert_eq!(first.id(), Some(1));
    assert_eq!(second.id(), Some(2));
}

#[test]
fn find_by_id_without_match_is_not_found() {
    let people = setup_people();
    people.create("Elizabeth", EmotionalState::Sad).unwrap();

    let err = people.find_by_id(42).unwrap_err();
    assert!(err.is_record_not_found(), "err={err}");
}

#[test]
fn find_by_id_with_duplicate_rows_is_too_many() {
    let db = setup_db(
        "create table PEOPLE (id integer, name text, emotional_state integer);
         insert into PEOPLE values (5, 'a', 0);
         insert into PEOPLE values (5, 'b', 1);",
    );
    let people = people::PeopleService::new(db).unwrap();

    let err = people.find_by_id(5).unwrap_err();
    assert!(err.is_too_many_records(), "err={err}");
    assert_eq!(err.to_string(), "too many records: expected 1 record, found 2");
}

#[test]
fn create_without_generated_id_fails() {
    // `id` is a plain column here, so the insert leaves it NULL.
    let db = setup_db("create table PEOPLE (id integer, name text, emotional_state integer)");
    let people = people::PeopleService::new(db).unwrap();

    let err = people.create("Elizabeth", EmotionalState::Sad).unwrap_err();
    assert!(err.is_creation_failed(), "err={err}");
    assert_eq!(
        err.to_string(),
        "could not create Person: no generated id returned"
    );

    // The row itself was still written.
    let count = people
        .db()
        .query_one(
            "select count(*) as n from PEOPLE",
            &[],
            &|row: &dyn rowbind::Row, _: usize| {
                use rowbind::RowExt;
                row.get_as::<i64>("n")
            },
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn create_with_non_integer_id_fails() {
    let db = setup_db(
        "create table PEOPLE (id text default 'p-1', name text, emotional_state integer)",
    );
    let people = people::PeopleService::new(db).unwrap();

    let err = people.create("Elizabeth", EmotionalState::Sad).unwrap_err();
    assert!(err.is_creation_failed(), "err={err}");
}

#[test]
fn unknown_stored_state_fails_to_decode() {
    let db = setup_db(people::SCHEMA);
    db.execute(
        "insert into PEOPLE(name, emotional_state) values (?, ?)",
        &rowbind::params!["Mystery", 7],
    )
    .unwrap();
    let people = people::PeopleService::new(db).unwrap();

    // The record itself only carries the code ...
    let person = people.find_by_id(1).unwrap();
    assert_eq!(person.emotional_state(), 7);

    // ... decoding it is what fails.
    let err = person.state().unwrap_err();
    assert!(err.is_unknown_discriminant(), "err={err}");
}

#[test]
fn stored_person_matches_new() {
    let people = setup_people();

    let created = people.create("Elizabeth", EmotionalState::Sad).unwrap();
    let unsaved = Person::new("Elizabeth", EmotionalState::Sad);

    assert_eq!(created.name(), unsaved.name());
    assert_eq!(created.emotional_state(), unsaved.emotional_state());
    assert_ne!(created, unsaved);
}
