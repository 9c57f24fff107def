use crate::{EmotionalState, Person};

use rowbind::{params, Db, Error, RecordMapper, Result};

const INSERT_SQL: &str = "insert into PEOPLE(name, emotional_state) values (?, ?)";

const FIND_BY_ID_SQL: &str = "select * from PEOPLE where ID = ?";

/// Creates and loads people.
#[derive(Debug)]
pub struct PeopleService {
    db: Db,
    mapper: RecordMapper<Person>,
}

impl PeopleService {
    pub fn new(db: Db) -> Result<Self> {
        Ok(Self {
            db,
            mapper: RecordMapper::new()?,
        })
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    /// Inserts a person and loads it back by its generated id.
    ///
    /// The insert and the reload are separate statements with no transaction
    /// around them.
    pub fn create(&self, name: &str, state: EmotionalState) -> Result<Person> {
        let key = self
            .db
            .insert_returning_key(INSERT_SQL, &params![name, state], "id")?;

        let Some(key) = key else {
            return Err(Error::creation_failed("Person", "no generated id returned"));
        };

        let id = i64::try_from(key).map_err(|err| {
            err.context(Error::creation_failed("Person", "generated id is not an integer"))
        })?;

        tracing::debug!(id, name, %state, "created person");

        self.find_by_id(id)
    }

    /// Loads the person with `id`. Fails unless exactly one row matches.
    pub fn find_by_id(&self, id: i64) -> Result<Person> {
        self.db.query_one(FIND_BY_ID_SQL, &params![id], &self.mapper)
    }
}
