mod emotional_state;
pub use emotional_state::EmotionalState;

mod person;
pub use person::Person;

mod service;
pub use service::PeopleService;

/// Creates the `PEOPLE` table the service reads and writes, if missing.
pub const SCHEMA: &str = "\
create table if not exists PEOPLE (
    id integer primary key autoincrement,
    name text not null,
    emotional_state integer not null
)";
