use pretty_assertions::assert_eq;
use tabula::{eq, Model, Timestamp};
use tests::{models, tests, DbTest};

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct Event {
    #[db("id")]
    #[option("autoIncrement")]
    id: i64,

    #[db("at")]
    at: Timestamp,

    #[db("score")]
    score: f64,

    #[db("weight")]
    weight: f32,

    #[db("small")]
    small: i16,

    #[db("flag")]
    flag: bool,

    // Mapped by the option tag alone
    #[option("size=64")]
    label: String,

    #[db("-")]
    scratch: String,
}

const COLUMNS: &str = "{id}, at {timestamp}, score DOUBLE PRECISION, weight REAL, \
                       small SMALLINT, flag BOOLEAN, label TEXT";

fn values_survive_a_round_trip(test: &mut DbTest) {
    let db = test.setup_db(models!(Event => "events"));
    test.create_table("events", COLUMNS);

    let mut event = Event {
        at: "2024-03-01T12:30:00Z".parse().unwrap(),
        score: 0.25,
        weight: 1.5,
        small: -7,
        flag: true,
        label: "launch".to_string(),
        scratch: "not stored".to_string(),
        ..Event::default()
    };
    db.load(&mut event).create().unwrap();

    let mut found = Event::default();
    db.load(&mut found).find(eq("id", event.id)).unwrap();

    assert_eq!(
        found,
        Event {
            scratch: String::new(),
            ..event
        }
    );
}

fn unmapped_fields_are_left_alone(test: &mut DbTest) {
    let db = test.setup_db(models!(Event => "events"));
    test.create_table("events", COLUMNS);

    let mut event = Event {
        label: "x".to_string(),
        ..Event::default()
    };
    db.load(&mut event).create().unwrap();

    let mut found = Event {
        scratch: "kept".to_string(),
        ..Event::default()
    };
    db.load(&mut found).find(()).unwrap();

    assert_eq!(found.scratch, "kept");
    assert_eq!(found.label, "x");
}

tests!(values_survive_a_round_trip, unmapped_fields_are_left_alone);
