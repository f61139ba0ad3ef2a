use pretty_assertions::assert_eq;
use tabula::Model;
use tests::{models, tests, DbTest};

#[derive(Debug, Default, Model)]
struct Note {
    #[db("id")]
    #[option("autoIncrement")]
    id: i32,

    #[db("body")]
    body: String,
}

#[derive(Debug, Default, Model)]
struct Tag {
    #[db("id")]
    #[option("autoIncrement")]
    id: usize,

    #[db("label")]
    label: String,
}

fn ids_are_written_back(test: &mut DbTest) {
    let db = test.setup_db(models!(Note => "notes"));
    test.create_table("notes", "{id}, body TEXT");

    let mut first = Note {
        body: "first".to_string(),
        ..Note::default()
    };
    let mut second = Note {
        body: "second".to_string(),
        ..Note::default()
    };

    db.load(&mut first).create().unwrap();
    db.load(&mut second).create().unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
}

fn auto_increment_column_is_not_inserted(test: &mut DbTest) {
    let db = test.setup_db(models!(Note => "notes"));
    test.create_table("notes", "{id}, body TEXT");

    let mut note = Note {
        id: 40,
        body: "hello".to_string(),
    };
    db.load(&mut note).create().unwrap();

    let op = test.log().pop();
    assert!(!op.sql.contains("\"id\")"), "{}", op.sql);
    assert_eq!(op.args, vec![tabula::Value::from("hello")]);
    assert_eq!(note.id, 1);
}

fn platform_width_ids(test: &mut DbTest) {
    let db = test.setup_db(models!(Tag => "tags"));
    test.create_table("tags", "{id}, label TEXT");

    let mut tag = Tag {
        label: "rust".to_string(),
        ..Tag::default()
    };
    db.load(&mut tag).create().unwrap();

    assert_eq!(tag.id, 1);
}

tests!(
    ids_are_written_back,
    auto_increment_column_is_not_inserted,
    platform_width_ids,
);
