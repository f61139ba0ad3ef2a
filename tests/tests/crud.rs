use pretty_assertions::assert_eq;
use tabula::{eq, gt, Model};
use tests::{models, tests, DbTest};

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct User {
    #[db("id")]
    #[option("autoIncrement")]
    id: i64,

    #[db("name")]
    name: String,

    #[db("age")]
    age: i32,

    #[db("active")]
    active: bool,
}

const COLUMNS: &str = "{id}, name TEXT, age INTEGER, active BOOLEAN";

fn user(name: &str, age: i32) -> User {
    User {
        name: name.to_string(),
        age,
        active: true,
        ..User::default()
    }
}

fn create_then_find(test: &mut DbTest) {
    let db = test.setup_db(models!(User => "users"));
    test.create_table("users", COLUMNS);

    let mut ann = user("ann", 41);
    db.load(&mut ann).create().unwrap();
    assert_eq!(ann.id, 1);

    let mut found = User::default();
    db.load(&mut found).find(eq("name", "ann")).unwrap();
    assert_eq!(found, ann);
}

fn find_all_returns_every_row(test: &mut DbTest) {
    let db = test.setup_db(models!(User => "users"));
    test.create_table("users", COLUMNS);

    for (name, age) in [("ann", 41), ("bo", 17), ("cy", 65)] {
        db.load(&mut user(name, age)).create().unwrap();
    }

    let mut probe = User::default();
    let mut adults = db.load(&mut probe).find_all(gt("age", 18)).unwrap();
    adults.sort_by_key(|u| u.id);

    let names: Vec<_> = adults.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["ann", "cy"]);
    assert!(adults.iter().all(|u| u.active));
}

fn update_then_find(test: &mut DbTest) {
    let db = test.setup_db(models!(User => "users"));
    test.create_table("users", COLUMNS);

    let mut ann = user("ann", 41);
    db.load(&mut ann).create().unwrap();

    let mut change = User {
        age: 42,
        ..User::default()
    };
    let affected = db.load(&mut change).update(eq("id", ann.id)).unwrap();
    assert_eq!(affected, 1);

    let mut found = User::default();
    db.load(&mut found).find(eq("id", ann.id)).unwrap();
    assert_eq!(found.age, 42);
    assert_eq!(found.name, "ann");
}

fn delete_and_count(test: &mut DbTest) {
    let db = test.setup_db(models!(User => "users"));
    test.create_table("users", COLUMNS);

    for (name, age) in [("ann", 41), ("bo", 17), ("cy", 65)] {
        db.load(&mut user(name, age)).create().unwrap();
    }

    let mut probe = User::default();
    let mut handle = db.load(&mut probe);

    assert_eq!(handle.count(()).unwrap(), 3);
    assert_eq!(handle.delete(gt("age", 40)).unwrap(), 2);
    assert_eq!(handle.count(()).unwrap(), 1);
    assert_eq!(handle.count(eq("name", "ann")).unwrap(), 0);
}

fn statements_are_logged(test: &mut DbTest) {
    let db = test.setup_db(models!(User => "users"));
    test.create_table("users", COLUMNS);

    db.load(&mut user("ann", 41)).create().unwrap();

    let op = test.log().pop();
    assert!(op.sql.starts_with("INSERT INTO"), "{}", op.sql);
    assert!(op.sql.contains(&test.table("users")), "{}", op.sql);
    assert_eq!(op.args.len(), 3);
    assert!(test.log().is_empty());
}

tests!(
    create_then_find,
    find_all_returns_every_row,
    update_then_find,
    delete_and_count,
    statements_are_logged,
);
