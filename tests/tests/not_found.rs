use pretty_assertions::assert_eq;
use tabula::{eq, Model};
use tests::{models, tests, DbTest};

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct Item {
    #[db("id")]
    #[option("autoIncrement")]
    id: i64,

    #[db("title")]
    title: String,
}

fn find_missing_row(test: &mut DbTest) {
    let db = test.setup_db(models!(Item => "items"));
    test.create_table("items", "{id}, title TEXT");

    let mut item = Item {
        id: 9,
        title: "untouched".to_string(),
    };
    let before = item.clone();

    let err = db.load(&mut item).find(eq("id", 1)).unwrap_err();

    assert!(err.is_record_not_found());
    assert!(!err.is_driver());
    assert_eq!(item, before);
}

fn find_all_on_empty_table(test: &mut DbTest) {
    let db = test.setup_db(models!(Item => "items"));
    test.create_table("items", "{id}, title TEXT");

    let mut probe = Item::default();
    let items = db.load(&mut probe).find_all(()).unwrap();

    assert_eq!(items, vec![]);
}

fn count_on_empty_table(test: &mut DbTest) {
    let db = test.setup_db(models!(Item => "items"));
    test.create_table("items", "{id}, title TEXT");

    let mut probe = Item::default();
    assert_eq!(db.load(&mut probe).count(()).unwrap(), 0);
}

fn driver_errors_pass_through(test: &mut DbTest) {
    // No table is created
    let db = test.setup_db(models!(Item => "items"));

    let mut probe = Item::default();
    let err = db.load(&mut probe).find(()).unwrap_err();

    assert!(err.is_driver());
    assert!(!err.is_record_not_found());
    assert_eq!(probe, Item::default());
}

tests!(
    find_missing_row,
    find_all_on_empty_table,
    count_on_empty_table,
    driver_errors_pass_through,
);
