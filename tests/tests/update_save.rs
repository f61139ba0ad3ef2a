use pretty_assertions::assert_eq;
use tabula::{eq, Model, Value};
use tests::{models, tests, DbTest};

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct Account {
    #[db("id")]
    #[option("autoIncrement")]
    id: i64,

    #[db("owner")]
    owner: String,

    #[db("balance")]
    balance: i32,
}

const COLUMNS: &str = "{id}, owner TEXT, balance INTEGER";

fn seed(test: &mut DbTest) -> (tabula::Db, i64) {
    let db = test.setup_db(models!(Account => "accounts"));
    test.create_table("accounts", COLUMNS);

    let mut account = Account {
        owner: "ann".to_string(),
        balance: 100,
        ..Account::default()
    };
    db.load(&mut account).create().unwrap();
    test.log().clear();

    (db, account.id)
}

fn reload(db: &tabula::Db, id: i64) -> Account {
    let mut account = Account::default();
    db.load(&mut account).find(eq("id", id)).unwrap();
    account
}

fn update_skips_zero_fields(test: &mut DbTest) {
    let (db, id) = seed(test);

    let mut change = Account {
        owner: "bo".to_string(),
        ..Account::default()
    };
    assert_eq!(db.load(&mut change).update(eq("id", id)).unwrap(), 1);

    let op = test.log().pop();
    assert!(!op.sql.contains("balance"), "{}", op.sql);
    assert_eq!(op.args, vec![Value::from("bo"), Value::I64(id)]);

    let account = reload(&db, id);
    assert_eq!(account.owner, "bo");
    assert_eq!(account.balance, 100);
}

fn update_with_only_zero_fields_runs_nothing(test: &mut DbTest) {
    let (db, id) = seed(test);

    let mut change = Account::default();
    assert_eq!(db.load(&mut change).update(eq("id", id)).unwrap(), 0);
    assert!(test.log().is_empty());

    assert_eq!(reload(&db, id).balance, 100);
}

fn save_writes_zero_fields(test: &mut DbTest) {
    let (db, id) = seed(test);

    let mut change = Account {
        owner: "ann".to_string(),
        ..Account::default()
    };
    assert_eq!(db.load(&mut change).save(eq("id", id)).unwrap(), 1);

    let op = test.log().pop();
    assert!(op.sql.contains("balance"), "{}", op.sql);
    assert_eq!(
        op.args,
        vec![Value::from("ann"), Value::I32(0), Value::I64(id)]
    );

    assert_eq!(reload(&db, id).balance, 0);
}

fn update_reports_matched_rows(test: &mut DbTest) {
    let (db, id) = seed(test);

    let mut change = Account {
        balance: 5,
        ..Account::default()
    };
    assert_eq!(db.load(&mut change).update(eq("id", id + 1)).unwrap(), 0);
}

tests!(
    update_skips_zero_fields,
    update_with_only_zero_fields_runs_nothing,
    save_writes_zero_fields,
    update_reports_matched_rows,
);
