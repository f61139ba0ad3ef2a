use tabula::{eq, Model};
use tests::{models, tests, DbTest};

#[derive(Debug, Default, Model)]
struct Registered {
    #[db("id")]
    id: i64,
}

#[derive(Debug, Default, Model)]
struct Stranger {
    #[db("id")]
    id: i64,
}

fn every_operation_returns_the_binding_error(test: &mut DbTest) {
    let db = test.setup_db(models!(Registered => "registered"));

    let mut stranger = Stranger { id: 1 };
    let mut handle = db.load(&mut stranger);

    assert!(handle.error().is_some_and(|err| err.is_not_registered()));
    assert!(handle.bindings().unwrap_err().is_not_registered());
    assert!(handle.create().unwrap_err().is_not_registered());
    assert!(handle.find(eq("id", 1)).unwrap_err().is_not_registered());
    assert!(handle.find_all(()).unwrap_err().is_not_registered());
    assert!(handle.update(()).unwrap_err().is_not_registered());
    assert!(handle.save(()).unwrap_err().is_not_registered());
    assert!(handle.delete(()).unwrap_err().is_not_registered());
    assert!(handle.count(()).unwrap_err().is_not_registered());

    drop(handle);
    assert_eq!(stranger.id, 1);
    assert!(test.log().is_empty());
}

fn registering_later_fixes_new_handles(test: &mut DbTest) {
    let db = test.setup_db(models!(Registered => "registered"));

    let mut stranger = Stranger::default();
    assert!(db.load(&mut stranger).error().is_some());

    db.register::<Stranger>("strangers").unwrap();
    assert!(db.load(&mut stranger).error().is_none());
}

tests!(
    every_operation_returns_the_binding_error,
    registering_later_fixes_new_handles,
);
