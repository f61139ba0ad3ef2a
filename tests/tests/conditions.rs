use pretty_assertions::assert_eq;
use tabula::{
    and, between, custom, eq, exists, gt, gte, in_subquery, in_values, like, limit, limit_offset,
    lt, lte, ne, not, not_between, not_exists, not_in_values, not_like, or, Condition, Db, Filter,
    Model, Operand, Value,
};
use tests::{models, tests, DbTest};

#[derive(Debug, Default, Clone, PartialEq, Model)]
struct Person {
    #[db("id")]
    #[option("autoIncrement")]
    id: i64,

    #[db("name")]
    name: String,

    #[db("age")]
    age: i32,
}

fn seed(test: &mut DbTest) -> Db {
    let db = test.setup_db(models!(Person => "people"));
    test.create_table("people", "{id}, name TEXT, age INTEGER");

    for (name, age) in [("ann", 41), ("bo", 17), ("cy", 65), ("di", 30)] {
        let mut person = Person {
            name: name.to_string(),
            age,
            ..Person::default()
        };
        db.load(&mut person).create().unwrap();
    }

    test.log().clear();
    db
}

/// Names of the matching rows, sorted.
fn names(db: &Db, filter: impl Into<Filter>) -> Vec<String> {
    let mut probe = Person::default();
    let mut names: Vec<_> = db
        .load(&mut probe)
        .find_all(filter)
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    names.sort();
    names
}

fn comparisons(test: &mut DbTest) {
    let db = seed(test);

    assert_eq!(names(&db, eq("age", 41)), ["ann"]);
    assert_eq!(names(&db, ne("age", 41)), ["bo", "cy", "di"]);
    assert_eq!(names(&db, gt("age", 41)), ["cy"]);
    assert_eq!(names(&db, gte("age", 41)), ["ann", "cy"]);
    assert_eq!(names(&db, lt("age", 30)), ["bo"]);
    assert_eq!(names(&db, lte("age", 30)), ["bo", "di"]);
}

fn patterns_and_ranges(test: &mut DbTest) {
    let db = seed(test);

    assert_eq!(names(&db, like("name", "%n%")), ["ann"]);
    assert_eq!(names(&db, not_like("name", "%n%")), ["bo", "cy", "di"]);
    assert_eq!(names(&db, between("age", 18, 41)), ["ann", "di"]);
    assert_eq!(names(&db, not_between("age", 18, 41)), ["bo", "cy"]);
    assert_eq!(names(&db, in_values("age", [17, 65])), ["bo", "cy"]);
    assert_eq!(names(&db, not_in_values("age", [17, 65])), ["ann", "di"]);
}

fn junctions(test: &mut DbTest) {
    let db = seed(test);

    assert_eq!(
        names(&db, and([gt("age", 20), lt("age", 50)])),
        ["ann", "di"]
    );
    assert_eq!(names(&db, or([eq("name", "bo"), eq("name", "cy")])), ["bo", "cy"]);
    assert_eq!(names(&db, not(gt("age", 20))), ["bo"]);
    assert_eq!(names(&db, gt("age", 20) & !eq("name", "ann")), ["cy", "di"]);

    // AND adds no parentheses, so OR inside AND binds by SQL precedence
    assert_eq!(
        names(&db, or([eq("age", 17), and([gt("age", 60), like("name", "c%")])])),
        ["bo", "cy"]
    );
}

fn column_operands_use_the_bound_instance(test: &mut DbTest) {
    let db = seed(test);

    let mut probe = Person {
        name: "cy".to_string(),
        ..Person::default()
    };
    let found = db
        .load(&mut probe)
        .find_all(and([Operand::column("name")]))
        .unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].age, 65);

    let err = db
        .load(&mut probe)
        .find_all(and([Operand::column("nickname")]))
        .unwrap_err();
    assert!(err.is_malformed_condition());
}

fn subqueries(test: &mut DbTest) {
    let db = seed(test);
    let table = test.table("people");

    let oldest = format!("SELECT MAX(age) FROM \"{table}\"");
    assert_eq!(names(&db, in_subquery("age", oldest)), ["cy"]);

    let minors = format!("SELECT 1 FROM \"{table}\" WHERE age < 18");
    assert_eq!(names(&db, exists(minors.clone())).len(), 4);
    assert!(names(&db, not_exists(minors)).is_empty());
}

fn custom_fragments_and_raw_filters(test: &mut DbTest) {
    let db = seed(test);

    assert_eq!(
        names(&db, custom("age > ? AND age < ?", [20, 50])),
        ["ann", "di"]
    );
    assert_eq!(
        names(&db, and([custom("name <> ?", ["ann"]), gt("age", 20)])),
        ["cy", "di"]
    );
    let filter = Filter::raw("name = ? OR age = ?", [Value::from("bo"), Value::I32(30)]);
    assert_eq!(names(&db, filter), ["bo", "di"]);
    assert_eq!(names(&db, "-").len(), 4);
}

fn limits(test: &mut DbTest) {
    let db = seed(test);

    assert_eq!(names(&db, limit(2)).len(), 2);
    assert_eq!(names(&db, and([gt("age", 18), limit(1)])).len(), 1);
    assert_eq!(names(&db, limit_offset(3, 10)).len(), 1);

    let mut probe = Person::default();
    let err = db
        .load(&mut probe)
        .find_all(or([eq("age", 1), limit(1)]))
        .unwrap_err();
    assert!(err.is_malformed_condition());
}

fn placeholder_count_matches_value_num(test: &mut DbTest) {
    let db = seed(test);

    let mut probe = Person {
        name: "ann".to_string(),
        ..Person::default()
    };

    let conditions: Vec<Condition> = vec![
        eq("age", 41),
        between("age", 1, 99),
        in_values("age", [1, 2, 3]),
        and([Operand::column("name"), Operand::from(gt("age", 1))]),
        or([eq("age", 1), not(eq("name", "x"))]),
        exists("SELECT 1"),
        custom("age IN (?, ?)", [41, 17]),
        and([eq("age", 41), limit_offset(0, 5)]),
    ];

    for condition in conditions {
        let expected = condition.value_num();
        db.load(&mut probe).find_all(condition).unwrap();

        let op = test.log().pop();
        assert_eq!(op.args.len(), expected, "{}", op.sql);
    }
}

tests!(
    comparisons,
    patterns_and_ranges,
    junctions,
    column_operands_use_the_bound_instance,
    subqueries,
    custom_fragments_and_raw_filters,
    limits,
    placeholder_count_matches_value_num,
);
