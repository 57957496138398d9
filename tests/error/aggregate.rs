use outcome_rail::{Error, ErrorAccumulator, ManyErrors};

fn messages(error: &Error) -> Vec<&str> {
    error.iter().map(Error::message).collect()
}

#[test]
fn empty_is_identity_of_append() {
    let e = Error::new("only");

    assert_eq!(Error::empty().append(e.clone()), e);
    assert_eq!(e.clone().append(Error::empty()), e);
    assert!(matches!(Error::empty().append(e.clone()), Error::Expected(_)));
    assert!(Error::empty().append(Error::empty()).is_empty());
}

#[test]
fn append_is_associative() {
    let a = Error::new("a");
    let b = Error::new("b");
    let c = Error::new("c");

    let left = (a.clone() + b.clone()) + c.clone();
    let right = a + (b + c);

    assert_eq!(left, right);
    assert_eq!(messages(&left), ["a", "b", "c"]);
}

#[test]
fn aggregates_never_nest() {
    let inner = Error::new("a") + Error::new("b");
    let outer = Error::many([inner.clone(), Error::new("c"), inner]);

    assert_eq!(outer.count(), 5);
    assert!(outer.iter().all(|e| !matches!(e, Error::Many(_))));
    assert_eq!(messages(&outer), ["a", "b", "c", "a", "b"]);
}

#[test]
fn many_unwraps_single_survivor() {
    let only = Error::many([Error::empty(), Error::with_type("t", "m")]);
    assert!(matches!(only, Error::Expected(_)));

    let none = Error::many(Vec::new());
    assert!(none.is_empty());
    assert_eq!(none.count(), 0);
}

#[test]
fn single_child_aggregate_equals_its_leaf() {
    let leaf = Error::with_type("t", "m");
    let wrapped = Error::Many(ManyErrors::new([leaf.clone()]));

    assert!(matches!(wrapped, Error::Many(_)));
    assert_eq!(wrapped, leaf);
    assert_eq!(leaf, wrapped);
}

#[test]
fn aggregate_reports_its_own_type() {
    let all = Error::new("a") + Error::new("b");
    assert_eq!(all.error_type(), "many_errors");
    assert_eq!(all.message(), "a\nb");
    assert!(all.extension_data().is_empty());
}

#[test]
fn aggregate_classification() {
    let expected = Error::new("a") + Error::new("b");
    let mixed = expected.clone() + Error::from_fault("x".parse::<u8>().unwrap_err());

    assert!(expected.is_expected());
    assert!(!expected.is_exceptional());
    assert!(!mixed.is_expected());
    assert!(mixed.is_exceptional());
}

#[test]
fn add_assign_and_sum() {
    let mut total = Error::empty();
    total += Error::new("a");
    total += Error::new("b") + Error::new("c");
    assert_eq!(total.count(), 3);

    let summed: Error = ["x", "y"].into_iter().map(Error::new).sum();
    assert_eq!(messages(&summed), ["x", "y"]);

    let collected: Error = vec![Error::new("x")].into_iter().collect();
    assert_eq!(collected, Error::new("x"));
}

#[test]
fn many_errors_indexing_and_access() {
    let many = ManyErrors::new([Error::new("a"), Error::new("b")]);

    assert_eq!(many.len(), 2);
    assert_eq!(many[1].message(), "b");
    assert_eq!(many.get(2), None);
    assert_eq!(many.as_slice().len(), 2);
    assert_eq!(many.message(), "a\nb");
}

#[test]
fn into_errors_flattens_leaves() {
    let leaves = (Error::new("a") + Error::new("b")).into_errors();
    assert_eq!(leaves.len(), 2);

    let single = Error::new("a").into_errors();
    assert_eq!(single.len(), 1);
    assert!(Error::empty().into_errors().is_empty());
}

#[test]
fn accumulator_folds_like_many() {
    let mut acc = ErrorAccumulator::new();
    assert!(acc.is_empty());
    assert!(acc.clone().into_error().is_none());

    acc.push(Error::new("a"));
    assert!(matches!(acc.clone().into_error(), Some(Error::Expected(_))));
    assert_eq!(acc.clone().into_many().len(), 1);

    acc.push(Error::new("b") + Error::new("c"));
    acc.push(Error::empty());
    assert_eq!(acc.len(), 3);

    let messages: Vec<_> = acc.iter().map(Error::message).collect();
    assert_eq!(messages, ["a", "b", "c"]);
}

#[test]
fn accumulator_collects_from_iterator() {
    let acc: ErrorAccumulator = vec![Error::new("a"), Error::empty(), Error::new("b")]
        .into_iter()
        .collect();
    assert_eq!(acc.len(), 2);
}

#[test]
fn aggregates_own_their_children_on_the_heap() {
    let many = ManyErrors::new([Error::new("a"), Error::new("b"), Error::new("c")]);
    let nested = Error::Many(ManyErrors::new([Error::Many(many), Error::new("d")]));
    assert!(core::mem::size_of::<Error>() <= 128);

    let Error::Many(outer) = nested else {
        panic!("expected an aggregate");
    };
    let children: Vec<Error> = outer.into_inner();
    assert_eq!(children.len(), 4);

    let messages: Vec<String> = ManyErrors::new(children)
        .into_iter()
        .map(|e| e.message().to_owned())
        .collect();
    assert_eq!(messages, ["a", "b", "c", "d"]);
}
