use pretty_assertions::assert_eq;
use swiftmock::naming::{allocate, NameRegistry};
use swiftmock::*;

fn int() -> TypeDescriptor {
    TypeDescriptor::scalar("Int")
}

fn string() -> TypeDescriptor {
    TypeDescriptor::scalar("String")
}

fn mock_names(methods: Vec<Method>) -> Vec<String> {
    let ty = Type {
        name: "Service".to_string(),
        methods,
    };
    generate_type(&ty, &Config::default())
        .unwrap()
        .mock_names()
        .map(str::to_string)
        .collect()
}

#[test]
fn different_arity_needs_no_label_disambiguation() {
    assert_eq!(
        vec!["Foo", "FooBar"],
        mock_names(vec![
            Method::func("foo"),
            Method::func("foo").param(Parameter::new("bar", int())),
        ])
    );
}

#[test]
fn same_arity_overloads_use_labels() {
    assert_eq!(
        vec!["FooBar", "FooBaz"],
        mock_names(vec![
            Method::func("foo").param(Parameter::new("bar", int())),
            Method::func("foo").param(Parameter::new("baz", int())),
        ])
    );
}

#[test]
fn differing_labels_with_different_names() {
    assert_eq!(
        vec!["FooWith", "FooFor"],
        mock_names(vec![
            Method::func("foo").param(Parameter::new("x", int()).labeled("with")),
            Method::func("foo").param(Parameter::new("x", int()).labeled("for")),
        ])
    );
}

#[test]
fn unlabeled_overloads_fall_through_to_types() {
    assert_eq!(
        vec!["FooInt", "FooString"],
        mock_names(vec![
            Method::func("foo").param(Parameter::new("x", int()).unlabeled()),
            Method::func("foo").param(Parameter::new("x", string()).unlabeled()),
        ])
    );
}

#[test]
fn qualified_type_names_lose_their_dots() {
    assert_eq!(
        vec!["OpenFoundationURL", "OpenString"],
        mock_names(vec![
            Method::func("open")
                .param(Parameter::new("x", TypeDescriptor::scalar("Foundation.URL")).unlabeled()),
            Method::func("open").param(Parameter::new("x", string()).unlabeled()),
        ])
    );
}

#[test]
fn generic_type_names_are_flattened() {
    assert_eq!(
        vec!["HandleResultUserError", "HandleInt"],
        mock_names(vec![
            Method::func("handle").param(
                Parameter::new("x", TypeDescriptor::scalar("Result<User, Error>")).unlabeled()
            ),
            Method::func("handle").param(Parameter::new("x", int()).unlabeled()),
        ])
    );
}

#[test]
fn array_types_are_pluralized() {
    assert_eq!(
        vec!["StoreInts", "StoreInt"],
        mock_names(vec![
            Method::func("store")
                .param(Parameter::new("x", TypeDescriptor::array(int())).unlabeled()),
            Method::func("store")
                .param(Parameter::new("x", TypeDescriptor::optional(int())).unlabeled()),
        ])
    );
}

#[test]
fn type_disambiguation_keeps_trailing_labels() {
    assert_eq!(
        vec!["FooIntB", "FooStringB"],
        mock_names(vec![
            Method::func("foo")
                .param(Parameter::new("a", int()).unlabeled())
                .param(Parameter::new("b", string())),
            Method::func("foo")
                .param(Parameter::new("a", string()).unlabeled())
                .param(Parameter::new("b", string())),
        ])
    );
}

#[test]
fn type_disambiguation_extends_prefix() {
    assert_eq!(
        vec!["FooIntInt", "FooIntString"],
        mock_names(vec![
            Method::func("foo")
                .param(Parameter::new("a", int()).unlabeled())
                .param(Parameter::new("b", int()).unlabeled()),
            Method::func("foo")
                .param(Parameter::new("a", int()).unlabeled())
                .param(Parameter::new("b", string()).unlabeled()),
        ])
    );
}

#[test]
fn failable_initializer_marker_is_stripped() {
    assert_eq!(
        vec!["Init", "InitName"],
        mock_names(vec![
            Method::init(),
            Method::failable_init().param(Parameter::new("name", string())),
        ])
    );
}

#[test]
fn registries_are_scoped_to_one_type() {
    let ty = |name: &str| Type::new(name).method(Method::func("foo"));
    let mocks = generate(&[ty("First"), ty("Second")], &Config::default()).unwrap();

    assert_eq!(
        vec!["Foo", "Foo"],
        mocks
            .iter()
            .flat_map(|mock| mock.mock_names())
            .collect::<Vec<_>>()
    );
}

#[test]
fn allocation_is_driven_by_the_registry_passed_in() {
    let methods = vec![
        Method::func("foo").param(Parameter::new("bar", int())),
        Method::func("foo"),
    ];

    let mut registry = NameRegistry::new("Service");
    let first = allocate(&methods[0], &methods, &mut registry).unwrap();
    let second = allocate(&methods[1], &methods, &mut registry).unwrap();

    assert_eq!("Foo", first);
    assert_eq!("Foo2", second);
    assert!(registry.is_assigned("Foo"));
    assert!(registry.is_assigned("Foo2"));
}

#[test]
fn indistinguishable_methods_abort_the_type() {
    let ty = Type::new("Service")
        .method(Method::func("foo").param(Parameter::new("bar", int())))
        .method(Method::func("foo").param(Parameter::new("bar", int())));

    assert_eq!(
        Err(Error::IndistinguishableMethods {
            type_name: "Service".to_string(),
            method: "foo(bar: Int)".to_string(),
            arity: 1,
        }),
        generate_type(&ty, &Config::default())
    );
}

#[test]
fn generation_stops_at_the_first_failing_type() {
    let broken = Type::new("Broken")
        .method(Method::func("reload"))
        .method(Method::func("reload"));
    let fine = Type::new("Fine").method(Method::func("reload"));

    let error = generate(&[fine.clone(), broken, fine], &Config::default()).unwrap_err();

    assert_eq!(
        "Broken: cannot allocate a unique mock name for `reload()` (0 parameters): it is indistinguishable from another method of the same type",
        error.to_string()
    );
}

#[test]
fn allocation_does_not_depend_on_where_the_method_lives() {
    let siblings = vec![Method::func("foo").param(Parameter::new("bar", int()))];
    let copy = siblings[0].clone();

    let mut registry = NameRegistry::new("Service");
    assert_eq!(Ok("Foo".to_string()), allocate(&copy, &siblings, &mut registry));
}

#[test]
fn lone_method_falls_through_to_typed_candidates() {
    assert_eq!(
        vec!["FooXY", "FooXInt", "FooXString", "FooXIntY"],
        mock_names(vec![
            Method::func("fooXY"),
            Method::func("foo").param(Parameter::new("x", int())),
            Method::func("foo").param(Parameter::new("x", string())),
            Method::func("foo")
                .param(Parameter::new("x", int()))
                .param(Parameter::new("y", int())),
        ])
    );
}
