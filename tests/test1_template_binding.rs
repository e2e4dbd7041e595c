use std::borrow::Cow;

use pg_simple::{PgSimpleError, bind_template};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[test]
fn enough_args_substitute_in_order_and_ignore_the_rest() {
    // k placeholders, a >= k arguments: first k consumed, trailing ignored.
    let cases: &[(&str, &[&str], &str)] = &[
        ("a?b?c", &["X", "Y"], "aXbYc"),
        ("a?b?c", &["X", "Y", "Z"], "aXbYc"),
        ("?", &["only"], "only"),
        ("??", &["X", "Y"], "XY"),
        ("select 1", &["ignored"], "select 1"),
        ("", &[], ""),
        ("? and ?", &["", ""], " and "),
    ];

    for (template, arg_list, expected) in cases {
        let bound = bind_template(template, &args(arg_list)).unwrap();
        assert_eq!(&bound, expected, "template {template:?}");
    }
}

#[test]
fn identity_case_borrows() {
    let bound = bind_template("no placeholders", &[]).unwrap();
    assert!(matches!(bound, Cow::Borrowed(_)));
    assert_eq!(bound, "no placeholders");
}

#[test]
fn too_few_args_fail_at_first_unbound_placeholder() {
    for (template, arg_list) in [
        ("?", &[][..]),
        ("??", &["X"][..]),
        ("a?b?c?d", &["X", "Y"][..]),
    ] {
        let err = bind_template(template, &args(arg_list)).unwrap_err();
        assert!(
            matches!(err, PgSimpleError::InsufficientArguments),
            "template {template:?}"
        );
        assert_eq!(err.to_string(), "Not enough arguments for format.\n");
    }
}

#[test]
fn values_are_spliced_verbatim() {
    // No quoting or escaping happens at this layer.
    let bound = bind_template(
        "insert into t values (?, ?)",
        &args(&["it's", "a \"quote\""]),
    )
    .unwrap();
    assert_eq!(bound, "insert into t values (it's, a \"quote\")");
}
