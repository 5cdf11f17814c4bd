//! Tests for the fluent chain API.

use super::*;
use serde_json::json;

// =========================================================================
// Entry points and modifiers
// =========================================================================

#[test]
fn test_modifiers_are_identity() {
    expect(1)
        .at()
        .be()
        .been()
        .but()
        .does()
        .has()
        .have()
        .is()
        .of()
        .same()
        .that()
        .to()
        .which()
        .with()
        .equal(1);
}

#[test]
fn test_chain_without_terminal_asserts_nothing() {
    // A no-op chain is legal and must not panic.
    let chain = expect(json!({"a": 1})).to().be().not().file().json();
    assert!(chain.has_flag(Flag::Negate));
    assert!(chain.has_flag(Flag::File));
}

#[test]
fn test_flags_default_unset_on_fresh_chain() {
    let chain = expect(0);
    assert!(!chain.has_flag(Flag::Negate));
    assert!(!chain.has_flag(Flag::Contain));
    assert!(!chain.has_flag(Flag::Ordered));
}

#[test]
fn test_expect_macro_arities() {
    crate::expect!(3).to().equal(3);
    crate::expect!(3, "three is three").to().equal(3);
}

#[test]
fn test_mixin_trait_routes_to_same_chain() {
    struct Fixture;
    impl Expects for Fixture {}

    let fixture = Fixture;
    fixture.expect(5).to().equal(5);
    fixture.expect_with(5, "described").not().equal(6);
}

// =========================================================================
// Equality and negation
// =========================================================================

#[test]
fn test_equal_reflexive() {
    expect(json!({"k": [1, 2]})).to().equal(json!({"k": [1, 2]}));
    expect("v").to().equals("v");
}

#[test]
fn test_not_equal() {
    expect(5).not().to().equal(6);
    expect("a").to().not().equal("b");
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_equal_fails() {
    expect(5).to().equal(6);
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_negated_equal_fails_on_equal_values() {
    expect(5).not().to().equal(5);
}

#[test]
fn test_not_equal_distinguishes_large_integers() {
    // Neighbors above 2^53 are identical as f64 but are different values.
    expect(1152921504606846976i64)
        .not()
        .to()
        .equal(1152921504606846977i64);
    expect(u64::MAX).not().to().equal(u64::MAX - 1);
    expect(1152921504606846976i64).to().equal(1152921504606846976i64);
}

#[test]
fn test_equal_is_numeric_tolerant_but_identical_is_not() {
    expect(1).to().equal(1.0);
    expect(1).not().to().be().identical_to(1.0);
    expect(1).to().be().identical_to(1);
}

#[test]
fn test_negate_persists_for_the_whole_chain() {
    // Chain-scoped, not call-scoped: both terminals are negated.
    expect(json!({"a": 1})).not().property("b").equal(1);
}

// =========================================================================
// Ordering and ranges
// =========================================================================

#[test]
fn test_above_below_least_most() {
    expect(7).to().be().above(5.0);
    expect(7).to().be().below(10.0);
    expect(7).to().be().at().least(7.0);
    expect(7).to().be().at().most(7.0);
    expect(7).not().to().be().above(7.0);
}

#[test]
fn test_within_range() {
    expect(5).to().be().within(1.0, 10.0);
    expect(1).to().be().within(1.0, 10.0);
    expect(11).not().to().be().within(1.0, 10.0);
}

#[test]
fn test_close_to() {
    expect(10.2).to().be().close_to(10.0, 0.5);
    expect(10.2).not().to().be().close_to(10.0, 0.1);
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_above_fails_for_non_numbers() {
    expect("seven").to().be().above(5.0);
}

// =========================================================================
// Length flag and length terminals
// =========================================================================

#[test]
fn test_length_flag_composition() {
    expect(vec![1, 2, 3]).to().have().length().above(2.0);
    expect(vec![1, 2, 3]).to().have().length().equal(3);
    expect("héllo").to().have().length().within(4.0, 6.0);
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_length_flag_below_fails() {
    expect(vec![1, 2, 3]).to().have().length().below(2.0);
}

#[test]
#[should_panic(expected = "invalid argument")]
fn test_length_of_uncountable_target() {
    expect(true).to().have().length().above(0.0);
}

#[test]
fn test_length_of_numeric_argument() {
    expect(vec![1, 2, 3]).to().have().length_of(3);
    expect("word").to().have().length_of(4);
}

#[test]
fn test_length_of_textual_argument_compares_char_lengths() {
    expect("same").to().have().length_of("size");
    expect("longer").not().to().have().length_of("no");
}

// =========================================================================
// Containment
// =========================================================================

#[test]
fn test_contain_element() {
    expect(vec![1, 2, 3]).to().contain(2);
    expect(vec![1, 2, 3]).not().to().contain(9);
}

#[test]
fn test_contain_substring() {
    expect("hello world").to().contain("world");
    expect("hello world").not().to().contains("mars");
    expect("hello world").to().includes("hello");
}

#[test]
fn test_contain_zero_arg_form_only_sets_the_flag() {
    // Modifier mode: the flag is set, nothing is asserted, nothing panics.
    let chain = expect(vec![1, 2, 3]).to().access("contain");
    assert!(chain.has_flag(Flag::Contain));
    chain.equal(json!([1, 2, 3]));
}

#[test]
fn test_contain_only() {
    expect(json!(["x", "x", "x"])).to().contain_only("x");
    expect(json!(["x", "y"])).not().to().contain_only("x");
}

#[test]
fn test_one_of() {
    expect(2).to().be().one_of(vec![1, 2, 3]);
    expect(9).not().to().be().one_of(vec![1, 2, 3]);
}

// =========================================================================
// Emptiness
// =========================================================================

#[test]
fn test_is_empty_polymorphism() {
    expect("").is_empty();
    expect(Vec::<i32>::new()).is_empty();
    expect(json!({})).is_empty();
    expect(json!(null)).is_empty();
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_is_empty_fails_on_nonempty_string() {
    expect("a").is_empty();
}

#[test]
fn test_not_empty() {
    expect("a").not().is_empty();
    expect(json!({"k": 1})).not().is_empty();
}

// =========================================================================
// Strings
// =========================================================================

#[test]
fn test_matches_regex() {
    expect("build 42 ok").to().matches(r"build \d+ ok");
    expect("build failed").not().to().matches(r"\d+");
}

#[test]
#[should_panic(expected = "invalid argument")]
fn test_matches_invalid_pattern() {
    expect("x").to().matches("(unclosed");
}

#[test]
fn test_start_and_end_with() {
    expect("prefix-body-suffix").to().start_with("prefix");
    expect("prefix-body-suffix").to().end_with("suffix");
    expect("prefix-body-suffix").not().to().start_with("suffix");
}

// =========================================================================
// Property drill-down
// =========================================================================

#[test]
fn test_property_reassigns_target() {
    expect(json!({"a": {"b": 5}}))
        .property("a")
        .property("b")
        .equal(5);
}

#[test]
fn test_property_on_array_by_index() {
    expect(json!([10, 20, 30])).property("1").equal(20);
}

#[test]
fn test_property_eq() {
    expect(json!({"name": "chain"}))
        .property_eq("name", "chain")
        .equal("chain");
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_property_missing_key() {
    expect(json!({"a": 1})).property("b");
}

#[test]
#[should_panic(expected = "bad invocation")]
fn test_property_on_scalar_target() {
    expect(5).property("a");
}

// =========================================================================
// Type checks and scalar terminals
// =========================================================================

#[test]
fn test_true_false_null() {
    expect(true).to().be().true_();
    expect(false).to().be().false_();
    expect(json!(null)).to().be().null_();
    expect(true).not().to().be().false_();
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_true_fails_on_non_boolean() {
    expect(1).to().be().true_();
}

#[test]
fn test_a_an_type_checks() {
    expect("hi").to().be().a("string");
    expect(3).to().be().an("integer");
    expect(3.5).to().be().a("float");
    expect(json!([])).to().be().an("array");
    expect(json!({})).not().to().be().a("number");
}

#[test]
#[should_panic(expected = "invalid argument")]
fn test_a_unknown_kind() {
    expect(3).to().be().a("quaternion");
}

#[test]
fn test_satisfy() {
    expect(8).to().satisfy(|v| v.as_i64().is_some_and(|n| n % 2 == 0));
    expect(7).not().to().satisfy(|v| v.as_i64().is_some_and(|n| n % 2 == 0));
}

// =========================================================================
// Guarded terminals
// =========================================================================

#[test]
#[should_panic(expected = "bad invocation")]
fn test_exists_requires_path_flag() {
    expect("/tmp/somewhere").exists();
}

#[test]
#[should_panic(expected = "bad invocation")]
fn test_readable_requires_path_flag() {
    expect("/tmp/somewhere").readable();
}

#[test]
#[should_panic(expected = "bad invocation")]
fn test_writable_requires_path_flag() {
    expect("/tmp/somewhere").writable();
}

#[test]
#[should_panic(expected = "bad invocation")]
fn test_file_terminal_needs_string_target() {
    expect(42).file().exists();
}

// =========================================================================
// Accessor dispatch
// =========================================================================

#[test]
fn test_access_matches_explicit_calls() {
    expect(true).access("to").access("be").access("true");
    expect(true).to().be().true_();
    expect(false).access("to").access("be").access("false");
    expect(json!(null)).access("is").access("null");
    expect("").access("is").access("empty");
}

#[test]
fn test_access_flag_setters() {
    let chain = expect(1).access("not").access("length").access("ordered");
    assert!(chain.has_flag(Flag::Negate));
    assert!(chain.has_flag(Flag::Length));
    assert!(chain.has_flag(Flag::Ordered));
}

#[test]
#[should_panic(expected = "assertion failed")]
fn test_access_terminal_failure_matches_explicit_failure() {
    expect(false).access("to").access("be").access("true");
}

#[test]
#[should_panic(expected = "bad invocation: no accessor named `frobnicate`")]
fn test_access_unknown_name() {
    expect(1).access("frobnicate");
}

// =========================================================================
// Descriptions
// =========================================================================

#[test]
#[should_panic(expected = "the sizes should agree")]
fn test_description_appears_in_failure() {
    expect_with(vec![1, 2], "the sizes should agree")
        .to()
        .have()
        .length_of(3);
}

#[test]
fn test_cloned_chain_is_independent() {
    let negated = expect(5).not();
    let fork = negated.clone();
    negated.equal(6);
    fork.equal(9);
}
