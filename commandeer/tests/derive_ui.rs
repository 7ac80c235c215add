#![cfg(feature = "macros")]

#[test]
fn injectable_ui() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/inject_on_type.rs");
}
