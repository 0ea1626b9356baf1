//! trybuild compile-time tests for auto_service_macros

#[test]
fn trybuild_auto_service_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/ok_auto_service.rs");
}
