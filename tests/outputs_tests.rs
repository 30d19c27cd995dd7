use std::fs::File;

use tempfile::TempDir;
use tracing_test::traced_test;

use numpath::errors::NpError;
use numpath::outputs::{check_enabled, check_enabled_for, current_test_name};
use numpath::{CaseOutputs, TestOutputs};

#[traced_test]
#[test]
fn creates_test_outputs_root() {
    let td = TempDir::new().unwrap();
    let outputs = TestOutputs::in_context(td.path()).unwrap();
    assert_eq!(outputs.root(), td.path().join("target").join("test-outputs"));
    assert!(outputs.root().is_dir());
    assert!(logs_contain("created output directory"));
}

#[test]
fn missing_context_is_rejected() {
    let td = TempDir::new().unwrap();
    let res = TestOutputs::in_context(&td.path().join("nope"));
    assert!(matches!(res, Err(NpError::NotADirectory { .. })));
}

#[test]
fn output_dir_is_a_pure_join() {
    let td = TempDir::new().unwrap();
    let outputs = TestOutputs::in_context(td.path()).unwrap();
    let dir = outputs.output_dir("SomeCase");
    assert_eq!(dir, outputs.root().join("SomeCase"));
    assert!(!dir.exists());
}

#[test]
fn run_paths_number_per_method() {
    let td = TempDir::new().unwrap();
    let case = CaseOutputs::in_context(td.path(), "WidgetCase").unwrap();

    let first = case.run_path("writes_widget").unwrap();
    assert_eq!(first.file_name().unwrap(), "RUN-01");
    assert_eq!(first.parent().unwrap(), case.dir().join("writes_widget"));
    assert!(!first.exists());

    // a fresh probe before the first run materializes lands on the same slot
    assert_eq!(case.run_path("writes_widget").unwrap(), first);

    File::create(&first).unwrap();
    let second = case.run_path("writes_widget").unwrap();
    assert_eq!(second.file_name().unwrap(), "RUN-02");

    // run numbering is per method
    let other = case.run_path("reads_widget").unwrap();
    assert_eq!(other.file_name().unwrap(), "RUN-01");
}

#[test]
fn run_path_affixes_are_configurable() {
    let td = TempDir::new().unwrap();
    let case = CaseOutputs::in_context(td.path(), "DumpCase").unwrap();
    let path = case.run_path_with("dumps_state", "dump-", ".bin").unwrap();
    assert_eq!(path.file_name().unwrap(), "dump-01.bin");
}

#[test]
fn method_dir_is_stable_across_calls() {
    let td = TempDir::new().unwrap();
    let case = CaseOutputs::in_context(td.path(), "StableCase").unwrap();
    let a = case.method_dir("does_things").unwrap();
    let b = case.method_dir("does_things").unwrap();
    assert_eq!(a, b);
    assert!(a.is_dir());
}

#[test]
fn run_cap_is_99_per_method() {
    let td = TempDir::new().unwrap();
    let case = CaseOutputs::in_context(td.path(), "BusyCase").unwrap();
    for _ in 0..99 {
        let path = case.run_path("runs_often").unwrap();
        File::create(path).unwrap();
    }
    let res = case.run_path("runs_often");
    assert!(matches!(res, Err(NpError::Exhausted { limit: 100 })));
}

#[test]
fn current_test_name_names_this_function() {
    assert_eq!(current_test_name().unwrap(), "current_test_name_names_this_function");
}

#[test]
fn check_enabled_reads_environment() {
    assert!(!check_enabled("NUMPATH_TEST_UNSET_GATE"));
    std::env::set_var("NUMPATH_TEST_SET_GATE", "1");
    assert!(check_enabled("NUMPATH_TEST_SET_GATE"));
    std::env::set_var("NUMPATH_TEST_SET_GATE", "TRUE");
    assert!(check_enabled_for("NUMPATH_TEST_SET_GATE", Some("slow_test")));
    std::env::set_var("NUMPATH_TEST_SET_GATE", "no");
    assert!(!check_enabled("NUMPATH_TEST_SET_GATE"));
    std::env::remove_var("NUMPATH_TEST_SET_GATE");
}
