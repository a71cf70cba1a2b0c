//! Integration tests for the preflight sequence through the public API.

use cairn::preflight::{self, MockToolchain, PreflightOptions};
use cairn::ui::MockSink;
use cairn::version::Version;
use cairn::CairnError;

fn opts(refetch: bool) -> PreflightOptions {
    PreflightOptions {
        refetch,
        minimum: Version::new(2, 1, 0),
    }
}

#[test]
fn installed_version_above_minimum_launches_server() {
    let tools = MockToolchain::new()
        .with_version_output("ruby 2.6.10p210 (2022-04-12 revision 67958) [x86_64-darwin21]");
    let mut sink = MockSink::new();

    preflight::run(&opts(false), &tools, &mut sink).unwrap();

    assert!(sink.contains("Ruby version v2.6.10 found..."));
    assert!(sink.contains("Starting server..."));
    assert_eq!(tools.calls().last(), Some(&"serve"));
}

#[test]
fn installed_version_at_minimum_passes() {
    let tools = MockToolchain::new()
        .with_version_output("ruby 2.1.0p0 (2013-12-25 revision 44422) [x86_64-linux]");
    let mut sink = MockSink::new();

    assert!(preflight::run(&opts(false), &tools, &mut sink).is_ok());
}

#[test]
fn installed_version_below_minimum_aborts_naming_both_versions() {
    let tools = MockToolchain::new()
        .with_version_output("ruby 1.9.3p0 (2011-10-30 revision 33570) [x86_64-linux]");
    let mut sink = MockSink::new();

    let err = preflight::run(&opts(false), &tools, &mut sink).unwrap_err();

    let msg = err.to_string();
    assert!(msg.contains("v1.9.3"));
    assert!(msg.contains("v2.1.0"));
    assert!(!tools.calls().contains(&"serve"));
}

#[test]
fn absent_manager_without_refetch_runs_nothing() {
    let tools = MockToolchain::new().with_manager_present(false);
    let mut sink = MockSink::new();

    let err = preflight::run(&opts(false), &tools, &mut sink).unwrap_err();

    assert!(matches!(err, CairnError::SetupRequired { .. }));
    let calls = tools.calls();
    assert!(!calls.contains(&"install_manager"));
    assert!(!calls.contains(&"resolve_dependencies"));
    assert!(!calls.contains(&"serve"));
}

#[test]
fn failed_install_never_reaches_dependency_resolution() {
    let tools = MockToolchain::new().with_install_exit(1);
    let mut sink = MockSink::new();

    let err = preflight::run(&opts(true), &tools, &mut sink).unwrap_err();

    assert!(matches!(err, CairnError::SetupFailed { .. }));
    assert!(!tools.calls().contains(&"resolve_dependencies"));
    assert!(!tools.calls().contains(&"serve"));
}

#[test]
fn refetch_skips_the_presence_probe() {
    let tools = MockToolchain::new().with_manager_present(false);
    let mut sink = MockSink::new();

    // With --refetch the manager gets installed, so its current absence
    // is irrelevant and the probe must not run.
    preflight::run(&opts(true), &tools, &mut sink).unwrap();

    assert!(!tools.calls().contains(&"manager_on_path"));
    assert!(tools.calls().contains(&"serve"));
}

#[test]
fn higher_configured_minimum_rejects_otherwise_fine_interpreter() {
    let tools = MockToolchain::new().with_version_output("ruby 2.6.10p210");
    let mut sink = MockSink::new();
    let opts = PreflightOptions {
        refetch: false,
        minimum: Version::new(3, 0, 0),
    };

    let err = preflight::run(&opts, &tools, &mut sink).unwrap_err();
    assert!(matches!(err, CairnError::PrerequisiteOutdated { .. }));
}
