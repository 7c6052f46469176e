// tests/executor.rs

use std::error::Error;

use taskgate::dag::Registry;
use taskgate::engine::{resolve, Executor, Run, RunOutcome, TaskState, LAUNCH_FAILURE_EXIT_CODE};
use taskgate::errors::TaskgateError;
use taskgate_test_utils::builders::{chain_registry, gate_registry, stub};
use taskgate_test_utils::fake_runner::FakeRunner;
use taskgate_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn check_runs_all_leaves_in_declared_order() -> TestResult {
    init_tracing();
    let registry = gate_registry();
    let mut executor = Executor::new(&registry, FakeRunner::new())?;

    let report = executor.run("check")?;

    assert_eq!(report.outcome, RunOutcome::Success);
    assert_eq!(report.exit_code(), 0);
    assert_eq!(
        executor.runner().invoked(),
        ["test", "codestyle", "docstyle", "lint"]
    );
    assert_eq!(
        report.executed,
        ["test", "codestyle", "docstyle", "lint", "check"]
    );
    Ok(())
}

#[test]
fn failing_docstyle_halts_before_lint() -> TestResult {
    init_tracing();
    let registry = gate_registry();
    let runner = FakeRunner::new().exit_with("docstyle", 2);
    let mut executor = Executor::new(&registry, runner)?;

    let report = executor.run("check")?;

    assert_eq!(
        report.outcome,
        RunOutcome::Failed {
            task: "docstyle".to_string(),
            exit_code: 2,
        }
    );
    assert_eq!(report.exit_code(), 2);
    assert_eq!(report.failed_task(), Some("docstyle"));
    assert_eq!(executor.runner().invoked(), ["test", "codestyle", "docstyle"]);
    assert_eq!(executor.runner().times_invoked("lint"), 0);
    assert_eq!(report.executed, ["test", "codestyle"]);
    Ok(())
}

#[test]
fn first_leaf_failure_stops_everything() -> TestResult {
    let registry = gate_registry();
    let runner = FakeRunner::new().exit_with("test", 1);
    let mut executor = Executor::new(&registry, runner)?;

    let report = executor.run("check")?;

    assert_eq!(report.exit_code(), 1);
    assert_eq!(executor.runner().invoked(), ["test"]);
    assert!(report.executed.is_empty());
    Ok(())
}

#[test]
fn unknown_task_fails_without_running_anything() -> TestResult {
    let registry = gate_registry();
    let mut executor = Executor::new(&registry, FakeRunner::new())?;

    match executor.run("ghost") {
        Err(TaskgateError::UnknownTask(name)) => assert_eq!(name, "ghost"),
        other => panic!("expected UnknownTask, got {:?}", other),
    }
    assert!(executor.runner().invoked().is_empty());
    Ok(())
}

#[test]
fn missing_program_reports_launch_sentinel() -> TestResult {
    let registry = gate_registry();
    let runner = FakeRunner::new().not_started("codestyle");
    let mut executor = Executor::new(&registry, runner)?;

    let report = executor.run("check")?;

    assert_eq!(report.failed_task(), Some("codestyle"));
    assert_eq!(report.exit_code(), LAUNCH_FAILURE_EXIT_CODE);
    assert_eq!(executor.runner().invoked(), ["test", "codestyle"]);
    Ok(())
}

#[test]
fn shared_prerequisite_runs_once() -> TestResult {
    let mut registry = Registry::new();
    registry.register("setup", &[], Some(stub("setup")))?;
    registry.register("unit", &["setup"], Some(stub("unit")))?;
    registry.register("style", &["setup"], Some(stub("style")))?;
    registry.register("all", &["unit", "style", "setup"], None)?;

    let mut executor = Executor::new(&registry, FakeRunner::new())?;
    let report = executor.run("all")?;

    assert!(report.is_success());
    assert_eq!(executor.runner().invoked(), ["setup", "unit", "style"]);
    assert_eq!(executor.runner().times_invoked("setup"), 1);
    Ok(())
}

#[test]
fn prerequisites_run_before_dependents_in_a_chain() -> TestResult {
    let mut registry = Registry::new();
    registry.register("package", &["build"], Some(stub("package")))?;
    registry.register("build", &["fetch"], Some(stub("build")))?;
    registry.register("fetch", &[], Some(stub("fetch")))?;

    let mut executor = Executor::new(&registry, FakeRunner::new())?;
    executor.run("package")?;

    assert_eq!(executor.runner().invoked(), ["fetch", "build", "package"]);
    Ok(())
}

#[test]
fn leaf_task_can_be_requested_directly() -> TestResult {
    let registry = gate_registry();
    let mut executor = Executor::new(&registry, FakeRunner::new())?;

    let report = executor.run("lint")?;

    assert!(report.is_success());
    assert_eq!(report.requested, "lint");
    assert_eq!(executor.runner().invoked(), ["lint"]);
    Ok(())
}

#[test]
fn each_run_starts_from_a_clean_slate() -> TestResult {
    let registry = gate_registry();
    let mut executor = Executor::new(&registry, FakeRunner::new())?;

    executor.run("check")?;
    executor.run("check")?;

    // Deduplication is per run, so the second run repeats the same sequence.
    assert_eq!(
        executor.runner().invoked(),
        [
            "test", "codestyle", "docstyle", "lint", "test", "codestyle", "docstyle", "lint"
        ]
    );
    Ok(())
}

#[test]
fn executor_refuses_cyclic_registry() {
    let mut registry = Registry::new();
    registry.register("a", &["b"], Some(stub("a"))).unwrap();
    registry.register("b", &["a"], Some(stub("b"))).unwrap();

    match Executor::new(&registry, FakeRunner::new()) {
        Err(TaskgateError::CyclicDependency(members)) => assert_eq!(members, ["a", "b"]),
        other => panic!("expected CyclicDependency, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn resolution_detects_cycle_before_any_action() {
    let mut registry = Registry::new();
    registry.register("first", &[], Some(stub("first"))).unwrap();
    registry.register("a", &["b"], Some(stub("a"))).unwrap();
    registry.register("b", &["a"], Some(stub("b"))).unwrap();
    registry.register("gate", &["first", "a"], None).unwrap();

    match resolve(&registry, "gate") {
        Err(TaskgateError::CyclicDependency(members)) => assert_eq!(members, ["a", "b"]),
        other => panic!("expected CyclicDependency, got {:?}", other),
    }
}

#[test]
fn plan_lists_order_without_invoking() -> TestResult {
    let registry = gate_registry();
    let executor = Executor::new(&registry, FakeRunner::new())?;

    let plan: Vec<&str> = executor
        .plan("check")?
        .iter()
        .map(|t| t.name.as_str())
        .collect();

    assert_eq!(plan, ["test", "codestyle", "docstyle", "lint", "check"]);
    assert!(executor.runner().invoked().is_empty());
    Ok(())
}

#[test]
fn actions_receive_their_declared_arguments() -> TestResult {
    let registry = gate_registry();
    let mut executor = Executor::new(&registry, FakeRunner::new())?;

    executor.run("docstyle")?;

    assert_eq!(executor.runner().actions(), [stub("docstyle")]);
    Ok(())
}

#[test]
fn run_states_only_move_forward() {
    let mut run = Run::new("check");
    assert_eq!(run.requested(), "check");
    assert_eq!(run.state_of("test"), None);

    assert!(run.begin("test"));
    assert_eq!(run.state_of("test"), Some(TaskState::InProgress));
    assert!(!run.begin("test"));

    run.mark_executed("test");
    assert!(run.has_executed("test"));
    assert!(run.state_of("test").is_some_and(TaskState::is_terminal));

    // Terminal states are sticky.
    run.mark_failed("test");
    assert_eq!(run.state_of("test"), Some(TaskState::Executed));

    assert!(run.begin("lint"));
    run.mark_failed("lint");
    assert_eq!(run.state_of("lint"), Some(TaskState::Failed));

    let report = run.into_report(RunOutcome::Failed {
        task: "lint".to_string(),
        exit_code: 9,
    });
    assert_eq!(report.executed, ["test"]);
    assert_eq!(report.exit_code(), 9);
}

#[test]
fn executor_hands_back_its_runner() -> TestResult {
    let registry = gate_registry();
    let mut executor = Executor::new(&registry, FakeRunner::new())?;
    executor.run("codestyle")?;

    let runner = executor.into_runner();
    assert_eq!(runner.invoked(), ["codestyle"]);
    Ok(())
}

#[test]
fn deep_chain_resolves_bottom_up() -> TestResult {
    let registry = chain_registry(100_000);

    let plan = resolve(&registry, "t99999")?;

    assert_eq!(plan.len(), 100_000);
    assert_eq!(plan[0].name, "t0");
    assert_eq!(plan[50_000].name, "t50000");
    assert_eq!(plan[99_999].name, "t99999");
    Ok(())
}

#[test]
fn deep_chain_runs_every_link_once() -> TestResult {
    let registry = chain_registry(100_000);
    let mut executor = Executor::new(&registry, FakeRunner::new())?;

    let report = executor.run("t99999")?;

    assert!(report.is_success());
    assert_eq!(executor.runner().invoked().len(), 100_000);
    assert_eq!(executor.runner().invoked()[0], "t0");
    Ok(())
}

#[test]
fn deep_cycle_names_every_member() {
    let len = 10_000;
    let mut registry = Registry::new();
    for i in 0..len {
        let next = format!("t{}", (i + 1) % len);
        registry
            .register(format!("t{i}"), &[next.as_str()], Some(stub("link")))
            .unwrap();
    }

    match resolve(&registry, "t0") {
        Err(TaskgateError::CyclicDependency(members)) => {
            assert_eq!(members.len(), len);
            assert!(members.iter().any(|m| m == "t0"));
            assert!(members.iter().any(|m| m == "t9999"));
        }
        other => panic!("expected CyclicDependency, got {:?}", other.map(|p| p.len())),
    }
}

#[test]
fn self_dependency_is_a_single_member_cycle() {
    let mut registry = Registry::new();
    registry.register("loop", &["loop"], Some(stub("loop"))).unwrap();

    match resolve(&registry, "loop") {
        Err(TaskgateError::CyclicDependency(members)) => assert_eq!(members, ["loop"]),
        other => panic!("expected CyclicDependency, got {:?}", other.map(|p| p.len())),
    }
}
