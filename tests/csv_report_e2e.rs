use std::fs;
use std::path::PathBuf;

use tempfile::tempdir;

use mutation_csv_report::{
    CsvReportListener, Description, DetectionStatus, DirectoryOutputStrategy, LINE_SEPARATOR,
    ListenerGroup, MUTATIONS_CSV, MutationMetadata, MutationRecord, NoCoverage, ReportConfig,
    SourceLocator, TestListener, TestOutcome,
};

struct NoSources;

impl SourceLocator for NoSources {
    fn locate(&self, _class_names: &[String], _file_name: &str) -> Option<PathBuf> {
        None
    }
}

fn two_mutation_outcome() -> TestOutcome {
    TestOutcome::new(Description::new("testBar").with_test_class("com.x.FooTest"))
        .with_mutation_metadata(MutationMetadata::new(vec![
            MutationRecord::new("Foo.java", "com.x.Foo", "bar", 10, DetectionStatus::Killed)
                .with_killing_test("TestA"),
            MutationRecord::new("Foo.java", "com.x.Foo", "baz", 20, DetectionStatus::Survived),
        ]))
}

#[test]
fn e2e_directory_report_contains_exact_rows() {
    let tmp = tempdir().expect("tempdir should be created");
    let config = ReportConfig::default().with_report_dir(tmp.path().join("reports"));
    let strategy = DirectoryOutputStrategy::from_config(&config, 1_700_000_000_000);
    let locators: Vec<Box<dyn SourceLocator>> = vec![Box::new(NoSources)];

    let mut listener =
        CsvReportListener::from_strategy(&NoCoverage, 1_700_000_000_000, &strategy, &locators)
            .expect("listener should build");

    listener.on_run_start().expect("run start");
    listener
        .on_test_start(&Description::new("testBar"))
        .expect("test start");
    listener
        .on_test_success(&two_mutation_outcome())
        .expect("rows should write");
    listener
        .on_test_success(&TestOutcome::new(Description::new("plain")))
        .expect("plain outcome is a no-op");
    listener.on_run_end().expect("report should close");

    let text = fs::read_to_string(tmp.path().join("reports").join(MUTATIONS_CSV))
        .expect("report should be readable");
    assert_eq!(
        text,
        format!(
            "Foo.java,com.x.Foo,bar,10,KILLED,TestA{LINE_SEPARATOR}Foo.java,com.x.Foo,baz,20,SURVIVED,none{LINE_SEPARATOR}"
        )
    );
    for line in text.lines() {
        assert_eq!(line.split(',').count(), 6);
    }
}

#[test]
fn e2e_empty_run_still_produces_closed_empty_report() {
    let tmp = tempdir().expect("tempdir should be created");
    let config = ReportConfig::default()
        .with_report_dir(tmp.path())
        .with_timestamped_reports(true);
    let strategy = DirectoryOutputStrategy::from_config(&config, 42);

    let mut listener = CsvReportListener::from_strategy(&NoCoverage, 42, &strategy, &[])
        .expect("listener should build");
    listener.on_run_start().expect("run start");
    listener.on_run_end().expect("report should close");
    listener.on_run_end().expect("second run end is a no-op");

    let text = fs::read_to_string(tmp.path().join("42").join(MUTATIONS_CSV))
        .expect("report should exist");
    assert!(text.is_empty());
}

#[test]
fn e2e_group_writes_independent_reports() {
    let tmp = tempdir().expect("tempdir should be created");
    let first = DirectoryOutputStrategy::new(tmp.path().join("first"));
    let second = DirectoryOutputStrategy::new(tmp.path().join("second"));

    let mut group = ListenerGroup::new()
        .with_listener(Box::new(
            CsvReportListener::from_strategy(&NoCoverage, 0, &first, &[])
                .expect("first listener should build"),
        ))
        .with_listener(Box::new(
            CsvReportListener::from_strategy(&NoCoverage, 0, &second, &[])
                .expect("second listener should build"),
        ));

    group
        .on_test_failure(&two_mutation_outcome())
        .expect("rows should write");
    group.on_run_end().expect("reports should close");

    let a = fs::read_to_string(first.path_for(MUTATIONS_CSV)).expect("first report");
    let b = fs::read_to_string(second.path_for(MUTATIONS_CSV)).expect("second report");
    assert_eq!(a, b);
    assert_eq!(a.lines().count(), 2);
}
