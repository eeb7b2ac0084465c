use mutation_csv_report::*;

#[test]
fn root_exports_cover_listener_construction() {
    let record = MutationRecord::new("a.rs", "a", "f", 3, DetectionStatus::MemoryError);
    assert_eq!(format_record(&record), "a.rs,a,f,3,MEMORY_ERROR,none");
    assert_eq!(NO_KILLING_TEST, "none");
    assert_eq!(MUTATIONS_CSV, "mutations.csv");

    let mut group = ListenerGroup::new().with_listener(Box::new(CsvReportListener::new(
        Vec::<u8>::new(),
    )));
    dispatch(&mut group, &RunEvent::RunStarted).expect("run start should dispatch");
    dispatch(&mut group, &RunEvent::RunEnded).expect("run end should dispatch");
}
