use super::{finished, indicators, ms, progress_of, Bench};
use crate::{
    controller::{Event, ManualClock, Options, Outcome},
    database::DbEntry,
    presenter::Listing,
    session::State,
    submission::{DropZone, Submission},
    test::{mock::ScriptedEngine, usecase::RomCase},
    Algorithm, RomDatabase, E,
};
use std::{collections::BTreeSet, path::PathBuf};

#[test]
fn debounce_ends_before_delay() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    bench.start(0)?;
    let job = bench.engine.job(0);
    let mut events = bench.advance(ms(249));
    job.complete("supported");
    events.append(&mut bench.pump());
    events.append(&mut bench.advance(ms(2)));
    events.append(&mut bench.advance(ms(500)));
    assert!(indicators(&events).is_empty());
    assert_eq!(finished(&events).len(), 1);
    bench.clean()
}

#[test]
fn debounce_ends_after_delay() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    bench.start(0)?;
    let job = bench.engine.job(0);
    let events = bench.advance(ms(250));
    assert_eq!(indicators(&events), vec![true]);
    job.complete("supported");
    let events = bench.advance(ms(1));
    assert_eq!(indicators(&events), vec![false]);
    assert!(matches!(
        events.last(),
        Some(Event::Finished(_, Outcome::Completed { .. }))
    ));
    bench.clean()
}

#[test]
fn progress_is_monotonic() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    let a = bench.start(0)?;
    let job = bench.engine.job(0);
    for fraction in [0.5, 0.3, 0.5, f64::NAN, f64::INFINITY, 1.5, 0.9] {
        job.reporter.progress(fraction);
    }
    let events = bench.pump();
    assert_eq!(progress_of(&events, a), vec![0.5, 0.5, 1.0]);
    assert_eq!(bench.controller.session().map(|s| s.progress()), Some(1.0));
    bench.clean()
}

#[test]
fn nothing_after_terminal() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    let a = bench.start(0)?;
    let job = bench.engine.job(0);
    job.complete("unknown");
    job.reporter.progress(0.5);
    job.complete("supported");
    job.reporter.failed("late");
    let events = bench.pump();
    assert_eq!(finished(&events).len(), 1);
    assert!(progress_of(&events, a).is_empty());
    assert!(!bench.controller.is_hashing());
    bench.clean()
}

#[test]
fn invalid_input() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    assert!(matches!(
        bench.controller.start(PathBuf::new()),
        Err(E::InvalidInput(_))
    ));
    assert!(bench.controller.session().is_none());
    assert!(bench.drain().is_empty());
    let a = bench.start(0)?;
    let missing = bench.case.root.join("missing.nes");
    assert!(matches!(
        bench.controller.start(missing),
        Err(E::InvalidInput(_))
    ));
    assert_eq!(bench.engine.job(0).cancels(), 0, "active session isn't touched");
    assert_eq!(bench.controller.session().map(|s| s.id()), Some(a));
    assert!(bench.controller.is_hashing());
    bench.clean()
}

#[test]
fn engine_failure() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    let a = bench.start(0)?;
    let job = bench.engine.job(0);
    bench.advance(ms(300));
    assert!(bench.controller.indicator_visible());
    job.reporter.failed("read error");
    let events = bench.pump();
    assert_eq!(indicators(&events), vec![false]);
    assert!(matches!(
        finished(&events)[..],
        [(id, Outcome::Failed(E::EngineFailure(reason)))] if id == a && reason == "read error"
    ));
    assert_eq!(
        bench.controller.session().map(|s| s.state()),
        Some(State::Failed)
    );
    // No automatic retry
    assert_eq!(bench.engine.count(), 1);
    bench.clean()
}

#[test]
fn engine_refuses_job() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    bench.engine.refuse();
    let a = bench.start(0)?;
    let events = bench.drain();
    assert!(matches!(events.first(), Some(Event::Started(id, _)) if *id == a));
    assert!(matches!(
        finished(&events)[..],
        [(id, Outcome::Failed(E::EngineFailure(_)))] if id == a
    ));
    assert!(!bench.controller.is_hashing());
    assert!(indicators(&bench.advance(ms(500))).is_empty());
    bench.clean()
}

#[test]
fn unrecognized_tag_fails() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    let a = bench.start(0)?;
    bench.engine.job(0).complete("maybe");
    let events = bench.pump();
    assert!(matches!(
        finished(&events)[..],
        [(id, Outcome::Failed(E::UnrecognizedTag(tag)))] if id == a && tag == "maybe"
    ));
    let session = bench.controller.session().expect("last session is kept");
    assert_eq!(session.state(), State::Failed);
    assert!(session.result().is_none());
    bench.clean()
}

#[test]
fn requested_algorithms() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    bench.start(0)?;
    assert_eq!(bench.engine.job(0).algorithms, vec![Algorithm::Sha1]);
    assert_eq!(bench.engine.job(0).file.name(), "a.nes");
    bench.clean()
}

#[test]
fn submissions() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64), ("b.nes", 64)])?;
    assert_eq!(
        bench.controller.submit(&Submission::Dialog(Vec::new()))?,
        None
    );
    let mut zone = DropZone::new();
    zone.drag_over();
    let dropped = zone.drop(vec![None], Vec::new());
    assert!(matches!(
        bench.controller.submit(&dropped),
        Err(E::InvalidInput(_))
    ));
    let dropped = zone.drop(Vec::new(), vec![bench.case.files[1].clone()]);
    let id = bench.controller.submit(&dropped)?;
    assert!(id.is_some());
    assert_eq!(bench.engine.job(0).file.name(), "b.nes");
    bench.clean()
}

#[test]
fn database_listing() -> Result<(), E> {
    let bench = Bench::new(&[])?;
    let fetched = bench.controller.list_rom_database();
    assert!(matches!(fetched, Err(E::DatabaseFetchFailure(_))));
    assert!(matches!(Listing::from(fetched), Listing::Unavailable(_)));
    let mut db = RomDatabase::new();
    db.insert(
        "00ff",
        DbEntry {
            name: String::from("Ocarina of Time"),
            supported: true,
            region: String::from("PAL"),
            formats: BTreeSet::new(),
            master_quest: true,
        },
    )
    .map_err(E::from)?;
    bench.engine.set_database(db);
    let Listing::Rows(rows) = Listing::from(bench.controller.list_rom_database()) else {
        panic!("expecting rows");
    };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].master_quest, "Yes");
    bench.clean()
}

#[test]
fn events_wait_for_receiver() -> Result<(), E> {
    let case = RomCase::new(&[("a.nes", 64)])?;
    let engine = ScriptedEngine::default();
    let mut controller =
        Options::new().controller_with_clock(engine.clone(), ManualClock::default());
    let a = controller.start(&case.files[0])?;
    engine.job(0).complete("unknown");
    controller.pump();
    let events = controller.events().expect("events receiver is available");
    assert!(controller.events().is_none(), "receiver is taken once");
    let queued: Vec<Event> = events.try_iter().collect();
    assert!(matches!(queued.first(), Some(Event::Started(id, _)) if *id == a));
    assert!(matches!(
        finished(&queued)[..],
        [(id, Outcome::Completed { .. })] if id == a
    ));
    // Receiver is gone: events are discarded, the controller keeps working
    drop(events);
    controller.start(&case.files[0])?;
    engine.job(1).complete("supported");
    controller.pump();
    assert!(!controller.is_hashing());
    case.clean()?;
    Ok(())
}
