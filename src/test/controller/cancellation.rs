use super::{finished, indicators, ms, Bench};
use crate::{
    controller::Outcome,
    presenter::{Screen, Status},
    session::State,
    E,
};

#[test]
fn cancel_twice() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    let a = bench.start(0)?;
    let job = bench.engine.job(0);
    bench.controller.cancel();
    bench.controller.cancel();
    assert_eq!(job.cancels(), 1);
    assert!(job.breaker.is_aborted());
    assert!(
        bench.controller.is_hashing(),
        "session is cancelled once the engine confirms"
    );
    job.reporter.cancelled();
    job.reporter.cancelled();
    let events = bench.pump();
    assert!(matches!(finished(&events)[..], [(id, Outcome::Cancelled)] if id == a));
    bench.controller.cancel();
    assert_eq!(job.cancels(), 1);
    assert!(finished(&bench.pump()).is_empty());
    assert_eq!(
        bench.controller.session().map(|s| s.state()),
        Some(State::Cancelled)
    );
    bench.clean()
}

#[test]
fn cancel_without_session() -> Result<(), E> {
    let mut bench = Bench::new(&[])?;
    bench.controller.cancel();
    bench.controller.cancel();
    assert!(bench.pump().is_empty());
    assert!(bench.controller.session().is_none());
    bench.clean()
}

#[test]
fn cancel_hides_indicator_and_restores_view() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64), ("b.nes", 64)])?;
    let mut screen = Screen::new();
    bench.start(0)?;
    bench.engine.job(0).complete("supported");
    for event in bench.pump().iter() {
        screen.apply(event);
    }
    assert_eq!(screen.status(), &Status::Supported);
    bench.start(1)?;
    let job = bench.engine.job(1);
    let mut events = bench.advance(ms(300));
    bench.controller.cancel();
    job.reporter.progress(0.4);
    job.reporter.cancelled();
    events.append(&mut bench.pump());
    assert_eq!(indicators(&events), vec![true, false]);
    for event in events.iter() {
        screen.apply(event);
    }
    assert_eq!(screen.status(), &Status::Supported);
    assert_eq!(screen.game_name(), Some("a.nes"));
    assert!(!screen.is_busy());
    bench.clean()
}

#[test]
fn engine_completes_despite_cancel() -> Result<(), E> {
    let mut bench = Bench::new(&[("a.nes", 64)])?;
    let a = bench.start(0)?;
    bench.controller.cancel();
    bench.engine.job(0).complete("unknown");
    let events = bench.pump();
    assert!(matches!(
        finished(&events)[..],
        [(id, Outcome::Completed { .. })] if id == a
    ));
    bench.clean()
}
