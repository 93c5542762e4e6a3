//! Frame timing tests

use astrofall::utils::Timer;

#[test]
fn timer_counts_ticks() {
    let mut timer = Timer::new();
    assert_eq!(timer.frame_count, 0);
    timer.tick();
    timer.tick();
    assert_eq!(timer.frame_count, 2);
}

#[test]
fn elapsed_never_decreases_across_ticks() {
    let mut timer = Timer::new();
    timer.tick();
    let first = timer.elapsed;
    timer.tick();
    assert!(timer.elapsed >= first);
}
