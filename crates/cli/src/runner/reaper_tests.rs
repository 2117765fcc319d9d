#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use rstest::rstest;
use tokio::time::{timeout, Instant};

const SHORT: Duration = Duration::from_millis(30);
const LONG: Duration = Duration::from_secs(30);

#[tokio::test]
async fn disarmed_before_grace_never_fires() {
    let watchdog = Watchdog::new(LONG);
    let reaper = watchdog.arm(ReapAction::Kill);

    let started = Instant::now();
    assert!(!reaper.disarm().await);
    assert!(started.elapsed() < LONG);
}

#[tokio::test]
async fn fires_after_grace() {
    let watchdog = Watchdog::new(SHORT);
    let mut reaper = watchdog.arm(ReapAction::CloseOutput);

    let started = Instant::now();
    let action = timeout(Duration::from_secs(5), reaper.fired()).await.unwrap();

    assert_eq!(action, ReapAction::CloseOutput);
    assert!(started.elapsed() >= SHORT);
    assert!(reaper.disarm().await);
}

#[tokio::test]
async fn fires_exactly_once() {
    let watchdog = Watchdog::new(SHORT);
    let mut reaper = watchdog.arm(ReapAction::CloseError);

    let first = timeout(Duration::from_secs(5), reaper.fired()).await;
    assert_eq!(first.unwrap(), ReapAction::CloseError);

    let second = timeout(SHORT * 4, reaper.fired()).await;
    assert!(second.is_err(), "a reaper must not fire twice");
}

#[tokio::test]
async fn operation_finishing_first_wins_the_race() {
    let watchdog = Watchdog::new(LONG);
    let mut reaper = watchdog.arm(ReapAction::Kill);

    let fired = tokio::select! {
        _ = tokio::time::sleep(SHORT) => false,
        _ = reaper.fired() => true,
    };

    assert!(!fired);
    assert!(!reaper.disarm().await);
}

#[tokio::test]
async fn fired_is_cancel_safe() {
    let watchdog = Watchdog::new(Duration::from_millis(80));
    let mut reaper = watchdog.arm(ReapAction::Kill);

    // Poll and abandon the future a few times before the deadline
    for _ in 0..3 {
        let early = timeout(Duration::from_millis(10), reaper.fired()).await;
        assert!(early.is_err());
    }

    let action = timeout(Duration::from_secs(5), reaper.fired()).await.unwrap();
    assert_eq!(action, ReapAction::Kill);
}

#[tokio::test]
async fn reapers_fire_independently() {
    let watchdog = Watchdog::new(SHORT);
    let mut first = watchdog.arm(ReapAction::CloseOutput);
    let second = watchdog.arm(ReapAction::CloseError);

    // Disarming one leaves the other running
    assert!(!second.disarm().await);
    let action = timeout(Duration::from_secs(5), first.fired()).await.unwrap();
    assert_eq!(action, ReapAction::CloseOutput);
}

#[tokio::test]
async fn dropping_a_reaper_disarms_it() {
    let watchdog = Watchdog::new(LONG);
    let reaper = watchdog.arm(ReapAction::Kill);
    drop(reaper);
    // Nothing to observe beyond not hanging the runtime on shutdown
    tokio::task::yield_now().await;
}

#[rstest]
#[case(ReapAction::CloseInput, "close-input")]
#[case(ReapAction::CloseOutput, "close-output")]
#[case(ReapAction::CloseError, "close-error")]
#[case(ReapAction::Kill, "kill")]
fn action_display(#[case] action: ReapAction, #[case] expected: &str) {
    assert_eq!(action.to_string(), expected);
}

#[test]
fn watchdog_reports_grace() {
    assert_eq!(Watchdog::new(SHORT).grace(), SHORT);
}
