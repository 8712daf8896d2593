// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks for the two shared components and the login flow.

use iced_campus::submission::{
    FormKind, SimulatedBackend, SubmissionError, SubmissionService,
};
use iced_campus::ui::notifications::{Center, Notification, Phase};
use iced_campus::ui::rotator::{Rotator, SwipeDirection, SWIPE_THRESHOLD};
use iced_campus::ui::screens::auth;
use iced_campus::ui::screens::Event;
use std::time::Duration;

// =============================================================================
// Rotator laws
// =============================================================================

#[test]
fn go_to_always_lands_on_the_wrapped_index() {
    for len in 1..=6usize {
        let mut rotator = Rotator::new(len, Duration::from_secs(4));
        for index in -13isize..=13 {
            rotator.go_to(index);
            let n = len as isize;
            let expected = (((index % n) + n) % n) as usize;
            assert_eq!(rotator.current(), expected, "len={len} index={index}");
            assert!(rotator.current() < len);
        }
    }
}

#[test]
fn next_prev_round_trip_is_identity() {
    for len in 2..=6usize {
        for start in 0..len {
            let mut rotator = Rotator::new(len, Duration::from_secs(4)).starting_at(start);

            rotator.next();
            rotator.prev();
            assert_eq!(rotator.current(), start);

            rotator.prev();
            rotator.next();
            assert_eq!(rotator.current(), start);
        }
    }
}

#[test]
fn swipe_threshold_is_exact() {
    // 49 px: below threshold, no change
    let mut rotator = Rotator::new(5, Duration::from_secs(4));
    rotator.swipe_start(100.0);
    assert_eq!(rotator.swipe_end(100.0 - 49.0), None);
    assert_eq!(rotator.current(), 0);

    // 51 px leftward: exactly one step forward
    rotator.swipe_start(100.0);
    assert_eq!(
        rotator.swipe_end(100.0 - 51.0),
        Some(SwipeDirection::Next)
    );
    assert_eq!(rotator.current(), 1);

    // 51 px rightward: exactly one step back
    rotator.swipe_start(100.0);
    assert_eq!(
        rotator.swipe_end(100.0 + 51.0),
        Some(SwipeDirection::Prev)
    );
    assert_eq!(rotator.current(), 0);

    // The threshold itself does not trigger
    rotator.swipe_start(0.0);
    assert_eq!(rotator.swipe_end(SWIPE_THRESHOLD), None);
}

// =============================================================================
// Notification center laws
// =============================================================================

#[test]
fn two_rapid_notifies_leave_exactly_the_second() {
    let mut center = Center::new();
    center.show(Notification::success("first"));
    center.show(Notification::error("second"));

    let current = center.current().expect("one toast should be displayed");
    assert_eq!(current.lines()[0].key(), "second");
}

#[test]
fn toast_survives_its_full_lifetime_then_leaves() {
    let mut center = Center::new();
    center.show(Notification::info("hello").with_lifetime(Duration::from_millis(5000)));

    let toast = center.current().expect("toast should be displayed");
    let created = toast.created_at();
    let id = toast.id();

    // Present and unmodified through the whole 5000 ms window
    for offset in [0u64, 1000, 2500, 4999] {
        center.tick(created + Duration::from_millis(offset));
        let current = center.current().expect("toast should still be displayed");
        assert_eq!(current.id(), id);
        assert_eq!(
            current.phase_at(created + Duration::from_millis(offset)),
            Phase::Shown
        );
    }

    // Exit transition begins right after the lifetime elapses
    let leaving_at = created + Duration::from_millis(5100);
    center.tick(leaving_at);
    let current = center.current().expect("toast plays its exit transition");
    assert_eq!(current.phase_at(leaving_at), Phase::Leaving);

    // And the toast is detached once the transition is over
    center.tick(created + Duration::from_millis(5400));
    assert!(center.current().is_none());
}

// =============================================================================
// Login scenarios
// =============================================================================

#[test]
fn login_with_bad_credentials_is_blocked_with_both_errors() {
    let mut state = auth::State::new();
    state.update(auth::Message::LoginEmailChanged("bad".into()));
    state.update(auth::Message::LoginPasswordChanged("12345".into()));

    match state.update(auth::Message::SubmitLogin) {
        Event::Notify(notification) => {
            let keys: Vec<&str> = notification.lines().iter().map(|l| l.key()).collect();
            assert_eq!(keys, vec!["error-email-invalid", "error-password-too-short"]);
        }
        other => panic!("expected a combined error toast, got {:?}", other),
    }
}

#[tokio::test]
async fn login_with_valid_credentials_confirms_after_the_delay() {
    let mut state = auth::State::new();
    state.update(auth::Message::LoginEmailChanged("a@b.com".into()));
    state.update(auth::Message::LoginPasswordChanged("secret1".into()));

    let payload = match state.update(auth::Message::SubmitLogin) {
        Event::Submit(payload) => payload,
        other => panic!("expected a submission, got {:?}", other),
    };
    assert_eq!(payload.kind(), FormKind::Login);

    let latency = Duration::from_millis(50);
    let backend = SimulatedBackend::new(latency);
    let started = std::time::Instant::now();
    let confirmation = backend
        .submit(payload)
        .await
        .expect("simulated login should succeed");

    assert!(started.elapsed() >= latency, "confirmation is delayed");
    assert_eq!(confirmation.message_key, "notification-login-success");
}

#[tokio::test]
async fn incomplete_payload_takes_the_error_branch() {
    let backend = SimulatedBackend::new(Duration::from_millis(1));
    let payload = iced_campus::submission::FormPayload::new(FormKind::Login);

    match backend.submit(payload).await {
        Err(SubmissionError::Rejected(detail)) => {
            assert!(detail.contains("email"));
            assert!(detail.contains("password"));
        }
        other => panic!("expected a rejection, got {:?}", other),
    }
}
