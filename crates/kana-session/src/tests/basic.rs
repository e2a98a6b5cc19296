use kana_core::mode::SessionMode;

use super::simulator::HeadlessTrainer;
use super::{gakkou_corpus, make_corpus, TEST_CONFIG};
use crate::{KeyEvent, Phase, SessionEvent, TrainerSession};

// --- Key classification ---

#[test]
fn test_key_event_text() {
    assert_eq!(KeyEvent::text("a"), KeyEvent::Char('a'));
    assert_eq!(KeyEvent::text("-"), KeyEvent::Char('-'));
    assert_eq!(KeyEvent::text(" "), KeyEvent::Space);
    assert_eq!(KeyEvent::text("\t"), KeyEvent::Tab);
    assert_eq!(KeyEvent::text("\r"), KeyEvent::Enter);
    assert_eq!(KeyEvent::text(""), KeyEvent::Other);
    assert_eq!(KeyEvent::text("ab"), KeyEvent::Other);
    assert_eq!(KeyEvent::text("\u{1b}"), KeyEvent::Other);
}

// --- Start screen ---

#[test]
fn test_new_session_is_on_start_screen() {
    let session = TrainerSession::new(gakkou_corpus());
    assert_eq!(session.phase(), Phase::Start);
    assert_eq!(session.mode(), SessionMode::Time60);
    assert!(session.result().is_none());
    assert_eq!(session.view(0).display, None);
}

#[test]
fn test_tab_cycles_mode() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Time30);
    let resp = t.press(KeyEvent::Tab);
    assert!(resp.accepted);
    assert_eq!(
        resp.events,
        vec![SessionEvent::ModeChanged(SessionMode::Time60)]
    );
    assert_eq!(t.session.mode(), SessionMode::Time60);
}

#[test]
fn test_mode_locked_after_start() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Words30);
    t.press(KeyEvent::Space);
    assert!(!t.session.set_mode(SessionMode::Time120));
    assert!(!t.press(KeyEvent::Tab).accepted);
    assert_eq!(t.session.mode(), SessionMode::Words30);
}

#[test]
fn test_chars_ignored_on_start_screen() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Time30);
    let resp = t.press(KeyEvent::Char('g'));
    assert!(!resp.accepted);
    assert!(resp.events.is_empty());
    assert_eq!(t.session.phase(), Phase::Start);
}

// --- Countdown ---

#[test]
fn test_countdown_steps() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Time30);
    let resp = t.press(KeyEvent::Space);
    assert!(resp.accepted);
    assert_eq!(
        resp.events,
        vec![SessionEvent::PhaseChanged(Phase::Countdown(3))]
    );

    assert!(t.advance(999).is_empty());
    assert_eq!(
        t.advance(1),
        vec![SessionEvent::PhaseChanged(Phase::Countdown(2))]
    );
    assert_eq!(
        t.advance(1000),
        vec![SessionEvent::PhaseChanged(Phase::Countdown(1))]
    );
    assert_eq!(
        t.advance(1000),
        vec![SessionEvent::PhaseChanged(Phase::Countdown(0))]
    );
    assert_eq!(t.session.phase(), Phase::Countdown(0));

    let events = t.advance(TEST_CONFIG.go_hold_ms);
    assert_eq!(
        events,
        vec![
            SessionEvent::PhaseChanged(Phase::Typing),
            SessionEvent::RoundStarted {
                display: "学校".into()
            },
        ]
    );
}

#[test]
fn test_keys_ignored_during_countdown() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Time30);
    t.press(KeyEvent::Space);
    t.advance(500);
    assert!(!t.press(KeyEvent::Char('g')).accepted);
    assert!(!t.press(KeyEvent::Space).accepted);
    assert_eq!(t.session.phase(), Phase::Countdown(3));
}

#[test]
fn test_late_tick_catches_up() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Time30);
    t.press(KeyEvent::Space);
    let events = t.advance(10_000);
    assert_eq!(
        events,
        vec![
            SessionEvent::PhaseChanged(Phase::Countdown(2)),
            SessionEvent::PhaseChanged(Phase::Countdown(1)),
            SessionEvent::PhaseChanged(Phase::Countdown(0)),
            SessionEvent::PhaseChanged(Phase::Typing),
            SessionEvent::RoundStarted {
                display: "学校".into()
            },
        ]
    );
}

// --- Typing ---

#[test]
fn test_typing_completes_round() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Words30);
    t.start();

    let responses = t.type_str("gakkou");
    assert!(responses.iter().all(|r| r.accepted));
    assert_eq!(HeadlessTrainer::rounds_completed(&responses), 1);

    let last = responses.last().unwrap();
    match &last.events[..] {
        [SessionEvent::RoundCompleted(summary), SessionEvent::RoundStarted { display }] => {
            assert_eq!(summary.display, "学校");
            assert_eq!(summary.typed, "gakkou");
            assert_eq!(summary.spelling, "gakkou");
            assert_eq!(summary.rejected, 0);
            assert_eq!(display, "学校");
        }
        other => panic!("unexpected events: {other:?}"),
    }
    assert_eq!(t.session.words_completed(), 1);
    assert_eq!(t.session.chars_typed(), 6);
}

#[test]
fn test_rejected_key_changes_nothing() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Words30);
    t.start();
    t.type_str("ga");
    let before = t.session.view(t.now);

    let resp = t.press(KeyEvent::Char('x'));
    assert!(!resp.accepted);
    assert!(resp.events.is_empty());
    assert_eq!(t.session.view(t.now), before);
}

#[test]
fn test_uppercase_key_is_accepted() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Words30);
    t.start();
    assert!(t.press(KeyEvent::Char('G')).accepted);
    assert_eq!(t.session.view(t.now).done, "g");
}

#[test]
fn test_non_char_keys_ignored_while_typing() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Words30);
    t.start();
    for event in [KeyEvent::Space, KeyEvent::Enter, KeyEvent::Tab, KeyEvent::Other] {
        assert!(!t.press(event).accepted);
    }
    assert_eq!(t.session.phase(), Phase::Typing);
}

#[test]
fn test_view_projection() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Words30);
    t.start();
    t.type_str("gak");
    let view = t.session.view(t.now);
    assert_eq!(view.display.as_deref(), Some("学校"));
    assert_eq!(view.done, "gak");
    assert_eq!(view.next, "k");
    assert_eq!(view.remaining, "ou");
}

#[test]
fn test_view_follows_alternate_spelling() {
    let mut t = HeadlessTrainer::new(make_corpus(&[("地図", "ちず")]), SessionMode::Words30);
    t.start();
    assert_eq!(t.session.view(t.now).next, "c");
    t.type_str("t");
    let view = t.session.view(t.now);
    assert_eq!((view.done.as_str(), view.next.as_str()), ("t", "i"));
}

#[test]
fn test_round_timing() {
    let mut t = HeadlessTrainer::new(gakkou_corpus(), SessionMode::Words30);
    t.start();
    t.type_str("gakko");
    t.advance(2000);
    let resp = t.press(KeyEvent::Char('u'));
    let summary = t.session.last_round().unwrap();
    assert!((summary.seconds - 2.0).abs() < 1e-9);
    assert!((summary.chars_per_sec - 3.0).abs() < 1e-9);
    assert!(resp
        .events
        .iter()
        .any(|e| matches!(e, SessionEvent::RoundCompleted(s) if s == summary)));
}

#[test]
fn test_contracted_word_scenario() {
    let mut t = HeadlessTrainer::new(make_corpus(&[("客", "きゃく")]), SessionMode::Words30);
    t.start();
    let responses = t.type_str("kyaku");
    assert!(responses.iter().all(|r| r.accepted));
    assert_eq!(HeadlessTrainer::rounds_completed(&responses), 1);
}

#[test]
fn test_trailing_nasal_needs_double_n() {
    let mut t = HeadlessTrainer::new(make_corpus(&[("本", "ほん")]), SessionMode::Words30);
    t.start();
    let responses = t.type_str("hon");
    assert!(responses.iter().all(|r| r.accepted));
    assert_eq!(HeadlessTrainer::rounds_completed(&responses), 0);
    let resp = t.press(KeyEvent::Char('n'));
    assert_eq!(HeadlessTrainer::rounds_completed(&[resp]), 1);
}

#[test]
fn test_mid_word_nasal_accepts_both() {
    let corpus = make_corpus(&[("漢字", "かんじ")]);
    for spelling in ["kanji", "kannji", "kanzi", "kannzi"] {
        let mut t = HeadlessTrainer::new(corpus.clone(), SessionMode::Words30);
        t.start();
        let responses = t.type_str(spelling);
        assert!(responses.iter().all(|r| r.accepted), "{spelling}");
        assert_eq!(HeadlessTrainer::rounds_completed(&responses), 1, "{spelling}");
    }
}
