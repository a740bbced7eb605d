use super::*;
use crate::plan::{Planner, FRAMING_INSTRUCTION};
use crate::token::{TokenCounter, TokenizerError};
use std::time::Duration;

/// One token per character of the (already normalized) input
struct CharCounter;

impl TokenCounter for CharCounter {
    fn count(&self, text: &str) -> Result<usize, TokenizerError> {
        Ok(text.chars().count())
    }
}

struct FailingCounter;

impl TokenCounter for FailingCounter {
    fn count(&self, _text: &str) -> Result<usize, TokenizerError> {
        Err(TokenizerError::Unavailable("ranks not loaded".to_string()))
    }
}

#[derive(Default)]
struct MockSurface {
    draft: String,
    send_label: String,
    send_enabled: bool,
    counter_text: String,
    counter_warn: bool,
    installed: bool,
    install_calls: usize,
}

impl Surface for MockSurface {
    fn draft(&self) -> String {
        self.draft.clone()
    }
    fn set_draft(&mut self, text: &str) {
        self.draft = text.to_string();
    }
    fn set_send_label(&mut self, label: &str) {
        self.send_label = label.to_string();
    }
    fn set_send_enabled(&mut self, enabled: bool) {
        self.send_enabled = enabled;
    }
    fn set_counter(&mut self, text: &str, warn: bool) {
        self.counter_text = text.to_string();
        self.counter_warn = warn;
    }
    fn has_control(&self) -> bool {
        self.installed
    }
    fn install_control(&mut self) {
        self.installed = true;
        self.install_calls += 1;
    }
}

#[test]
fn test_ensure_control_is_idempotent() {
    let mut surface = MockSurface::default();
    ensure_control(&mut surface);
    ensure_control(&mut surface);
    ensure_control(&mut surface);

    assert_eq!(surface.install_calls, 1);
    assert_eq!(surface.send_label, IDLE_LABEL);
    assert!(surface.send_enabled);
    assert_eq!(surface.counter_text, "0 tokens");
}

#[test]
fn test_activate_within_budget_returns_draft() {
    let mut control = SendControl::new(Planner::new(CharCounter, 100));
    let mut surface = MockSurface {
        draft: "short draft".to_string(),
        ..Default::default()
    };

    control.activate(&mut surface).expect("activate");
    assert_eq!(surface.draft, "short draft");
    assert!(!control.split_in_flight());
}

#[test]
fn test_activate_empty_draft_is_a_no_op() {
    let mut control = SendControl::new(Planner::new(CharCounter, 100));
    let mut surface = MockSurface::default();

    control.activate(&mut surface).expect("activate");
    assert_eq!(surface.draft, "");
    assert!(!control.split_in_flight());
}

#[test]
fn test_activate_drains_multi_part_split() {
    // 29 chars at budget 10 => 3 content parts
    let text = "aaaa bbbb cccc dddd eeee ffff".to_string();
    let mut control = SendControl::new(Planner::new(CharCounter, 10));
    let mut surface = MockSurface {
        draft: text.clone(),
        ..Default::default()
    };

    control.activate(&mut surface).expect("plan");
    assert_eq!(surface.draft, FRAMING_INSTRUCTION);
    assert_eq!(surface.send_label, "3/3");
    assert!(control.split_in_flight());

    let mut rebuilt = String::new();
    control.activate(&mut surface).expect("advance");
    assert_eq!(surface.send_label, "2/3");
    rebuilt.push_str(&surface.draft);

    control.activate(&mut surface).expect("advance");
    assert_eq!(surface.send_label, "1/3");
    rebuilt.push_str(&surface.draft);

    control.activate(&mut surface).expect("advance");
    assert_eq!(surface.send_label, IDLE_LABEL);
    rebuilt.push_str(&surface.draft);

    assert_eq!(rebuilt, text);
    assert!(!control.split_in_flight());
}

#[test]
fn test_activate_plans_only_once_per_submission() {
    let text = "aaaa bbbb cccc dddd eeee ffff".to_string();
    let mut control = SendControl::new(Planner::new(CharCounter, 10));
    let mut surface = MockSurface {
        draft: text,
        ..Default::default()
    };

    control.activate(&mut surface).expect("plan");
    let first_part_count = 3;

    // Typing into the box mid-drain must not trigger a re-plan
    surface.draft = "something entirely different and much longer than before".to_string();
    control.activate(&mut surface).expect("advance");
    assert_eq!(surface.send_label, format!("2/{}", first_part_count));
}

#[test]
fn test_activate_disables_send_when_tokenizer_fails() {
    let mut control = SendControl::new(Planner::new(FailingCounter, 100));
    let mut surface = MockSurface {
        draft: "text".to_string(),
        send_enabled: true,
        ..Default::default()
    };

    assert!(control.activate(&mut surface).is_err());
    assert!(!surface.send_enabled);
    // Draft stays in place: nothing was consumed
    assert_eq!(surface.draft, "text");
}

#[test]
fn test_rate_limit_blocks_immediate_second_call() {
    let mut limit = RateLimit::new(Duration::from_secs(60));
    assert!(limit.ready());
    assert!(!limit.ready());
}

#[test]
fn test_rate_limit_zero_interval_always_ready() {
    let mut limit = RateLimit::new(Duration::ZERO);
    assert!(limit.ready());
    assert!(limit.ready());
    assert!(limit.ready());
}

#[test]
fn test_refresh_counter_renders_tokens() {
    let planner = Planner::new(CharCounter, 5);
    let mut control = SendControl::with_counter_interval(planner, Duration::ZERO);
    let mut surface = MockSurface {
        draft: "overly long".to_string(),
        ..Default::default()
    };

    control.refresh_counter(&mut surface);
    assert_eq!(surface.counter_text, "11 tokens");
    assert!(surface.counter_warn);
}

#[test]
fn test_refresh_counter_is_rate_limited() {
    let mut control = SendControl::new(Planner::new(CharCounter, 100));
    let mut surface = MockSurface {
        draft: "abc".to_string(),
        ..Default::default()
    };

    control.refresh_counter(&mut surface);
    assert_eq!(surface.counter_text, "3 tokens");

    // Second refresh inside the interval is dropped
    surface.draft = "abcdef".to_string();
    control.refresh_counter(&mut surface);
    assert_eq!(surface.counter_text, "3 tokens");
}

#[test]
fn test_refresh_counter_failure_shows_neutral_state() {
    let planner = Planner::new(FailingCounter, 5);
    let mut control = SendControl::with_counter_interval(planner, Duration::ZERO);
    let mut surface = MockSurface {
        draft: "text".to_string(),
        send_enabled: true,
        ..Default::default()
    };

    control.refresh_counter(&mut surface);
    assert!(!surface.send_enabled);
    assert_eq!(surface.counter_text, "tokens unavailable");
    assert!(!surface.counter_warn);
}
