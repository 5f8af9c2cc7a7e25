use super::*;
use crate::date::FixedClock;
use crate::models::SessionUser;
use crate::store::{MemoryStore, StorageKeys};
use std::rc::Rc;

// =========================================================
// 辅助函数
// =========================================================

const NOW: i64 = 1_714_552_200_123;

/// 依次循环返回给定的值
fn seq(values: &[f64]) -> impl FnMut() -> f64 {
    let values = values.to_vec();
    let mut i = 0;
    move || {
        let v = values[i % values.len()];
        i += 1;
        v
    }
}

fn timing() -> PipelineTiming {
    PipelineTiming::default()
}

fn pipeline(values: &[f64]) -> AnalysisPipeline<impl FnMut() -> f64, FixedClock> {
    AnalysisPipeline::new(timing(), seq(values), FixedClock::new(NOW))
}

fn text(s: &str) -> AnalysisInput {
    AnalysisInput::Text(s.to_string())
}

fn narrative_len() -> usize {
    NARRATIVE.chars().count()
}

fn session(
    store: &MemoryStore,
    values: &[f64],
) -> AnalysisSession<MemoryStore, impl FnMut() -> f64, Rc<FixedClock>> {
    let clock = Rc::new(FixedClock::new(NOW));
    let history = HistoryRepository::for_owner(store.clone(), &StorageKeys::default(), &SessionUser::admin());
    AnalysisSession::new(AnalysisPipeline::new(timing(), seq(values), clock), history)
}

// =========================================================
// 取值范围
// =========================================================

#[test]
fn test_score_stays_in_range() {
    assert_eq!(score_from_unit(0.0), 30);
    assert_eq!(score_from_unit(0.5), 62);
    assert_eq!(score_from_unit(0.999_999), 94);
    assert_eq!(score_from_unit(1.0), 94);
    assert_eq!(score_from_unit(-3.0), 30);
    assert_eq!(score_from_unit(f64::NAN), 30);
}

#[test]
fn test_delay_is_uniform_in_half_open_range() {
    let t = timing();
    assert_eq!(t.delay_from_unit(0.0), Duration::from_millis(3000));
    assert_eq!(t.delay_from_unit(0.5), Duration::from_millis(4500));
    assert_eq!(t.delay_from_unit(0.999_999), Duration::from_millis(5999));
    assert_eq!(t.delay_from_unit(1.0), Duration::from_millis(5999));
}

// =========================================================
// start 测试
// =========================================================

#[test]
fn test_start_rejects_empty_input() {
    let mut p = pipeline(&[0.0]);

    assert_eq!(p.start(text("   "), "u"), Err(PipelineError::MissingInput));
    assert_eq!(p.phase(), Phase::Idle);
    assert!(p.result().is_none());
}

#[test]
fn test_start_while_analyzing_is_busy() {
    let mut p = pipeline(&[0.0]);
    p.start(text("claim"), "u").unwrap();

    assert!(p.is_busy());
    assert_eq!(p.start(text("again"), "u"), Err(PipelineError::Busy));
    // 原来的分析不受影响
    assert!(matches!(p.state(), PipelineState::Analyzing { .. }));
}

#[test]
fn test_start_returns_drawn_delay() {
    let mut p = pipeline(&[0.5, 0.0]);
    assert_eq!(p.start(text("claim"), "u"), Ok(Duration::from_millis(4500)));
}

// =========================================================
// advance 测试
// =========================================================

#[test]
fn test_no_score_before_delay() {
    let mut p = pipeline(&[0.0]);
    p.start(text("claim"), "u").unwrap();

    assert!(p.advance(Duration::from_millis(2999)).is_empty());
    assert_eq!(p.phase(), Phase::Analyzing);
}

#[test]
fn test_score_after_delay_builds_record() {
    let mut p = pipeline(&[0.0, 0.5]);
    p.start(text("claim"), "admin_user").unwrap();

    let events = p.advance(Duration::from_millis(3000));
    let PipelineEvent::Scored(record) = &events[0] else {
        panic!("expected a score, got {events:?}");
    };
    assert_eq!(record.id, "analysis_1714552200123");
    assert_eq!(record.user_id, "admin_user");
    assert_eq!(record.file_name, TEXT_INPUT_NAME);
    assert_eq!(record.file_type, ContentKind::Text);
    assert_eq!(record.trust_score, 62);
    assert_eq!(record.date, "2024-05-01T08:30:00.123Z");
    assert_eq!(p.phase(), Phase::Revealing);
    assert!(!p.is_busy());
}

#[test]
fn test_file_input_keeps_name_and_kind() {
    let mut p = pipeline(&[0.0]);
    let file = crate::intake::accept("clip.mp4", 2048, None).unwrap();
    p.start(AnalysisInput::File(file), "u").unwrap();
    p.advance(Duration::from_secs(3));

    let record = p.result().unwrap();
    assert_eq!(record.file_name, "clip.mp4");
    assert_eq!(record.file_type, ContentKind::Video);
}

#[test]
fn test_reveal_one_char_per_interval() {
    let mut p = pipeline(&[0.0]);
    p.start(text("claim"), "u").unwrap();
    p.advance(Duration::from_millis(3000));

    assert_eq!(p.revealed_text(), "");
    let events = p.advance(Duration::from_millis(95));
    assert_eq!(events, vec![PipelineEvent::Revealed(3)]);
    assert_eq!(p.revealed_text(), "Our");

    // 余下的 5ms 与新的 25ms 合并成一步
    assert_eq!(p.advance(Duration::from_millis(25)), vec![PipelineEvent::Revealed(4)]);
    assert_eq!(p.revealed_text(), "Our ");
}

#[test]
fn test_overflow_time_carries_into_reveal() {
    let mut p = pipeline(&[0.0]);
    p.start(text("claim"), "u").unwrap();

    let events = p.advance(Duration::from_millis(3060));
    assert!(matches!(events[0], PipelineEvent::Scored(_)));
    assert_eq!(events[1], PipelineEvent::Revealed(2));
}

#[test]
fn test_completes_after_full_narrative() {
    let mut p = pipeline(&[0.0]);
    p.start(text("claim"), "u").unwrap();
    p.advance(Duration::from_millis(3000));

    let total = timing().reveal_interval * narrative_len() as u32;
    let events = p.advance(total);
    assert_eq!(
        events,
        vec![PipelineEvent::Revealed(narrative_len()), PipelineEvent::Completed]
    );
    assert_eq!(p.phase(), Phase::Complete);
    assert_eq!(p.revealed_text(), NARRATIVE);

    // 完成后推进时间不再产生事件
    assert!(p.advance(Duration::from_secs(10)).is_empty());
}

#[test]
fn test_reset_discards_pending_analysis() {
    let mut p = pipeline(&[0.0]);
    p.start(text("claim"), "u").unwrap();
    p.reset();

    assert!(p.advance(Duration::from_secs(10)).is_empty());
    assert_eq!(p.phase(), Phase::Idle);
    assert!(p.snapshot().record.is_none());
}

#[test]
fn test_restart_after_complete() {
    let mut p = pipeline(&[0.0]);
    p.start(text("one"), "u").unwrap();
    p.advance(Duration::from_secs(60));
    assert_eq!(p.phase(), Phase::Complete);

    p.start(text("two"), "u").unwrap();
    assert!(p.result().is_none());
    assert_eq!(p.revealed_text(), "");
}

// =========================================================
// session 测试
// =========================================================

#[test]
fn test_session_appends_exactly_one_record() {
    let store = MemoryStore::new();
    let mut s = session(&store, &[0.2, 0.8]);

    s.start(text("claim")).unwrap();
    // 按浏览器定时器的节奏推进
    s.advance(Duration::from_millis(3600)).unwrap();
    while s.snapshot().phase != Phase::Complete {
        s.advance(timing().reveal_interval).unwrap();
    }

    let records = s.history().list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_id, "admin_user");
    assert_eq!(records[0].trust_score, score_from_unit(0.8));
    assert_eq!(s.snapshot().score(), Some(records[0].trust_score));
}

#[test]
fn test_session_failed_start_writes_nothing() {
    let store = MemoryStore::new();
    let mut s = session(&store, &[0.0]);

    assert!(s.start(text("")).is_err());
    s.advance(Duration::from_secs(60)).unwrap();
    assert!(store.keys().is_empty());
}

#[test]
fn test_session_two_runs_two_records() {
    let store = MemoryStore::new();
    let mut s = session(&store, &[0.0]);

    for input in ["first", "second"] {
        s.start(text(input)).unwrap();
        s.advance(Duration::from_secs(60)).unwrap();
    }
    assert_eq!(s.history().list().unwrap().len(), 2);
}

#[test]
fn test_snapshot_tracks_busy_flag() {
    let store = MemoryStore::new();
    let mut s = session(&store, &[0.0]);
    assert_eq!(s.snapshot(), PipelineSnapshot::idle());

    s.start(text("claim")).unwrap();
    assert!(s.snapshot().is_busy());
    s.advance(Duration::from_secs(3)).unwrap();
    assert!(!s.snapshot().is_busy());
}
