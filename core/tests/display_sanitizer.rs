use serde_json::{json, Value};
use stonecut_core::display::{
    is_corrupted, sanitize, sanitize_with_candidates, DisplayCandidate, Sanitizer, TextOrigin,
    DEFAULT_FALLBACK,
};

fn corrupted(v: impl Into<DisplayCandidate>) -> bool {
    is_corrupted(&v.into())
}

#[test]
fn absent_values_are_corrupted_and_fall_back() {
    assert!(corrupted(Value::Null));
    assert!(corrupted(None::<String>));
    assert!(corrupted(DisplayCandidate::Absent));
    assert_eq!(sanitize(Value::Null, DEFAULT_FALLBACK), DEFAULT_FALLBACK);
    assert_eq!(sanitize(None::<&str>, "x"), "x");
}

#[test]
fn whitespace_only_is_corrupted() {
    for s in ["", " ", "\t\n", "\u{3000}", "   \r\n  "] {
        assert!(corrupted(s), "{:?}", s);
    }
}

#[test]
fn mojibake_markers_are_corrupted() {
    assert!(corrupted("Ø®Ø·Ø§"));
    assert!(corrupted("سنگ Ù"));
    assert!(corrupted("Û"));
}

#[test]
fn question_mark_placeholders_are_corrupted() {
    for s in ["???", "؟ ؟", " ? ", "?", "؟؟؟", "? ؟ ?"] {
        assert!(corrupted(s), "{:?}", s);
    }
}

#[test]
fn double_question_mark_inside_text_is_corrupted() {
    assert!(corrupted("متن??خوب"));
    assert!(corrupted("ABC??DEF"));
}

#[test]
fn clean_persian_text_passes_trimmed() {
    assert!(!corrupted("معدن تهران"));
    assert_eq!(sanitize("  معدن تهران \n", DEFAULT_FALLBACK), "معدن تهران");
    let out = sanitize("معدن تهران", DEFAULT_FALLBACK);
    assert_eq!(out.origin, TextOrigin::Candidate { index: 0 });
}

#[test]
fn non_string_values_use_their_string_form() {
    assert!(!corrupted(json!(12)));
    assert_eq!(sanitize(json!(12), DEFAULT_FALLBACK), "12");
    assert_eq!(sanitize(true, DEFAULT_FALLBACK), "true");
    assert_eq!(sanitize(json!(["a", "b"]), DEFAULT_FALLBACK), "a,b");
    assert_eq!(sanitize(json!([]), DEFAULT_FALLBACK), DEFAULT_FALLBACK);
    assert_eq!(sanitize(json!({"n": 1}), DEFAULT_FALLBACK), r#"{"n":1}"#);
}

#[test]
fn sanitize_is_idempotent() {
    let inputs: Vec<DisplayCandidate> = vec![
        Value::Null.into(),
        "".into(),
        "  سنگ مرمر  ".into(),
        "Ø®Ø·Ø§".into(),
        "???".into(),
        "متن??خوب".into(),
        json!(3.0).into(),
        json!({"k": "v"}).into(),
    ];
    for x in inputs {
        let once = sanitize(x.clone(), DEFAULT_FALLBACK);
        let twice = sanitize(&once, DEFAULT_FALLBACK);
        assert_eq!(once.text, twice.text, "{:?}", x);
    }
}

#[test]
fn first_valid_candidate_wins() {
    let candidates: Vec<DisplayCandidate> = vec![
        Value::Null.into(),
        "??".into(),
        "نمونه".into(),
        "دیگر".into(),
    ];
    let out = sanitize_with_candidates(candidates, DEFAULT_FALLBACK);
    assert_eq!(out, "نمونه");
    assert_eq!(out.origin, TextOrigin::Candidate { index: 2 });
}

#[test]
fn empty_candidate_list_gives_fallback() {
    let out = sanitize_with_candidates(Vec::<DisplayCandidate>::new(), DEFAULT_FALLBACK);
    assert_eq!(out, DEFAULT_FALLBACK);
    assert!(out.is_fallback());
}

#[test]
fn custom_fallback_is_honored() {
    let candidates: Vec<DisplayCandidate> = vec![Value::Null.into(), "???".into()];
    let out = sanitize_with_candidates(candidates, "پیش‌فرض");
    assert_eq!(out, "پیش‌فرض");
    assert_eq!(out.origin, TextOrigin::Fallback);
}

#[test]
fn sanitizer_default_matches_free_functions() {
    let s = Sanitizer::default();
    assert_eq!(s.fallback(), DEFAULT_FALLBACK);
    assert_eq!(s.sanitize("??"), sanitize("??", DEFAULT_FALLBACK));
    assert_eq!(
        s.sanitize_with_candidates([None, Some("سنگ")]),
        sanitize_with_candidates([None, Some("سنگ")], DEFAULT_FALLBACK)
    );
    assert!(s.is_corrupted(&"Ø".into()));

    let custom = Sanitizer::with_fallback("نامعلوم");
    assert_eq!(custom.sanitize(""), "نامعلوم");
}

#[test]
fn sanitizer_can_be_shared_across_threads() {
    let s = std::sync::Arc::new(Sanitizer::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let s = s.clone();
            std::thread::spawn(move || s.sanitize(format!("سنگ {}", i)).into_string())
        })
        .collect();
    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), format!("سنگ {}", i));
    }
}
