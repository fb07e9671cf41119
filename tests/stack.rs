use error_details::{new, Stack, StackTracer};

#[test]
fn capture_is_bounded() {
    let stack = Stack::capture(0);
    assert!(stack.len() <= 32);
    assert_eq!(stack.len(), stack.frames().len());
}

#[test]
fn capture_never_fails_on_large_skips() {
    // Skipping more frames than the stack holds yields a short, valid,
    // possibly empty stack.
    let stack = Stack::capture(10_000);
    assert!(stack.is_empty());
}

#[test]
fn resolution_is_idempotent() {
    let err = new("boom");
    let stack = err.stack_trace();

    let first: Vec<(String, String, u32)> = stack
        .iter()
        .map(|f| (f.name().to_string(), f.file().to_string(), f.line()))
        .collect();
    let second: Vec<(String, String, u32)> = stack
        .iter()
        .map(|f| (f.name().to_string(), f.file().to_string(), f.line()))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn frames_resolve_without_panicking() {
    let stack = Stack::capture(0);
    for frame in &stack {
        assert!(!frame.name().is_empty());
        assert!(!frame.file().is_empty());
        let _ = frame.line();
        let _ = frame.ip();
    }
}

#[test]
fn errors_capture_a_stack_at_construction() {
    let err = new("boom");
    assert!(!err.stack_trace().is_empty());
}

#[test]
fn resolution_is_safe_across_threads() {
    let err = std::sync::Arc::new(new("boom"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let err = err.clone();
            std::thread::spawn(move || {
                err.stack_trace()
                    .iter()
                    .map(|f| f.name().to_string())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut results = handles.into_iter().map(|h| h.join().unwrap());
    let first = results.next().unwrap();
    assert!(results.all(|r| r == first));
}
