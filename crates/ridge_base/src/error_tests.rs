/* 📖 # Why use a separate file for these error tests?

These tests install their own subscriber with an ErrorLayer and check what the
span trace and the Debug tree contain. Keeping them apart from error.rs keeps the
subscriber setup out of the plain unit tests.
*/

#[cfg(test)]
mod tests {
    use crate::{RidgeError, RidgeResult, ResultExt};
    use expect_test::expect;
    use tracing::span;
    use tracing_error::{ErrorLayer, SpanTraceStatus};
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    // 📖 SpanTrace::capture() only records spans when the active subscriber has an
    // ErrorLayer. Each test scopes its own subscriber with `with_default` so the
    // tests stay independent of each other and of any global subscriber.
    fn with_error_layer<R>(f: impl FnOnce() -> R) -> R {
        let subscriber = Registry::default().with(ErrorLayer::default());
        tracing::subscriber::with_default(subscriber, f)
    }

    #[test]
    fn test_spantrace_captures_entered_span() {
        let error = with_error_layer(|| {
            let operation_span = span!(tracing::Level::DEBUG, "print_operation", attempt = 3);
            let _guard = operation_span.enter();
            RidgeError::message("write failed")
        });

        assert_eq!(error.span_trace().status(), SpanTraceStatus::CAPTURED);
        let trace = error.span_trace().to_string();
        assert!(trace.contains("print_operation"), "trace was: {trace}");
        assert!(trace.contains("attempt=3"), "trace was: {trace}");
    }

    #[test]
    fn test_spantrace_empty_outside_spans() {
        let error = with_error_layer(|| RidgeError::message("no span"));
        assert_eq!(error.span_trace().status(), SpanTraceStatus::EMPTY);
    }

    #[test]
    fn test_debug_pretty_print_format() {
        let error = with_error_layer(|| {
            RidgeError::message("something went wrong")
                .context("printing message")
                .context("running example")
        });

        expect![[r#"
            something went wrong
            ├─ printing message
            └─ running example
        "#]]
        .assert_eq(&format!("{:?}", error));
    }

    #[test]
    fn test_debug_includes_trace_when_captured() {
        let error = with_error_layer(|| {
            let operation_span = span!(tracing::Level::INFO, "error_with_context");
            let _guard = operation_span.enter();
            RidgeError::message("base error").context("operation failed")
        });

        let debug = format!("{:?}", error);
        assert!(debug.starts_with("base error\n└─ operation failed\nTrace: "));
        assert!(debug.contains("error_with_context"));
    }

    #[test]
    fn test_context_through_result_ext_keeps_trace() {
        let result: RidgeResult<()> = with_error_layer(|| {
            let operation_span = span!(tracing::Level::DEBUG, "inner");
            let _guard = operation_span.enter();
            Err(Box::new(RidgeError::message("inner failure")))
        });

        let error = result.context("outer").unwrap_err();
        assert_eq!(error.to_string(), "outer: inner failure");
        assert_eq!(error.span_trace().status(), SpanTraceStatus::CAPTURED);
    }
}
