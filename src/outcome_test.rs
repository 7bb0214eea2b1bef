#[cfg(test)]
mod tests {
    use crate::diagnostics::{ClassifiedMessages, DiagnosticMessage};
    use crate::outcome::{
        classify_exit, classify_invocation, evaluate, InvocationOutcome, OutcomeKind,
        UnexplainedFailureError,
    };

    fn with_error() -> ClassifiedMessages {
        let mut messages = ClassifiedMessages::new();
        messages
            .errors
            .push(DiagnosticMessage::positioned("Syntax error.", Some(72), Some(7)));
        messages
    }

    #[test]
    fn test_classify_exit() {
        assert_eq!(classify_exit(0, &[]), OutcomeKind::Success);
        assert_eq!(classify_exit(0, &with_error().errors), OutcomeKind::Success);
        assert_eq!(classify_exit(1, &with_error().errors), OutcomeKind::SuccessWithErrors);
        assert_eq!(classify_exit(1, &[]), OutcomeKind::UnexplainedFailure);
        assert_eq!(classify_exit(-1, &[]), OutcomeKind::UnexplainedFailure);
    }

    #[test]
    fn test_evaluate_success_returns_messages_unchanged() {
        let mut messages = ClassifiedMessages::new();
        messages.informational.push(DiagnosticMessage::text("Reading \"x.flex\""));

        let outcome = evaluate(0, messages.clone(), "jflex.sh x.flex").unwrap();
        assert_eq!(outcome.kind(), OutcomeKind::Success);
        assert_eq!(outcome.messages(), &messages);
    }

    #[test]
    fn test_evaluate_nonzero_with_errors() {
        let outcome = evaluate(1, with_error(), "jflex -d out f.flex").unwrap();
        assert_eq!(outcome.kind(), OutcomeKind::SuccessWithErrors);
        assert!(matches!(outcome, InvocationOutcome::SuccessWithErrors(_)));
        assert_eq!(outcome.into_messages(), with_error());
    }

    #[test]
    fn test_evaluate_unexplained_failure() {
        let err = evaluate(1, ClassifiedMessages::new(), "jflex -d out f.flex").unwrap_err();
        assert_eq!(
            err,
            UnexplainedFailureError {
                command: "jflex -d out f.flex".to_string(),
                exit_code: 1,
            }
        );
        let text = err.to_string();
        assert!(text.contains("jflex -d out f.flex"));
        assert!(text.contains('1'));
    }

    #[test]
    fn test_evaluate_informational_only_failure_is_unexplained() {
        let mut messages = ClassifiedMessages::new();
        messages.informational.push(DiagnosticMessage::text("Exception in thread \"main\""));

        let err = evaluate(2, messages, "jflex.sh f.flex").unwrap_err();
        assert_eq!(err.exit_code, 2);
    }

    #[test]
    fn test_classify_invocation_uses_both_streams() {
        let stdout = "Reading \"f.flex\"\n";
        let stderr = "Error in file \"f.flex\" (line 4):\nSyntax error.\n%%\n^\n";

        let outcome = classify_invocation(stdout, stderr, 1, "jflex.sh f.flex").unwrap();
        assert_eq!(outcome.kind(), OutcomeKind::SuccessWithErrors);
        assert_eq!(outcome.messages().informational.len(), 1);
        assert_eq!(outcome.messages().errors[0].line, Some(4));

        let err = classify_invocation(stdout, "", 1, "jflex.sh f.flex").unwrap_err();
        assert_eq!(err.command, "jflex.sh f.flex");
    }
}
