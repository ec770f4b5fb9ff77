//! Property-based tests for console_logger_system using proptest

use console_logger_system::core::redactor;
use console_logger_system::should_emit;
use console_logger_system::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Silly),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Silent),
    ]
}

fn any_tag() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("silly".to_string()),
        Just("debug".to_string()),
        Just("wait".to_string()),
        Just("fav".to_string()),
        Just("success".to_string()),
        Just("warn".to_string()),
        Just("fatal".to_string()),
        "[a-z]{1,10}",
    ]
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Any string resolves to some level
    #[test]
    fn test_to_level_is_total(name in ".*") {
        let level = to_level(&name);
        prop_assert!(LogLevel::ALL.contains(&level));
    }

    /// Level names resolve regardless of case
    #[test]
    fn test_to_level_ignores_case(level in any_level(), upper in any::<bool>()) {
        let name = if upper {
            level.as_str().to_uppercase()
        } else {
            level.as_str().to_string()
        };
        prop_assert_eq!(to_level(&name), level);
    }

    /// Emission follows rank order
    #[test]
    fn test_should_emit_matches_rank(level in any_level(), threshold in any_level()) {
        prop_assert_eq!(should_emit(level, threshold), level.rank() >= threshold.rank());
    }
}

// ============================================================================
// Build Tests
// ============================================================================

proptest! {
    /// Same input and configuration yields the same line
    #[test]
    fn test_build_is_deterministic(tag in any_tag(), message in "[a-zA-Z0-9 ]{0,40}") {
        let logger = Logger::builder().datetime("none").build();
        prop_assert_eq!(
            logger.build(&tag, message.as_str()),
            logger.build(&tag, message.as_str())
        );
    }

    /// A line is built exactly when print would write it
    #[test]
    fn test_build_empty_iff_print_writes_nothing(
        tag in any_tag(),
        threshold in any_level(),
        enabled in any::<bool>(),
    ) {
        let sink = MemorySink::new();
        let logger = Logger::builder()
            .level(threshold)
            .enabled(enabled)
            .stream(sink.handle())
            .override_stream(true)
            .build();

        let built = logger.build(&tag, "hello world");
        logger.print(&tag, "hello world");

        prop_assert_eq!(built.is_empty(), sink.is_empty());
        prop_assert_eq!(
            sink.is_empty(),
            !enabled || !should_emit(type_to_level(&tag), threshold)
        );
    }

    /// Lines never carry escape codes when color is off
    #[test]
    fn test_uncolored_build_has_no_escapes(tag in any_tag(), message in "[a-z ]{0,20}") {
        let logger = Logger::builder()
            .level(LogLevel::Silly)
            .color(false)
            .scope("prop")
            .build();
        prop_assert!(!logger.build(&tag, message.as_str()).contains('\x1b'));
    }
}

// ============================================================================
// Redaction Tests
// ============================================================================

proptest! {
    /// Without secrets the text is returned unchanged
    #[test]
    fn test_censor_without_secrets_is_identity(text in ".*") {
        let template = Decoration::wrapped("[", "]");
        prop_assert_eq!(redactor::censor(&text, &[], &template, None), text);
    }

    /// Every casing of a secret is replaced by the placeholder
    #[test]
    fn test_censor_removes_secret(
        before in "[0-9 ]{0,10}",
        secret in "[a-z]{3,8}",
        after in "[0-9 ]{0,10}",
    ) {
        let text = format!("{}{}{}", before, secret.to_uppercase(), after);
        let template = Decoration::wrapped("<", ">");
        let censored = redactor::censor(&text, &[secret.clone()], &template, None);

        prop_assert_eq!(censored, format!("{}<secure>{}", before, after));
    }
}
