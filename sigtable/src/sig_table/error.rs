// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

use miette::SourceSpan;

use super::MissingField;

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum SigTableError {
    #[error("🔍 Line {line_number} is malformed, could not find the {missing}")]
    #[diagnostic(
        code(sigtable::malformed_line),
        help(
            "Each line should look like: `ReturnType MethodName(args)` /// Description"
        )
    )]
    MalformedLine {
        /// 1-based.
        line_number: usize,
        missing: MissingField,
        #[source_code]
        line: String,
        #[label("no {missing} in this line")]
        span: SourceSpan,
    },

    #[error("📋 Could not read text from the clipboard")]
    #[diagnostic(code(sigtable::read_clipboard))]
    ReadClipboard {
        #[source]
        source: Box<dyn Error + Send + Sync + 'static>,
    },

    #[error("📋 Could not write table rows to the clipboard")]
    #[diagnostic(code(sigtable::write_clipboard))]
    WriteClipboard {
        #[source]
        source: Box<dyn Error + Send + Sync + 'static>,
    },
}

impl SigTableError {
    /// The whole line is labelled, since a missing pattern has no narrower location.
    #[must_use]
    pub fn malformed_line(line_number: usize, line: &str, missing: MissingField) -> Self {
        SigTableError::MalformedLine {
            line_number,
            missing,
            line: line.to_string(),
            span: (0, line.len()).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;

    use super::*;

    #[test]
    fn test_malformed_line_message() {
        let error = SigTableError::malformed_line(3, "`int Count()`", MissingField::Description);
        assert_eq!(
            error.to_string(),
            "🔍 Line 3 is malformed, could not find the /// description"
        );
        assert_eq!(
            error.code().map(|it| it.to_string()),
            Some("sigtable::malformed_line".to_string())
        );
    }

    #[test]
    fn test_malformed_line_labels_whole_line() {
        let line = "no backticks here";
        let error = SigTableError::malformed_line(1, line, MissingField::ReturnType);
        let SigTableError::MalformedLine { span, .. } = error else {
            panic!("expected MalformedLine");
        };
        assert_eq!(span.offset(), 0);
        assert_eq!(span.len(), line.len());
    }

    #[test]
    fn test_clipboard_error_keeps_source() {
        let error = SigTableError::ReadClipboard {
            source: "no display".into(),
        };
        assert_eq!(
            std::error::Error::source(&error).map(ToString::to_string),
            Some("no display".to_string())
        );
    }
}
