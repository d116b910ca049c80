// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use copypasta_ext::{copypasta::ClipboardProvider, x11_fork::ClipboardContext};

use super::{ClipboardResult, ClipboardService};
use crate::{DEBUG_SIGTABLE_CLIPBOARD, throws};

/// The OS clipboard. The X11 fork context keeps the contents alive after this process
/// exits, which matters since `sigtable` writes the clipboard and then quits.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()> {
        throws!({
            let mut ctx = ClipboardContext::new()?;
            ctx.set_contents(content.clone())?;

            DEBUG_SIGTABLE_CLIPBOARD.then(|| {
                // % is Display, ? is Debug.
                tracing::debug!(
                    message = "📋📋📋 Table rows were copied to clipboard",
                    copied = %content,
                );
            });
        })
    }

    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
        let mut ctx = ClipboardContext::new()?;
        let content = ctx.get_contents()?;

        DEBUG_SIGTABLE_CLIPBOARD.then(|| {
            // % is Display, ? is Debug.
            tracing::debug!(
                message = "📋📋📋 Text was read from clipboard",
                pasted = %content,
            );
        });

        Ok(content)
    }
}

pub mod clipboard_test_fixtures {
    use super::{ClipboardResult, ClipboardService};

    #[derive(Debug, Default)]
    pub struct TestClipboard {
        pub content: String,
        /// Number of times [`ClipboardService::try_to_put_content_into_clipboard`] ran.
        pub write_count: usize,
    }

    impl TestClipboard {
        #[must_use]
        pub fn new(content: impl Into<String>) -> Self {
            Self {
                content: content.into(),
                write_count: 0,
            }
        }
    }

    impl ClipboardService for TestClipboard {
        fn try_to_put_content_into_clipboard(
            &mut self,
            content: String,
        ) -> ClipboardResult<()> {
            self.content = content;
            self.write_count += 1;
            Ok(())
        }

        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Ok(self.content.clone())
        }
    }

    /// A clipboard that can't be opened, for exercising the error paths.
    #[derive(Debug, Default)]
    pub struct UnavailableClipboard;

    impl ClipboardService for UnavailableClipboard {
        fn try_to_put_content_into_clipboard(
            &mut self,
            _content: String,
        ) -> ClipboardResult<()> {
            Err("clipboard is not available".into())
        }

        fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String> {
            Err("clipboard is not available".into())
        }
    }
}
