// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction for the clipboard service for dependency injection. This trait is
/// implemented by both a test clipboard service and a system clipboard service.
pub trait ClipboardService {
    /// # Errors
    ///
    /// Returns an error if the clipboard can't be opened or written to.
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: String,
    ) -> ClipboardResult<()>;

    /// # Errors
    ///
    /// Returns an error if the clipboard can't be opened, or doesn't hold text.
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<String>;
}
