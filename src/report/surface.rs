//! Print surface abstraction.
//!
//! The finished document is handed to an external rendering/printing
//! surface. The engine has no knowledge of how that surface displays or
//! queues the print job; it only sequences open → write → print → close
//! within a single report call.

use crate::error::ReportResult;

use super::render::ReportDocument;

/// An external rendering/printing surface.
///
/// Implementations report acquisition failure from [`PrintSurface::open`]
/// (e.g. a blocked window) as [`crate::error::ReportError::SurfaceUnavailable`];
/// the pipeline never swallows that error.
pub trait PrintSurface {
    /// Acquires the surface.
    fn open(&mut self) -> ReportResult<()>;

    /// Writes the complete document to the surface.
    fn write_document(&mut self, document: &ReportDocument) -> ReportResult<()>;

    /// Issues the print/export command.
    fn print(&mut self) -> ReportResult<()>;

    /// Releases the surface.
    fn close(&mut self);
}

/// Delivers a document to a surface: open, write, print, close.
///
/// Once `open` succeeds the surface is always closed before returning,
/// including when write or print fails; the failure still surfaces to
/// the caller. A failed open has nothing to close.
pub fn deliver_to_surface<S: PrintSurface>(
    surface: &mut S,
    document: &ReportDocument,
) -> ReportResult<()> {
    surface.open()?;
    let result = surface
        .write_document(document)
        .and_then(|()| surface.print());
    surface.close();
    result
}

/// An in-memory surface that captures the delivered document.
///
/// Used by tests and by the HTTP API, which returns the captured markup
/// in the response body instead of printing it.
#[derive(Debug, Default)]
pub struct BufferSurface {
    opened: bool,
    printed: bool,
    document: Option<ReportDocument>,
}

impl BufferSurface {
    /// Creates an empty buffer surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured document, if one was delivered.
    pub fn document(&self) -> Option<&ReportDocument> {
        self.document.as_ref()
    }

    /// Returns true if the print command was issued.
    pub fn printed(&self) -> bool {
        self.printed
    }

    /// Consumes the surface, yielding the captured document.
    pub fn into_document(self) -> Option<ReportDocument> {
        self.document
    }
}

impl PrintSurface for BufferSurface {
    fn open(&mut self) -> ReportResult<()> {
        self.opened = true;
        Ok(())
    }

    fn write_document(&mut self, document: &ReportDocument) -> ReportResult<()> {
        self.document = Some(document.clone());
        Ok(())
    }

    fn print(&mut self) -> ReportResult<()> {
        self.printed = true;
        Ok(())
    }

    fn close(&mut self) {
        self.opened = false;
    }
}
