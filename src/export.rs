//! Image export through an external rasterizer.

use crate::board::Board;
use crate::pitch::Pitch;
use std::cell::Cell;
use std::rc::Rc;

/// Pixel density the pitch is rasterized at.
pub const EXPORT_SCALE: f64 = 2.0;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ExportError {
    #[error("An export is already in progress")]
    Busy,
    #[error("Nothing to render: pitch size is {0}x{1}")]
    EmptySurface(f64, f64),
    #[error("Rasterizing failed: {0}")]
    Rasterize(String),
}

/// Recoverable message shown to the user after a failed export.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
}

impl From<&ExportError> for Notice {
    fn from(err: &ExportError) -> Self {
        let message = match err {
            ExportError::Busy => "Export already running, please wait.".to_string(),
            ExportError::EmptySurface(..) => "The pitch is not visible yet.".to_string(),
            ExportError::Rasterize(reason) => format!("Could not create image: {}", reason),
        };
        Self { message }
    }
}

/// Converts a rendered surface into encoded image bytes.
pub trait Rasterizer {
    fn rasterize(&self, svg: &str, scale: f64) -> Result<Vec<u8>, ExportError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedImage {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Held while an export runs; clears the in-flight flag when dropped.
pub struct ExportTicket {
    in_flight: Rc<Cell<bool>>,
}

impl Drop for ExportTicket {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}

/// Lets at most one export run at a time.
#[derive(Default)]
pub struct ExportCoordinator {
    in_flight: Rc<Cell<bool>>,
}

impl ExportCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.get()
    }

    /// Claim the export slot. Returns `None` while another export is pending.
    pub fn begin(&self) -> Option<ExportTicket> {
        if self.in_flight.replace(true) {
            log::debug!("export already in flight, ignoring trigger");
            return None;
        }
        Some(ExportTicket {
            in_flight: Rc::clone(&self.in_flight),
        })
    }

    /// Render the board and hand it to `rasterizer`.
    pub fn export<R: Rasterizer>(
        &self,
        board: &Board,
        pitch: &Pitch,
        compact: bool,
        width: f64,
        height: f64,
        rasterizer: &R,
    ) -> Result<ExportedImage, ExportError> {
        let _ticket = self.begin().ok_or(ExportError::Busy)?;
        if width <= 0.0 || height <= 0.0 {
            return Err(ExportError::EmptySurface(width, height));
        }

        let svg = pitch.render(board, compact, width, height);
        let bytes = rasterizer.rasterize(&svg, EXPORT_SCALE).inspect_err(|e| {
            log::warn!("export of {} failed: {}", board.template(), e);
        })?;

        log::info!("exported {} ({} bytes)", board.export_filename(), bytes.len());
        Ok(ExportedImage {
            filename: board.export_filename(),
            bytes,
        })
    }
}
