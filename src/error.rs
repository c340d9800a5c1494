//! Error types for level loading and GPU setup
//!
//! Both families are fatal at startup. Nothing here is produced once the
//! frame loop is running.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a level file into a scene.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to load level '{path}': {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: tobj::LoadError,
    },

    #[error("failed to parse in-memory level: {0}")]
    Parse(#[source] tobj::LoadError),
}

/// Failure while bringing up the wgpu surface, adapter or device.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create render surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable graphics adapter found: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to open graphics device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported texture formats")]
    NoSurfaceFormat,
}
