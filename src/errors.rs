//! Error Types
//!
//! This module defines the error types used throughout the application.
//!
//! # Overview
//!
//! The main error type [`AstrofallError`] covers both recognized failure
//! kinds: initialization failures (GPU context, window surface, shader
//! validation) and resource load failures (texture images, shader source
//! files). Both are fatal — the animation loop itself is closed-form and
//! deterministic, so no errors occur once it is running.
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, AstrofallError>`.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the astrofall application.
#[derive(Error, Debug)]
pub enum AstrofallError {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// Shader source failed wgpu validation.
    #[error("Shader validation failed for {path}: {message}")]
    ShaderError {
        /// Path of the shader source file
        path: PathBuf,
        /// Validation message reported by the backend
        message: String,
    },

    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(#[from] raw_window_handle::HandleError),

    /// Window creation failed.
    #[error("Failed to create window: {0}")]
    WindowCreateFailed(#[from] winit::error::OsError),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    // ========================================================================
    // Resource Load Errors
    // ========================================================================
    /// A texture image could not be read or decoded. There is no fallback
    /// texture, so a missing body texture is fatal.
    #[error("Failed to load texture {path}: {message}")]
    TextureLoadFailed {
        /// Path of the image file
        path: PathBuf,
        /// Decoder or I/O message
        message: String,
    },

    /// File I/O error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Alias for `Result<T, AstrofallError>`.
pub type Result<T> = std::result::Result<T, AstrofallError>;
