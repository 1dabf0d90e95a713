//! Mlforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the mlforge
//! project scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          mlforge-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ScaffoldService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Blueprint, Filesystem)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    mlforge-adapters (Infrastructure)    │
//! │    (MlBlueprint, LocalFilesystem, …)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (DirectoryTree, FileManifest, Layout)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mlforge_core::application::ScaffoldService;
//!
//! // Use application service (with injected adapters)
//! let service = ScaffoldService::new(blueprint, filesystem);
//! let report = service.scaffold("my-experiment", ".").unwrap();
//! println!("wrote {} files", report.files_written);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldService,
        ports::{BlueprintSource, Filesystem},
    };
    pub use crate::domain::{
        DirectoryTree, FileManifest, PayloadContent, ProjectLayout, RelativePath, RenderContext,
    };
    pub use crate::error::{MlforgeError, MlforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
