//! Core business logic for the registry.
//!
//! # Modules
//!
//! - [`sweep`] - Detect-and-fix sweeps and the compliance count
//! - [`state`] - Daily marker tracking for the once-per-day sweep
//! - [`guard`] - Startup plus daily enforcement of the anonymization guarantee
//!
//! # Guard Workflow
//!
//! 1. **Startup sweep**: anonymize every non-compliant test-data row
//! 2. **Daily gate**: stop if the marker already holds today's date
//! 3. **Daily sweep**: sweep again, then count compliant rows
//! 4. **Marker**: save today's date
//!
//! # Example
//!
//! ```rust,no_run
//! use registry_guard::adapters::database::create_store;
//! use registry_guard::config::RegistryConfig;
//! use registry_guard::core::guard::Guard;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RegistryConfig::default();
//! let (records, state) = create_store(&config).await?;
//! records.ensure_schema().await?;
//!
//! let report = Guard::new(records, state).run().await?;
//! for line in report.summary_lines() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod guard;
pub mod state;
pub mod sweep;
