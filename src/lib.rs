//! # Sicherung Library
//!
//! Core library for the backup widgets of a server-management panel. It holds
//! everything that does not depend on a rendering toolkit: the typed form for
//! creating a backup, its validation, the submission state machine, the flash
//! message store and the ordered backup collection.
//!
//! ## Architecture
//!
//! The crate is split along the seams of the panel:
//! - **Flow**: [`flow::CreateBackupFlow`] turns user actions and remote
//!   settlements into state transitions and emits [`flow::FlowEffect`]s.
//! - **State**: [`state::PanelState`] owns the flash store and the backup
//!   collection and is the only place effects are applied.
//! - **API**: [`api::BackupApi`] is the remote seam. The native build ships a
//!   `reqwest` implementation in [`client`]; the web UI brings its own.
//!
//! ## Core Components
//!
//! - [`api`]: Remote backup operations
//! - [`checksum`]: Read-only checksum display
//! - [`client`]: HTTP client for the panel API (feature `native`)
//! - [`config`]: Configuration loading (feature `native`)
//! - [`error`]: HTTP errors and their human-readable translation
//! - [`flash`]: Keyed flash messages
//! - [`flow`]: Backup creation state machine
//! - [`state`]: Owning panel state
//! - [`store`]: Ordered backup collection and its commands
//! - [`types`]: Records, requests and wire envelopes
//! - [`validation`]: Form validation

pub mod api;
pub mod checksum;
#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
pub mod error;
pub mod flash;
pub mod flow;
pub mod state;
pub mod store;
pub mod types;
pub mod validation;

#[cfg(test)]
mod tests;
