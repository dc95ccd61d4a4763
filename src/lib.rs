//! Seekable byte channels over the handle-based I/O of a distributed filesystem client, such as
//! GlusterFS's `libgfapi`.
//!
//! # Purpose
//! A [`FileChannel`](channel::FileChannel) wraps one native file handle, opened on a mounted volume
//! by absolute path. It translates portable open intents and permission bits into the native flag
//! and mode integers, owns the handle until it is closed and marshals byte slices across the
//! native boundary with exact lengths.
//!
//! Mounting volumes, resolving paths and mapping URIs to volumes all happen elsewhere; this crate
//! takes an already mounted [`Volume`](driver::Volume) and an absolute path as given.
//!
//! # Drivers
//! The native primitives are reached through the [`Driver`](driver::Driver) trait instead of
//! free functions, so that channels can be exercised against a fake driver. Enabling the `gfapi`
//! feature provides `GfapiDriver`, which links against `libgfapi`.
//!
//! # Error Handling
//! Errors are strongly typed: each operation returns an enum of the error structs that can
//! actually occur for it, and distinguishes "already exists" from other native failures so that
//! exclusive creation works as an atomic primitive (e.g. for lock files). Native failures are
//! never retried or swallowed, with one exception: a failing close still releases the handle on
//! this side.
//!
//! # Logging
//! Channel lifecycle events are emitted through `tracing` at `debug` level and individual
//! transfers at `trace` level. The crate never installs a subscriber.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod channel;
pub mod driver;

pub(crate) mod util;
