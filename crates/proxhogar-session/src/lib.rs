// SPDX-FileCopyrightText: 2026 ProxHogar Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session and auth context for the ProxHogar client.
//!
//! Holds the logged-in user, derives the presented role, and performs the
//! one-way conversion of a client account into a worker account. The
//! session record is persisted through a [`proxhogar_core::SessionStore`].

pub mod context;
pub mod store;

pub use context::SessionContext;
pub use store::{FileSessionStore, MemorySessionStore};
