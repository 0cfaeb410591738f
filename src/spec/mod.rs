// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Environment specification handling.

pub mod codec;

pub use codec::SpecDocument;
