// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! PI Web API type definitions
//!
//! This crate holds the data records exchanged with the PI Web API asset
//! (AF) hierarchy endpoints: elements, attributes, analyses, event frames,
//! notification rules and security entries, plus the collection and error
//! envelopes the service wraps them in.
//!
//! The service speaks PascalCase JSON (`WebId`, `TemplateName`, ...). Every
//! record here carries the matching serde attributes, and optional fields
//! are left out of the serialized form when unset so that `PATCH` bodies
//! only touch the fields the caller filled in.

pub mod types;
pub use types::*;
