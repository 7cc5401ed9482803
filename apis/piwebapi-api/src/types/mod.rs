// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! PI Web API type definitions

pub mod analysis;
pub mod attribute;
pub mod common;
pub mod element;
pub mod event_frame;
pub mod notification;
pub mod search;
pub mod security;

pub use analysis::*;
pub use attribute::*;
pub use common::*;
pub use element::*;
pub use event_frame::*;
pub use notification::*;
pub use search::*;
pub use security::*;
