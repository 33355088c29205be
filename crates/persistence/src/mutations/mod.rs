// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation operations.
//!
//! Functions here take an already-open connection; transaction
//! boundaries are owned by the `Persistence` adapter so that a status
//! update and its ledger insert always commit or roll back together.

pub mod bookings;
pub mod tours;
