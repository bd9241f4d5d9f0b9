/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]
#![allow(clippy::type_complexity)]

pub mod check;
pub mod cpo;
pub mod descriptors;
pub mod traits;
pub mod views;

pub mod prelude {
    pub use crate::check::*;
    pub use crate::cpo::*;
    pub use crate::descriptors::*;
    pub use crate::traits::*;
    pub use crate::views::*;
}
