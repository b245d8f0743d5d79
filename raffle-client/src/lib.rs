// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

//! Client-side logic for the raffle lottery dapp: chain registry
//! resolution, typed contract access, and the entrance view's
//! refresh/submission flow.

pub mod app;
pub mod config;
pub mod contract;
mod error;
pub mod notification;
pub mod view;
pub mod wallet;

#[cfg(test)]
mod unit_tests;

pub use error::Error;
