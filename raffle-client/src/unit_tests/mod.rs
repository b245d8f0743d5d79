// Copyright (c) Raffle Developers
// SPDX-License-Identifier: Apache-2.0

mod config;
mod util;
