// envmod: safe in-place .env file editor
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          key / file / config
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  envmod.toml, ENVMOD_*    |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |          editor           |
//!              |  bind, key ops, file ops  |
//!              |  io: exclusive-lock write |
//!              '-------------+-------------'
//!                            v
//!              ,---------------------------,
//!              |         document          |
//!              |  line model, value codec  |
//!              '---------------------------'
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod logging;
