//! uinputd - input automation daemon for Linux
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Unix socket (JSON, one request/conn)    │
//! │                  ↓                       │
//! │  Dispatcher  ←  Layout registry          │
//! │     (type / stream / key, cancellation)  │
//! │                  ↓                       │
//! │  Virtual keyboard (/dev/uinput)          │
//! └──────────────────────────────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod device;
pub mod dispatch;
pub mod input;
pub mod layouts;
pub mod protocol;
pub mod server;
