#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod error;

pub mod middleware;

pub use crate::config::{PORT_ENV_VAR, env_port_or};
pub use crate::error::{BoxedError, HttpError, Result};
