//! Government fee engine for employee-related charges in Saudi Arabia.
//!
//! This crate projects the labor office levy, residency fee, medical
//! insurance premium, social insurance contributions and one-off charges
//! owed for an employee over a billing period, producing an itemized and
//! audited breakdown.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
