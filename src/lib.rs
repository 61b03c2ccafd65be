//! Payroll and GST Billing Engine
//!
//! This crate provides the back-office computation core for a construction
//! company: monthly salary derivation from attendance records, GST-inclusive
//! bill totals, and printable invoice rendering.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod invoice;
pub mod models;
