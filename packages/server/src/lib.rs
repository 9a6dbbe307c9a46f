// RoomVerse - API Core
//
// This crate provides the backend API for the RoomVerse co-living marketplace:
// property catalog with filtering, AI-assisted FAQ answers and listing copy,
// booking quotes, landlord/tenant dashboards, and identity administration
// against the hosted auth provider.
//
// Architecture follows domain-driven design: domain logic in domains/*,
// infrastructure in kernel/, HTTP surface in server/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
