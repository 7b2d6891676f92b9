// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod controller;
pub mod service;
pub mod store;

pub use controller::*;
pub use service::*;
pub use store::*;
