// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod criteria;
pub mod error;
pub mod ids;
pub mod model;
pub mod pager;
pub mod project;
pub mod selection;

pub use criteria::*;
pub use error::*;
pub use ids::*;
pub use model::*;
pub use pager::*;
pub use project::*;
pub use selection::*;
