#![allow(dead_code)]

mod mock_repositories;

pub use mock_repositories::*;
