//! Tests for HTTP controller endpoints.
//!
//! This module contains integration tests for the application's HTTP controllers,
//! verifying request handling, response formatting, status codes and error handling.

mod catalog;
mod favorite;
mod root;
mod router;

use holonet_test_utils::prelude::*;

use crate::util::{json_body, TestContextExt};
