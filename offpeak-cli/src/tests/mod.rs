//! Shared test harness modules for the off-peak CLI.

use super::*;

mod helpers;
mod recommend_steps;
