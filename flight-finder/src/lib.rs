//! Vacation-aware flight finder.
//!
//! A search tool that answers: "which round trips fit my budget
//! without spending more vacation days than I can afford?"

pub mod domain;
pub mod holidays;
pub mod naver;
pub mod planner;
pub mod report;
