//! Integration tests for the Unifiler file-system bookkeeping tool

mod cli_commands;
mod hasher_verification;
mod tree_enumeration;
