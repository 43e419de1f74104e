use crate::config::types::EntryConfig;
use crate::pipeline::bundler::DEFAULT_BUNDLER_COMMAND;
use crate::pipeline::paths::{
    DEFAULT_CJS_INPUT, DEFAULT_CJS_OUTPUT, DEFAULT_ESM_INPUT, DEFAULT_ESM_OUTPUT,
};
use std::path::PathBuf;

pub fn default_bundler_command() -> Vec<String> {
    DEFAULT_BUNDLER_COMMAND.iter().map(ToString::to_string).collect()
}

pub fn default_esm_entry() -> EntryConfig {
    EntryConfig {
        input: PathBuf::from(DEFAULT_ESM_INPUT),
        output: PathBuf::from(DEFAULT_ESM_OUTPUT),
    }
}

pub fn default_cjs_entry() -> EntryConfig {
    EntryConfig {
        input: PathBuf::from(DEFAULT_CJS_INPUT),
        output: PathBuf::from(DEFAULT_CJS_OUTPUT),
    }
}

pub fn default_comments() -> bool {
    true // Keep license headers and JSDoc
}
