use dualpack_transpile::EsTarget;

/// Parse an ECMAScript target name (`es2015`..`es2022`, `esnext`).
///
/// Matching is case-insensitive.
pub fn parse_target(s: &str) -> Result<EsTarget, String> {
    s.trim().to_ascii_lowercase().parse()
}

/// Validate a bundler command line.
///
/// # Errors
///
/// Returns an error message if the command contains no program.
pub fn parse_bundler_command(s: &str) -> Result<String, String> {
    if s.split_whitespace().next().is_none() {
        return Err("Bundler command cannot be empty".to_string());
    }
    Ok(s.trim().to_string())
}
