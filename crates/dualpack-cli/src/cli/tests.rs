#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command, parse_bundler_command, parse_target};
    use clap::Parser;
    use dualpack_transpile::EsTarget;
    use std::path::PathBuf;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target("es2015"), Ok(EsTarget::Es2015));
        assert_eq!(parse_target("ES2020"), Ok(EsTarget::Es2020));
        assert_eq!(parse_target(" esnext "), Ok(EsTarget::Esnext));

        let err = parse_target("es5").unwrap_err();
        assert!(err.contains("es5"));
        assert!(err.contains("es2015"));
    }

    #[test]
    fn test_parse_bundler_command() {
        assert_eq!(
            parse_bundler_command(" npx vite build "),
            Ok("npx vite build".to_string())
        );
        assert_eq!(
            parse_bundler_command("   ").unwrap_err(),
            "Bundler command cannot be empty"
        );
        assert!(parse_bundler_command("").is_err());
    }

    #[test]
    fn test_cli_verbose_quiet_conflict() {
        let result = Cli::try_parse_from(["dualpack", "--verbose", "--quiet", "build"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_args_defaults() {
        let args = Cli::try_parse_from(["dualpack", "build"]).unwrap();

        if let Command::Build(build) = args.command {
            assert!(build.config.is_none());
            assert!(build.cwd.is_none());
            assert!(build.target.is_none());
            assert!(build.bundler.is_none());
            assert!(!build.no_comments);
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_build_args_all_flags() {
        let args = Cli::try_parse_from([
            "dualpack",
            "build",
            "--config",
            "ci.json",
            "--cwd",
            "packages/lib",
            "--target",
            "es2019",
            "--bundler",
            "pnpm rollup -c",
            "--no-comments",
        ])
        .unwrap();

        if let Command::Build(build) = args.command {
            assert_eq!(build.config, Some(PathBuf::from("ci.json")));
            assert_eq!(build.cwd, Some(PathBuf::from("packages/lib")));
            assert_eq!(build.target, Some(EsTarget::Es2019));
            assert_eq!(build.bundler.as_deref(), Some("pnpm rollup -c"));
            assert!(build.no_comments);
        } else {
            panic!("Expected Build command");
        }
    }

    #[test]
    fn test_build_rejects_unknown_target() {
        let result = Cli::try_parse_from(["dualpack", "build", "--target", "es3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Cli::try_parse_from(["dualpack", "build", "--quiet", "--no-color"]).unwrap();
        assert!(args.quiet);
        assert!(args.no_color);
        assert!(!args.verbose);
    }

    #[test]
    fn test_schema_command() {
        let args = Cli::try_parse_from(["dualpack", "schema"]).unwrap();
        assert!(matches!(args.command, Command::Schema));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["dualpack"]).is_err());
    }
}
