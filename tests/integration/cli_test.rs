use blinky::cli::build_cli;

#[test]
fn test_cli_accepts_all_flags() {
    let matches = build_cli()
        .try_get_matches_from([
            "blinky", "10.0.0.5", "-i", "3", "--all", "--collector", "--once", "--json",
            "--no-color", "--save",
        ])
        .unwrap();

    assert_eq!(matches.get_one::<String>("host").map(String::as_str), Some("10.0.0.5"));
    assert_eq!(matches.get_one::<u64>("interval").copied(), Some(3));
    for flag in ["all", "collector", "once", "json", "no-color", "save"] {
        assert!(matches.get_flag(flag), "{} should be set", flag);
    }
}

#[test]
fn test_cli_negating_flags_take_the_last_word() {
    let matches = build_cli()
        .try_get_matches_from(["blinky", "--all", "--brief", "--collector", "--agent"])
        .unwrap();
    assert!(!matches.get_flag("all"));
    assert!(matches.get_flag("brief"));
    assert!(!matches.get_flag("collector"));
    assert!(matches.get_flag("agent"));

    let matches = build_cli()
        .try_get_matches_from(["blinky", "--agent", "-c"])
        .unwrap();
    assert!(matches.get_flag("collector"));
    assert!(!matches.get_flag("agent"));
}

#[test]
fn test_cli_rejects_zero_interval() {
    assert!(build_cli().try_get_matches_from(["blinky", "-i", "0"]).is_err());
    assert!(build_cli().try_get_matches_from(["blinky", "-i", "abc"]).is_err());
}

#[test]
fn test_cli_completions_shell_is_validated() {
    let matches = build_cli()
        .try_get_matches_from(["blinky", "--completions", "zsh"])
        .unwrap();
    assert_eq!(matches.get_one::<String>("completions").map(String::as_str), Some("zsh"));

    assert!(build_cli()
        .try_get_matches_from(["blinky", "--completions", "cmd"])
        .is_err());
}

#[test]
fn test_cli_definition_is_consistent() {
    build_cli().debug_assert();
}
