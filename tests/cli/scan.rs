use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_scan_writes_fresh_catalog() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.vue",
        "<span>{{ __(\"hello\") }}</span>\n<span>{{ __('world') }}</span>\n",
    )?;

    let output = test.scan_command().args(["--marker", "__"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Found 2 messages\n\u{2713} Catalog saved to messages.json\n"
    );
    assert_eq!(
        test.read_file("messages.json")?,
        r#"{
  "en": {
    "hello": "",
    "world": ""
  },
  "zh": {
    "hello": "",
    "world": ""
  }
}
"#
    );

    Ok(())
}

#[test]
fn test_rescan_preserves_translations_and_surfaces_untranslated_first() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        "alert(__(\"hello\"));\nalert(__('world'));\n",
    )?;
    test.write_file(
        "messages.json",
        r#"{"en": {"hello": "Hello"}, "zh": {}}"#,
    )?;

    let output = test.scan_command().args(["--marker", "__"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("messages.json")?,
        r#"{
  "en": {
    "world": "",
    "hello": "Hello"
  },
  "zh": {
    "hello": "",
    "world": ""
  }
}
"#
    );

    Ok(())
}

#[test]
fn test_missing_dir_prints_usage_and_exits_zero() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().output()?;

    // The missing-directory path deliberately exits 0 after printing usage.
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Usage"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing --dir argument"));

    Ok(())
}

#[test]
fn test_default_marker_is_underscore() -> Result<()> {
    let test = CliTest::with_file("src/page.php", "<?= _('greeting') ?>\n")?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Found 1 messages"));
    assert!(test.read_file("messages.json")?.contains("\"greeting\""));

    Ok(())
}

#[test]
fn test_config_file_supplies_settings() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "__(\"hi\")\n")?;
    test.write_file(
        ".gleanrc.json",
        r#"{ "languages": ["en", "fr"], "marker": "__", "messages": "catalog.json" }"#,
    )?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("catalog.json")?,
        r#"{
  "en": {
    "hi": ""
  },
  "fr": {
    "hi": ""
  }
}
"#
    );

    Ok(())
}

#[test]
fn test_flags_override_config_file() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "t(\"nope\")\n__(\"yes\")\n")?;
    test.write_file(".gleanrc.json", r#"{ "marker": "t" }"#)?;

    let output = test
        .scan_command()
        .args(["--marker", "__", "--languages", "en"])
        .output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("messages.json")?,
        r#"{
  "en": {
    "yes": ""
  }
}
"#
    );

    Ok(())
}

#[test]
fn test_corrupt_catalog_warns_and_starts_fresh() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "_(\"key\")\n")?;
    test.write_file("messages.json", "this is not json")?;

    let output = test.scan_command().output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("warning:"));
    assert!(test.read_file("messages.json")?.contains("\"key\""));

    Ok(())
}

#[test]
fn test_invalid_marker_aborts_without_writing() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "_(\"key\")\n")?;

    let output = test.scan_command().args(["--marker", "broken("]).output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    assert!(test.read_file("messages.json").is_err());

    Ok(())
}

#[test]
fn test_verbose_lists_parsed_files() -> Result<()> {
    let test = CliTest::with_file("src/app.js", "_(\"kept\")\n")?;

    let output = test.scan_command().args(["--verbose"]).output()?;

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Parsing"));

    Ok(())
}
