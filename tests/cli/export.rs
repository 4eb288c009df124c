use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

fn setup_locales(test: &CliTest) -> Result<()> {
    test.write_file(
        "app/locales/en.yml",
        r#"en:
  greeting: "Hello"
  farewell: "Bye"
  date:
    formats:
      short: "%b %d"
"#,
    )?;
    test.write_file(
        "app/locales/de.yml",
        r#"de:
  greeting: "Hallo"
  date:
    formats:
      short: "%d. %b"
"#,
    )
}

#[test]
fn test_export_without_config_writes_single_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;

    let output = test.export_command().output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let content = test.read_file("public/javascripts/translations.js")?;
    assert_eq!(
        content,
        "var I18n = I18n || {}; \n\
         I18n.translations = I18n.translations || {}; \n\
         jQuery.extend(true, I18n.translations, \
         {\"de\":{\"greeting\":\"Hallo\",\"date\":{\"formats\":{\"short\":\"%d. %b\"}}},\
         \"en\":{\"greeting\":\"Hello\",\"farewell\":\"Bye\",\"date\":{\"formats\":{\"short\":\"%b %d\"}}}});"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Saving to file public/javascripts/translations.js"));
    assert!(stdout.contains("Exported 1 segment from 2 locale files"));

    Ok(())
}

#[test]
fn test_export_per_locale_segments_with_fallback() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;
    test.write_file(
        "config/i18n-js.yml",
        r#"translations:
  - file: "public/javascripts/i18n/%{locale}.js"
    only: ["greeting", "farewell"]
    fallback: true
"#,
    )?;

    let output = test
        .export_command()
        .args(["--locales", "en,de,fr", "--json"])
        .output()?;
    assert!(output.status.success());

    assert_snapshot!(
        test.read_file("public/javascripts/i18n/en.js")?,
        @r#"{"en":{"greeting":"Hello","farewell":"Bye"}}"#
    );
    assert_snapshot!(
        test.read_file("public/javascripts/i18n/de.js")?,
        @r#"{"de":{"greeting":"Hallo","farewell":"Bye"}}"#
    );
    assert_snapshot!(
        test.read_file("public/javascripts/i18n/fr.js")?,
        @r#"{"fr":{"greeting":"Hello","farewell":"Bye"}}"#
    );

    Ok(())
}

#[test]
fn test_export_scoped_file_and_empty_segments() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;
    test.write_file(
        "config/i18n-js.yml",
        r#"translations:
  - file: "public/javascripts/dates.js"
    only: "*.date.formats"
  - file: "public/javascripts/missing.js"
    only: "*.nothing_here"
  - file: "public/javascripts/%{locale}/farewell.js"
    only: "farewell"
"#,
    )?;

    let output = test.export_command().arg("--json").output()?;
    assert!(output.status.success());

    assert_snapshot!(
        test.read_file("public/javascripts/dates.js")?,
        @r#"{"de":{"date":{"formats":{"short":"%d. %b"}}},"en":{"date":{"formats":{"short":"%b %d"}}}}"#
    );
    assert!(!test.exists("public/javascripts/missing.js"));
    assert!(test.exists("public/javascripts/en/farewell.js"));
    assert!(!test.exists("public/javascripts/de/farewell.js"));

    Ok(())
}

#[test]
fn test_export_last_entry_wins_on_same_path() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;
    test.write_file(
        "config/i18n-js.yml",
        r#"translations:
  - file: "out.json"
    only: "en.greeting"
  - file: "out.json"
    only: "en.farewell"
"#,
    )?;

    let output = test.export_command().arg("--json").output()?;
    assert!(output.status.success());

    assert_snapshot!(test.read_file("out.json")?, @r#"{"en":{"farewell":"Bye"}}"#);

    Ok(())
}

#[test]
fn test_export_uses_options_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("rails/config/locales/en.yml", "en:\n  hello: Hello\n")?;
    test.write_file(
        ".i18njsrc.json",
        r#"{
            "rootPath": "rails",
            "localePath": "/config/locales",
            "saveAsJson": true,
            "outputDir": "build"
        }"#,
    )?;

    let output = test.command().arg("export").output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert_snapshot!(
        test.read_file("build/public/javascripts/translations.js")?,
        @r#"{"en":{"hello":"Hello"}}"#
    );

    Ok(())
}

#[test]
fn test_export_finds_options_file_in_parent_dir() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;
    test.write_file(
        ".i18njsrc.json",
        r#"{ "rootPath": "..", "saveAsJson": true, "outputDir": "build" }"#,
    )?;
    test.write_file("frontend/package.json", "{}")?;

    let output = test
        .command()
        .current_dir(test.root().join("frontend"))
        .args(["export", "--locales", "en"])
        .output()?;
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    assert!(test.exists("frontend/build/public/javascripts/translations.js"));

    Ok(())
}

#[test]
fn test_export_fallback_segment_for_locale_without_matches() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;
    test.write_file(
        "config/i18n-js.yml",
        r#"translations:
  - file: "public/javascripts/i18n/%{locale}.js"
    only: "nothing_here"
    fallback: true
"#,
    )?;

    let output = test
        .export_command()
        .args(["--locales", "en,de", "--json"])
        .output()?;
    assert!(output.status.success());

    assert_snapshot!(test.read_file("public/javascripts/i18n/en.js")?, @r#"{"en":{}}"#);
    assert_snapshot!(test.read_file("public/javascripts/i18n/de.js")?, @r#"{"de":{}}"#);

    Ok(())
}

#[test]
fn test_export_dry_run_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;

    let output = test.export_command().arg("--dry-run").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Would write public/javascripts/translations.js (2 top-level keys)"));
    assert!(stdout.contains("dry run, nothing written"));
    assert!(!test.exists("public/javascripts/translations.js"));

    Ok(())
}

#[test]
fn test_export_requires_root_path() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;

    let output = test.command().arg("export").output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("You need to provide the rootPath option"));
    assert!(!test.exists("public"));

    Ok(())
}

#[test]
fn test_export_malformed_yaml_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;
    test.write_file("app/locales/broken.yml", "en:\n  oops: [unclosed\n")?;

    let output = test.export_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.yml"));
    assert!(!test.exists("public"));

    Ok(())
}

#[test]
fn test_export_malformed_config_writes_nothing() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;
    test.write_file("config/i18n-js.yml", "translations:\n  - file: [oops\n")?;

    let output = test.export_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("i18n-js.yml"));
    assert!(!test.exists("public"));

    Ok(())
}

#[test]
fn test_export_is_repeatable() -> Result<()> {
    let test = CliTest::new()?;
    setup_locales(&test)?;

    test.export_command().output()?;
    let first = test.read_file("public/javascripts/translations.js")?;
    test.export_command().output()?;
    let second = test.read_file("public/javascripts/translations.js")?;

    assert_eq!(first, second);
    assert!(test.root().join("public/javascripts").is_dir());

    Ok(())
}
