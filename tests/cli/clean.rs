use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, stderr, stdout};

const TRANSLATIONS: &str = r#"{
  "home": {
    "title": "Hi",
    "unused": "X"
  },
  "footer": "F"
}
"#;

#[test]
fn test_clean_apply_prunes_unused_keys() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/app.js", "t('home.title');\nt('footer');\n")?;

    let output = test.clean_command().arg("--apply").output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Removed 1 unused key from"));
    assert_eq!(
        test.read_file("locales/en.json")?,
        "{\n  \"home\": {\n    \"title\": \"Hi\"\n  },\n  \"footer\": \"F\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_clean_apply_collapses_empty_objects() -> Result<()> {
    let test = CliTest::with_translations(
        r#"{ "settings": { "profile": { "name": "Name" } }, "footer": "F" }"#,
    )?;
    test.write_file("src/app.ts", "footer")?;

    let output = test.clean_command().arg("--apply").output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(
        test.read_file("locales/en.json")?,
        "{\n  \"footer\": \"F\"\n}\n"
    );
    Ok(())
}

#[test]
fn test_clean_without_terminal_is_dry_run() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/app.js", "home.title footer")?;

    let output = test.clean_command().output()?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("\"home.unused\""), "{}", out);
    assert!(out.contains("Would remove 1 unused key"), "{}", out);
    assert!(out.contains("Run with --apply to remove these keys."));
    assert_eq!(test.read_file("locales/en.json")?, TRANSLATIONS);
    Ok(())
}

#[test]
fn test_clean_all_used_leaves_file_untouched() -> Result<()> {
    let original = "{\"footer\":\"F\"}";
    let test = CliTest::with_translations(original)?;
    test.write_file("src/app.js", "footer")?;

    let output = test.clean_command().arg("--apply").output()?;

    assert!(output.status.success());
    assert!(!stdout(&output).contains("Removed"));
    assert_eq!(test.read_file("locales/en.json")?, original);
    Ok(())
}

#[test]
fn test_clean_empty_translations() -> Result<()> {
    let test = CliTest::with_translations("{}")?;

    let output = test.clean_command().arg("--apply").output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("no translation keys found"));
    assert_eq!(test.read_file("locales/en.json")?, "{}");
    Ok(())
}

#[test]
fn test_clean_missing_translation_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.clean_command().arg("--apply").output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.root().join("locales/en.json").exists());
    Ok(())
}
