use std::{io::Write, process::Stdio};

use anyhow::Result;

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
fn test_check_reports_unused_keys() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/app.js", "t('home.title'); t('footer');")?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("warning: \"home.unused\"  unused-key"), "{}", out);
    assert!(out.contains("locales/en.json:4"), "{}", out);
    assert!(out.contains("= value: X"), "{}", out);
    assert!(out.contains("1 unused key in"), "{}", out);
    assert!(!out.contains("\"home.title\""));

    Ok(())
}

#[test]
fn test_check_does_not_modify_translations() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/app.js", "t('home.title');")?;

    test.check_command().output()?;

    assert_eq!(test.read_file("locales/en.json")?, TRANSLATIONS);
    Ok(())
}

#[test]
fn test_check_all_keys_used() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;
    test.write_file("src/app.tsx", "home.title home.unused footer")?;

    let output = test.check_command().output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("All 3 translation keys are in use (1 file checked)"));
    Ok(())
}

#[test]
fn test_check_empty_translations() -> Result<()> {
    let test = CliTest::with_translations("{}")?;
    test.write_file("src/app.js", "anything")?;

    let output = test.check_command().output()?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("no translation keys found"));
    Ok(())
}

#[test]
fn test_check_missing_translation_file() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Translation file not found"));
    Ok(())
}

#[test]
fn test_check_missing_project_path() -> Result<()> {
    let test = CliTest::with_translations(TRANSLATIONS)?;

    let output = test.check_command().args(["-p", "does-not-exist"]).output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Error: Project path not found: does-not-exist"));
    Ok(())
}

#[test]
fn test_check_invalid_json() -> Result<()> {
    let test = CliTest::with_translations("{ \"home\": ")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("Error:"));
    Ok(())
}

#[test]
fn test_check_ignores_node_modules() -> Result<()> {
    let test = CliTest::with_translations(r#"{ "footer": "F" }"#)?;
    test.write_file("node_modules/lib/index.js", "footer")?;
    test.write_file("src/app.js", "nothing here")?;

    let output = test.check_command().output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("\"footer\""));
    Ok(())
}

#[test]
fn test_check_extensions_flag() -> Result<()> {
    let test = CliTest::with_translations(r#"{ "footer": "F" }"#)?;
    test.write_file("src/App.vue", "<p>{{ $t('footer') }}</p>")?;

    let default_run = test.check_command().output()?;
    assert_eq!(default_run.status.code(), Some(1));

    let vue_run = test.check_command().args(["-e", "vue"]).output()?;
    assert!(vue_run.status.success());
    Ok(())
}

#[test]
fn test_check_no_files_matched() -> Result<()> {
    let test = CliTest::with_translations(r#"{ "footer": "F" }"#)?;

    let output = test.check_command().output()?;
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(out.contains("no files matched ./**/*.{js,ts,jsx,tsx}"), "{}", out);
    Ok(())
}

#[test]
fn test_check_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".transweeprc.json",
        r#"{ "translationFile": "i18n/de.json", "projectPath": "web", "extensions": ["svelte"] }"#,
    )?;
    test.write_file("i18n/de.json", r#"{ "nav": { "home": "Start" } }"#)?;
    test.write_file("web/Nav.svelte", "{$_('nav.home')}")?;

    let output = test.check_command().output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    Ok(())
}

#[test]
fn test_check_interactive_answers() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("messages/fr.json", r#"{ "bye": "Salut" }"#)?;
    test.write_file("app/main.ts", "t('bye')")?;

    let mut child = test
        .check_command()
        .arg("-i")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(b"messages/fr.json\napp\n\n")?;
    }
    let output = child.wait_with_output()?;

    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Path to your translation file:"));
    assert!(out.contains("All 1 translation key is in use"), "{}", out);
    Ok(())
}
