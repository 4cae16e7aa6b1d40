use anyhow::Result;
use serde_json::Value;

use crate::CliTest;

fn rows(report: &Value) -> &Vec<Value> {
    let records = match report {
        Value::Array(records) => records,
        Value::Object(map) => map["components"].as_array().unwrap(),
        other => panic!("unexpected report shape: {other}"),
    };
    records
}

#[test]
fn imported_and_rendered_component_is_used() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
        import { Button } from "@acme/ui";
        export function App() {
            return <Button>Submit</Button>;
        }
        "#,
    )?;

    let status = test.scan_command().status()?;
    assert!(status.success());

    let report = test.read_json_report()?;
    let rows = rows(&report);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["library"], "@acme/ui");
    assert_eq!(rows[0]["component"], "Button");
    assert_eq!(rows[0]["import_count"], 1);
    assert_eq!(rows[0]["usage_count"], 1);
    assert_eq!(rows[0]["is_used"], "Yes");
    assert_eq!(rows[0]["files"].as_array().unwrap().len(), 1);

    Ok(())
}

#[test]
fn unrelated_local_component_does_not_count() -> Result<()> {
    let test = CliTest::with_file(
        "src/b.tsx",
        r#"
        import { Button } from "@acme/ui";
        export const unused = true;
        "#,
    )?;
    test.write_file(
        "src/c.tsx",
        r#"
        const Button = () => <button>local</button>;
        export const App = () => <Button />;
        "#,
    )?;

    assert!(test.scan_command().status()?.success());

    let report = test.read_json_report()?;
    let rows = rows(&report);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["import_count"], 1);
    assert_eq!(rows[0]["usage_count"], 0);
    assert_eq!(rows[0]["is_used"], "No");

    let files = rows[0]["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].as_str().unwrap().ends_with("b.tsx"));

    Ok(())
}

#[test]
fn aliased_import_counts_under_original_name() -> Result<()> {
    let test = CliTest::with_file(
        "src/d.tsx",
        r#"
        import { Button as MyButton } from "@acme/ui";
        export const App = () => <><MyButton /><MyButton /></>;
        "#,
    )?;

    assert!(test.scan_command().status()?.success());

    let report = test.read_json_report()?;
    let rows = rows(&report);
    assert_eq!(rows[0]["component"], "Button");
    assert_eq!(rows[0]["import_count"], 1);
    assert_eq!(rows[0]["usage_count"], 2);

    Ok(())
}

#[test]
fn syntax_error_file_warns_and_exits_nonzero() -> Result<()> {
    let test = CliTest::with_file(
        "src/good.tsx",
        r#"
        import { Card } from "@acme/ui";
        export const App = () => <Card />;
        "#,
    )?;
    test.write_file("src/broken.tsx", "const = <<<")?;

    let output = test.scan_command().output()?;
    // Failure exit: analysis completed, one file skipped.
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.tsx"));

    let report = test.read_json_report()?;
    let rows = rows(&report);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["component"], "Card");
    assert!(
        !rows[0]["files"]
            .as_array()
            .unwrap()
            .iter()
            .any(|f| f.as_str().unwrap().contains("broken"))
    );

    Ok(())
}

#[test]
fn untracked_library_is_isolated() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
        import { Button } from "other-kit";
        export const App = () => <Button />;
        "#,
    )?;

    assert!(test.scan_command().status()?.success());

    let report = test.read_json_report()?;
    assert!(rows(&report).is_empty());

    Ok(())
}

#[test]
fn manifest_metadata_wraps_the_report() -> Result<()> {
    let test = CliTest::with_file(
        "package.json",
        r#"{
            "name": "storefront",
            "dependencies": { "@acme/ui": "^4.2.0", "react": "^18.0.0" }
        }"#,
    )?;
    test.write_file(
        "src/app.tsx",
        r#"
        import { Button } from "@acme/ui";
        export const App = () => <Button />;
        "#,
    )?;

    assert!(test.scan_command().status()?.success());

    let report = test.read_json_report()?;
    assert_eq!(report["project"]["name"], "storefront");
    let deps = report["project"]["tracked_dependencies"].as_array().unwrap();
    assert_eq!(deps.len(), 1);
    assert_eq!(deps[0]["name"], "@acme/ui");
    assert_eq!(deps[0]["version"], "^4.2.0");

    Ok(())
}

#[test]
fn csv_report_lists_each_component() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
        import { Button, Card } from "@acme/ui";
        export const App = () => <Card />;
        "#,
    )?;

    assert!(test.scan_command().status()?.success());

    let csv = test.read_file("component_report.csv")?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "Library,Component,ImportCount,UsageCount,isUsed,Files"
    );
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("\"Button\"") && lines[1].contains("\"No\""));
    assert!(lines[2].contains("\"Card\"") && lines[2].contains("\"Yes\""));

    Ok(())
}

#[test]
fn no_csv_and_no_json_suppress_reports() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
        import { Button } from "@acme/ui";
        export const App = () => <Button />;
        "#,
    )?;

    let status = test
        .scan_command()
        .arg("--no-csv")
        .arg("--no-json")
        .status()?;
    assert!(status.success());

    assert!(test.read_file("component_report.csv").is_err());
    assert!(test.read_file("report.json").is_err());

    Ok(())
}

#[test]
fn config_file_supplies_tracked_libraries() -> Result<()> {
    let test = CliTest::with_file(
        ".compauditrc.json",
        r#"{ "libraries": ["@acme/ui"] }"#,
    )?;
    test.write_file(
        "src/app.tsx",
        r#"
        import { Button } from "@acme/ui";
        export const App = () => <Button />;
        "#,
    )?;

    let status = test.command().arg("scan").status()?;
    assert!(status.success());

    let report = test.read_json_report()?;
    assert_eq!(rows(&report)[0]["component"], "Button");

    Ok(())
}

#[test]
fn missing_libraries_is_an_error() -> Result<()> {
    let test = CliTest::with_file("src/app.tsx", "export const x = 1;")?;

    let output = test.command().arg("scan").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No tracked libraries configured"));

    Ok(())
}

#[test]
fn test_files_are_excluded_by_default() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.test.tsx",
        r#"
        import { Button } from "@acme/ui";
        export const App = () => <Button />;
        "#,
    )?;

    assert!(test.scan_command().status()?.success());

    let report = test.read_json_report()?;
    assert!(rows(&report).is_empty());

    Ok(())
}

#[test]
fn unenumerable_source_root_is_an_error() -> Result<()> {
    let test = CliTest::with_file(
        ".compauditrc.json",
        r#"{ "libraries": ["@acme/ui"], "sourceRoot": "does-not-exist" }"#,
    )?;

    let output = test.command().arg("scan").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to enumerate files"));

    Ok(())
}

#[test]
fn failed_write_exits_nonzero_without_success_line() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
        import { Button } from "@acme/ui";
        export const App = () => <Button />;
        "#,
    )?;

    let output = test
        .scan_command()
        .arg("--csv-out")
        .arg("missing-dir/out.csv")
        .output()?;
    assert_eq!(output.status.code(), Some(2));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Report written to missing-dir"));
    assert!(stdout.contains("report.json"));

    Ok(())
}

#[test]
fn help_shows_commands() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("init"));

    Ok(())
}
