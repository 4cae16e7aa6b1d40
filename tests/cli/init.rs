use anyhow::Result;

use crate::CliTest;

#[test]
fn init_writes_default_config() -> Result<()> {
    let test = CliTest::new()?;

    let status = test.command().arg("init").status()?;
    assert!(status.success());

    let content = test.read_file(".compauditrc.json")?;
    let config: serde_json::Value = serde_json::from_str(&content)?;
    assert!(config["libraries"].is_array());
    assert_eq!(config["csvOutput"], "component_report.csv");

    Ok(())
}

#[test]
fn init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::with_file(".compauditrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"));

    Ok(())
}
