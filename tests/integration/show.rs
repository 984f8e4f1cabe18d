use anyhow::Result;

use crate::common::{DescriptorBuilder, TestProject};

fn configured_project() -> Result<TestProject> {
    let project = TestProject::with_descriptor(
        &DescriptorBuilder::new("com.acme", "shop").packaging("war").capabilities(&["web-resources"]).build(),
    )?;
    project.run_osgi(&["setup", "--context-path", "/shop", "--no-activator"])?.assert_success();
    Ok(project)
}

#[test]
fn test_show_text() -> Result<()> {
    let project = configured_project()?;

    project
        .run_osgi(&["show"])?
        .assert_success()
        .assert_stdout_contains("packaging: bundle")
        .assert_stdout_contains("plugin: org.apache.felix:maven-bundle-plugin")
        .assert_stdout_contains("Web-ContextPath = /shop")
        .assert_stdout_contains("execution: bundle-manifest @ process-classes -> manifest");
    Ok(())
}

#[test]
fn test_show_json() -> Result<()> {
    let project = configured_project()?;

    let output = project.run_osgi(&["show", "--format", "json"])?;
    output.assert_success();

    let json: serde_json::Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(json["artifact_id"], "maven-bundle-plugin");
    assert_eq!(json["extensions"], true);
    assert_eq!(json["configuration"]["name"], "configuration");
    assert_eq!(json["executions"][0]["goals"][0], "manifest");
    Ok(())
}

#[test]
fn test_show_without_plugin() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "shop").build())?;

    project.run_osgi(&["show"])?.assert_failure().assert_stderr_contains("is not available");
    Ok(())
}
