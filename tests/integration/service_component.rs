use anyhow::Result;

use crate::common::{DescriptorBuilder, TestProject};

const ORDER_SERVICE: &str = r#"package com.acme.shop;

import java.util.List;

public class OrderService implements Runnable {
    public void activate() {
    }

    public void run() {
    }
}
"#;

fn project_with_service() -> Result<TestProject> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "shop").bundle_plugin().build())?;
    project.write_file("src/main/java/com/acme/shop/OrderService.java", ORDER_SERVICE)?;
    Ok(project)
}

fn service_components(project: &TestProject) -> Result<Vec<String>> {
    let plugin = project.bundle_plugin()?;
    Ok(plugin
        .instructions()
        .map(|i| i.child_texts("Service-Component").map(str::to_string).collect())
        .unwrap_or_default())
}

#[test]
fn test_add_by_qualified_name() -> Result<()> {
    let project = project_with_service()?;

    project
        .run_osgi(&["add-service-component", "--class", "com.acme.shop.OrderService"])?
        .assert_success()
        .assert_stdout_contains("Added Service-Component com.acme.shop.OrderService");

    assert_eq!(service_components(&project)?, ["com.acme.shop.OrderService"]);
    Ok(())
}

#[test]
fn test_add_by_path() -> Result<()> {
    let project = project_with_service()?;

    project
        .run_osgi(&["add-service-component", "--class", "src/main/java/com/acme/shop/OrderService.java"])?
        .assert_success();

    assert_eq!(service_components(&project)?, ["com.acme.shop.OrderService"]);
    Ok(())
}

#[test]
fn test_add_twice_is_not_duplicated() -> Result<()> {
    let project = project_with_service()?;

    project.run_osgi(&["add-service-component", "--class", "com.acme.shop.OrderService"])?.assert_success();
    let before = project.read_file("osgi-project.toml")?;

    project
        .run_osgi(&["add-service-component", "--class", "com.acme.shop.OrderService"])?
        .assert_success()
        .assert_stdout_contains("already a Service-Component");

    assert_eq!(project.read_file("osgi-project.toml")?, before);
    assert_eq!(service_components(&project)?.len(), 1);
    Ok(())
}

#[test]
fn test_add_after_setup_keeps_instructions() -> Result<()> {
    let project = TestProject::with_descriptor(
        &DescriptorBuilder::new("com.acme", "shop").packaging("war").capabilities(&["web-resources"]).build(),
    )?;
    project.write_file("src/main/java/com/acme/shop/OrderService.java", ORDER_SERVICE)?;

    project.run_osgi(&["setup", "--context-path", "/shop", "--no-activator"])?.assert_success();
    project.run_osgi(&["add-service-component", "--class", "com.acme.shop.OrderService"])?.assert_success();

    assert_eq!(project.instruction("Web-ContextPath")?.as_deref(), Some("/shop"));
    assert_eq!(service_components(&project)?, ["com.acme.shop.OrderService"]);
    Ok(())
}

#[test]
fn test_without_bundle_plugin_fails() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "shop").build())?;
    project.write_file("src/main/java/com/acme/shop/OrderService.java", ORDER_SERVICE)?;
    let before = project.read_file("osgi-project.toml")?;

    let output = project.run_osgi(&["add-service-component", "--class", "com.acme.shop.OrderService"])?;
    output
        .assert_failure()
        .assert_stderr_contains("is not available")
        .assert_stderr_contains("osgi setup");
    assert_eq!(output.code, Some(1));

    assert_eq!(project.read_file("osgi-project.toml")?, before);
    Ok(())
}

#[test]
fn test_unknown_class_fails() -> Result<()> {
    let project = project_with_service()?;

    project
        .run_osgi(&["add-service-component", "--class", "com.acme.shop.Missing"])?
        .assert_failure()
        .assert_stderr_contains("com.acme.shop.Missing");

    assert!(service_components(&project)?.is_empty());
    Ok(())
}
