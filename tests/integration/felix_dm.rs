use anyhow::Result;

use crate::common::{DescriptorBuilder, TestProject};
use osgi_plugin::models::Scope;

#[test]
fn test_install_dependency_only() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "shop").bundle_plugin().build())?;

    project
        .run_osgi(&["install-felix-dm", "--no-activator"])?
        .assert_success()
        .assert_stdout_contains("Added dependency org.apache.felix:org.apache.felix.dependencymanager:4.6.0");

    let dm = project
        .dependency("org.apache.felix", "org.apache.felix.dependencymanager")?
        .expect("dependency manager");
    assert_eq!(dm.scope, Some(Scope::Provided));
    assert_eq!(project.instruction("Bundle-Activator")?, None);
    assert!(!project.project_path().join("src/main/java").exists());
    Ok(())
}

#[test]
fn test_install_with_activator() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "shop").bundle_plugin().build())?;

    project
        .run_osgi(&["install-felix-dm", "--activator", "--no-log-service"])?
        .assert_success()
        .assert_stdout_contains("Bundle-Activator set to com.acme.osgi.Activator");

    let activator = project.read_file("src/main/java/com/acme/osgi/Activator.java")?;
    assert!(activator.contains("extends DependencyActivatorBase"));
    assert!(!activator.contains("LogService"));

    let component = project.read_file("src/main/java/com/acme/DmComponent.java")?;
    assert!(component.contains("public class DmComponent"));

    assert_eq!(
        project.instruction("Bundle-Activator")?.as_deref(),
        Some("com.acme.osgi.Activator")
    );
    assert!(project.dependency("org.apache.felix", "org.apache.felix.dependencymanager")?.is_some());
    Ok(())
}

#[test]
fn test_already_installed() -> Result<()> {
    let project = TestProject::with_descriptor(
        &DescriptorBuilder::new("com.acme", "shop")
            .dependency("org.apache.felix", "org.apache.felix.dependencymanager", Some("3.2.0"), Some("provided"))
            .bundle_plugin()
            .build(),
    )?;
    let before = project.read_file("osgi-project.toml")?;

    project
        .run_osgi(&["install-felix-dm", "--no-activator"])?
        .assert_success()
        .assert_stdout_contains("already installed");

    assert_eq!(project.read_file("osgi-project.toml")?, before);
    Ok(())
}

#[test]
fn test_without_bundle_plugin_writes_nothing() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "shop").build())?;
    let before = project.read_file("osgi-project.toml")?;

    project
        .run_osgi(&["install-felix-dm", "--activator"])?
        .assert_failure()
        .assert_stderr_contains("is not available");

    assert_eq!(project.read_file("osgi-project.toml")?, before);
    assert!(!project.project_path().join("src/main/java").exists());
    Ok(())
}
