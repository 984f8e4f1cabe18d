use anyhow::Result;

use crate::common::{DescriptorBuilder, TestProject};
use osgi_plugin::models::{PackagingType, Scope};

#[test]
fn test_setup_web_project() -> Result<()> {
    let project = TestProject::with_descriptor(
        &DescriptorBuilder::new("com.acme", "shop")
            .packaging("war")
            .dependency("com.acme", "foo", Some("1.0"), Some("compile"))
            .dependency("junit", "junit", Some("4.13"), Some("test"))
            .build(),
    )?;
    project.add_webapp_dir()?;

    project
        .run_osgi(&["setup", "--context-path", "/shop", "--no-activator"])?
        .assert_success()
        .assert_stdout_contains("Packaging type changed to bundle");

    let descriptor = project.descriptor()?;
    assert_eq!(descriptor.project.packaging, PackagingType::Bundle);

    assert_eq!(project.instruction("Web-ContextPath")?.as_deref(), Some("/shop"));
    assert_eq!(
        project.instruction("Bundle-ClassPath")?.as_deref(),
        Some("WEB-INF/classes, WEB-INF/lib/foo-1.0.jar")
    );
    assert_eq!(project.instruction("Import-Package")?, None);
    assert_eq!(project.instruction("Bundle-Activator")?, None);

    let plugin = project.bundle_plugin()?;
    assert!(plugin.extensions);
    let types = plugin.configuration.child_named("supportedProjectTypes").expect("supportedProjectTypes");
    assert_eq!(types.child_named("supportedProjectType").and_then(|t| t.text()), Some("war"));
    assert_eq!(plugin.executions.len(), 1);
    assert_eq!(plugin.executions[0].phase, "process-classes");
    assert_eq!(plugin.executions[0].goals, ["manifest"]);
    Ok(())
}

#[test]
fn test_setup_web_project_with_servlet_imports() -> Result<()> {
    let project = TestProject::with_descriptor(
        &DescriptorBuilder::new("com.acme", "shop").packaging("war").capabilities(&["web-resources"]).build(),
    )?;

    project
        .run_osgi(&["setup", "--servlet-imports", "--no-activator"])?
        .assert_success();

    assert_eq!(project.instruction("Web-ContextPath")?.as_deref(), Some("/"));
    assert_eq!(project.instruction("Bundle-ClassPath")?.as_deref(), Some("WEB-INF/classes"));
    assert_eq!(
        project.instruction("Import-Package")?.as_deref(),
        Some("javax.servlet,javax.servlet.http")
    );
    Ok(())
}

#[test]
fn test_setup_persistence_project() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "store").build())?;
    project.write_file("src/main/resources/META-INF/persistence.xml", "<persistence/>")?;

    project.run_osgi(&["setup", "--no-activator"])?.assert_success();

    assert_eq!(
        project.instruction("Meta-Persistence")?.as_deref(),
        Some("META-INF/persistence.xml")
    );
    assert_eq!(project.instruction("Web-ContextPath")?, None);
    Ok(())
}

#[test]
fn test_setup_plain_project_has_empty_instructions() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "util").build())?;

    project.run_osgi(&["setup", "--no-activator"])?.assert_success();

    let plugin = project.bundle_plugin()?;
    let instructions = plugin.instructions().expect("instructions element");
    assert!(instructions.children().is_empty());
    assert!(project.descriptor()?.dependencies.is_empty());
    Ok(())
}

#[test]
fn test_setup_creates_activator_and_core_libraries() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "util").build())?;

    project
        .run_osgi(&["setup", "--activator"])?
        .assert_success()
        .assert_stdout_contains("Created src/main/java/com/acme/osgi/Activator.java");

    let source = project.read_file("src/main/java/com/acme/osgi/Activator.java")?;
    assert!(source.contains("package com.acme.osgi;"));
    assert!(source.contains("class Activator implements BundleActivator"));

    assert_eq!(
        project.instruction("Bundle-Activator")?.as_deref(),
        Some("com.acme.osgi.Activator")
    );

    let core = project.dependency("org.osgi", "org.osgi.core")?.expect("org.osgi.core");
    assert_eq!(core.version.as_deref(), Some("6.0.0"));
    assert_eq!(core.scope, Some(Scope::Provided));
    let compendium = project.dependency("org.osgi", "org.osgi.compendium")?.expect("compendium");
    assert_eq!(compendium.version.as_deref(), Some("5.0.0"));
    Ok(())
}

#[test]
fn test_setup_activator_for_hyphenated_group_id() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("org.acme-corp", "util").build())?;

    project
        .run_osgi(&["setup", "--activator", "--dm"])?
        .assert_success();

    assert_eq!(
        project.instruction("Bundle-Activator")?.as_deref(),
        Some("org.acme_corp.osgi.Activator")
    );
    assert!(project.project_path().join("src/main/java/org/acme_corp/osgi/Activator.java").is_file());
    assert!(project.project_path().join("src/main/java/org/acme_corp/DmComponent.java").is_file());
    Ok(())
}

#[test]
fn test_setup_core_libraries_without_activator() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "util").build())?;

    project.run_osgi(&["setup", "--no-activator", "--core-libs"])?.assert_success();

    assert!(project.dependency("org.osgi", "org.osgi.core")?.is_some());
    assert!(project.dependency("org.osgi", "org.osgi.compendium")?.is_some());
    assert_eq!(project.instruction("Bundle-Activator")?, None);
    assert!(!project.project_path().join("src/main/java").exists());
    Ok(())
}

#[test]
fn test_setup_keeps_existing_library_version() -> Result<()> {
    let project = TestProject::with_descriptor(
        &DescriptorBuilder::new("com.acme", "util")
            .dependency("org.osgi", "org.osgi.core", Some("4.3.1"), Some("provided"))
            .build(),
    )?;

    project.run_osgi(&["setup", "--no-activator", "--core-libs"])?.assert_success();

    let descriptor = project.descriptor()?;
    let core: Vec<_> = descriptor.dependencies.iter().filter(|d| d.artifact_id == "org.osgi.core").collect();
    assert_eq!(core.len(), 1);
    assert_eq!(core[0].version.as_deref(), Some("4.3.1"));
    Ok(())
}

#[test]
fn test_setup_uses_configured_versions_and_defaults() -> Result<()> {
    let project = TestProject::with_descriptor(
        &DescriptorBuilder::new("com.acme", "util").base_package("com.acme.util").build(),
    )?;
    project.write_global_config(
        r#"
[versions]
"org.osgi:org.osgi.core" = ["4.3.1", "5.0.0"]

[defaults]
activator_package_suffix = "internal"
activator_class = "BundleStarter"
"#,
    )?;

    project.run_osgi(&["setup", "--activator"])?.assert_success();

    assert_eq!(
        project.instruction("Bundle-Activator")?.as_deref(),
        Some("com.acme.util.internal.BundleStarter")
    );
    assert!(project.project_path().join("src/main/java/com/acme/util/internal/BundleStarter.java").is_file());
    let core = project.dependency("org.osgi", "org.osgi.core")?.expect("org.osgi.core");
    assert_eq!(core.version.as_deref(), Some("5.0.0"));
    Ok(())
}

#[test]
fn test_setup_with_dependency_manager() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "util").build())?;

    project
        .run_osgi(&["setup", "--activator", "--dm", "--dm-package", "com.acme.service", "--dm-class", "Greeter"])?
        .assert_success();

    let activator = project.read_file("src/main/java/com/acme/osgi/Activator.java")?;
    assert!(activator.contains("extends DependencyActivatorBase"));
    assert!(activator.contains("import com.acme.service.Greeter;"));

    let component = project.read_file("src/main/java/com/acme/service/Greeter.java")?;
    assert!(component.contains("package com.acme.service;"));
    assert!(component.contains("LogService"));

    let dm = project
        .dependency("org.apache.felix", "org.apache.felix.dependencymanager")?
        .expect("dependency manager");
    assert_eq!(dm.version.as_deref(), Some("4.6.0"));
    assert_eq!(dm.scope, Some(Scope::Provided));
    Ok(())
}

#[test]
fn test_setup_twice_replaces_plugin() -> Result<()> {
    let project = TestProject::with_descriptor(
        &DescriptorBuilder::new("com.acme", "shop").packaging("war").capabilities(&["web-resources"]).build(),
    )?;

    project.run_osgi(&["setup", "--context-path", "/one", "--no-activator"])?.assert_success();
    project.run_osgi(&["setup", "--context-path", "/two", "--no-activator"])?.assert_success();

    let descriptor = project.descriptor()?;
    assert_eq!(descriptor.build.plugins.len(), 1);
    assert_eq!(project.instruction("Web-ContextPath")?.as_deref(), Some("/two"));
    Ok(())
}

#[test]
fn test_setup_rejects_invalid_package() -> Result<()> {
    let project = TestProject::with_descriptor(&DescriptorBuilder::new("com.acme", "util").build())?;
    let before = project.read_file("osgi-project.toml")?;

    project
        .run_osgi(&["setup", "--activator", "--activator-package", "com.1acme"])?
        .assert_failure()
        .assert_stderr_contains("Invalid package name");

    assert_eq!(project.read_file("osgi-project.toml")?, before);
    Ok(())
}
