//! Tests for the two-tier ESD/WIM export strategy, using fake tool
//! executables so no real DISM or wimlib installation is needed.

#![cfg(unix)]

mod common;

use std::path::Path;

use common::{write_fake_tool, write_fixture};
use recast::image::{
    dism_availability, esd_to_wim, wim_to_esd, Tool, ToolAvailability, ToolChain, ToolError,
};
use tempfile::TempDir;

fn chain(dism: &Path, wimlib: &Path) -> ToolChain {
    ToolChain {
        dism: dism.as_os_str().to_os_string(),
        wimlib: wimlib.as_os_str().to_os_string(),
    }
}

/// A tool double that logs every argument line and exits successfully
fn logging_tool(dir: &TempDir, name: &str, log: &Path) -> std::path::PathBuf {
    write_fake_tool(
        dir,
        name,
        &format!("#!/bin/sh\necho \"$@\" >> \"{}\"\nexit 0\n", log.display()),
    )
}

/// A DISM double whose probe succeeds but whose export fails
fn dism_export_failure(dir: &TempDir) -> std::path::PathBuf {
    write_fake_tool(
        dir,
        "dism",
        "#!/bin/sh\nif [ \"$1\" = \"/?\" ]; then exit 0; fi\necho \"export failed\" >&2\nexit 2\n",
    )
}

#[test]
fn test_probe_reports_available_tool() {
    let dir = TempDir::new().unwrap();
    let dism = write_fake_tool(&dir, "dism", "#!/bin/sh\nexit 0\n");
    let wimlib = write_fake_tool(&dir, "wimlib-imagex", "#!/bin/sh\nexit 0\n");

    let availability = dism_availability(&chain(&dism, &wimlib));
    assert!(matches!(availability, ToolAvailability::Available));
}

#[test]
fn test_probe_reports_missing_tool() {
    let dir = TempDir::new().unwrap();
    let wimlib = write_fake_tool(&dir, "wimlib-imagex", "#!/bin/sh\nexit 0\n");

    let availability = dism_availability(&chain(&dir.path().join("no-such-dism"), &wimlib));
    assert!(matches!(
        availability,
        ToolAvailability::Unavailable(ToolError::NotFound { .. })
    ));
}

#[test]
fn test_probe_reports_failing_tool() {
    let dir = TempDir::new().unwrap();
    let dism = write_fake_tool(&dir, "dism", "#!/bin/sh\necho \"bad invocation\" >&2\nexit 1\n");
    let wimlib = write_fake_tool(&dir, "wimlib-imagex", "#!/bin/sh\nexit 0\n");

    match dism_availability(&chain(&dism, &wimlib)) {
        ToolAvailability::Unavailable(ToolError::Failed { code, stderr, .. }) => {
            assert_eq!(code, 1);
            assert_eq!(stderr, "bad invocation");
        }
        other => panic!("expected a failed probe, got {:?}", other),
    }
}

#[test]
fn test_esd_to_wim_prefers_dism_and_forwards_arguments() {
    let dir = TempDir::new().unwrap();
    let dism_log = dir.path().join("dism.log");
    let wimlib_log = dir.path().join("wimlib.log");
    let dism = logging_tool(&dir, "dism", &dism_log);
    let wimlib = logging_tool(&dir, "wimlib-imagex", &wimlib_log);
    let esd = write_fixture(&dir, "install.esd", "esd bytes");
    let wim = dir.path().join("install.wim");

    let conversion = esd_to_wim(&chain(&dism, &wimlib), &esd, &wim, 3).unwrap();

    assert_eq!(conversion.tool, Tool::Dism);
    let log = std::fs::read_to_string(&dism_log).unwrap();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines[0], "/?");
    assert_eq!(
        lines[1],
        format!(
            "/export-image /sourceimagefile:{} /sourceindex:3 /destinationimagefile:{} /compress:max /checkintegrity",
            esd.display(),
            wim.display()
        )
    );
    // The fallback was never invoked.
    assert!(!wimlib_log.exists());
}

#[test]
fn test_wim_to_esd_uses_recovery_compression_on_dism() {
    let dir = TempDir::new().unwrap();
    let dism_log = dir.path().join("dism.log");
    let dism = logging_tool(&dir, "dism", &dism_log);
    let wimlib = write_fake_tool(&dir, "wimlib-imagex", "#!/bin/sh\nexit 0\n");
    let wim = write_fixture(&dir, "install.wim", "wim bytes");
    let esd = dir.path().join("install.esd");

    let conversion = wim_to_esd(&chain(&dism, &wimlib), &wim, &esd, 1).unwrap();

    assert_eq!(conversion.tool, Tool::Dism);
    let log = std::fs::read_to_string(&dism_log).unwrap();
    assert!(log.contains("/compress:recovery"));
    assert!(log.contains("/checkintegrity"));
}

#[test]
fn test_esd_to_wim_falls_back_when_dism_export_fails() {
    let dir = TempDir::new().unwrap();
    let wimlib_log = dir.path().join("wimlib.log");
    let dism = dism_export_failure(&dir);
    let wimlib = logging_tool(&dir, "wimlib-imagex", &wimlib_log);
    let esd = write_fixture(&dir, "install.esd", "esd bytes");
    let wim = dir.path().join("install.wim");

    let conversion = esd_to_wim(&chain(&dism, &wimlib), &esd, &wim, 1).unwrap();

    assert_eq!(conversion.tool, Tool::Wimlib);
    let log = std::fs::read_to_string(&wimlib_log).unwrap();
    assert_eq!(
        log.lines().next().unwrap(),
        format!("export {} 1 {} --compress=max", esd.display(), wim.display())
    );
}

#[test]
fn test_wim_to_esd_fallback_uses_solid_compression() {
    let dir = TempDir::new().unwrap();
    let wimlib_log = dir.path().join("wimlib.log");
    let dism = dism_export_failure(&dir);
    let wimlib = logging_tool(&dir, "wimlib-imagex", &wimlib_log);
    let wim = write_fixture(&dir, "install.wim", "wim bytes");
    let esd = dir.path().join("install.esd");

    let conversion = wim_to_esd(&chain(&dism, &wimlib), &wim, &esd, 2).unwrap();

    assert_eq!(conversion.tool, Tool::Wimlib);
    let log = std::fs::read_to_string(&wimlib_log).unwrap();
    assert_eq!(
        log.lines().next().unwrap(),
        format!("export {} 2 {} --solid", wim.display(), esd.display())
    );
}

#[test]
fn test_fallback_runs_directly_when_dism_is_missing() {
    let dir = TempDir::new().unwrap();
    let wimlib_log = dir.path().join("wimlib.log");
    let wimlib = logging_tool(&dir, "wimlib-imagex", &wimlib_log);
    let esd = write_fixture(&dir, "install.esd", "esd bytes");
    let wim = dir.path().join("install.wim");

    let conversion = esd_to_wim(
        &chain(&dir.path().join("no-such-dism"), &wimlib),
        &esd,
        &wim,
        1,
    )
    .unwrap();

    assert_eq!(conversion.tool, Tool::Wimlib);
    assert!(wimlib_log.exists());
}

#[test]
fn test_both_tools_missing_reports_both_failures_without_panicking() {
    let dir = TempDir::new().unwrap();
    let esd = write_fixture(&dir, "install.esd", "esd bytes");
    let wim = dir.path().join("install.wim");

    let err = esd_to_wim(
        &chain(
            &dir.path().join("no-such-dism"),
            &dir.path().join("no-such-wimlib"),
        ),
        &esd,
        &wim,
        1,
    )
    .unwrap_err();

    assert!(matches!(err.dism, ToolError::NotFound { .. }));
    assert!(matches!(err.wimlib, ToolError::NotFound { .. }));
    assert!(err.to_string().contains("dism"));
    assert!(err.to_string().contains("wimlib-imagex"));
}

#[test]
fn test_both_tiers_failing_surfaces_fallback_stderr() {
    let dir = TempDir::new().unwrap();
    let dism = dism_export_failure(&dir);
    let wimlib = write_fake_tool(
        &dir,
        "wimlib-imagex",
        "#!/bin/sh\necho \"wimlib blew up\" >&2\nexit 74\n",
    );
    let esd = write_fixture(&dir, "install.esd", "esd bytes");
    let wim = dir.path().join("install.wim");

    let err = esd_to_wim(&chain(&dism, &wimlib), &esd, &wim, 1).unwrap_err();

    match &err.dism {
        ToolError::Failed { code, stderr, .. } => {
            assert_eq!(*code, 2);
            assert_eq!(stderr, "export failed");
        }
        other => panic!("expected a failed DISM export, got {:?}", other),
    }
    match &err.wimlib {
        ToolError::Failed { code, stderr, .. } => {
            assert_eq!(*code, 74);
            assert_eq!(stderr, "wimlib blew up");
        }
        other => panic!("expected a failed wimlib export, got {:?}", other),
    }
}
