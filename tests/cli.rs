// CLI behavior guard rails for registry-gen and registry-validate.
mod support;

use anyhow::Result;
use serde_json::Value;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

use support::{registry_gen, registry_validate, run_command, run_failing};

#[test]
fn zero_argument_run_emits_every_registry() -> Result<()> {
    let temp = TempDir::new()?;
    let out_dir = temp.path().join("resources");

    let mut cmd = Command::new(registry_gen());
    cmd.env("EQUIPMENT_REGISTRY_OUT_DIR", &out_dir);
    let output = run_command(cmd)?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    let water = out_dir.join("water_registry.json");
    assert!(
        stdout.contains(&format!(
            "Successfully generated water registry with 68 items at: {}",
            water.display()
        )),
        "stdout was: {stdout}"
    );
    assert!(stdout.contains("Successfully generated nuclear registry with 68 items"));
    assert!(stdout.contains("Successfully generated chemical registry with 71 items"));

    let value: Value = serde_json::from_slice(&fs::read(&water)?)?;
    assert_eq!(value["subSector"], "WATR-DW");
    Ok(())
}

#[test]
fn env_override_selects_output_directory() -> Result<()> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(registry_gen());
    cmd.arg("--sector")
        .arg("NUCL")
        .env("EQUIPMENT_REGISTRY_OUT_DIR", temp.path());
    run_command(cmd)?;

    assert!(temp.path().join("nuclear_registry.json").is_file());
    assert!(!temp.path().join("water_registry.json").exists());
    Ok(())
}

#[test]
fn rerun_produces_identical_bytes() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("water_registry.json");

    let mut first = Command::new(registry_gen());
    first.args(["--sector", "water", "--out-dir"]).arg(temp.path());
    run_command(first)?;
    let before = fs::read(&path)?;

    let mut second = Command::new(registry_gen());
    second.args(["--sector", "water", "--out-dir"]).arg(temp.path());
    run_command(second)?;
    assert_eq!(before, fs::read(&path)?);
    Ok(())
}

#[test]
fn check_mode_detects_stale_artifacts() -> Result<()> {
    let temp = TempDir::new()?;

    let mut missing = Command::new(registry_gen());
    missing.args(["--check", "--sector", "chemical", "--out-dir"]).arg(temp.path());
    let output = run_failing(missing)?;
    assert!(String::from_utf8_lossy(&output.stderr).contains("chemical registry is missing"));

    let mut generate = Command::new(registry_gen());
    generate.args(["--sector", "chemical", "--out-dir"]).arg(temp.path());
    run_command(generate)?;

    let mut check = Command::new(registry_gen());
    check.args(["--check", "--sector", "chemical", "--out-dir"]).arg(temp.path());
    let output = run_command(check)?;
    assert!(String::from_utf8_lossy(&output.stdout).contains("chemical registry is up to date"));

    let path = temp.path().join("chemical_registry.json");
    let tampered = fs::read_to_string(&path)?.replace("Batch Reactor", "Batch Reactor (Jacketed)");
    fs::write(&path, tampered)?;

    let mut stale = Command::new(registry_gen());
    stale.args(["--check", "--sector", "chemical", "--out-dir"]).arg(temp.path());
    let output = run_failing(stale)?;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("chemical registry is stale"));
    Ok(())
}

#[test]
fn unknown_sector_exits_non_zero() -> Result<()> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(registry_gen());
    cmd.args(["--sector", "ENER", "--out-dir"]).arg(temp.path());
    let output = run_failing(cmd)?;
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown sector 'ENER'"), "stderr was: {stderr}");
    Ok(())
}

#[test]
fn unwritable_output_directory_fails() -> Result<()> {
    let temp = TempDir::new()?;
    let blocker = temp.path().join("occupied");
    fs::write(&blocker, "not a directory")?;

    let mut cmd = Command::new(registry_gen());
    cmd.args(["--sector", "water", "--out-dir"]).arg(&blocker);
    let output = run_failing(cmd)?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("emitting water registry"), "stderr was: {stderr}");
    Ok(())
}

#[test]
fn list_prints_builtin_sectors() -> Result<()> {
    let mut cmd = Command::new(registry_gen());
    cmd.arg("--list");
    let output = run_command(cmd)?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "water\tWATR\tWATR-DW\t68 entries");
    Ok(())
}

#[test]
fn validate_accepts_generated_artifact() -> Result<()> {
    let temp = TempDir::new()?;
    let mut generate = Command::new(registry_gen());
    generate.args(["--sector", "nuclear", "--out-dir"]).arg(temp.path());
    run_command(generate)?;

    let mut cmd = Command::new(registry_validate());
    cmd.arg("--strict")
        .arg("--file")
        .arg(temp.path().join("nuclear_registry.json"));
    let output = run_command(cmd)?;
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "NUCL/NUCL-ALL: 68 entries valid"
    );
    Ok(())
}

#[test]
fn validate_strict_rejects_reformatted_artifact() -> Result<()> {
    let temp = TempDir::new()?;
    let mut generate = Command::new(registry_gen());
    generate.args(["--sector", "water", "--out-dir"]).arg(temp.path());
    run_command(generate)?;

    let path = temp.path().join("water_registry.json");
    let value: Value = serde_json::from_slice(&fs::read(&path)?)?;
    fs::write(&path, serde_json::to_vec(&value)?)?;

    let mut lenient = Command::new(registry_validate());
    lenient.arg("--file").arg(&path);
    run_command(lenient)?;

    let mut strict = Command::new(registry_validate());
    strict.arg("--strict").arg("--file").arg(&path);
    let output = run_failing(strict)?;
    assert!(String::from_utf8_lossy(&output.stderr).contains("re-run registry-gen"));
    Ok(())
}

#[test]
fn validate_reports_every_violation_with_collect_all() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("broken.json");
    fs::write(
        &path,
        r#"{
  "sector": "WATR",
  "subSector": "WATR-DW",
  "equipment": [
    {"type": "Gate Valve", "category": "piping", "tags": ["VALVE"], "description": "Isolation valve."},
    {"type": "Gate Valve", "category": "liquid", "tags": ["VALVE"], "description": "Isolation valve."}
  ]
}"#,
    )?;

    let mut cmd = Command::new(registry_validate());
    cmd.arg("--collect-all").arg("--file").arg(&path);
    let output = run_failing(cmd)?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate equipment type 'Gate Valve'"), "{stderr}");
    assert!(stderr.contains("unknown category 'liquid'"), "{stderr}");
    Ok(())
}

#[test]
fn validate_requires_categories_for_unknown_sector() -> Result<()> {
    let temp = TempDir::new()?;
    let path = temp.path().join("energy.json");
    let artifact = r#"{"sector":"ENER","subSector":"ENER-OG","equipment":[
        {"type":"Wellhead","category":"piping","tags":["WELL"],"description":"Surface pressure control."}
    ]}"#;
    fs::write(&path, artifact)?;

    let mut without = Command::new(registry_validate());
    without.arg("--file").arg(&path);
    let output = run_failing(without)?;
    assert!(String::from_utf8_lossy(&output.stderr).contains("no built-in taxonomy"));

    let mut with = Command::new(registry_validate());
    with.args(["--category", "piping", "--file"]).arg(&path);
    let output = run_command(with)?;
    assert!(String::from_utf8_lossy(&output.stdout).contains("ENER/ENER-OG: 1 entries valid"));
    Ok(())
}

#[test]
fn validate_honors_alternate_schema() -> Result<()> {
    let temp = TempDir::new()?;
    let mut generate = Command::new(registry_gen());
    generate
        .args(["--sector", "water", "--sector", "nuclear", "--out-dir"])
        .arg(temp.path());
    run_command(generate)?;

    let schema = temp.path().join("water_only.schema.json");
    fs::write(
        &schema,
        r#"{"type": "object", "required": ["sector"], "properties": {"sector": {"const": "WATR"}}}"#,
    )?;

    let mut water = Command::new(registry_validate());
    water
        .arg("--schema")
        .arg(&schema)
        .arg("--file")
        .arg(temp.path().join("water_registry.json"));
    run_command(water)?;

    let mut nuclear = Command::new(registry_validate());
    nuclear
        .arg("--schema")
        .arg(&schema)
        .arg("--file")
        .arg(temp.path().join("nuclear_registry.json"));
    let output = run_failing(nuclear)?;
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed schema validation"), "{stderr}");
    assert!(stderr.contains("/sector"), "{stderr}");

    let mut absent = Command::new(registry_validate());
    absent
        .arg("--schema")
        .arg(temp.path().join("absent.json"))
        .arg("--file")
        .arg(temp.path().join("water_registry.json"));
    let output = run_failing(absent)?;
    assert!(String::from_utf8_lossy(&output.stderr).contains("opening schema"));
    Ok(())
}
