#![cfg(unix)]

use crate::harness::TestContext;

#[test]
fn build_runs_driver_with_published_environment() {
    let ctx = TestContext::new();
    let out = ctx.output_file("driver.env");
    ctx.use_shell_driver(&format!(
        "printf '%s\\n' \"$OCULUS_SDK_PATH\" \"$NDK_MODULE_PATH\" \"$PYTHONPATH\" > '{}'",
        out.display()
    ));

    ctx.cli().arg("build").assert().success();

    let root = ctx.sdk_root().display().to_string();
    let module_dir = ctx.sdk().module_dir().display().to_string();
    assert_eq!(ctx.read_output("driver.env"), format!("{root}\n{root}\n{module_dir}\n"));
}

#[test]
fn build_forwards_arguments_verbatim() {
    let ctx = TestContext::new();
    let out = ctx.output_file("driver.args");
    ctx.use_shell_driver(&format!("printf '%s\\n' \"$@\" > '{}'", out.display()));

    ctx.cli().args(["build", "clean", "-n", "--release"]).assert().success();

    assert_eq!(ctx.read_output("driver.args"), "clean\n-n\n--release\n");
}

#[test]
fn build_runs_in_the_invoking_directory() {
    let ctx = TestContext::new();
    let out = ctx.output_file("driver.cwd");
    ctx.use_shell_driver(&format!("pwd -P > '{}'", out.display()));

    ctx.cli().arg("b").assert().success();

    assert_eq!(ctx.read_output("driver.cwd").trim(), ctx.work_dir().display().to_string());
}

#[test]
fn build_runs_in_the_start_directory() {
    let ctx = TestContext::new();
    let out = ctx.output_file("driver.cwd");
    ctx.use_shell_driver(&format!("pwd -P > '{}'", out.display()));

    ctx.cli_in(ctx.base()).arg("-C").arg(ctx.work_dir()).arg("build").assert().success();

    assert_eq!(ctx.read_output("driver.cwd").trim(), ctx.work_dir().display().to_string());
}
