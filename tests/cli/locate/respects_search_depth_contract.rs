use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn max_depth_flag_limits_the_search() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["locate", "--max-depth", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unable to find SDK root"));

    ctx.cli().args(["locate", "--max-depth", "2"]).assert().success();
}

#[test]
fn default_depth_covers_ten_levels() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.sdk().nested(10)).arg("locate").assert().success();
    ctx.cli_in(ctx.sdk().nested(11))
        .arg("locate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Unable to find SDK root"));
}

#[test]
fn config_file_sets_depth() {
    let ctx = TestContext::new();
    ctx.write_config("[search]\nmax_depth = 1\n");

    ctx.cli().arg("locate").assert().failure();
}

#[test]
fn max_depth_flag_overrides_invalid_config_depth() {
    let ctx = TestContext::new();
    ctx.write_config("[search]\nmax_depth = 0\n");

    ctx.cli()
        .arg("locate")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid search depth 0"));
    ctx.cli().args(["--max-depth", "3", "locate"]).assert().success();
}

#[test]
fn zero_depth_is_rejected() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["locate", "--max-depth", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid search depth 0"));
}
