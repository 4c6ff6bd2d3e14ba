use crate::harness::TestContext;

#[test]
fn locate_without_root_prints_diagnostic_and_fails() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.orphan_dir())
        .arg("locate")
        .assert()
        .code(1)
        .stdout("Unable to find SDK root. Exiting.\n");
}

#[test]
fn sdk_root_itself_is_not_a_candidate() {
    let ctx = TestContext::new();

    ctx.cli_in(ctx.sdk_root())
        .arg("locate")
        .assert()
        .failure()
        .stdout("Unable to find SDK root. Exiting.\n");
}
