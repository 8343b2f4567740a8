use ui_test::{
    custom_flags::run::Run, dependencies::DependencyBuilder, run_tests, spanned::Spanned, Config,
};

fn main() -> ui_test::color_eyre::Result<()> {
    let mut config = Config::rustc("demos");
    config
        .comment_defaults
        .base()
        .set_custom("dependencies", DependencyBuilder::default());
    config.comment_defaults.base().set_custom(
        "run",
        Run {
            exit_code: 0,
            output_conflict_handling: None,
        },
    );
    config.comment_defaults.base().exit_status = Spanned::dummy(0_i32).into();
    config.comment_defaults.base().require_annotations = Spanned::dummy(false).into();
    let abort_check = config.abort_check.clone();
    ctrlc::set_handler(move || abort_check.abort())?;

    // Compile and run every `.rs` file under `demos/`; each one asserts on
    // the chains it builds and must exit cleanly without output.
    run_tests(config)
}
