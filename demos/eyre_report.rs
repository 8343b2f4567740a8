use color_eyre::eyre::{eyre, WrapErr};
use errchain::Error;

fn main() -> color_eyre::eyre::Result<()> {
    let report = parse().wrap_err_with(|| eyre!("kawoosh")).unwrap_err();
    let err = report.downcast_ref::<Error>().unwrap();
    assert_eq!(err.to_string(), "kaboom");
    assert_eq!(err.trace_lines().len(), 2);

    let report = Error::wrap(Error::new("kaboom"), "woosh").into_report();
    assert_eq!(report.to_string(), "kaboom");
    Ok(())
}

fn parse() -> color_eyre::eyre::Result<()> {
    Err(Error::wrap(Error::new("kaboom"), "woosh"))?;
    Ok(())
}
