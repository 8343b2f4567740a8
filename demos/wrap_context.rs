use errchain::{Context, Error};

fn main() -> Result<(), Error> {
    let err = parse().wrap("while loading settings").unwrap_err();
    assert_eq!(err.to_string(), "kaboom");
    assert_eq!(
        err.details(),
        "[error] kaboom\n[error] woosh\n[error] while loading settings"
    );
    Ok(())
}

fn parse() -> Result<(), Error> {
    Err::<(), _>(Error::new("kaboom")).wrap("woosh")?;
    Ok(())
}
