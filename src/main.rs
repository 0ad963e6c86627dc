use secure_keygen::{run, scoped_tracing, KeygenConfig};

fn main() -> anyhow::Result<()> {
    let _tracing = scoped_tracing("info");

    let result =
        KeygenConfig::load().and_then(|config| run(&config, &mut std::io::stdout().lock()));
    if let Err(e) = &result {
        tracing::error!(error = %e, "key generation failed");
    }
    result?;

    Ok(())
}
