use clap::Parser;
use surveillance_journal::{cli, config, error, export};
use cli::Cli;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    let config = config::apply_overrides(config, cli.images_dir.as_deref());

    if cli.dump_config {
        println!("{}", config::to_pretty_json(&config)?);
        return Ok(());
    }

    println!("📹 journal-html - журнал видеонаблюдения\n");

    let summary = export::generate(&config, &cli.input, &cli.output, cli.verbose)?;

    if cli.verbose {
        println!(
            "\nЛистов: {}, строк: {}, исключено: {}, пропущено: {}",
            summary.sheets.len(),
            summary.rows,
            summary.excluded.len(),
            summary.skipped.len()
        );
    }

    println!("\nГОТОВО ✅ Журнал сформирован: {}", summary.output.display());
    Ok(())
}
