//==============================================================================
// DRY: every area goes through one shared utility
//==============================================================================

use anyhow::Context;
use shapes::config::Settings;
use shapes::{scenario, telemetry};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    settings.apply_color();
    telemetry::init_logging(&settings);

    let report = scenario::dry_principle().context("building DRY example shapes")?;
    for measurement in report.measurements() {
        println!("{}", measurement.render());
    }
    Ok(())
}
