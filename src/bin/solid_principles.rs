//==============================================================================
// SOLID: SRP, OCP, LSP, ISP and DIP with shapes
//==============================================================================

use anyhow::Context;
use shapes::config::Settings;
use shapes::{scenario, telemetry};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("loading settings")?;
    settings.apply_color();
    telemetry::init_logging(&settings);

    let report = scenario::solid_principles().context("building SOLID example shapes")?;
    for measurement in report.measurements() {
        println!("{}", measurement.render());
    }
    Ok(())
}
