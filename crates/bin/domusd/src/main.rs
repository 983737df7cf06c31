//! # domusd — domus demo wiring
//!
//! Composition root that loads the capability configuration, builds the
//! catalogues, and assembles a small demo house.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

use domus_adapter_config_toml::FileConfig;
use domus_app::catalogues::{ACTUATOR_KEY, CapabilityCatalogues, SENSOR_KEY};
use domus_app::config::MemoryConfig;
use domus_app::services::HomeService;
use domus_domain::house::House;
use domus_domain::measurement::DefaultValueFactory;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("domusd=info,domus=info")),
        )
        .init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "domus.toml".to_string());
    let catalogues = match FileConfig::load(&path) {
        Ok(config) => CapabilityCatalogues::load(&config)?,
        Err(err) => {
            tracing::warn!(%err, "falling back to built-in capability configuration");
            let config = MemoryConfig::new()
                .with(SENSOR_KEY, ["TemperatureSensor", "HumiditySensor", "SunriseSensor"])
                .with(ACTUATOR_KEY, ["SwitchOnOffActuator", "RangeActuatorInt"]);
            CapabilityCatalogues::load(&config)?
        }
    };

    let house = House::new("Demo House")?;
    let mut home = HomeService::new(house, catalogues, DefaultValueFactory);

    home.add_room("Living Room", "1", 2.5, 3.0, 4.0)?;
    home.add_device("Living Room", "thermostat", "TH-200")?;
    home.add_sensor("Living Room", "thermostat", "TemperatureSensor", "t1");
    home.add_actuator("Living Room", "thermostat", "SwitchOnOffActuator", "relay");
    home.switch_device("Living Room", "thermostat", true);

    for room in home.house().rooms() {
        for device in room.devices() {
            tracing::info!(
                room = room.name(),
                device = device.name(),
                model = device.model(),
                active = device.is_active(),
                sensors = device.sensors().len(),
                actuators = device.actuators().len(),
                "device ready"
            );
        }
    }

    Ok(())
}
