use crate::commands::base_commands::Commands;
use crate::services::catalog_json::load_catalog_from_json_files;
use crate::services::scenario_json::{load_scenario_from_json_file, serialize_scenario_to_json};

// Export runs behind the same catalog validation gate as calculate; the
// scenario itself may still reference unknown ids.
pub fn export_command(cmd: Commands) {
    if let Commands::Export {
        modules,
        master_data,
        scenario,
        output,
    } = cmd
    {
        if let Err(e) = load_catalog_from_json_files(&modules, &master_data) {
            eprintln!("Failed to load catalog: {e:?}");
            return;
        }

        let scenario = match load_scenario_from_json_file(&scenario) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario: {e:?}");
                return;
            }
        };

        let mut buffer = Vec::new();
        if let Err(e) = serialize_scenario_to_json(&mut buffer, &scenario) {
            eprintln!("Failed to serialize scenario: {e:?}");
            return;
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write scenario file: {e:?}");
        } else {
            println!("Scenario written to {output}");
        }
    }
}
