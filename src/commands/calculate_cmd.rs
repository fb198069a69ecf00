use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_calculation_report;
use crate::services::calculation::calculate_scenario;
use crate::services::catalog_json::load_catalog_from_json_files;
use crate::services::scenario_json::load_scenario_from_json_file;

pub fn calculate_command(cmd: Commands) {
    if let Commands::Calculate {
        modules,
        master_data,
        scenario,
        output,
    } = cmd
    {
        let catalog = match load_catalog_from_json_files(&modules, &master_data) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("Failed to load catalog: {e:?}");
                return;
            }
        };

        let scenario = match load_scenario_from_json_file(&scenario) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario: {e:?}");
                return;
            }
        };

        let result = calculate_scenario(&scenario, &catalog);
        println!("{}", format_calculation_report(&result));

        if let Some(output) = output {
            let json = match serde_json::to_string_pretty(&result) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize result: {e:?}");
                    return;
                }
            };
            if let Err(e) = std::fs::write(&output, json) {
                eprintln!("Failed to write result file: {e:?}");
            } else {
                println!("Result written to {output}");
            }
        }
    }
}
