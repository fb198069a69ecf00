use assert_fs::prelude::*;
use predicates::prelude::*;

const MODULES_JSON: &str = r#"
[
  {
    "id": "security",
    "name": "Security",
    "scope": "global",
    "variants": [
      {
        "id": "standard",
        "name": "Standard",
        "cost_items": [
          {"name": "Guards", "amount": 20.0, "cost_type": "per_hour"},
          {"name": "Base fee", "amount": 300.0, "cost_type": "fixed"}
        ]
      }
    ]
  },
  {
    "id": "stage",
    "name": "Stage",
    "scope": "daily",
    "variants": [
      {
        "id": "standard",
        "name": "Standard",
        "cost_items": [
          {"name": "Crew", "amount": 100.0, "cost_type": "fixed"}
        ],
        "revenue_items": [
          {"name": "Stage sponsor", "amount": 50.0, "revenue_type": "fixed"}
        ]
      }
    ]
  }
]
"#;

const MASTER_DATA_JSON: &str = r#"
{
  "products": [
    {"id": "drink", "name": "Drink", "sales_price": 3.0, "purchase_price": 1.0, "unit": "0.4l"}
  ],
  "personas": [
    {
      "id": "family",
      "name": "Family",
      "consumption": {"drink": 2.0}
    },
    {"id": "staff", "name": "Staff"}
  ]
}
"#;

const SCENARIO_JSON: &str = r#"
{
  "id": "last_year",
  "name": "Last year",
  "days": [
    {
      "name": "Friday",
      "duration_hours": 5,
      "visitor_composition": {"family": 50, "staff": 10},
      "selected_modules": {"stage": "standard"},
      "day_specific_revenue": [
        {"name": "Entry ticket", "amount": 5.0, "revenue_type": "per_visitor"}
      ]
    },
    {
      "name": "Saturday",
      "enabled": false,
      "duration_hours": 8,
      "visitor_composition": {"family": 120}
    }
  ],
  "global_modules": {"security": "standard"},
  "revenue_items": [
    {"name": "Sponsoring", "amount": 2000.0, "revenue_type": "fixed"}
  ]
}
"#;

#[test]
fn calculate_prints_full_report() {
    let temp = assert_fs::TempDir::new().unwrap();
    let modules = temp.child("modules.json");
    modules.write_str(MODULES_JSON).unwrap();
    let master_data = temp.child("master_data.json");
    master_data.write_str(MASTER_DATA_JSON).unwrap();
    let scenario = temp.child("scenario.json");
    scenario.write_str(SCENARIO_JSON).unwrap();

    // Friday only (Saturday is disabled), 60 visitors, 5 hours:
    //   cost    = 20*5 + 300 (security) + 100 (stage) + 50*2*1 (goods) = 600
    //   revenue = 50 (stage sponsor) + 2000 + 5*60 + 50*2*3           = 2650
    let mut cmd = assert_cmd::Command::cargo_bin("eventcalc").unwrap();
    cmd.args([
        "calculate",
        "-m",
        modules.path().to_str().unwrap(),
        "-d",
        master_data.path().to_str().unwrap(),
        "-s",
        scenario.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Calculation Report: Last year"))
        .stdout(predicate::str::contains("Revenue:  2,650.00 €"))
        .stdout(predicate::str::contains("Cost:     600.00 €"))
        .stdout(predicate::str::contains("Profit:   2,050.00 €"))
        .stdout(predicate::str::contains("Visitors: 60"))
        .stdout(predicate::str::contains(
            "Stage sponsor (Friday) | fixed | 50.00 € | Module: Stage",
        ))
        .stdout(predicate::str::contains(
            "Entry ticket (Friday) | per_visitor | 300.00 € | Tickets/Entry",
        ))
        .stdout(predicate::str::contains("Consumption sales (Friday)"))
        .stdout(predicate::str::contains(
            "Security | Standard | Global | 400.00 €",
        ))
        .stdout(predicate::str::contains(
            "Stage (Friday) | Standard | Friday | 100.00 €",
        ))
        .stdout(predicate::str::contains("Cost of goods (Friday)"));
}

#[test]
fn calculate_writes_result_json_when_requested() {
    let temp = assert_fs::TempDir::new().unwrap();
    let modules = temp.child("modules.json");
    modules.write_str(MODULES_JSON).unwrap();
    let master_data = temp.child("master_data.json");
    master_data.write_str(MASTER_DATA_JSON).unwrap();
    let scenario = temp.child("scenario.json");
    scenario.write_str(SCENARIO_JSON).unwrap();
    let output = temp.child("result.json");

    let mut cmd = assert_cmd::Command::cargo_bin("eventcalc").unwrap();
    cmd.args([
        "calculate",
        "-m",
        modules.path().to_str().unwrap(),
        "-d",
        master_data.path().to_str().unwrap(),
        "-s",
        scenario.path().to_str().unwrap(),
        "-o",
        output.path().to_str().unwrap(),
    ]);

    cmd.assert().success().stdout(predicate::str::contains(
        format!("Result written to {}", output.path().to_str().unwrap()),
    ));

    let contents = std::fs::read_to_string(output.path()).unwrap();
    let result: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(result["scenario_name"], "Last year");
    assert_eq!(result["total_cost"], 600.0);
    assert_eq!(result["total_revenue"], 2650.0);
    assert_eq!(result["total_visitors"], 60);
    assert_eq!(result["cost_per_visitor"], 10.0);
}

#[test]
fn calculate_rejects_malformed_catalog() {
    let temp = assert_fs::TempDir::new().unwrap();
    let modules = temp.child("modules.json");
    modules
        .write_str(r#"[{"id": "bar", "name": "Bar", "scope": "weekly", "variants": [{"id": "small", "name": "Small"}]}]"#)
        .unwrap();
    let master_data = temp.child("master_data.json");
    master_data.write_str("{}").unwrap();
    let scenario = temp.child("scenario.json");
    scenario.write_str(SCENARIO_JSON).unwrap();

    let mut cmd = assert_cmd::Command::cargo_bin("eventcalc").unwrap();
    cmd.args([
        "calculate",
        "-m",
        modules.path().to_str().unwrap(),
        "-d",
        master_data.path().to_str().unwrap(),
        "-s",
        scenario.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to load catalog"));
}
