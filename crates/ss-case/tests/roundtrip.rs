use ss_case::schema::*;
use ss_case::{CaseError, load, load_json, load_yaml, save_json, save_yaml, validate_study};

fn sample_study() -> Study {
    Study {
        version: 1,
        name: "Roundtrip".to_string(),
        cases: vec![
            CaseDef {
                id: "c1".to_string(),
                name: "Naphtha".to_string(),
                operating: OperatingDef {
                    pressure_bar_g: 12.5,
                    temperature_c: 60.0,
                    speed_mps: 14.0,
                },
                fluid: FluidDef {
                    flashing: true,
                    flammable: true,
                    ..FluidDef::default()
                },
                environment: EnvironmentDef {
                    vapor_risk: true,
                    ..EnvironmentDef::default()
                },
                notes: Some("Light ends".to_string()),
            },
            CaseDef {
                id: "c2".to_string(),
                name: "Amine".to_string(),
                operating: OperatingDef {
                    pressure_bar_g: 4.0,
                    temperature_c: 55.0,
                    speed_mps: 7.5,
                },
                fluid: FluidDef {
                    fluid_type: "Nonhydrocarbon".to_string(),
                    contaminants: ContaminantsDef {
                        amines: true,
                        ..ContaminantsDef::default()
                    },
                    ..FluidDef::default()
                },
                environment: EnvironmentDef {
                    mandated_arrangement: Some(3),
                    ..EnvironmentDef::default()
                },
                notes: None,
            },
        ],
    }
}

#[test]
fn roundtrip_yaml_empty_study() {
    let study = Study {
        version: 1,
        name: "Empty".to_string(),
        cases: vec![],
    };
    validate_study(&study).unwrap();

    let path = std::env::temp_dir().join("ss_case_roundtrip_empty.yaml");
    save_yaml(&path, &study).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(study, loaded);
}

#[test]
fn roundtrip_yaml_two_cases() {
    let study = sample_study();
    let path = std::env::temp_dir().join("ss_case_roundtrip_two.yaml");
    save_yaml(&path, &study).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(study, loaded);
}

#[test]
fn roundtrip_json_two_cases() {
    let study = sample_study();
    let path = std::env::temp_dir().join("ss_case_roundtrip_two.json");
    save_json(&path, &study).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(study, loaded);
}

#[test]
fn load_picks_format_from_extension() {
    let study = sample_study();

    let json_path = std::env::temp_dir().join("ss_case_by_extension.json");
    save_json(&json_path, &study).unwrap();
    assert_eq!(load(&json_path).unwrap(), study);

    let upper_path = std::env::temp_dir().join("ss_case_by_extension_upper.JSON");
    save_json(&upper_path, &study).unwrap();
    assert_eq!(load(&upper_path).unwrap(), study);

    let yaml_path = std::env::temp_dir().join("ss_case_by_extension.yml");
    save_yaml(&yaml_path, &study).unwrap();
    assert_eq!(load(&yaml_path).unwrap(), study);
}

#[test]
fn save_refuses_invalid_study() {
    let mut study = sample_study();
    study.cases[1].environment.mandated_arrangement = Some(5);
    let path = std::env::temp_dir().join("ss_case_invalid.yaml");
    let err = save_yaml(&path, &study).unwrap_err();
    assert!(matches!(err, CaseError::Validation(_)));
}

#[test]
fn omitted_flags_default_to_false() {
    let yaml = r#"
version: 1
name: Minimal
cases:
  - id: m1
    operating: { pressure_bar_g: 10.0, temperature_c: 50.0, speed_mps: 5.0 }
    fluid: { fluid_type: Hydrocarbon }
"#;
    let study: Study = serde_yaml::from_str(yaml).unwrap();
    validate_study(&study).unwrap();
    let case = &study.cases[0];
    assert_eq!(case.name, "");
    assert_eq!(case.environment, EnvironmentDef::default());
    assert_eq!(case.fluid.contaminants, ContaminantsDef::default());
    assert!(!case.fluid.flashing);
}
