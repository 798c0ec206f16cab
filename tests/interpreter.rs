use chatmat::models::{CalculationRequest, CalculationResponse};
use chatmat::{parse, SourceType, StructureRequest, StructureType};

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_supercell_triple_taken_verbatim() {
    let inputs = [
        ("silicon 2x2x2", [2, 2, 2]),
        ("Give me gold 3×3×3 please", [3, 3, 3]),
        ("iron 4x1x7 bcc", [4, 1, 7]),
        ("NaCl rocksalt 10x10x1 slab", [10, 10, 1]),
    ];

    for (text, dims) in inputs {
        assert_eq!(parse(text).supercell_dims, dims, "input: {}", text);
    }
}

#[test]
fn test_default_supercell() {
    assert_eq!(parse("bulk copper").supercell_dims, [1, 1, 1]);
    assert_eq!(parse("").supercell_dims, [1, 1, 1]);
}

#[test]
fn test_dictionary_compound_precedence() {
    let req = parse("sodium chloride supercell");
    assert_eq!(req.material_name, "NaCl");
    assert_eq!(req.compound, strings(&["Na", "Cl"]));
    assert_eq!(req.source_type, None);
}

#[test]
fn test_sio2_supercell() {
    let req = parse("SiO2 2x2x2");
    assert_eq!(req.material_name, "SiO2");
    assert_eq!(req.compound, strings(&["Si", "O"]));
    assert_eq!(req.structure_type, Some(StructureType::Quartz));
    assert_eq!(req.supercell_dims, [2, 2, 2]);
}

#[test]
fn test_materials_project_short_circuit() {
    let req = parse("mp-149");
    assert_eq!(req.source_type, Some(SourceType::Mp));
    assert_eq!(req.material_name, "mp-149");
    assert_eq!(req.compound, None);
}

#[test]
fn test_cod_identifier() {
    let req = parse("cod-2000001");
    assert_eq!(req.source_type, Some(SourceType::Cod));
    assert_eq!(req.material_name, "2000001");
}

#[test]
fn test_url_source() {
    let req = parse("load https://example.org/files/nacl.cif 2x2x2");
    assert_eq!(req.source_type, Some(SourceType::Url));
    assert_eq!(req.material_name, "https://example.org/files/nacl.cif");
    assert_eq!(req.compound, None);
    assert_eq!(req.supercell_dims, [2, 2, 2]);
}

#[test]
fn test_fcc_aluminum_lattice() {
    let req = parse("FCC aluminum with a=4.05");
    assert_eq!(req.structure_type, Some(StructureType::Fcc));
    assert_eq!(req.material_name, "Al");
    assert_eq!(req.lattice_parameter, Some(4.05));
    assert_eq!(req.compound, None);
}

#[test]
fn test_stop_words_never_become_materials() {
    let req = parse("An In At ON");
    assert_eq!(req.material_name, "Si");
    assert_eq!(req.compound, None);
}

#[test]
fn test_bare_symbol_replaces_default_silicon() {
    // "simple" 含有子串 "si"
    let req = parse("Fe simple cubic");
    assert_eq!(req.material_name, "Fe");
    assert_eq!(req.structure_type, Some(StructureType::Sc));
}

#[test]
fn test_fullwidth_supercell_keeps_default() {
    let req = parse("gold ２x２x２");
    assert_eq!(req.supercell_dims, [1, 1, 1]);
    assert_eq!(req.material_name, "Au");
}

#[test]
fn test_formula_heuristic_compound() {
    let req = parse("Build SnO2 slab");
    assert_eq!(req.material_name, "SnO2");
    assert_eq!(req.compound, strings(&["Sn", "O"]));
}

#[test]
fn test_llm_fields_stay_inert() {
    let req = parse("bcc iron 2x2x2 with a=2.87");
    assert!(!req.use_llm);
    assert!(req.llm_provider.is_none());
    assert!(req.llm_params.is_empty());
    assert!(req.source_params.is_empty());
}

#[test]
fn test_parse_is_safe_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let text = format!("gold {}x{}x{}", i + 1, i + 1, i + 1);
                parse(&text)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let req = handle.join().unwrap();
        let n = i as u32 + 1;
        assert_eq!(req.supercell_dims, [n, n, n]);
        assert_eq!(req.material_name, "Au");
    }
}

#[test]
fn test_request_to_backend_round_trip() {
    let text = "zinc blende GaN 3x3x3";
    let payload = CalculationRequest::from_request(&parse(text), text);
    let json = serde_json::to_string(&payload).unwrap();
    let back: CalculationRequest = serde_json::from_str(&json).unwrap();

    assert_eq!(back.material_name, "GaN");
    assert_eq!(
        back.structure_details.structure_type,
        Some(StructureType::Zincblende)
    );
    assert_eq!(back.structure_details.supercell_dims, [3, 3, 3]);
}

#[test]
fn test_backend_response_check() {
    let response = CalculationResponse {
        status: "success".to_string(),
        material: "Si".to_string(),
        n_atoms: 2,
        energy: -10.84,
        max_force: None,
        structure_xyz: "2\n\nSi 0.0 0.0 0.0\nSi 1.3575 1.3575 1.3575\n".to_string(),
    };
    let checked = response.check().unwrap();
    assert!(checked.warnings.is_empty());
    assert_eq!(checked.structure.formula(), "Si2");

    let summary = chatmat::models::wire::format_summary(
        &StructureRequest::default(),
        &checked.response,
    );
    assert!(summary.contains("Atoms: 2"));
    assert!(!summary.contains("Max Force"));
}
