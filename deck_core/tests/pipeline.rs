//! End-to-end screening of framing lines through the public API.

use approx::assert_relative_eq;

use deck_core::calculations::framing::{AreaLoads, FramingInput, Geometry, MaterialAllowables};
use deck_core::calculations::{
    evaluate_line,
    BaseConnectorSpec,
    ConnectorCatalog,
    SelectionBasis,
    SiteDefaults,
    TopConnectorSpec,
};
use deck_core::equations::Equation;
use deck_core::{CalcError, LogEntry, Project};

fn line_a() -> FramingInput {
    FramingInput {
        label: "Line A".to_string(),
        geometry: Geometry {
            span_ft: 10.0,
            tributary_width_ft: 6.0,
            beam_b_in: 3.5,
            beam_d_in: 9.25,
            post_unsupported_height_in: 96.0,
            post_base_bearing_area_in2: 24.0,
        },
        material: MaterialAllowables {
            fb_prime_psi: 1000.0,
            fv_prime_psi: 180.0,
            fc_perp_prime_psi: 625.0,
            e_psi: 1.6e6,
            fc_axis_prime_psi: None,
            post_b_in: None,
            post_d_in: None,
        },
        loads: AreaLoads {
            dead_psf: 10.0,
            snow_psf: 0.0,
            live_psf: 40.0,
            deflection_limit_ratio: 240.0,
        },
        lateral: Default::default(),
        connectors: Default::default(),
        wind: Default::default(),
        site: Default::default(),
    }
}

fn catalog() -> ConnectorCatalog {
    ConnectorCatalog {
        top: vec![
            TopConnectorSpec::new("PC44", 1_200.0, 500.0, 300.0, 0.0),
            TopConnectorSpec::new("PCZ46", 2_400.0, 900.0, 600.0, 0.0),
        ],
        base: vec![
            BaseConnectorSpec::new("ABA44", 400.0, 700.0),
            BaseConnectorSpec::new("ABU44", 900.0, 2_200.0),
        ],
    }
}

#[test]
fn worked_example_ten_foot_span() {
    let evaluation = evaluate_line(&line_a(), &catalog(), &SiteDefaults::default()).unwrap();
    let beam = &evaluation.beam;

    assert_relative_eq!(beam.line_load_plf, 300.0, max_relative = 1e-12);
    assert_relative_eq!(beam.section_modulus_in3, 49.911458, max_relative = 1e-6);
    assert_relative_eq!(beam.moment_of_inertia_in4, 230.840495, max_relative = 1e-6);
    assert_relative_eq!(beam.max_moment_lb_in, 45_000.0, max_relative = 1e-12);
    assert_relative_eq!(beam.max_shear_lb, 1_500.0, max_relative = 1e-12);
    assert_relative_eq!(beam.bending_stress_psi, 901.5966, max_relative = 1e-6);
    assert_relative_eq!(beam.shear_stress_psi, 69.498069, max_relative = 1e-6);
    assert_relative_eq!(beam.bearing_stress_psi, 62.5, max_relative = 1e-12);
    assert_relative_eq!(beam.deflection_in, 0.182756, max_relative = 1e-5);
    assert_relative_eq!(beam.deflection_limit_in, 0.5, max_relative = 1e-12);

    assert!(beam.bending_ok && beam.shear_ok && beam.bearing_ok && beam.deflection_ok);
    assert_eq!(beam.column_axial_ok, None);
    assert_eq!(beam.column_allowable_axial_lb, None);

    // 1,500 lb download skips PC44 (1,200) for PCZ46
    assert_eq!(evaluation.connections.top_model.as_deref(), Some("PCZ46"));
    assert_eq!(evaluation.connections.top_basis, SelectionBasis::FirstFit);
    assert_eq!(evaluation.connections.base_model.as_deref(), Some("ABA44"));
}

#[test]
fn uplift_absent_then_present() {
    let mut input = line_a();
    let evaluation = evaluate_line(&input, &catalog(), &SiteDefaults::default()).unwrap();
    assert_eq!(evaluation.demands.top_uplift_lb, 0.0);
    assert_eq!(evaluation.footing.u_post_lb, 0.0);

    input.wind.roof_uplift_psf = Some(18.0);
    input.wind.uplift_area_per_post_ft2 = Some(30.0);
    let evaluation = evaluate_line(&input, &catalog(), &SiteDefaults::default()).unwrap();
    assert_eq!(evaluation.demands.top_uplift_lb, 540.0);
    assert_eq!(evaluation.demands.base_uplift_lb, 540.0);
    assert_eq!(evaluation.footing.u_post_lb, 540.0);
    // 540 lb uplift exceeds PC44's 500 lb, but PC44 already fails download
    assert_eq!(evaluation.connections.top_model.as_deref(), Some("PCZ46"));
}

#[test]
fn repeated_runs_are_bit_identical() {
    let mut input = line_a();
    input.wind.lateral_line_load_plf = Some(45.0);
    input.wind.post_to_beam_arm_in = Some(5.5);
    input.site.footing_length_in = Some(18.0);
    input.site.footing_width_in = Some(18.0);
    input.site.footing_thickness_in = Some(10.0);

    let first = evaluate_line(&input, &catalog(), &SiteDefaults::default()).unwrap();
    let second = evaluate_line(&input, &catalog(), &SiteDefaults::default()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.beam.deflection_in.to_bits(), second.beam.deflection_in.to_bits());
    assert_eq!(first.footing.r_slide_lb.to_bits(), second.footing.r_slide_lb.to_bits());
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn named_connector_missing_propagates() {
    let mut input = line_a();
    input.connectors.top_model = Some("HUCQ".to_string());
    let err = evaluate_line(&input, &catalog(), &SiteDefaults::default()).unwrap_err();
    assert_eq!(
        err,
        CalcError::ConnectorNotFound {
            position: "Top".to_string(),
            model: "HUCQ".to_string()
        }
    );
}

#[test]
fn nothing_passes_falls_back_to_least_utilized() {
    let mut input = line_a();
    input.loads.live_psf = 100.0;
    input.material.fb_prime_psi = 5_000.0;
    let evaluation = evaluate_line(&input, &catalog(), &SiteDefaults::default()).unwrap();

    // 110 psf × 6 ft × 10 ft / 2 = 3,300 lb per post
    assert_eq!(evaluation.demands.top_download_lb, 3_300.0);
    assert_eq!(evaluation.connections.top_model.as_deref(), Some("PCZ46"));
    match evaluation.connections.top_basis {
        SelectionBasis::LeastUtilized { utilization } => assert_relative_eq!(utilization, 1.375),
        other => panic!("expected least-utilized fallback, got {:?}", other),
    }
    assert!(!evaluation.connections.top_checks.all_pass());
}

#[test]
fn footing_uses_project_site_defaults() {
    let mut input = line_a();
    input.site.footing_length_in = Some(24.0);
    input.site.footing_width_in = Some(24.0);
    input.site.footing_thickness_in = Some(12.0);

    let defaults = SiteDefaults {
        concrete_unit_weight_pcf: 140.0,
        ..SiteDefaults::default()
    };
    let evaluation = evaluate_line(&input, &catalog(), &defaults).unwrap();
    assert_eq!(evaluation.footing.w_footing_lb, 560.0);
}

#[test]
fn audit_log_is_structured_data() {
    let evaluation = evaluate_line(&line_a(), &catalog(), &SiteDefaults::default()).unwrap();
    let log = &evaluation.beam.calc_log;

    let Some(LogEntry::Formula { result, .. }) = log.find_formula(Equation::BearingStress) else {
        panic!("bearing formula missing from log");
    };
    assert_eq!(*result, 62.5);

    let json = serde_json::to_value(log).unwrap();
    assert_eq!(json[0]["kind"], "Formula");
    assert_eq!(json[0]["equation"], "TotalAreaLoad");
}

#[test]
fn project_evaluates_every_line() {
    let mut project = Project::new("Engineer", "25-007", "Client");
    project.catalog = catalog();
    project.add_line(line_a());
    let mut b = line_a();
    b.label = "Line B".to_string();
    b.connectors.base_model = Some("NOPE".to_string());
    project.add_line(b);

    let json = serde_json::to_string(&project).unwrap();
    let project: Project = serde_json::from_str(&json).unwrap();

    let results = project.evaluate_all();
    assert!(results[0].1.is_ok());
    assert_eq!(results[1].1.as_ref().unwrap_err().error_code(), "CONNECTOR_NOT_FOUND");
}

#[test]
fn demo_project_loads_and_evaluates() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos/backyard.deck");
    let project = deck_core::load_project(&path).unwrap();
    assert_eq!(project.line_count(), 2);
    assert_eq!(project.catalog.top.len(), 3);

    for (label, result) in project.evaluate_all() {
        let evaluation = result.unwrap_or_else(|e| panic!("{}: {}", label, e));
        assert!(!evaluation.beam.calc_log.is_empty());
    }

    let line_a = project.line("Line A").unwrap();
    assert!(line_a.post_section().is_some());
    assert_eq!(line_a.post_uplift_lb(), 540.0);
}
