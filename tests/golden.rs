//! Golden tests for the topology pipeline.
//!
//! These tests pin the end-to-end behavior: classification, edge routing,
//! label aggregation and the three-column layout.

use circuit_topology::{
    CircuitRecord, DiagramGenerator, LayoutEngine, NodeId, NodeRole, Position,
    RawCircuitRecord, TopologyBuilder, TopologyError,
};
use serde_json::json;

// ─────────────────────────────────────────────────────────────────────────────
// Test Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

fn campus_records() -> Vec<CircuitRecord> {
    vec![
        CircuitRecord::new("MPLS", "M-100", "TPE01", "Taipei HQ", "KHH02", "Kaohsiung Branch"),
        CircuitRecord::new("LeasedLine", "L-200", "TPE01", "Taipei HQ", "TPE09", "Neihu DC"),
        CircuitRecord::new("ip-vpn", "V-300", "TXG03", "Taichung Office", "", ""),
        CircuitRecord::new("MPLS", "M-101", "KHH02", "Kaohsiung Branch", "TPE09", "Neihu DC"),
        CircuitRecord::new("LeasedLine", "L-201", "TPE09", "Neihu DC", "TPE01", "Taipei HQ"),
        CircuitRecord::new("Internet", "I-400", "HSZ04", "Hsinchu Lab", "", ""),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// END-TO-END EXAMPLES
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_mpls_record_builds_hub() {
    let diagram = DiagramGenerator::default()
        .generate(&[CircuitRecord::new("MPLS", "C1", "S1", "BuildingHQ", "S2", "Building2")])
        .unwrap();
    let g = &diagram.graph;

    assert_eq!(g.node_count(), 3);
    assert_eq!(g.node(&id("S1")).unwrap().role, NodeRole::Datacenter);
    assert_eq!(g.node(&id("S2")).unwrap().role, NodeRole::Customer);
    assert_eq!(g.node(&id("Cloud_Network")).unwrap().role, NodeRole::Cloud);

    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edge_labels(&id("S1"), &id("Cloud_Network")).unwrap(), &["MPLS [C1]"]);
    assert_eq!(g.edge_labels(&id("S2"), &id("Cloud_Network")).unwrap(), &["MPLS [C1]"]);

    let p = &diagram.positions;
    assert_eq!(p.len(), 3);
    assert_eq!(p.get(&id("S2")), Some(Position::new(2.0, 3.75)));
    assert_eq!(p.get(&id("Cloud_Network")), Some(Position::new(6.66, 3.75)));
    assert_eq!(p.get(&id("S1")), Some(Position::new(11.33, 3.75)));
}

#[test]
fn test_leased_line_builds_direct_edge() {
    let diagram = DiagramGenerator::default()
        .generate(&[CircuitRecord::new("LEASEDLINE", "C2", "S1", "B1", "S2", "B2")])
        .unwrap();
    let g = &diagram.graph;

    assert!(!g.contains_node(&id("Cloud_Network")));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge_labels(&id("S1"), &id("S2")).unwrap(), &["LEASEDLINE [C2]"]);
}

#[test]
fn test_campus_topology() {
    let g = TopologyBuilder::default().build(&campus_records()).unwrap();

    let roles: Vec<_> = g.nodes().iter().map(|n| (n.id.as_str(), n.role)).collect();
    assert_eq!(
        roles,
        vec![
            ("TPE01", NodeRole::Datacenter),
            ("Cloud_Network", NodeRole::Cloud),
            ("KHH02", NodeRole::Customer),
            ("TPE09", NodeRole::Datacenter),
            ("TXG03", NodeRole::Customer),
            ("HSZ04", NodeRole::Customer),
        ]
    );

    // Both leased lines collapse onto one edge regardless of orientation.
    assert_eq!(
        g.edge_labels(&id("TPE09"), &id("TPE01")).unwrap(),
        &["LEASEDLINE [L-200]", "LEASEDLINE [L-201]"]
    );
    assert_eq!(
        g.edge_labels(&id("KHH02"), &id("Cloud_Network")).unwrap(),
        &["MPLS [M-100]", "MPLS [M-101]"]
    );
    assert_eq!(
        g.edge_labels(&id("TXG03"), &id("Cloud_Network")).unwrap(),
        &["IP-VPN [V-300]"]
    );
    assert!(g.edge_labels(&id("KHH02"), &id("TPE09")).is_none());
    // Single-ended internet circuit: node only.
    assert!(g.edges().iter().all(|e| !e.key.touches(&id("HSZ04"))));
}

#[test]
fn test_campus_layout() {
    let g = TopologyBuilder::default().build(&campus_records()).unwrap();
    let p = LayoutEngine::default().layout(&g);

    assert_eq!(p.len(), g.node_count());
    // customers: KHH02, TXG03, HSZ04
    assert_eq!(p.get(&id("KHH02")), Some(Position::new(2.0, 2.25)));
    assert_eq!(p.get(&id("TXG03")), Some(Position::new(2.0, 3.75)));
    assert_eq!(p.get(&id("HSZ04")), Some(Position::new(2.0, 5.25)));
    // datacenters: TPE01, TPE09
    assert_eq!(p.get(&id("TPE01")), Some(Position::new(11.33, 3.0)));
    assert_eq!(p.get(&id("TPE09")), Some(Position::new(11.33, 4.5)));
}

// ─────────────────────────────────────────────────────────────────────────────
// DETERMINISM TESTS
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_same_records_same_fingerprint_100_runs() {
    let generator = DiagramGenerator::default();
    let records = campus_records();
    let first = generator.generate(&records).unwrap();

    for run in 1..100 {
        let again = generator.generate(&records).unwrap();
        assert_eq!(first.graph.fingerprint(), again.graph.fingerprint(), "run {} differs", run);
        assert_eq!(first.positions, again.positions, "run {} differs", run);
        assert_eq!(first.to_svg(), again.to_svg(), "run {} differs", run);
    }
}

#[test]
fn test_record_order_changes_fingerprint() {
    let mut reversed = campus_records();
    reversed.reverse();

    let a = TopologyBuilder::default().build(&campus_records()).unwrap();
    let b = TopologyBuilder::default().build(&reversed).unwrap();

    assert_ne!(a.fingerprint(), b.fingerprint());
    // Roles do not depend on order.
    for node in a.nodes() {
        assert_eq!(b.node(&node.id).unwrap().role, node.role);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// WIRE INPUT
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_upstream_payload() {
    let raws: Vec<RawCircuitRecord> = serde_json::from_value(json!([
        {
            "PRODUCT_TYPE": "MPLS",
            "CIRCUIT_ID": 5501,
            "SITE_ID_A": "S1",
            "BUILDING_A": "總部大樓",
            "SITE_ID_B": "S2",
            "BUILDING_B": "",
            "ROUTER_NAME": "edge-01"
        },
        {
            "PRODUCT_TYPE": "Metro Ethernet",
            "CIRCUIT_ID": "E-9",
            "SITE_ID_A": "S2",
            "BUILDING_A": "Warehouse",
            "SITE_ID_B": "S3",
            "BUILDING_B": "機房 B"
        }
    ]))
    .unwrap();

    let diagram = DiagramGenerator::default().generate_raw(&raws).unwrap();
    let g = &diagram.graph;

    assert_eq!(g.node(&id("S1")).unwrap().role, NodeRole::Datacenter);
    assert_eq!(g.node(&id("S2")).unwrap().label, "Warehouse");
    assert_eq!(g.node(&id("S3")).unwrap().role, NodeRole::Datacenter);
    assert_eq!(g.edge_labels(&id("S1"), &id("Cloud_Network")).unwrap(), &["MPLS [5501]"]);
    assert_eq!(g.edge_labels(&id("S2"), &id("S3")).unwrap(), &["METRO ETHERNET [E-9]"]);
}

#[test]
fn test_bad_record_aborts_batch() {
    let raws: Vec<RawCircuitRecord> = serde_json::from_value(json!([
        {"PRODUCT_TYPE": "MPLS", "CIRCUIT_ID": "C1", "SITE_ID_A": "S1", "BUILDING_A": "HQ"},
        {"PRODUCT_TYPE": "MPLS", "CIRCUIT_ID": ["C2"], "SITE_ID_A": "S2", "BUILDING_A": "B2"}
    ]))
    .unwrap();

    let err = DiagramGenerator::default().generate_raw(&raws).unwrap_err();
    assert_eq!(
        err,
        TopologyError::MalformedField { index: 1, field: "CIRCUIT_ID", found: "array" }
    );
}

#[test]
fn test_empty_batch_is_valid() {
    let diagram = DiagramGenerator::default().generate_raw(&[]).unwrap();

    assert!(diagram.graph.is_empty());
    assert!(diagram.positions.is_empty());
    assert!(diagram.scene().items.is_empty());
}
