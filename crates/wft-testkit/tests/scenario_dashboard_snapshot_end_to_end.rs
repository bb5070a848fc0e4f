use wft_config::{load_dashboard_config, DashboardConfig, DEFAULT_CONFIG_YAML};
use wft_dashboard::*;
use wft_testkit::operations_snapshot;

#[test]
fn scenario_dashboard_snapshot_from_wire_fixture() {
    let inputs = operations_snapshot().unwrap();
    let snap = DashboardSnapshot::build(&inputs, &DashboardConfig::default());

    assert_eq!(
        snap.metrics,
        DashboardMetrics {
            pending_orders: 3,
            stock_units: 1349.5,
            unique_skus: 3,
            production_queue: 2,
            sewing_queue: 1,
            ready_to_ship: 2,
        }
    );

    let funnel: Vec<(FunnelStep, usize)> = snap.funnel.iter().map(|s| (s.step, s.count)).collect();
    assert_eq!(
        funnel,
        vec![
            (FunnelStep::Pending, 3),
            (FunnelStep::Production, 2),
            (FunnelStep::Sewing, 1),
            (FunnelStep::Shipping, 2),
        ]
    );

    let shares: Vec<(&str, usize)> = snap
        .marketplaces
        .iter()
        .map(|s| (s.marketplace.as_str(), s.pending_orders))
        .collect();
    assert_eq!(shares, vec![("Shopee", 1), ("Mercado Livre", 1), ("Outros", 2)]);

    let actions: Vec<&str> = snap.recent_activity.iter().map(|e| e.action.as_str()).collect();
    assert_eq!(
        actions,
        vec![
            "Pacote liberado na Expedição",
            "Item enviado para costura",
            "Item movido para Produção",
            "Pedido PED-1001 criado",
        ]
    );

    let skus: Vec<Option<&str>> = snap.recent_art.iter().map(|a| a.sku.as_deref()).collect();
    assert_eq!(skus, vec![Some("CAM-BR-M"), Some("CAM-BR-P")]);
}

#[test]
fn scenario_packages_in_fixture_classified() {
    let inputs = operations_snapshot().unwrap();
    let snap = DashboardSnapshot::build(&inputs, &DashboardConfig::default());

    let complete: Vec<&str> = snap.packages.complete.iter().map(|g| g.order_id.as_str()).collect();
    let incomplete: Vec<&str> = snap
        .packages
        .incomplete
        .iter()
        .map(|g| g.order_id.as_str())
        .collect();

    assert_eq!(complete, vec!["PED-2003", "PED-2004"]);
    assert_eq!(incomplete, vec!["PED-2001", "PED-2002"]);
    assert_eq!(snap.packages.complete[0].marketplace.as_deref(), Some("Mercado Livre"));
    assert_eq!(snap.packages.complete[0].items.len(), 2);
    assert_eq!(snap.packages.complete[1].marketplace, None);
}

#[test]
fn scenario_config_overlay_changes_sections() {
    let overlay = r#"
activity:
  limit: 1
art_history:
  limit: 1
marketplace:
  fallback_label: "Sem canal"
"#;
    let (_, cfg) = load_dashboard_config(&[DEFAULT_CONFIG_YAML, overlay]).unwrap();
    let inputs = operations_snapshot().unwrap();
    let snap = DashboardSnapshot::build(&inputs, &cfg);

    assert_eq!(snap.recent_activity.len(), 1);
    assert_eq!(snap.recent_art.len(), 1);
    assert!(snap.marketplaces.iter().any(|s| s.marketplace == "Sem canal"));
}

#[test]
fn scenario_shipped_sentinel_from_config() {
    // With no shipped sentinel, PED-2005 is still in the building and
    // forms its own complete package.
    let overlay = "reconcile:\n  shipped_statuses: []\n";
    let (_, cfg) = load_dashboard_config(&[DEFAULT_CONFIG_YAML, overlay]).unwrap();
    let inputs = operations_snapshot().unwrap();
    let snap = DashboardSnapshot::build(&inputs, &cfg);

    assert_eq!(snap.metrics.ready_to_ship, 3);
    assert!(snap
        .packages
        .complete
        .iter()
        .any(|g| g.order_id.as_str() == "PED-2005"));
}

#[test]
fn scenario_snapshot_is_deterministic() {
    let inputs = operations_snapshot().unwrap();
    let cfg = DashboardConfig::default();
    assert_eq!(
        DashboardSnapshot::build(&inputs, &cfg),
        DashboardSnapshot::build(&inputs, &cfg)
    );
}

#[test]
fn scenario_empty_inputs_give_empty_dashboard() {
    let snap = DashboardSnapshot::build(&DashboardInputs::default(), &DashboardConfig::default());
    assert_eq!(snap.metrics, DashboardMetrics::default());
    assert!(snap.marketplaces.is_empty());
    assert!(snap.packages.complete.is_empty());
    assert_eq!(snap.funnel.len(), 4);
    assert!(snap.funnel.iter().all(|s| s.count == 0));
}

#[test]
fn scenario_pending_orders_from_builder() {
    let stages = wft_testkit::StagesBuilder::new()
        .pending("P1", "2", "Shopee")
        .pending("P1", "1", "Shopee")
        .pending("P2", "5", "")
        .build();
    let inputs = DashboardInputs::new(stages);
    let snap = DashboardSnapshot::build(&inputs, &DashboardConfig::default());

    assert_eq!(snap.metrics.pending_orders, 2);
    let shares: Vec<(&str, usize)> = snap
        .marketplaces
        .iter()
        .map(|s| (s.marketplace.as_str(), s.pending_orders))
        .collect();
    assert_eq!(shares, vec![("Shopee", 2), ("Outros", 1)]);
}
