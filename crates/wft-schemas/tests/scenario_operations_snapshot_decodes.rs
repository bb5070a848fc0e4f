use serde_json::json;
use wft_quantity::QuantityInput;
use wft_schemas::*;

#[test]
fn scenario_full_operations_snapshot_decodes() {
    let root = json!({
        "pedidos": [
            {"id": "P1", "quantidade": "10 un", "status": "Pendente", "marketplace": "Shopee"},
            {"id": 2, "quantidade": 4, "status": "Pendente"}
        ],
        "producao": [{"id": "OP1", "pedidoId": "P1", "quantidade": "3"}],
        "costura": [],
        "expedicao": [
            {"pedidoId": "P1", "quantidade": "7", "status": "Aguardando", "marketplace": "Shopee"},
            {"pedidoIdOriginal": 2, "quantidade": 4}
        ],
        "itensEstoque": [
            {"sku": "CAM-P", "quantidade": "1.234,5"},
            {"codigo": "CAM-M", "qtd": 12}
        ],
        "logs": [{"usuario": "ana", "acao": "Pedido P1 criado", "data": "01/02/2024 08:00:00"}],
        "historicoArtes": [{"sku": "CAM-P", "impressora": "1", "usuario": "bia"}]
    });

    let inputs = DashboardInputs::from_json(&root);

    assert_eq!(inputs.stages.ordered.len(), 2);
    assert_eq!(inputs.stages.ordered[1].order_id, OrderId::new("2"));
    assert_eq!(inputs.stages.in_production[0].order_id, OrderId::new("P1"));
    assert!(inputs.stages.in_sewing.is_empty());
    assert_eq!(inputs.stages.in_shipping[1].order_id, OrderId::new("2"));
    assert_eq!(inputs.inventory[1].sku_key(), Some("CAM-M"));
    assert_eq!(inputs.inventory[1].quantity, QuantityInput::Number(12.0));
    assert!(inputs.logs[0].timestamp.is_some());
    assert_eq!(inputs.art_history[0].printer.as_deref(), Some("1"));
}

#[test]
fn scenario_english_keys_are_accepted() {
    let root = json!({
        "ordered": [{"orderId": "A", "quantity": 1}],
        "inProduction": [{"orderId": "A", "quantity": 1}],
        "inSewing": [{"orderId": "A", "quantity": 1}],
        "inShipping": [{"orderId": "A", "quantity": 1, "status": "Shipped"}],
        "inventory": [{"sku": "X", "quantity": "2"}],
        "artHistory": [{"sku": "X"}]
    });

    let inputs = DashboardInputs::from_json(&root);
    for stage in Stage::ALL {
        assert_eq!(inputs.stages.stage(stage).len(), 1, "{}", stage.as_str());
    }
    assert!(inputs.stages.in_shipping[0].has_status("Shipped"));
    assert_eq!(inputs.inventory.len(), 1);
    assert_eq!(inputs.art_history.len(), 1);
    assert!(inputs.logs.is_empty());
}

#[test]
fn scenario_absent_collections_read_as_empty() {
    let inputs = DashboardInputs::from_json(&json!({}));
    assert_eq!(inputs, DashboardInputs::default());
}

#[test]
fn scenario_entries_with_both_key_spellings_are_kept() {
    let inputs = DashboardInputs::from_json(&json!({
        "logs": [
            {"usuario": "ana", "user": "ana", "acao": "Pedido criado", "action": "Order created"}
        ],
        "historicoArtes": [
            {"sku": "CAM-01", "impressora": "1", "printer": "1", "usuario": "bia", "user": "bia"}
        ]
    }));
    assert_eq!(inputs.logs.len(), 1);
    assert_eq!(inputs.logs[0].action, "Pedido criado");
    assert_eq!(inputs.art_history.len(), 1);
    assert_eq!(inputs.art_history[0].printer.as_deref(), Some("1"));
}
