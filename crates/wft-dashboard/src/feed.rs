use wft_schemas::{ActivityLogEntry, ArtHistoryEntry};

/// Order-related log entries, newest first.
///
/// An entry is order-related when its lower-cased action contains any of
/// `keywords` (also lower-cased). The last `limit` matches are kept; the
/// input is assumed to be in append order.
pub fn recent_activity(
    logs: &[ActivityLogEntry],
    keywords: &[String],
    limit: usize,
) -> Vec<ActivityLogEntry> {
    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    let matching: Vec<&ActivityLogEntry> = logs
        .iter()
        .filter(|entry| {
            let action = entry.action.to_lowercase();
            keywords.iter().any(|k| action.contains(k.as_str()))
        })
        .collect();

    matching.into_iter().rev().take(limit).cloned().collect()
}

/// Last `limit` art submissions, newest first.
pub fn recent_art_history(history: &[ArtHistoryEntry], limit: usize) -> Vec<ArtHistoryEntry> {
    history.iter().rev().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(action: &str) -> ActivityLogEntry {
        ActivityLogEntry::new(Some("ana"), action, None)
    }

    fn keywords() -> Vec<String> {
        vec!["pedido".to_string(), "Costura".to_string()]
    }

    #[test]
    fn selects_by_keyword_case_insensitively() {
        let logs = vec![log("PEDIDO 1 criado"), log("Login"), log("Item enviado à costura")];
        let out = recent_activity(&logs, &keywords(), 10);
        let actions: Vec<&str> = out.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, vec!["Item enviado à costura", "PEDIDO 1 criado"]);
    }

    #[test]
    fn keeps_the_last_matches_newest_first() {
        let logs: Vec<ActivityLogEntry> = (1..=5).map(|i| log(&format!("pedido {i}"))).collect();
        let out = recent_activity(&logs, &keywords(), 2);
        let actions: Vec<&str> = out.iter().map(|e| e.action.as_str()).collect();
        assert_eq!(actions, vec!["pedido 5", "pedido 4"]);
    }

    #[test]
    fn empty_keywords_match_nothing() {
        let logs = vec![log("pedido 1")];
        assert!(recent_activity(&logs, &[String::new()], 10).is_empty());
        assert!(recent_activity(&logs, &[], 10).is_empty());
    }

    #[test]
    fn zero_limit_selects_nothing() {
        let logs = vec![log("pedido 1")];
        assert!(recent_activity(&logs, &keywords(), 0).is_empty());
    }

    #[test]
    fn art_history_newest_first() {
        let history: Vec<ArtHistoryEntry> = (1..=7)
            .map(|i| ArtHistoryEntry {
                sku: Some(format!("SKU-{i}")),
                ..ArtHistoryEntry::default()
            })
            .collect();
        let out = recent_art_history(&history, 5);
        assert_eq!(out.len(), 5);
        assert_eq!(out[0].sku.as_deref(), Some("SKU-7"));
        assert_eq!(out[4].sku.as_deref(), Some("SKU-3"));
    }
}
