use serde::Serialize;

use crate::core::{Catalog, History};

#[derive(Serialize)]
struct GenerateOutput<'a> {
    creature_type: &'a str,
    history: &'a [String],
}

#[derive(Serialize)]
struct ResetOutput {
    success: bool,
}

#[derive(Serialize)]
struct CatalogOutput<'a> {
    count: usize,
    entries: &'a [String],
}

/// `{"creature_type": ..., "history": [...]}`
pub(crate) fn output_generate_json(
    creature_type: &str,
    history: &History,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&GenerateOutput {
        creature_type,
        history: history.entries(),
    })
}

pub(crate) fn output_reset_json() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ResetOutput { success: true })
}

pub(crate) fn output_catalog_json(catalog: &Catalog) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CatalogOutput {
        count: catalog.len(),
        entries: catalog.entries(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HistoryCap;
    use serde_json::{Value, json};

    #[test]
    fn generate_json_contains_item_in_history() {
        let mut history = History::from_entries(vec!["Zombie".to_string()]);
        history.push("Dragon", HistoryCap::default());
        let value: Value =
            serde_json::from_str(&output_generate_json("Dragon", &history).unwrap()).unwrap();
        assert_eq!(value["creature_type"], "Dragon");
        assert_eq!(value["history"], json!(["Dragon", "Zombie"]));
    }

    #[test]
    fn reset_json_reports_success() {
        let value: Value = serde_json::from_str(&output_reset_json().unwrap()).unwrap();
        assert_eq!(value, json!({"success": true}));
    }

    #[test]
    fn catalog_json_counts_entries() {
        let catalog = Catalog::parse("Elf\nGoblin\n");
        let value: Value = serde_json::from_str(&output_catalog_json(&catalog).unwrap()).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["entries"], json!(["Elf", "Goblin"]));
    }
}
