use {
    crate::config::DEMO,
    serde::{Deserialize, Serialize},
    std::fmt,
    uuid::Uuid,
};

/// Opaque identifier of one tracked asset. Unique within a snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Deterministic (UUID v5) id for a ticker symbol, so every part of the
    /// session agrees on the id without sharing state.
    pub fn for_symbol(symbol: &str) -> Self {
        let namespace = Uuid::new_v5(&Uuid::NAMESPACE_OID, DEMO.id_namespace.as_bytes());
        Self(Uuid::new_v5(&namespace, symbol.as_bytes()).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_ids_are_stable_and_distinct() {
        assert_eq!(AssetId::for_symbol("BTC"), AssetId::for_symbol("BTC"));
        assert_ne!(AssetId::for_symbol("BTC"), AssetId::for_symbol("ETH"));
        assert_eq!(AssetId::for_symbol("BTC").as_str().len(), 36);
    }
}
