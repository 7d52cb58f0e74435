//! In-memory gateway: the reference semantics of the persistence contract,
//! used by tests and local tooling.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use broadsheet_model::Layout;
use chrono::Utc;

use crate::{AuditAction, AuditRecord, GatewayError, PersistenceGateway, SavedLayout};

#[derive(Default)]
struct Store {
    layouts: HashMap<String, SavedLayout>,
    audits: HashMap<String, Vec<AuditRecord>>,
    active: Option<String>,
    next_id: u64,
    offline: bool,
}

impl Store {
    fn check_online(&self) -> Result<(), GatewayError> {
        if self.offline {
            return Err(GatewayError::Transport("gateway offline".to_string()));
        }
        Ok(())
    }
}

/// Gateway backed by process memory.
#[derive(Default)]
pub struct MemoryGateway {
    store: Mutex<Store>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call fail with a transport error, to exercise the
    /// failure path.
    pub fn set_offline(&self, offline: bool) {
        self.store.lock().unwrap().offline = offline;
    }
}

#[async_trait]
impl PersistenceGateway for MemoryGateway {
    async fn load_active(&self) -> Result<Option<SavedLayout>, GatewayError> {
        let store = self.store.lock().unwrap();
        store.check_online()?;
        Ok(store
            .active
            .as_ref()
            .and_then(|id| store.layouts.get(id))
            .cloned())
    }

    async fn save_draft(&self, name: &str, layout: &Layout) -> Result<String, GatewayError> {
        let mut store = self.store.lock().unwrap();
        store.check_online()?;

        store.next_id += 1;
        let id = format!("layout-{}", store.next_id);
        store.layouts.insert(
            id.clone(),
            SavedLayout {
                name: name.to_string(),
                structure: layout.clone(),
            },
        );
        store.audits.entry(id.clone()).or_default().push(AuditRecord {
            action: AuditAction::Save,
            timestamp: Utc::now(),
        });

        Ok(id)
    }

    async fn publish(&self, layout_id: &str) -> Result<(), GatewayError> {
        let mut store = self.store.lock().unwrap();
        store.check_online()?;

        if !store.layouts.contains_key(layout_id) {
            return Err(GatewayError::NotFound(layout_id.to_string()));
        }

        store.active = Some(layout_id.to_string());
        store
            .audits
            .entry(layout_id.to_string())
            .or_default()
            .push(AuditRecord {
                action: AuditAction::Publish,
                timestamp: Utc::now(),
            });

        Ok(())
    }

    async fn fetch_audit_history(
        &self,
        layout_id: &str,
    ) -> Result<Vec<AuditRecord>, GatewayError> {
        let store = self.store.lock().unwrap();
        store.check_online()?;
        Ok(store.audits.get(layout_id).cloned().unwrap_or_default())
    }
}
